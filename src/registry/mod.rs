//! Reflectable surface of the loaded host release.
//!
//! The host syntax library evolves in closed releases: newer releases
//! declare node types, members, and enumeration values that older ones do
//! not. A [`SyntaxRegistry`] is the one-time description of *what the
//! currently loaded release actually declares*, built by the host's
//! composition root at startup. Everything above this module treats the
//! registry as the ground truth for feature detection: a shape or member
//! that is not discoverable here does not exist in this process.
//!
//! The registry is immutable after construction and never refreshed; the
//! loaded release cannot change during the process lifetime.

mod builder;
mod descriptors;

pub use builder::{RegistryBuilder, TypeBuilder};
pub use descriptors::{
    EnumDescriptor, ListShape, MemberDescriptor, MemberShape, TypeDescriptor,
};

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::tree::RawKind;

/// Description of every node type and enumeration the loaded release
/// declares. See the module docs for the role this plays.
#[derive(Debug, Clone, Default)]
pub struct SyntaxRegistry {
    pub(crate) types: FxHashMap<SmolStr, Arc<TypeDescriptor>>,
    pub(crate) enums: FxHashMap<SmolStr, Arc<EnumDescriptor>>,
}

impl SyntaxRegistry {
    /// Start describing a release.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Discover a node type by name. `None` means the loaded release does
    /// not declare the type; this is an ordinary outcome, not an error.
    pub fn type_named(&self, name: &str) -> Option<&Arc<TypeDescriptor>> {
        self.types.get(name)
    }

    /// Discover a member by (owner type name, member name).
    pub fn member_of(&self, owner: &str, member: &str) -> Option<&MemberDescriptor> {
        self.types.get(owner).and_then(|ty| ty.member(member))
    }

    /// Discover an enumeration by name.
    pub fn enum_named(&self, name: &str) -> Option<&Arc<EnumDescriptor>> {
        self.enums.get(name)
    }

    /// Whether the loaded release declares a node type with this name.
    pub fn contains_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate all declared node types, in no particular order.
    pub fn types(&self) -> impl Iterator<Item = &Arc<TypeDescriptor>> {
        self.types.values()
    }

    /// The declared type whose kind set contains `kind`, if any.
    ///
    /// Union types are skipped: a kind is attributed to the most specific
    /// (single-kind) type declaring it, mirroring how the host attributes
    /// a node to its concrete type rather than an abstract base.
    pub fn type_of_kind(&self, kind: RawKind) -> Option<&Arc<TypeDescriptor>> {
        self.types
            .values()
            .filter(|ty| ty.kinds.len() == 1)
            .find(|ty| ty.matches(kind))
    }
}
