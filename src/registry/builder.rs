//! Chained builders for assembling a [`SyntaxRegistry`].
//!
//! The host's composition root describes the loaded release once at
//! startup:
//!
//! ```
//! use lightup::registry::SyntaxRegistry;
//! use lightup::tree::RawKind;
//!
//! let registry = SyntaxRegistry::builder()
//!     .node_type("ForEachStatement", &[RawKind(230)])
//!     .token_member("AwaitKeyword", RawKind(5), 0)
//!     .finish_type()
//!     .enumeration("SyntaxKind", &[("ForEachStatement", 230)])
//!     .build();
//! assert!(registry.type_named("ForEachStatement").is_some());
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::descriptors::{
    EnumDescriptor, ListShape, MemberDescriptor, MemberShape, TypeDescriptor,
};
use super::SyntaxRegistry;
use crate::tree::RawKind;

/// Builder for a [`SyntaxRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    types: FxHashMap<SmolStr, Arc<TypeDescriptor>>,
    enums: FxHashMap<SmolStr, Arc<EnumDescriptor>>,
}

impl RegistryBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Begin describing a node type covering the given kinds.
    ///
    /// Returns a sub-builder for the type's members; call
    /// [`TypeBuilder::finish_type`] to get back to the registry builder.
    pub fn node_type(self, name: impl Into<SmolStr>, kinds: &[RawKind]) -> TypeBuilder {
        let mut sorted: Vec<RawKind> = kinds.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        TypeBuilder {
            registry: self,
            name: name.into(),
            kinds: sorted,
            members: IndexMap::new(),
        }
    }

    /// Declare an enumeration with its symbolic members.
    pub fn enumeration(mut self, name: impl Into<SmolStr>, members: &[(&str, u16)]) -> Self {
        let name = name.into();
        let members: IndexMap<SmolStr, u16> = members
            .iter()
            .map(|(member, value)| (SmolStr::new(member), *value))
            .collect();
        self.enums.insert(
            name.clone(),
            Arc::new(EnumDescriptor { name, members }),
        );
        self
    }

    /// Finish the registry.
    pub fn build(self) -> SyntaxRegistry {
        SyntaxRegistry {
            types: self.types,
            enums: self.enums,
        }
    }
}

/// Sub-builder describing the members of one node type.
#[derive(Debug)]
pub struct TypeBuilder {
    registry: RegistryBuilder,
    name: SmolStr,
    kinds: Vec<RawKind>,
    members: IndexMap<SmolStr, MemberDescriptor>,
}

impl TypeBuilder {
    /// Declare an optional token member (keyword, operator, identifier).
    ///
    /// `slot` is the child index the token occupies when present; it is the
    /// insertion point used by write accessors when the token is absent.
    pub fn token_member(mut self, name: impl Into<SmolStr>, kind: RawKind, slot: usize) -> Self {
        let name = name.into();
        self.members.insert(
            name.clone(),
            MemberDescriptor {
                name,
                shape: MemberShape::Token { kind, slot },
            },
        );
        self
    }

    /// Declare an optional child node member accepting the given kinds.
    pub fn node_member(
        mut self,
        name: impl Into<SmolStr>,
        kinds: &[RawKind],
        slot: usize,
    ) -> Self {
        let name = name.into();
        self.members.insert(
            name.clone(),
            MemberDescriptor {
                name,
                shape: MemberShape::Node {
                    kinds: kinds.to_vec().into(),
                    slot,
                },
            },
        );
        self
    }

    /// Declare a separator-delimited sub-collection member.
    pub fn list_member(
        mut self,
        name: impl Into<SmolStr>,
        element_kinds: &[RawKind],
        separator: RawKind,
        separator_text: impl Into<SmolStr>,
        slot: usize,
    ) -> Self {
        let name = name.into();
        self.members.insert(
            name.clone(),
            MemberDescriptor {
                name,
                shape: MemberShape::List(Arc::new(ListShape {
                    element_kinds: element_kinds.to_vec().into(),
                    separator,
                    separator_text: separator_text.into(),
                    slot,
                })),
            },
        );
        self
    }

    /// Finish this type and return to the registry builder.
    pub fn finish_type(self) -> RegistryBuilder {
        let mut registry = self.registry;
        registry.types.insert(
            self.name.clone(),
            Arc::new(TypeDescriptor {
                name: self.name,
                kinds: self.kinds.into_boxed_slice(),
                members: self.members,
            }),
        );
        registry
    }
}
