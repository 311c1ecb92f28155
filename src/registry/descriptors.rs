//! Descriptor records for the reflectable surface of the loaded release.
//!
//! Each descriptor is a plain data record: which node kinds a type covers,
//! which members it exposes and with what structural shape, which symbolic
//! members an enumeration declares. Descriptors carry everything needed to
//! *construct* an accessor, so the factory never has to consult the host
//! library again after first use.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::tree::RawKind;

/// Structural shape of a separator-delimited sub-collection member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListShape {
    /// Kinds an element of the collection may have.
    pub element_kinds: Arc<[RawKind]>,
    /// Kind of the separator token between elements.
    pub separator: RawKind,
    /// Source text of a separator token, used when synthesizing one.
    pub separator_text: SmolStr,
    /// Child index where the first element lives when the collection is
    /// empty (insertion point for the first appended element).
    pub slot: usize,
}

/// Structural shape of a single member on an owning node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberShape {
    /// An optional token slot (keywords, operators, identifiers).
    ///
    /// Accessors bind to the first direct child token of this kind.
    Token {
        kind: RawKind,
        /// Child index where the token is inserted when currently absent.
        slot: usize,
    },
    /// An optional child node slot.
    ///
    /// Accessors bind to the first direct child node whose kind is in
    /// `kinds`; a grammar with several same-kinded slots on one owner
    /// must give them disjoint kind sets.
    Node {
        kinds: Arc<[RawKind]>,
        slot: usize,
    },
    /// A homogeneous, separator-delimited sub-collection.
    List(Arc<ListShape>),
}

impl MemberShape {
    /// Short name of the shape, for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            MemberShape::Token { .. } => "token",
            MemberShape::Node { .. } => "node",
            MemberShape::List(_) => "list",
        }
    }
}

/// A single member declared by a node type in the loaded release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub name: SmolStr,
    pub shape: MemberShape,
}

/// A node type declared by the loaded release.
///
/// Most types cover exactly one node kind. Union types (a general shape
/// fronting several concrete kinds, e.g. "any pattern") cover several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: SmolStr,
    /// Node kinds a node of this type may have, sorted ascending.
    pub kinds: Box<[RawKind]>,
    /// Members by name, in declaration order.
    pub members: IndexMap<SmolStr, MemberDescriptor>,
}

impl TypeDescriptor {
    /// Whether a node of the given kind is an instance of this type.
    pub fn matches(&self, kind: RawKind) -> bool {
        self.kinds.binary_search(&kind).is_ok()
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.get(name)
    }
}

/// An enumeration declared by the loaded release, with its symbolic members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: SmolStr,
    /// Declared members, name to underlying value, in declaration order.
    pub members: IndexMap<SmolStr, u16>,
}

impl EnumDescriptor {
    /// An enumeration with no declared members, used when the loaded
    /// release does not define the enumeration at all.
    pub fn empty(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            members: IndexMap::new(),
        }
    }
}
