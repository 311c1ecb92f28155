//! Tree substrate shared with the host syntax library.
//!
//! The host library hands us already-parsed rowan trees. Unlike an ordinary
//! language crate, the set of syntax kinds is *not* a closed Rust enum here:
//! it belongs to whichever host release is loaded, and newer releases define
//! kinds older ones do not. [`RawKind`] is therefore an open `u16` newtype,
//! and every kind comparison in this crate goes through values supplied by
//! the [`SyntaxRegistry`](crate::registry::SyntaxRegistry).

use rowan::Language;

/// An open syntax kind value, as assigned by the loaded host release.
///
/// Two `RawKind`s are only meaningfully comparable within one loaded
/// release; the numbering may differ between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawKind(pub u16);

impl From<rowan::SyntaxKind> for RawKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        RawKind(raw.0)
    }
}

impl From<RawKind> for rowan::SyntaxKind {
    fn from(kind: RawKind) -> Self {
        rowan::SyntaxKind(kind.0)
    }
}

/// The host language marker for rowan's typed tree API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HostLanguage {}

impl Language for HostLanguage {
    type Kind = RawKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<HostLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<HostLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<HostLanguage>;

/// Re-export rowan green types for convenience
pub use rowan::{GreenNode, GreenToken};

/// Re-export span types (the same types rowan itself uses)
pub use text_size::{TextRange, TextSize};

/// Find the first token child of `node` with the given kind.
pub(crate) fn token_child(node: &SyntaxNode, kind: RawKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|el| el.into_token())
        .find(|tok| tok.kind() == kind)
}

/// Find the first node child of `node` whose kind is in `kinds`.
pub(crate) fn node_child(node: &SyntaxNode, kinds: &[RawKind]) -> Option<SyntaxNode> {
    node.children().find(|child| kinds.contains(&child.kind()))
}

/// Index of the first child element (node or token) matching `pred`,
/// in `children_with_tokens` order. This order matches the green child
/// order, so the index is valid for green splicing.
pub(crate) fn element_index(
    node: &SyntaxNode,
    mut pred: impl FnMut(&SyntaxElement) -> bool,
) -> Option<usize> {
    node.children_with_tokens().position(|el| pred(&el))
}
