//! Typed facade over a separator-delimited collection member.

use std::marker::PhantomData;

use crate::shim::node_list::NodeList;
use crate::shim::{ShimError, ShimResult};
use crate::tree::{SyntaxNode, TextRange};
use crate::wrappers::ShimNode;

/// A separator-delimited collection of `T`-shaped elements.
///
/// Elements are wrapped without a per-element compatibility re-check: the
/// member's declared shape already constrains which kinds appear in the
/// backing collection. When the element shape does not exist in the
/// loaded release, the facade fronts the sentinel list and every read
/// behaves like an empty collection.
#[derive(Debug, Clone)]
pub struct SeparatedList<T> {
    raw: NodeList,
    _element: PhantomData<T>,
}

impl<T: ShimNode> SeparatedList<T> {
    pub(crate) fn new(raw: NodeList) -> Self {
        Self {
            raw,
            _element: PhantomData,
        }
    }

    /// The facade over the sentinel list for a missing element shape.
    pub fn unsupported() -> Self {
        Self::new(NodeList::unsupported())
    }

    /// The untyped backing list.
    pub fn raw(&self) -> &NodeList {
        &self.raw
    }

    /// Whether the collection is backed by the real tree.
    pub fn is_supported(&self) -> bool {
        self.raw.is_supported()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Element at `index`, or `None` past the end. Total.
    pub fn get(&self, index: usize) -> Option<T> {
        self.raw.get(index).map(wrap)
    }

    /// Element at `index`, failing with a range error past the end.
    pub fn at(&self, index: usize) -> ShimResult<T> {
        self.raw.at(index).map(wrap)
    }

    /// First element, failing with a range error when empty.
    pub fn first(&self) -> ShimResult<T> {
        self.raw.first().map(wrap)
    }

    /// Last element, failing with a range error when empty.
    pub fn last(&self) -> ShimResult<T> {
        self.raw.last().map(wrap)
    }

    /// First element, or `None` when empty. Total.
    pub fn first_or_none(&self) -> Option<T> {
        self.raw.first_or_none().map(wrap)
    }

    /// Last element, or `None` when empty. Total.
    pub fn last_or_none(&self) -> Option<T> {
        self.raw.last_or_none().map(wrap)
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.raw.iter().map(wrap)
    }

    /// Span covering elements and separators, `None` when empty.
    pub fn full_span(&self) -> Option<TextRange> {
        self.raw.full_span()
    }

    /// Span covering the elements only, `None` when empty.
    pub fn text_span(&self) -> Option<TextRange> {
        self.raw.text_span()
    }

    /// Reconstruct the source text of the collection.
    pub fn text(&self) -> String {
        self.raw.text()
    }

    /// Produce a new owner node with `element` appended.
    ///
    /// Fails with a null-reference error for an empty element wrapper and
    /// with a not-supported error on the sentinel.
    pub fn with_appended(&self, element: &T) -> ShimResult<SyntaxNode> {
        let node = element.node().ok_or(ShimError::NullReference)?;
        self.raw.with_appended(node)
    }
}

fn wrap<T: ShimNode>(node: SyntaxNode) -> T {
    T::wrap_unchecked(Some(node))
}
