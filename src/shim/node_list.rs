//! Ordered, separator-delimited sub-collections of a node.
//!
//! A [`NodeList`] is backed either by the real tree (the element shape
//! exists in the loaded release) or by the shared unsupported sentinel
//! (it does not). The sentinel behaves exactly like a real empty list for
//! every read operation; only populating it fails. Read-only consumers
//! cannot tell the two apart, which is what lets rules iterate
//! "the list of X" unconditionally even on releases that predate X.

use std::sync::Arc;

use crate::registry::ListShape;
use crate::shim::error::{ShimError, ShimResult};
use crate::tree::{RawKind, SyntaxNode, SyntaxToken, TextRange};

#[derive(Debug, Clone)]
enum ListRepr {
    /// Backed by children of `parent` selected per `shape`.
    Native {
        parent: SyntaxNode,
        shape: Arc<ListShape>,
    },
    /// The element shape does not exist in the loaded release.
    Unsupported,
}

/// A separator-delimited sub-collection of an owner node.
#[derive(Debug, Clone)]
pub struct NodeList {
    repr: ListRepr,
}

impl NodeList {
    pub(crate) fn native(parent: SyntaxNode, shape: Arc<ListShape>) -> Self {
        Self {
            repr: ListRepr::Native { parent, shape },
        }
    }

    /// The sentinel list standing in for a collection whose element shape
    /// the loaded release does not declare.
    pub fn unsupported() -> Self {
        Self {
            repr: ListRepr::Unsupported,
        }
    }

    /// Whether this list is backed by the real tree. The sentinel returns
    /// false; a real but empty list returns true.
    pub fn is_supported(&self) -> bool {
        matches!(self.repr, ListRepr::Native { .. })
    }

    fn backing(&self) -> Option<(&SyntaxNode, &Arc<ListShape>)> {
        match &self.repr {
            ListRepr::Native { parent, shape } => Some((parent, shape)),
            ListRepr::Unsupported => None,
        }
    }

    /// Iterate the element nodes in order.
    pub fn iter(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.backing().into_iter().flat_map(|(parent, shape)| {
            parent
                .children()
                .filter(move |node| shape.element_kinds.contains(&node.kind()))
        })
    }

    /// Iterate the separator tokens in order.
    pub fn separators(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.backing().into_iter().flat_map(|(parent, shape)| {
            let separator = shape.separator;
            parent
                .children_with_tokens()
                .filter_map(|el| el.into_token())
                .filter(move |tok| tok.kind() == separator)
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Element at `index`, or `None` past the end. Total.
    pub fn get(&self, index: usize) -> Option<SyntaxNode> {
        self.iter().nth(index)
    }

    /// Element at `index`, failing with a range error past the end.
    pub fn at(&self, index: usize) -> ShimResult<SyntaxNode> {
        self.get(index)
            .ok_or_else(|| ShimError::out_of_range(index, self.len()))
    }

    /// First element, failing with a range error when empty.
    pub fn first(&self) -> ShimResult<SyntaxNode> {
        self.at(0)
    }

    /// Last element, failing with a range error when empty.
    pub fn last(&self) -> ShimResult<SyntaxNode> {
        let len = self.len();
        if len == 0 {
            return Err(ShimError::out_of_range(0, 0));
        }
        self.at(len - 1)
    }

    /// First element, or `None` when empty. Total.
    pub fn first_or_none(&self) -> Option<SyntaxNode> {
        self.iter().next()
    }

    /// Last element, or `None` when empty. Total.
    pub fn last_or_none(&self) -> Option<SyntaxNode> {
        self.iter().last()
    }

    /// Children covered by the list: elements and separators, in order.
    fn covered(&self) -> impl Iterator<Item = crate::tree::SyntaxElement> + '_ {
        self.backing().into_iter().flat_map(|(parent, shape)| {
            let element_kinds = Arc::clone(&shape.element_kinds);
            let separator = shape.separator;
            parent.children_with_tokens().filter(move |el| match el {
                rowan::NodeOrToken::Node(node) => element_kinds.contains(&node.kind()),
                rowan::NodeOrToken::Token(tok) => tok.kind() == separator,
            })
        })
    }

    /// Span covering elements and separators, `None` when empty.
    pub fn full_span(&self) -> Option<TextRange> {
        cover(self.covered().map(|el| el.text_range()))
    }

    /// Span covering the elements only, `None` when empty.
    pub fn text_span(&self) -> Option<TextRange> {
        cover(self.iter().map(|node| node.text_range()))
    }

    /// Reconstruct the source text of the list (elements and separators).
    pub fn text(&self) -> String {
        let mut out = String::new();
        for el in self.covered() {
            match el {
                rowan::NodeOrToken::Node(node) => out.push_str(&node.text().to_string()),
                rowan::NodeOrToken::Token(tok) => out.push_str(tok.text()),
            }
        }
        out
    }

    /// Kind of the separator token, when backed by the real tree.
    pub fn separator_kind(&self) -> Option<RawKind> {
        self.backing().map(|(_, shape)| shape.separator)
    }

    /// Produce a new owner node with `element` appended (preceded by a
    /// separator when the list is non-empty). The input tree is not
    /// mutated; the returned node is a fresh detached root.
    ///
    /// Fails with a not-supported error on the sentinel: the element shape
    /// cannot be represented by the loaded release at all.
    pub fn with_appended(&self, element: &SyntaxNode) -> ShimResult<SyntaxNode> {
        let (parent, shape) = self
            .backing()
            .ok_or_else(|| ShimError::not_supported("appending to an unsupported collection"))?;

        let mut insert_at = None;
        let mut child_count = 0usize;
        for (index, el) in parent.children_with_tokens().enumerate() {
            child_count += 1;
            let is_covered = match &el {
                rowan::NodeOrToken::Node(node) => shape.element_kinds.contains(&node.kind()),
                rowan::NodeOrToken::Token(tok) => tok.kind() == shape.separator,
            };
            if is_covered {
                insert_at = Some(index + 1);
            }
        }

        let mut inserted: Vec<rowan::NodeOrToken<rowan::GreenNode, rowan::GreenToken>> = Vec::new();
        let insert_at = match insert_at {
            Some(after_last) => {
                inserted.push(rowan::NodeOrToken::Token(rowan::GreenToken::new(
                    shape.separator.into(),
                    &shape.separator_text,
                )));
                after_last
            }
            None => shape.slot.min(child_count),
        };
        inserted.push(rowan::NodeOrToken::Node(element.green().into_owned()));

        let green = parent
            .green()
            .into_owned()
            .splice_children(insert_at..insert_at, inserted);
        Ok(SyntaxNode::new_root(green))
    }
}

fn cover(mut ranges: impl Iterator<Item = TextRange>) -> Option<TextRange> {
    let first = ranges.next()?;
    Some(ranges.fold(first, TextRange::cover))
}
