//! Typed wrapper layer over raw nodes.
//!
//! Each wrapper is a small value type fronting one logical node shape with
//! a stable, release-independent surface. A wrapper is either *empty*
//! (bound to no node) or *bound* to exactly one node whose kind is
//! compatible with the wrapper's shape; validity is tied entirely to the
//! wrapped node. Wrappers are cheap to copy and carry no state beyond the
//! node, so they cross threads and stack frames freely.
//!
//! # Conversions
//!
//! - raw node → wrapper: [`ShimNode::try_wrap`] (checked; absent node
//!   gives an empty wrapper, an incompatible node is an invalid cast);
//! - wrapper → raw node: [`ShimNode::into_node`] and the generated
//!   `From<Wrapper> for Option<SyntaxNode>` (total; empty unwraps to the
//!   absent node);
//! - specific → general shape: generated `From` impls (total);
//! - general → specific shape: [`ShimNode::narrow`] (checked).
//!
//! # Members
//!
//! Member reads and `with_*` writes go through accessors cached in the
//! [`ShimContext`], so every method takes the context by reference, the
//! same way rule code already threads its analysis context around.

pub mod designations;
pub mod expressions;
pub mod list;
pub mod patterns;
pub mod statements;

pub use designations::{
    DiscardDesignation, ParenthesizedVariableDesignation, SingleVariableDesignation,
    VariableDesignation,
};
pub use expressions::{
    Argument, DeclarationExpression, IsPatternExpression, RangeExpression, SwitchExpression,
    SwitchExpressionArm, TupleExpression,
};
pub use list::SeparatedList;
pub use patterns::{
    ConstantPattern, DeclarationPattern, DiscardPattern, Pattern, PropertyPatternClause,
    RecursivePattern, Subpattern, VarPattern,
};
pub use statements::{
    CommonForEachStatement, ForEachStatement, ForEachVariableStatement, LocalFunctionStatement,
};

use crate::shim::{ShimContext, ShimError, ShimResult};
use crate::tree::SyntaxNode;

/// Protocol every node wrapper implements.
pub trait ShimNode: Sized {
    /// Name of the concrete node type this wrapper fronts; also the key
    /// the type resolver uses to bind it against the loaded release.
    const TYPE_NAME: &'static str;

    /// Wrap without a compatibility check. Only for call sites that have
    /// already established compatibility (accessor results, list
    /// elements).
    #[doc(hidden)]
    fn wrap_unchecked(node: Option<SyntaxNode>) -> Self;

    /// The wrapped node, or `None` for an empty wrapper.
    fn node(&self) -> Option<&SyntaxNode>;

    /// Unwrap to the raw node. Total; an empty wrapper unwraps to `None`.
    fn into_node(self) -> Option<SyntaxNode>;

    /// The empty wrapper (bound to no node).
    fn empty() -> Self {
        Self::wrap_unchecked(None)
    }

    /// Whether the wrapper is bound to a node.
    fn is_bound(&self) -> bool {
        self.node().is_some()
    }

    /// Total structural probe: could `node` be wrapped as this shape?
    /// True iff [`Self::try_wrap`] of that node would succeed.
    fn is_instance(ctx: &ShimContext, node: &SyntaxNode) -> bool {
        ctx.is_kind_of(Self::TYPE_NAME, node)
    }

    /// Checked construction from a raw node.
    ///
    /// An absent node produces the empty wrapper; a compatible node
    /// produces a bound wrapper; an incompatible node is an invalid cast:
    /// the caller asserted a specific shape and was wrong.
    fn try_wrap(ctx: &ShimContext, node: Option<SyntaxNode>) -> ShimResult<Self> {
        match node {
            None => Ok(Self::empty()),
            Some(node) if Self::is_instance(ctx, &node) => Ok(Self::wrap_unchecked(Some(node))),
            Some(node) => Err(ShimError::invalid_cast(Self::TYPE_NAME, node.kind())),
        }
    }

    /// Checked conversion to a different (typically more specific) shape.
    /// Empty stays empty; a bound wrapper must satisfy the target's probe.
    fn narrow<T: ShimNode>(self, ctx: &ShimContext) -> ShimResult<T> {
        T::try_wrap(ctx, self.into_node())
    }
}

/// Unwrap a slice of wrappers to their nodes, failing with a
/// null-reference error if any of them is empty.
pub(crate) fn unwrap_all<T: ShimNode>(items: &[T]) -> ShimResult<Vec<SyntaxNode>> {
    items
        .iter()
        .map(|item| item.node().cloned().ok_or(ShimError::NullReference))
        .collect()
}

/// Generate a wrapper value type and its [`ShimNode`] impl.
macro_rules! shim_node {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name {
            node: Option<$crate::tree::SyntaxNode>,
        }

        impl $crate::wrappers::ShimNode for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn wrap_unchecked(node: Option<$crate::tree::SyntaxNode>) -> Self {
                Self { node }
            }

            fn node(&self) -> Option<&$crate::tree::SyntaxNode> {
                self.node.as_ref()
            }

            fn into_node(self) -> Option<$crate::tree::SyntaxNode> {
                self.node
            }
        }

        impl From<$name> for Option<$crate::tree::SyntaxNode> {
            fn from(wrapper: $name) -> Self {
                wrapper.node
            }
        }
    };
}

/// Generate the total specific → general conversion between two wrapper
/// shapes.
macro_rules! shim_widen {
    ($specific:ident => $general:ident) => {
        impl From<$specific> for $general {
            fn from(specific: $specific) -> Self {
                use $crate::wrappers::ShimNode;
                $general::wrap_unchecked(specific.into_node())
            }
        }
    };
}

pub(crate) use shim_node;
pub(crate) use shim_widen;
