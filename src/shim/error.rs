//! Error taxonomy for the compatibility layer.
//!
//! Every failure here is a contract violation by either the calling rule
//! or this crate's own construction code; nothing is retried or recovered
//! internally. The variants are deliberately distinct so callers can tell
//! "the loaded release lacks this feature" apart from "my code asked for
//! the wrong thing":
//! - [`ShimError::NotSupported`] is legitimate version skew, reachable only
//!   through a non-default write the caller should have feature-tested.
//! - [`ShimError::InvalidOperation`] is a defect in the calling code's
//!   static assumptions and fails on the very first use.

use smol_str::SmolStr;
use thiserror::Error;

use crate::tree::RawKind;

/// Result alias used throughout the crate.
pub type ShimResult<T> = Result<T, ShimError>;

/// Failure conditions surfaced by the compatibility layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShimError {
    /// A member, list, or conversion-consuming operation was performed
    /// through an empty wrapper (one bound to no node). Mirrors direct
    /// member access on an absent node.
    #[error("member access through an empty wrapper")]
    NullReference,

    /// An explicit conversion asked to reinterpret a node as an
    /// incompatible shape. Logic error in the calling rule.
    #[error("node of kind {actual:?} cannot be reinterpreted as {expected}")]
    InvalidCast {
        expected: &'static str,
        actual: RawKind,
    },

    /// A write accessor was asked to store a real, non-default value for a
    /// feature the loaded release does not declare. Callers are expected
    /// to feature-test before mutating; this is the safety net.
    #[error("the loaded syntax library cannot represent {what}")]
    NotSupported { what: String },

    /// The accessor factory was invoked with a statically wrong
    /// owner/member/shape pairing. Hard defect in the call site; detected
    /// at first use and never degraded into a silent default.
    #[error("accessor misuse for {owner}.{member}: {reason}")]
    InvalidOperation {
        owner: SmolStr,
        member: SmolStr,
        reason: String,
    },

    /// List index or first/last access outside the collection bounds.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl ShimError {
    /// Create an invalid-cast error.
    pub fn invalid_cast(expected: &'static str, actual: RawKind) -> Self {
        Self::InvalidCast { expected, actual }
    }

    /// Create a not-supported error.
    pub fn not_supported(what: impl Into<String>) -> Self {
        Self::NotSupported { what: what.into() }
    }

    /// Create an invalid-operation error.
    pub fn invalid_operation(
        owner: impl Into<SmolStr>,
        member: impl Into<SmolStr>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOperation {
            owner: owner.into(),
            member: member.into(),
            reason: reason.into(),
        }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Whether this error reports legitimate version skew (as opposed to a
    /// defect in the calling code).
    pub fn is_version_skew(&self) -> bool {
        matches!(self, Self::NotSupported { .. })
    }
}
