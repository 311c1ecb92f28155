//! # lightup
//!
//! Cross-version syntax compatibility layer for style analysis tooling.
//!
//! Analysis rules want to reference node shapes, members, and enumeration
//! values that only newer releases of the host syntax library declare,
//! while still loading and running against older releases. This crate
//! gives them one statically-typed surface that behaves identically on
//! every release: present features are accessed natively, absent features
//! degrade to documented defaults on read and to explicit errors on
//! meaningful mutation, and mistakes in the calling code fail fast instead
//! of hiding behind version skew.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! wrappers  → typed node wrappers, conversions, separated-list facade
//!   ↓
//! shim      → context, accessor factory, type resolver, enum shims, lists
//!   ↓
//! registry  → reflectable description of the loaded host release
//!   ↓
//! tree      → rowan substrate (open kinds, node/token aliases)
//! ```
//!
//! ## Quick tour
//!
//! ```
//! use lightup::registry::SyntaxRegistry;
//! use lightup::shim::ShimContext;
//! use lightup::tree::RawKind;
//! use lightup::wrappers::{ForEachStatement, ShimNode};
//!
//! // The host's composition root describes the loaded release once.
//! let registry = SyntaxRegistry::builder()
//!     .node_type("ForEachStatement", &[RawKind(230)])
//!     .finish_type()
//!     .build();
//! let ctx = ShimContext::new(registry);
//!
//! // Rules probe, wrap, and read through the context.
//! let stmt = ForEachStatement::try_wrap(&ctx, None).unwrap();
//! assert!(!stmt.is_bound());
//! ```

// ============================================================================
// MODULES (dependency order: tree → registry → shim → wrappers)
// ============================================================================

/// Tree substrate: open kind values, rowan node/token aliases
pub mod tree;

/// Reflectable description of the loaded host release
pub mod registry;

/// Compatibility machinery: context, accessors, resolver, enum shims
pub mod shim;

/// Typed node wrappers and conversions
pub mod wrappers;

// Re-export the types nearly every consumer touches
pub use registry::SyntaxRegistry;
pub use shim::{CompatTable, NodeList, ShimContext, ShimError, ShimResult};
pub use tree::{RawKind, SyntaxElement, SyntaxNode, SyntaxToken};
pub use wrappers::{SeparatedList, ShimNode};
