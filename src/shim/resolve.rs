//! Adapter-type resolution against the loaded release.
//!
//! Wrapper types name the concrete node type they front (the adapter's
//! type name *is* the convention). Resolution answers, once per adapter,
//! "which declared type does this adapter bind to in the loaded release?",
//! consulting the hand-coded [`CompatTable`] when the primary name is
//! missing, because some adapters must bind to an older, more general
//! type on releases that predate their specific one.
//!
//! Resolution results are cached for the process lifetime; the loaded
//! release cannot change, so entries are never refreshed.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::registry::{SyntaxRegistry, TypeDescriptor};
use crate::tree::{RawKind, SyntaxNode};

/// Hand-coded fallback names for adapters that bind to a different, more
/// general type on older releases.
///
/// The table contents are release-specific facts supplied from outside;
/// the builtin table only carries the entries the supported release line
/// is known to need.
#[derive(Debug, Clone, Default)]
pub struct CompatTable {
    fallbacks: FxHashMap<SmolStr, Box<[SmolStr]>>,
}

impl CompatTable {
    /// A table with no fallback entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The builtin table for the supported release line.
    ///
    /// `CommonForEachStatement` fronts the general iteration statement
    /// shape; releases that predate the variable form only declare
    /// `ForEachStatement`, which is structurally a superset-compatible
    /// binding target for the common adapter.
    pub fn builtin() -> Self {
        Self::empty().with_fallback("CommonForEachStatement", &["ForEachStatement"])
    }

    /// Add fallback type names for an adapter, tried in order after the
    /// adapter's own name.
    pub fn with_fallback(mut self, adapter: impl Into<SmolStr>, alternatives: &[&str]) -> Self {
        self.fallbacks.insert(
            adapter.into(),
            alternatives.iter().map(|name| SmolStr::new(name)).collect(),
        );
        self
    }

    fn alternatives(&self, adapter: &str) -> &[SmolStr] {
        self.fallbacks.get(adapter).map_or(&[], |names| names)
    }
}

/// Outcome of resolving one adapter type against the loaded release.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The release declares a binding target for the adapter.
    Resolved(Arc<TypeDescriptor>),
    /// No declared type matches the adapter in this release.
    Absent,
}

impl Resolution {
    /// Whether a binding target exists.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// The resolved descriptor, if any.
    pub fn descriptor(&self) -> Option<&Arc<TypeDescriptor>> {
        match self {
            Resolution::Resolved(descriptor) => Some(descriptor),
            Resolution::Absent => None,
        }
    }

    /// Whether a node of `kind` is an instance of the resolved type.
    /// Always false for an absent resolution.
    pub fn matches(&self, kind: RawKind) -> bool {
        self.descriptor().is_some_and(|descriptor| descriptor.matches(kind))
    }
}

/// Per-adapter resolution cache.
pub(crate) struct TypeResolver {
    compat: CompatTable,
    cache: RwLock<FxHashMap<SmolStr, Resolution>>,
}

impl TypeResolver {
    pub(crate) fn new(compat: CompatTable) -> Self {
        Self {
            compat,
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// Resolve an adapter type name, caching the outcome.
    pub(crate) fn resolve(&self, registry: &SyntaxRegistry, adapter: &str) -> Resolution {
        if let Some(hit) = self.cache.read().get(adapter) {
            return hit.clone();
        }
        let resolution = self.compute(registry, adapter);
        let mut cache = self.cache.write();
        cache
            .entry(SmolStr::new(adapter))
            .or_insert(resolution)
            .clone()
    }

    fn compute(&self, registry: &SyntaxRegistry, adapter: &str) -> Resolution {
        if let Some(descriptor) = registry.type_named(adapter) {
            tracing::trace!(adapter, "adapter resolved to its own type name");
            return Resolution::Resolved(Arc::clone(descriptor));
        }
        for alternative in self.compat.alternatives(adapter) {
            if let Some(descriptor) = registry.type_named(alternative) {
                tracing::trace!(
                    adapter,
                    fallback = alternative.as_str(),
                    "adapter resolved through compat fallback"
                );
                return Resolution::Resolved(Arc::clone(descriptor));
            }
        }
        tracing::debug!(adapter, "no binding target in loaded release");
        Resolution::Absent
    }

    /// Total structural probe: can `node` be re-shaped as the adapter?
    /// False for an absent node or an incompatible kind; never an error.
    pub(crate) fn is_instance(
        &self,
        registry: &SyntaxRegistry,
        adapter: &str,
        node: Option<&SyntaxNode>,
    ) -> bool {
        match node {
            Some(node) => self.resolve(registry, adapter).matches(node.kind()),
            None => false,
        }
    }
}
