//! The compatibility layer proper: context, caches, factory surface.
//!
//! [`ShimContext`] is the composition root. It owns the loaded release's
//! [`SyntaxRegistry`], the compat fallback table, and every process-wide
//! cache (accessors, type resolutions, enumeration shims). All state is
//! dependency-injected through the context rather than held in ambient
//! statics, so several loaded-release descriptions can coexist in one
//! process (which is also what makes version-skew behavior testable).
//!
//! The context is `Send + Sync` and every operation on it is a bounded,
//! synchronous, in-memory computation; analysis passes on parallel
//! threads share one context freely.

pub mod accessors;
pub mod error;
pub mod kinds;
pub mod node_list;
pub mod resolve;

pub use accessors::{ReadAccessor, WriteAccessor};
pub use error::{ShimError, ShimResult};
pub use kinds::{known, EnumShim};
pub use node_list::NodeList;
pub use resolve::{CompatTable, Resolution};

use std::sync::OnceLock;

use accessors::AccessorCache;
use resolve::TypeResolver;

use crate::registry::{EnumDescriptor, SyntaxRegistry};
use crate::tree::{SyntaxNode, SyntaxToken};

/// Composition root of the compatibility layer.
pub struct ShimContext {
    registry: SyntaxRegistry,
    resolver: TypeResolver,
    accessors: AccessorCache,
    syntax_kinds: OnceLock<EnumShim>,
    member_kinds: OnceLock<EnumShim>,
    language_versions: OnceLock<EnumShim>,
}

impl ShimContext {
    /// Create a context over the loaded release, with the builtin compat
    /// fallback table.
    pub fn new(registry: SyntaxRegistry) -> Self {
        Self::with_compat(registry, CompatTable::builtin())
    }

    /// Create a context with an externally supplied compat table.
    pub fn with_compat(registry: SyntaxRegistry, compat: CompatTable) -> Self {
        Self {
            registry,
            resolver: TypeResolver::new(compat),
            accessors: AccessorCache::new(),
            syntax_kinds: OnceLock::new(),
            member_kinds: OnceLock::new(),
            language_versions: OnceLock::new(),
        }
    }

    /// The loaded release's reflectable surface.
    pub fn registry(&self) -> &SyntaxRegistry {
        &self.registry
    }

    /// Resolve an adapter type name to its binding target in the loaded
    /// release (cached).
    pub fn resolve(&self, adapter: &str) -> Resolution {
        self.resolver.resolve(&self.registry, adapter)
    }

    /// Total structural probe: is `node` an instance of the adapter's
    /// resolved type? Never fails.
    pub fn is_kind_of(&self, adapter: &str, node: &SyntaxNode) -> bool {
        self.resolver.is_instance(&self.registry, adapter, Some(node))
    }

    /// Read accessor for an optional token member.
    pub fn token_reader(
        &self,
        owner: &str,
        member: &str,
    ) -> ShimResult<ReadAccessor<Option<SyntaxToken>>> {
        accessors::token_reader(&self.accessors, &self.registry, &self.resolver, owner, member)
    }

    /// Write accessor for an optional token member.
    pub fn token_writer(
        &self,
        owner: &str,
        member: &str,
    ) -> ShimResult<WriteAccessor<Option<SyntaxToken>>> {
        accessors::token_writer(&self.accessors, &self.registry, &self.resolver, owner, member)
    }

    /// Read accessor for an optional child-node member.
    pub fn node_reader(
        &self,
        owner: &str,
        member: &str,
    ) -> ShimResult<ReadAccessor<Option<SyntaxNode>>> {
        accessors::node_reader(&self.accessors, &self.registry, &self.resolver, owner, member)
    }

    /// Write accessor for an optional child-node member.
    pub fn node_writer(
        &self,
        owner: &str,
        member: &str,
    ) -> ShimResult<WriteAccessor<Option<SyntaxNode>>> {
        accessors::node_writer(&self.accessors, &self.registry, &self.resolver, owner, member)
    }

    /// Read accessor for a separator-delimited collection member.
    pub fn list_reader(&self, owner: &str, member: &str) -> ShimResult<ReadAccessor<NodeList>> {
        accessors::list_reader(&self.accessors, &self.registry, &self.resolver, owner, member)
    }

    /// Write accessor for a separator-delimited collection member.
    pub fn list_writer(
        &self,
        owner: &str,
        member: &str,
    ) -> ShimResult<WriteAccessor<Vec<SyntaxNode>>> {
        accessors::list_writer(&self.accessors, &self.registry, &self.resolver, owner, member)
    }

    /// Shim over the release's node/token kind enumeration.
    pub fn syntax_kinds(&self) -> &EnumShim {
        self.syntax_kinds
            .get_or_init(|| self.build_enum_shim("SyntaxKind", known::SYNTAX_KINDS))
    }

    /// Shim over the release's member kind enumeration.
    pub fn member_kinds(&self) -> &EnumShim {
        self.member_kinds
            .get_or_init(|| self.build_enum_shim("MemberKind", known::MEMBER_KINDS))
    }

    /// Shim over the release's language-version tag enumeration.
    pub fn language_versions(&self) -> &EnumShim {
        self.language_versions
            .get_or_init(|| self.build_enum_shim("LanguageVersion", known::LANGUAGE_VERSIONS))
    }

    fn build_enum_shim(&self, name: &str, extensions: &[(&str, u16)]) -> EnumShim {
        match self.registry.enum_named(name) {
            Some(descriptor) => EnumShim::build(descriptor, extensions),
            None => EnumShim::build(&EnumDescriptor::empty(name), extensions),
        }
    }
}
