//! Accessor factory: cached, typed access to one member of a node.
//!
//! Given (owner type name, member name) and the caller's statically
//! expected member shape, the factory hands out a read or write accessor.
//! The decision of *what kind* of accessor to build is made exactly once
//! per (owner, member, flavor) against the [`SyntaxRegistry`], then cached
//! for the process lifetime:
//!
//! - member declared with the expected shape → a native accessor that
//!   walks (reads) or splices (writes) the rowan tree;
//! - owner type or member absent from the loaded release → a fallback
//!   accessor: reads return the shape's default for every input, writes
//!   accept the default value as a no-op and refuse anything else;
//! - member declared with a *different* shape than the caller expected →
//!   the factory call itself fails with an invalid-operation error. This
//!   is a defect in the calling code, not version skew, and it must never
//!   silently look like the fallback case.
//!
//! Write accessors never mutate the input tree: they produce a fresh
//! detached node with the member replaced, inserted, or removed.
//!
//! Concurrency: cache construction is a pure function of the key. Two
//! threads racing on first use may both build the entry; either result may
//! win the store and both behave identically, so the lock only bounds
//! duplicated work, not correctness.

use std::any::Any;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::registry::{ListShape, MemberShape, SyntaxRegistry};
use crate::shim::error::{ShimError, ShimResult};
use crate::shim::node_list::NodeList;
use crate::shim::resolve::TypeResolver;
use crate::tree::{self, RawKind, SyntaxNode, SyntaxToken};

/// A cached read accessor for one member.
///
/// The same accessor instance (behind `Arc`) serves every read of its
/// (owner, member) pair for the process lifetime.
pub struct ReadAccessor<T> {
    fun: Arc<dyn Fn(&SyntaxNode) -> T + Send + Sync>,
}

impl<T> Clone for ReadAccessor<T> {
    fn clone(&self) -> Self {
        Self {
            fun: Arc::clone(&self.fun),
        }
    }
}

impl<T> std::fmt::Debug for ReadAccessor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadAccessor").finish_non_exhaustive()
    }
}

impl<T> ReadAccessor<T> {
    fn new(fun: impl Fn(&SyntaxNode) -> T + Send + Sync + 'static) -> Self {
        Self { fun: Arc::new(fun) }
    }

    /// Read the member from `node`.
    ///
    /// An absent node fails with a null-reference error, mirroring direct
    /// member access on an absent node.
    pub fn read(&self, node: Option<&SyntaxNode>) -> ShimResult<T> {
        let node = node.ok_or(ShimError::NullReference)?;
        Ok((self.fun)(node))
    }
}

/// A cached write accessor for one member.
///
/// Writes are structural: the result is a new detached node, the input is
/// untouched.
pub struct WriteAccessor<T> {
    fun: Arc<dyn Fn(&SyntaxNode, T) -> ShimResult<SyntaxNode> + Send + Sync>,
}

impl<T> Clone for WriteAccessor<T> {
    fn clone(&self) -> Self {
        Self {
            fun: Arc::clone(&self.fun),
        }
    }
}

impl<T> WriteAccessor<T> {
    fn new(fun: impl Fn(&SyntaxNode, T) -> ShimResult<SyntaxNode> + Send + Sync + 'static) -> Self {
        Self { fun: Arc::new(fun) }
    }

    /// Produce a new node with the member set to `value`.
    ///
    /// An absent node fails with a null-reference error. On a release
    /// lacking the member, the default value is a no-op (the input node is
    /// returned) and any other value fails with a not-supported error.
    pub fn write(&self, node: Option<&SyntaxNode>, value: T) -> ShimResult<SyntaxNode> {
        let node = node.ok_or(ShimError::NullReference)?;
        (self.fun)(node, value)
    }
}

/// Accessor flavor requested by the caller; part of the cache key, so one
/// (owner, member) pair may cache several flavors independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Flavor {
    TokenRead,
    TokenWrite,
    NodeRead,
    NodeWrite,
    ListRead,
    ListWrite,
}

impl Flavor {
    fn expected_shape(self) -> &'static str {
        match self {
            Flavor::TokenRead | Flavor::TokenWrite => "token",
            Flavor::NodeRead | Flavor::NodeWrite => "node",
            Flavor::ListRead | Flavor::ListWrite => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AccessorKey {
    owner: SmolStr,
    member: SmolStr,
    flavor: Flavor,
}

/// Process-wide accessor cache. Entries are never evicted; a cached
/// invalid-operation error is replayed on every later request, so the
/// defect stays loud without being rebuilt.
#[derive(Default)]
pub(crate) struct AccessorCache {
    entries: RwLock<FxHashMap<AccessorKey, ShimResult<Arc<dyn Any + Send + Sync>>>>,
}

impl AccessorCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn get_or_build<A>(&self, key: AccessorKey, build: impl FnOnce() -> ShimResult<A>) -> ShimResult<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        if let Some(entry) = self.entries.read().get(&key) {
            return Self::unpack(&key, entry);
        }
        // Build outside the lock: construction is pure and idempotent, so a
        // racing thread computing the same entry is only wasted work.
        let built: ShimResult<Arc<dyn Any + Send + Sync>> = build().map(|accessor| {
            let arc: Arc<dyn Any + Send + Sync> = Arc::new(accessor);
            arc
        });
        let mut entries = self.entries.write();
        let stored = entries.entry(key.clone()).or_insert(built);
        Self::unpack(&key, stored)
    }

    fn unpack<A>(key: &AccessorKey, entry: &ShimResult<Arc<dyn Any + Send + Sync>>) -> ShimResult<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        match entry {
            Ok(any) => any.downcast_ref::<A>().cloned().ok_or_else(|| {
                ShimError::invalid_operation(
                    key.owner.clone(),
                    key.member.clone(),
                    "conflicting accessor flavors cached for one key",
                )
            }),
            Err(err) => Err(err.clone()),
        }
    }
}

/// Resolve (owner, member) to its declared shape, if any.
fn lookup_member(
    registry: &SyntaxRegistry,
    resolver: &TypeResolver,
    owner: &str,
    member: &str,
) -> Option<MemberShape> {
    let resolution = resolver.resolve(registry, owner);
    let descriptor = resolution.descriptor()?;
    descriptor.member(member).map(|m| m.shape.clone())
}

fn mismatch(owner: &str, member: &str, declared: &MemberShape, flavor: Flavor) -> ShimError {
    ShimError::invalid_operation(
        owner,
        member,
        format!(
            "member is declared as a {} member, accessor was requested for a {}",
            declared.describe(),
            flavor.expected_shape()
        ),
    )
}

fn feature_name(owner: &str, member: &str) -> String {
    format!("{owner}.{member}")
}

pub(crate) fn token_reader(
    cache: &AccessorCache,
    registry: &SyntaxRegistry,
    resolver: &TypeResolver,
    owner: &str,
    member: &str,
) -> ShimResult<ReadAccessor<Option<SyntaxToken>>> {
    let key = AccessorKey {
        owner: owner.into(),
        member: member.into(),
        flavor: Flavor::TokenRead,
    };
    cache.get_or_build(key, || match lookup_member(registry, resolver, owner, member) {
        Some(MemberShape::Token { kind, .. }) => {
            tracing::trace!(owner, member, "built native token reader");
            Ok(ReadAccessor::new(move |node| tree::token_child(node, kind)))
        }
        Some(other) => Err(mismatch(owner, member, &other, Flavor::TokenRead)),
        None => {
            tracing::debug!(owner, member, "member absent in loaded release, token reads default");
            Ok(ReadAccessor::new(|_| None))
        }
    })
}

pub(crate) fn token_writer(
    cache: &AccessorCache,
    registry: &SyntaxRegistry,
    resolver: &TypeResolver,
    owner: &str,
    member: &str,
) -> ShimResult<WriteAccessor<Option<SyntaxToken>>> {
    let key = AccessorKey {
        owner: owner.into(),
        member: member.into(),
        flavor: Flavor::TokenWrite,
    };
    cache.get_or_build(key, || match lookup_member(registry, resolver, owner, member) {
        Some(MemberShape::Token { kind, slot }) => {
            tracing::trace!(owner, member, "built native token writer");
            Ok(WriteAccessor::new(move |node, value| {
                Ok(set_token_slot(node, kind, slot, value))
            }))
        }
        Some(other) => Err(mismatch(owner, member, &other, Flavor::TokenWrite)),
        None => {
            tracing::debug!(owner, member, "member absent in loaded release, token writes guarded");
            let feature = feature_name(owner, member);
            Ok(WriteAccessor::new(move |node, value: Option<SyntaxToken>| {
                if value.is_none() {
                    Ok(node.clone())
                } else {
                    Err(ShimError::not_supported(feature.clone()))
                }
            }))
        }
    })
}

pub(crate) fn node_reader(
    cache: &AccessorCache,
    registry: &SyntaxRegistry,
    resolver: &TypeResolver,
    owner: &str,
    member: &str,
) -> ShimResult<ReadAccessor<Option<SyntaxNode>>> {
    let key = AccessorKey {
        owner: owner.into(),
        member: member.into(),
        flavor: Flavor::NodeRead,
    };
    cache.get_or_build(key, || match lookup_member(registry, resolver, owner, member) {
        Some(MemberShape::Node { kinds, .. }) => {
            tracing::trace!(owner, member, "built native node reader");
            Ok(ReadAccessor::new(move |node| tree::node_child(node, &kinds)))
        }
        Some(other) => Err(mismatch(owner, member, &other, Flavor::NodeRead)),
        None => {
            tracing::debug!(owner, member, "member absent in loaded release, node reads default");
            Ok(ReadAccessor::new(|_| None))
        }
    })
}

pub(crate) fn node_writer(
    cache: &AccessorCache,
    registry: &SyntaxRegistry,
    resolver: &TypeResolver,
    owner: &str,
    member: &str,
) -> ShimResult<WriteAccessor<Option<SyntaxNode>>> {
    let key = AccessorKey {
        owner: owner.into(),
        member: member.into(),
        flavor: Flavor::NodeWrite,
    };
    cache.get_or_build(key, || match lookup_member(registry, resolver, owner, member) {
        Some(MemberShape::Node { kinds, slot }) => {
            tracing::trace!(owner, member, "built native node writer");
            Ok(WriteAccessor::new(move |node, value| {
                Ok(set_node_slot(node, &kinds, slot, value))
            }))
        }
        Some(other) => Err(mismatch(owner, member, &other, Flavor::NodeWrite)),
        None => {
            tracing::debug!(owner, member, "member absent in loaded release, node writes guarded");
            let feature = feature_name(owner, member);
            Ok(WriteAccessor::new(move |node, value: Option<SyntaxNode>| {
                if value.is_none() {
                    Ok(node.clone())
                } else {
                    Err(ShimError::not_supported(feature.clone()))
                }
            }))
        }
    })
}

pub(crate) fn list_reader(
    cache: &AccessorCache,
    registry: &SyntaxRegistry,
    resolver: &TypeResolver,
    owner: &str,
    member: &str,
) -> ShimResult<ReadAccessor<NodeList>> {
    let key = AccessorKey {
        owner: owner.into(),
        member: member.into(),
        flavor: Flavor::ListRead,
    };
    cache.get_or_build(key, || match lookup_member(registry, resolver, owner, member) {
        Some(MemberShape::List(shape)) => {
            tracing::trace!(owner, member, "built native list reader");
            Ok(ReadAccessor::new(move |node| {
                NodeList::native(node.clone(), Arc::clone(&shape))
            }))
        }
        Some(other) => Err(mismatch(owner, member, &other, Flavor::ListRead)),
        None => {
            tracing::debug!(owner, member, "member absent in loaded release, list reads sentinel");
            Ok(ReadAccessor::new(|_| NodeList::unsupported()))
        }
    })
}

pub(crate) fn list_writer(
    cache: &AccessorCache,
    registry: &SyntaxRegistry,
    resolver: &TypeResolver,
    owner: &str,
    member: &str,
) -> ShimResult<WriteAccessor<Vec<SyntaxNode>>> {
    let key = AccessorKey {
        owner: owner.into(),
        member: member.into(),
        flavor: Flavor::ListWrite,
    };
    cache.get_or_build(key, || match lookup_member(registry, resolver, owner, member) {
        Some(MemberShape::List(shape)) => {
            tracing::trace!(owner, member, "built native list writer");
            Ok(WriteAccessor::new(move |node, values: Vec<SyntaxNode>| {
                Ok(set_list_slot(node, &shape, &values))
            }))
        }
        Some(other) => Err(mismatch(owner, member, &other, Flavor::ListWrite)),
        None => {
            tracing::debug!(owner, member, "member absent in loaded release, list writes guarded");
            let feature = feature_name(owner, member);
            Ok(WriteAccessor::new(move |node, values: Vec<SyntaxNode>| {
                if values.is_empty() {
                    Ok(node.clone())
                } else {
                    Err(ShimError::not_supported(feature.clone()))
                }
            }))
        }
    })
}

type GreenElement = rowan::NodeOrToken<rowan::GreenNode, rowan::GreenToken>;

/// Replace, insert, or remove the token slot of `kind` on `node`,
/// returning a fresh detached node.
fn set_token_slot(
    node: &SyntaxNode,
    kind: RawKind,
    slot: usize,
    value: Option<SyntaxToken>,
) -> SyntaxNode {
    let existing = tree::element_index(node, |el| el.kind() == kind);
    let child_count = node.children_with_tokens().count();
    let green = node.green().into_owned();
    let green = match (existing, value) {
        (Some(index), Some(token)) => {
            let replacement: GreenElement = rowan::NodeOrToken::Token(token.green().to_owned());
            green.splice_children(index..index + 1, [replacement])
        }
        (Some(index), None) => green.splice_children(index..index + 1, Vec::<GreenElement>::new()),
        (None, Some(token)) => {
            let at = slot.min(child_count);
            let inserted: GreenElement = rowan::NodeOrToken::Token(token.green().to_owned());
            green.splice_children(at..at, [inserted])
        }
        (None, None) => return node.clone(),
    };
    SyntaxNode::new_root(green)
}

/// Replace, insert, or remove the child-node slot accepting `kinds`,
/// returning a fresh detached node.
fn set_node_slot(
    node: &SyntaxNode,
    kinds: &[RawKind],
    slot: usize,
    value: Option<SyntaxNode>,
) -> SyntaxNode {
    let existing = tree::element_index(node, |el| {
        el.as_node().is_some_and(|child| kinds.contains(&child.kind()))
    });
    let child_count = node.children_with_tokens().count();
    let green = node.green().into_owned();
    let green = match (existing, value) {
        (Some(index), Some(child)) => {
            let replacement: GreenElement = rowan::NodeOrToken::Node(child.green().into_owned());
            green.splice_children(index..index + 1, [replacement])
        }
        (Some(index), None) => green.splice_children(index..index + 1, Vec::<GreenElement>::new()),
        (None, Some(child)) => {
            let at = slot.min(child_count);
            let inserted: GreenElement = rowan::NodeOrToken::Node(child.green().into_owned());
            green.splice_children(at..at, [inserted])
        }
        (None, None) => return node.clone(),
    };
    SyntaxNode::new_root(green)
}

/// Replace the whole element-and-separator region of a list member with
/// `values`, interleaving freshly synthesized separators.
fn set_list_slot(node: &SyntaxNode, shape: &ListShape, values: &[SyntaxNode]) -> SyntaxNode {
    let mut first = None;
    let mut last = None;
    let mut child_count = 0usize;
    for (index, el) in node.children_with_tokens().enumerate() {
        child_count += 1;
        let covered = match &el {
            rowan::NodeOrToken::Node(child) => shape.element_kinds.contains(&child.kind()),
            rowan::NodeOrToken::Token(tok) => tok.kind() == shape.separator,
        };
        if covered {
            first.get_or_insert(index);
            last = Some(index);
        }
    }
    let range = match (first, last) {
        (Some(first), Some(last)) => first..last + 1,
        _ => {
            let at = shape.slot.min(child_count);
            at..at
        }
    };

    let mut replacement: Vec<GreenElement> = Vec::with_capacity(values.len() * 2);
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            replacement.push(rowan::NodeOrToken::Token(rowan::GreenToken::new(
                shape.separator.into(),
                &shape.separator_text,
            )));
        }
        replacement.push(rowan::NodeOrToken::Node(value.green().into_owned()));
    }

    SyntaxNode::new_root(node.green().into_owned().splice_children(range, replacement))
}
