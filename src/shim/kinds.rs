//! Enumeration shims: symbolic values newer releases declare, usable on
//! releases that do not.
//!
//! A shim scans the real enumeration's declared members once and overlays
//! the crate's known-extension table. Names the release declares map to
//! their declared values; known names the release lacks map to their
//! canonical values, unless the release independently assigned that value
//! to a *different* name, in which case a fresh sentinel value (outside
//! every value in use) is allocated. That keeps lookups observably
//! collision-free in both directions.
//!
//! Lookups are pure and total: "name not found" is a valid outcome, not an
//! error.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::registry::EnumDescriptor;
use crate::tree::RawKind;

/// Canonical names and values for symbols recent host releases declare.
///
/// The values are the latest release's numbering; they are only used
/// directly when the loaded release has not claimed them for anything
/// else.
pub mod known {
    /// Node and token kinds introduced by recent releases.
    pub const SYNTAX_KINDS: &[(&str, u16)] = &[
        ("UnderscoreToken", 81),
        ("DotDotToken", 82),
        ("AwaitKeyword", 83),
        ("WhenKeyword", 84),
        ("TupleExpression", 202),
        ("RangeExpression", 203),
        ("IsPatternExpression", 204),
        ("DeclarationExpression", 205),
        ("SwitchExpression", 206),
        ("SwitchExpressionArm", 207),
        ("ConstantPattern", 210),
        ("DeclarationPattern", 211),
        ("VarPattern", 212),
        ("RecursivePattern", 213),
        ("DiscardPattern", 214),
        ("PropertyPatternClause", 215),
        ("Subpattern", 216),
        ("SingleVariableDesignation", 220),
        ("DiscardDesignation", 221),
        ("ParenthesizedVariableDesignation", 222),
        ("ForEachVariableStatement", 231),
        ("LocalFunctionStatement", 232),
    ];

    /// Member kinds introduced by recent releases.
    pub const MEMBER_KINDS: &[(&str, u16)] = &[("LocalFunction", 10), ("InitAccessor", 11)];

    /// Language-version tags introduced by recent releases.
    pub const LANGUAGE_VERSIONS: &[(&str, u16)] = &[("V4", 400), ("Latest", 9999)];
}

/// First value tried when a canonical value is already taken by the
/// loaded release. Well above any release's real numbering.
const SENTINEL_BASE: u16 = 0xFF00;

/// Bidirectional symbolic-name table for one host enumeration.
#[derive(Debug, Clone)]
pub struct EnumShim {
    enum_name: SmolStr,
    name_to_value: FxHashMap<SmolStr, u16>,
    value_to_name: FxHashMap<u16, SmolStr>,
    declared: FxHashSet<SmolStr>,
}

impl EnumShim {
    /// Build the table from the release's declared members plus the known
    /// extension names.
    pub(crate) fn build(descriptor: &EnumDescriptor, extensions: &[(&str, u16)]) -> Self {
        let mut name_to_value = FxHashMap::default();
        let mut value_to_name = FxHashMap::default();
        let mut declared = FxHashSet::default();
        let mut used: FxHashSet<u16> = FxHashSet::default();

        for (name, value) in &descriptor.members {
            name_to_value.insert(name.clone(), *value);
            value_to_name.entry(*value).or_insert_with(|| name.clone());
            declared.insert(name.clone());
            used.insert(*value);
        }

        for &(name, canonical) in extensions {
            if declared.contains(name) {
                // The release declares the symbol itself; its value wins.
                continue;
            }
            let value = if used.contains(&canonical) {
                let sentinel = allocate_sentinel(&used);
                tracing::debug!(
                    enum_name = descriptor.name.as_str(),
                    name,
                    canonical,
                    sentinel,
                    "canonical value taken by loaded release, allocated sentinel"
                );
                sentinel
            } else {
                canonical
            };
            used.insert(value);
            name_to_value.insert(SmolStr::new(name), value);
            value_to_name.insert(value, SmolStr::new(name));
        }

        Self {
            enum_name: descriptor.name.clone(),
            name_to_value,
            value_to_name,
            declared,
        }
    }

    /// Name of the enumeration this shim fronts.
    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    /// Underlying value for a symbolic name. `None` when the name is
    /// neither declared by the release nor known to the shim.
    pub fn value(&self, name: &str) -> Option<u16> {
        self.name_to_value.get(name).copied()
    }

    /// [`Self::value`] as a syntax kind, for the node-kind enumeration.
    pub fn kind(&self, name: &str) -> Option<RawKind> {
        self.value(name).map(RawKind)
    }

    /// Symbolic name for an underlying value, preferring declared names.
    pub fn name_of(&self, value: u16) -> Option<&str> {
        self.value_to_name.get(&value).map(SmolStr::as_str)
    }

    /// Whether the loaded release itself declares the name (as opposed to
    /// the shim exposing it with a canonical or sentinel value).
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Number of names the table exposes (declared plus extensions).
    pub fn len(&self) -> usize {
        self.name_to_value.len()
    }

    /// Whether the table exposes no names at all.
    pub fn is_empty(&self) -> bool {
        self.name_to_value.is_empty()
    }

    /// Iterate all exposed names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.name_to_value.keys().map(SmolStr::as_str)
    }
}

fn allocate_sentinel(used: &FxHashSet<u16>) -> u16 {
    (SENTINEL_BASE..=u16::MAX)
        .find(|value| !used.contains(value))
        .unwrap_or(u16::MAX)
}
