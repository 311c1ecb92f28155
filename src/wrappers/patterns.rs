//! Wrappers for the pattern shapes.
//!
//! Patterns arrived as a family: the general `Pattern` shape plus one
//! concrete shape per form. Releases that predate pattern matching
//! declare none of them, so every wrapper here must tolerate resolving to
//! nothing: probes return false, reads default, writes refuse real
//! values.

use crate::shim::{ShimContext, ShimResult};
use crate::tree::{SyntaxNode, SyntaxToken};
use crate::wrappers::{shim_node, shim_widen, unwrap_all, SeparatedList, ShimNode};

use super::designations::VariableDesignation;

shim_node! {
    /// Any pattern form; the general shape the concrete forms widen to.
    Pattern
}

shim_node! {
    /// A pattern matching a constant expression.
    ConstantPattern
}

impl ConstantPattern {
    /// The constant expression being matched.
    pub fn expression(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Expression")?.read(self.node())
    }
}

shim_node! {
    /// A pattern declaring a typed variable (`T name`).
    DeclarationPattern
}

impl DeclarationPattern {
    /// The designation naming the declared variable.
    pub fn designation(&self, ctx: &ShimContext) -> ShimResult<VariableDesignation> {
        let node = ctx.node_reader(Self::TYPE_NAME, "Designation")?.read(self.node())?;
        VariableDesignation::try_wrap(ctx, node)
    }
}

shim_node! {
    /// A pattern declaring an inferred-type variable (`var name`).
    VarPattern
}

impl VarPattern {
    /// The `var` keyword.
    pub fn var_keyword(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "VarKeyword")?.read(self.node())
    }

    /// The designation naming the declared variable.
    pub fn designation(&self, ctx: &ShimContext) -> ShimResult<VariableDesignation> {
        let node = ctx.node_reader(Self::TYPE_NAME, "Designation")?.read(self.node())?;
        VariableDesignation::try_wrap(ctx, node)
    }
}

shim_node! {
    /// The `_` pattern, matching anything and binding nothing.
    DiscardPattern
}

impl DiscardPattern {
    /// The underscore token.
    pub fn underscore_token(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "UnderscoreToken")?.read(self.node())
    }
}

shim_node! {
    /// A pattern recursing into the matched value's members.
    RecursivePattern
}

impl RecursivePattern {
    /// The property sub-pattern clause, when present.
    pub fn property_pattern_clause(&self, ctx: &ShimContext) -> ShimResult<PropertyPatternClause> {
        let node = ctx
            .node_reader(Self::TYPE_NAME, "PropertyPatternClause")?
            .read(self.node())?;
        PropertyPatternClause::try_wrap(ctx, node)
    }

    /// The designation naming the matched value, when present.
    pub fn designation(&self, ctx: &ShimContext) -> ShimResult<VariableDesignation> {
        let node = ctx.node_reader(Self::TYPE_NAME, "Designation")?.read(self.node())?;
        VariableDesignation::try_wrap(ctx, node)
    }
}

shim_node! {
    /// The braced `{ Name: pattern, ... }` clause of a recursive pattern.
    PropertyPatternClause
}

impl PropertyPatternClause {
    /// The sub-patterns, in declaration order.
    pub fn subpatterns(&self, ctx: &ShimContext) -> ShimResult<SeparatedList<Subpattern>> {
        let raw = ctx.list_reader(Self::TYPE_NAME, "Subpatterns")?.read(self.node())?;
        Ok(SeparatedList::new(raw))
    }

    /// A copy of this clause with the sub-patterns replaced.
    pub fn with_subpatterns(
        &self,
        ctx: &ShimContext,
        subpatterns: &[Subpattern],
    ) -> ShimResult<Self> {
        let nodes = unwrap_all(subpatterns)?;
        let node = ctx
            .list_writer(Self::TYPE_NAME, "Subpatterns")?
            .write(self.node(), nodes)?;
        Ok(Self::wrap_unchecked(Some(node)))
    }
}

shim_node! {
    /// One `Name: pattern` entry of a property pattern clause.
    Subpattern
}

impl Subpattern {
    /// The nested pattern.
    pub fn pattern(&self, ctx: &ShimContext) -> ShimResult<Pattern> {
        let node = ctx.node_reader(Self::TYPE_NAME, "Pattern")?.read(self.node())?;
        Pattern::try_wrap(ctx, node)
    }
}

shim_widen!(ConstantPattern => Pattern);
shim_widen!(DeclarationPattern => Pattern);
shim_widen!(VarPattern => Pattern);
shim_widen!(DiscardPattern => Pattern);
shim_widen!(RecursivePattern => Pattern);
