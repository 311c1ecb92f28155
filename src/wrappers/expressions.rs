//! Wrappers for the expression shapes with cross-release history.

use crate::shim::{ShimContext, ShimResult};
use crate::tree::{SyntaxNode, SyntaxToken};
use crate::wrappers::{shim_node, unwrap_all, SeparatedList, ShimNode};

use super::designations::VariableDesignation;
use super::patterns::Pattern;

shim_node! {
    /// One argument of an invocation or tuple.
    Argument
}

impl Argument {
    /// The argument value.
    pub fn expression(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Expression")?.read(self.node())
    }
}

shim_node! {
    /// An expression declaring a variable in expression position
    /// (out-arguments, deconstruction targets).
    DeclarationExpression
}

impl DeclarationExpression {
    /// The designation naming the declared variable(s).
    pub fn designation(&self, ctx: &ShimContext) -> ShimResult<VariableDesignation> {
        let node = ctx.node_reader(Self::TYPE_NAME, "Designation")?.read(self.node())?;
        VariableDesignation::try_wrap(ctx, node)
    }
}

shim_node! {
    /// An `expr is pattern` test expression.
    IsPatternExpression
}

impl IsPatternExpression {
    /// The tested expression.
    pub fn expression(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Expression")?.read(self.node())
    }

    /// The `is` keyword.
    pub fn is_keyword(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "IsKeyword")?.read(self.node())
    }

    /// The pattern on the right of the keyword.
    pub fn pattern(&self, ctx: &ShimContext) -> ShimResult<Pattern> {
        let node = ctx.node_reader(Self::TYPE_NAME, "Pattern")?.read(self.node())?;
        Pattern::try_wrap(ctx, node)
    }
}

shim_node! {
    /// A parenthesized tuple construction expression.
    TupleExpression
}

impl TupleExpression {
    /// The tuple's arguments, in source order.
    pub fn arguments(&self, ctx: &ShimContext) -> ShimResult<SeparatedList<Argument>> {
        let raw = ctx.list_reader(Self::TYPE_NAME, "Arguments")?.read(self.node())?;
        Ok(SeparatedList::new(raw))
    }

    /// A copy of this expression with the arguments replaced.
    pub fn with_arguments(&self, ctx: &ShimContext, arguments: &[Argument]) -> ShimResult<Self> {
        let nodes = unwrap_all(arguments)?;
        let node = ctx
            .list_writer(Self::TYPE_NAME, "Arguments")?
            .write(self.node(), nodes)?;
        Ok(Self::wrap_unchecked(Some(node)))
    }
}

shim_node! {
    /// A `start..end` range expression; both operands are optional.
    RangeExpression
}

impl RangeExpression {
    /// The operand before the operator, when present.
    pub fn left_operand(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "LeftOperand")?.read(self.node())
    }

    /// The `..` operator token.
    pub fn operator_token(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "OperatorToken")?.read(self.node())
    }

    /// The operand after the operator, when present.
    pub fn right_operand(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "RightOperand")?.read(self.node())
    }
}

shim_node! {
    /// A `value switch { pattern => expr, ... }` expression.
    SwitchExpression
}

impl SwitchExpression {
    /// The expression being switched over.
    pub fn governing_expression(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "GoverningExpression")?.read(self.node())
    }

    /// The arms, in source order.
    pub fn arms(&self, ctx: &ShimContext) -> ShimResult<SeparatedList<SwitchExpressionArm>> {
        let raw = ctx.list_reader(Self::TYPE_NAME, "Arms")?.read(self.node())?;
        Ok(SeparatedList::new(raw))
    }

    /// A copy of this expression with the arms replaced.
    pub fn with_arms(&self, ctx: &ShimContext, arms: &[SwitchExpressionArm]) -> ShimResult<Self> {
        let nodes = unwrap_all(arms)?;
        let node = ctx.list_writer(Self::TYPE_NAME, "Arms")?.write(self.node(), nodes)?;
        Ok(Self::wrap_unchecked(Some(node)))
    }
}

shim_node! {
    /// One `pattern => expression` arm of a switch expression.
    SwitchExpressionArm
}

impl SwitchExpressionArm {
    /// The arm's pattern.
    pub fn pattern(&self, ctx: &ShimContext) -> ShimResult<Pattern> {
        let node = ctx.node_reader(Self::TYPE_NAME, "Pattern")?.read(self.node())?;
        Pattern::try_wrap(ctx, node)
    }

    /// The arm's result expression.
    pub fn expression(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Expression")?.read(self.node())
    }
}
