//! Wrappers for the statement shapes with cross-release history.

use crate::shim::{ShimContext, ShimResult};
use crate::tree::{SyntaxNode, SyntaxToken};
use crate::wrappers::{shim_node, shim_widen, ShimNode};

shim_node! {
    /// Either form of `foreach`-style iteration statement.
    ///
    /// Releases that predate the variable form do not declare the common
    /// base type; the compat table binds this wrapper to the plain
    /// `ForEachStatement` there, which carries the same members.
    CommonForEachStatement
}

impl CommonForEachStatement {
    /// The `await` keyword, when the iteration is asynchronous.
    ///
    /// On releases without asynchronous iteration the member is absent:
    /// reads return the default token and [`Self::with_await_keyword`]
    /// only accepts the default.
    pub fn await_keyword(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "AwaitKeyword")?.read(self.node())
    }

    /// A copy of this statement with the `await` keyword replaced.
    pub fn with_await_keyword(
        &self,
        ctx: &ShimContext,
        await_keyword: Option<SyntaxToken>,
    ) -> ShimResult<Self> {
        let node = ctx
            .token_writer(Self::TYPE_NAME, "AwaitKeyword")?
            .write(self.node(), await_keyword)?;
        Ok(Self::wrap_unchecked(Some(node)))
    }

    /// The iterated expression.
    pub fn expression(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Expression")?.read(self.node())
    }

    /// The loop body.
    pub fn statement(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Statement")?.read(self.node())
    }
}

shim_node! {
    /// The classic iteration statement declaring a single loop variable.
    ForEachStatement
}

impl ForEachStatement {
    /// The `await` keyword, when the iteration is asynchronous.
    pub fn await_keyword(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "AwaitKeyword")?.read(self.node())
    }

    /// A copy of this statement with the `await` keyword replaced.
    pub fn with_await_keyword(
        &self,
        ctx: &ShimContext,
        await_keyword: Option<SyntaxToken>,
    ) -> ShimResult<Self> {
        let node = ctx
            .token_writer(Self::TYPE_NAME, "AwaitKeyword")?
            .write(self.node(), await_keyword)?;
        Ok(Self::wrap_unchecked(Some(node)))
    }

    /// The declared loop variable name.
    pub fn identifier(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "Identifier")?.read(self.node())
    }

    /// The iterated expression.
    pub fn expression(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Expression")?.read(self.node())
    }

    /// The loop body.
    pub fn statement(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Statement")?.read(self.node())
    }
}

shim_node! {
    /// The iteration statement deconstructing into a declaration
    /// expression instead of a single variable.
    ForEachVariableStatement
}

impl ForEachVariableStatement {
    /// The declaration or tuple expression receiving each element.
    pub fn variable(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Variable")?.read(self.node())
    }

    /// The `await` keyword, when the iteration is asynchronous.
    pub fn await_keyword(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "AwaitKeyword")?.read(self.node())
    }

    /// The iterated expression.
    pub fn expression(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Expression")?.read(self.node())
    }

    /// The loop body.
    pub fn statement(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Statement")?.read(self.node())
    }
}

shim_node! {
    /// A function declared in statement position inside another body.
    LocalFunctionStatement
}

impl LocalFunctionStatement {
    /// The declared function name.
    pub fn identifier(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "Identifier")?.read(self.node())
    }

    /// The function body.
    pub fn body(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxNode>> {
        ctx.node_reader(Self::TYPE_NAME, "Body")?.read(self.node())
    }
}

shim_widen!(ForEachStatement => CommonForEachStatement);
shim_widen!(ForEachVariableStatement => CommonForEachStatement);
