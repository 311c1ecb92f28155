//! Wrappers for variable designation shapes.
//!
//! Designations name the variables a pattern or declaration expression
//! introduces. Like the patterns, the whole family is absent from older
//! releases.

use crate::shim::{ShimContext, ShimResult};
use crate::tree::SyntaxToken;
use crate::wrappers::{shim_node, shim_widen, unwrap_all, SeparatedList, ShimNode};

shim_node! {
    /// Any designation form; the general shape the concrete forms widen to.
    VariableDesignation
}

shim_node! {
    /// A designation introducing a single named variable.
    SingleVariableDesignation
}

impl SingleVariableDesignation {
    /// The declared variable name.
    pub fn identifier(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "Identifier")?.read(self.node())
    }

    /// A copy of this designation with the name replaced.
    pub fn with_identifier(
        &self,
        ctx: &ShimContext,
        identifier: Option<SyntaxToken>,
    ) -> ShimResult<Self> {
        let node = ctx
            .token_writer(Self::TYPE_NAME, "Identifier")?
            .write(self.node(), identifier)?;
        Ok(Self::wrap_unchecked(Some(node)))
    }
}

shim_node! {
    /// The `_` designation, discarding the value.
    DiscardDesignation
}

impl DiscardDesignation {
    /// The underscore token.
    pub fn underscore_token(&self, ctx: &ShimContext) -> ShimResult<Option<SyntaxToken>> {
        ctx.token_reader(Self::TYPE_NAME, "UnderscoreToken")?.read(self.node())
    }
}

shim_node! {
    /// A parenthesized group of designations, one per deconstructed part.
    ParenthesizedVariableDesignation
}

impl ParenthesizedVariableDesignation {
    /// The grouped designations, in source order.
    pub fn variables(&self, ctx: &ShimContext) -> ShimResult<SeparatedList<VariableDesignation>> {
        let raw = ctx.list_reader(Self::TYPE_NAME, "Variables")?.read(self.node())?;
        Ok(SeparatedList::new(raw))
    }

    /// A copy of this designation with the grouped designations replaced.
    pub fn with_variables(
        &self,
        ctx: &ShimContext,
        variables: &[VariableDesignation],
    ) -> ShimResult<Self> {
        let nodes = unwrap_all(variables)?;
        let node = ctx
            .list_writer(Self::TYPE_NAME, "Variables")?
            .write(self.node(), nodes)?;
        Ok(Self::wrap_unchecked(Some(node)))
    }
}

shim_widen!(SingleVariableDesignation => VariableDesignation);
shim_widen!(DiscardDesignation => VariableDesignation);
shim_widen!(ParenthesizedVariableDesignation => VariableDesignation);
