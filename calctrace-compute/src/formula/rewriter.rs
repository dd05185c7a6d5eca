use calctrace_parser::parser::ast::expr::Expr;
use super::{FormulaDefinition, FormulaMatch};

/// Rewrites an expression according to a formula that was detected in it.
pub trait FormulaRewriter: Send + Sync {
    /// Returns the rewritten expression.
    ///
    /// `found` is the match of `formula` that was reported by the
    /// [`FormulaMatcher`](super::FormulaMatcher) for the expression.
    fn rewrite(&self, expr: &Expr, formula: &FormulaDefinition, found: &FormulaMatch) -> Expr;
}

/// A [`FormulaRewriter`] that returns the expression unchanged.
///
/// Detection of a formula is structural, and says nothing about whether substituting the
/// replacement template would be correct. This rewriter is the default for that reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityRewriter;

impl FormulaRewriter for IdentityRewriter {
    fn rewrite(&self, expr: &Expr, _: &FormulaDefinition, _: &FormulaMatch) -> Expr {
        expr.clone()
    }
}

#[cfg(test)]
mod tests {
    use calctrace_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use crate::formula::{FormulaCatalog, FormulaMatcher};
    use super::*;

    #[test]
    fn identity() {
        let catalog = FormulaCatalog::builtin();
        let expr = parse("(a + b)^2").unwrap();
        let found = FormulaMatcher::new(&catalog).detect(&expr.to_string()).remove(0);
        let formula = catalog.by_name(&found.formula_name).unwrap();
        assert_eq!(IdentityRewriter.rewrite(&expr, formula, &found), expr);
    }
}
