use calctrace_cache::{binding_key, Cache, CacheStats};
use calctrace_compute::{formula::FormulaMatch, monitor::EvaluationResult, numerical::ctxt::Bindings};
use calctrace_parser::parser::ast::expr::Expr;
use crate::config::EngineConfig;
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics of each of the engine's caches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineCacheStats {
    pub ast: CacheStats,
    pub evaluation: CacheStats,
    pub formula: CacheStats,
}

fn expr_size(expr: &Expr) -> usize {
    std::mem::size_of::<Expr>() + expr.to_string().len()
}

fn result_size(result: &EvaluationResult) -> usize {
    std::mem::size_of::<EvaluationResult>()
        + result.original_expression.len()
        + result.final_result.len()
        + result.computation_steps
            .iter()
            .map(|step| step.expression.len() + step.result.len() + step.explanation.len())
            .sum::<usize>()
}

fn matches_size(matches: &Vec<FormulaMatch>) -> usize {
    matches.iter()
        .map(|m| std::mem::size_of::<FormulaMatch>() + m.pattern.len() + m.matched_expression.len())
        .sum()
}

/// The three caches of an [`Engine`](crate::Engine), each behind its own lock.
///
/// Parsed expressions and formula matches are keyed by the expression text; evaluation results
/// are keyed by the expression text along with the variable bindings.
#[derive(Debug)]
pub struct ExpressionCache {
    ast: Mutex<Cache<Expr>>,
    evaluation: Mutex<Cache<EvaluationResult>>,
    formula: Mutex<Cache<Vec<FormulaMatch>>>,
}

impl ExpressionCache {
    pub fn new(config: &EngineConfig) -> Self {
        let (ast, evaluation, formula) = (config.ast_cache, config.evaluation_cache, config.formula_cache);
        Self {
            ast: Mutex::new(Cache::with_sizer(ast.max_size, ast.ttl, expr_size)),
            evaluation: Mutex::new(Cache::with_sizer(evaluation.max_size, evaluation.ttl, result_size)),
            formula: Mutex::new(Cache::with_sizer(formula.max_size, formula.ttl, matches_size)),
        }
    }

    /// Returns the key of an evaluation of the expression with the given bindings.
    pub fn evaluation_key(expression: &str, bindings: &Bindings) -> String {
        binding_key(expression, bindings.iter().map(|(name, value)| (name, *value)))
    }

    pub fn get_ast(&self, expression: &str) -> Option<Expr> {
        self.ast.lock().get(expression)
    }

    pub fn put_ast(&self, expression: &str, expr: Expr) {
        self.ast.lock().put(expression, expr);
    }

    pub fn get_evaluation(&self, expression: &str, bindings: &Bindings) -> Option<EvaluationResult> {
        self.evaluation.lock().get(&Self::evaluation_key(expression, bindings))
    }

    pub fn put_evaluation(&self, expression: &str, bindings: &Bindings, result: EvaluationResult) {
        self.evaluation.lock().put(Self::evaluation_key(expression, bindings), result);
    }

    pub fn get_formulas(&self, expression: &str) -> Option<Vec<FormulaMatch>> {
        self.formula.lock().get(expression)
    }

    pub fn put_formulas(&self, expression: &str, matches: Vec<FormulaMatch>) {
        self.formula.lock().put(expression, matches);
    }

    pub fn stats(&self) -> EngineCacheStats {
        EngineCacheStats {
            ast: self.ast.lock().stats(),
            evaluation: self.evaluation.lock().stats(),
            formula: self.formula.lock().stats(),
        }
    }

    /// Removes every entry of every cache.
    pub fn clear(&self) {
        self.ast.lock().clear();
        self.evaluation.lock().clear();
        self.formula.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use calctrace_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn tiers_are_independent() {
        let cache = ExpressionCache::new(&EngineConfig::default());
        cache.put_ast("1 + 2", parse("1 + 2").unwrap());
        assert!(cache.get_ast("1 + 2").is_some());
        assert!(cache.get_formulas("1 + 2").is_none());

        let stats = cache.stats();
        assert_eq!(stats.ast.hits, 1);
        assert_eq!(stats.formula.misses, 1);
        assert_eq!(stats.evaluation.total_requests, 0);
        assert_eq!(stats.ast.max_size, 250);

        cache.clear();
        assert_eq!(cache.stats().ast.size, 0);
    }

    #[test]
    fn evaluation_keys_include_bindings() {
        let cache = ExpressionCache::new(&EngineConfig::default());
        let x1 = Bindings::from([("x".to_string(), 1.0)]);
        let x2 = Bindings::from([("x".to_string(), 2.0)]);
        cache.put_evaluation("x", &x1, EvaluationResult::error("x", "test"));
        assert!(cache.get_evaluation("x", &x1).is_some());
        assert!(cache.get_evaluation("x", &x2).is_none());
    }
}
