use calctrace_compute::{
    formula::{FormulaCatalog, FormulaDefinition, FormulaMatch, FormulaRewriter},
    monitor::{ComputationMonitor, EvaluationKind, EvaluationResult},
    numerical::{ctxt::Bindings, step::ComputationStep},
};
use calctrace_error::Error;
use calctrace_parser::parser::{ast::expr::Expr, parse_with_depth};
use crate::{
    cache::{EngineCacheStats, ExpressionCache},
    config::EngineConfig,
    error::{DeferredEvaluationDisabled, UnknownFormula},
    queue::{DeferredQueue, QueueStatus},
};
use parking_lot::Mutex;
use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
    sync::Arc,
};

/// Extracts the message of a caught panic.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

/// Parses, evaluates, and explains expressions, caching the work along the way.
///
/// An engine can be shared between threads. Each of its caches, and its deferred queue, is
/// guarded by its own lock, held only while reading or writing one entry.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    catalog: Arc<FormulaCatalog>,
    monitor: ComputationMonitor,
    cache: ExpressionCache,
    queue: Mutex<DeferredQueue>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Creates an engine that detects the built-in formulas.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_catalog(config, Arc::new(FormulaCatalog::builtin()))
    }

    /// Creates an engine that detects the formulas of the given catalog.
    pub fn with_catalog(config: EngineConfig, catalog: Arc<FormulaCatalog>) -> Self {
        let monitor = ComputationMonitor::new(Arc::clone(&catalog))
            .with_max_depth(config.max_depth);
        Self {
            cache: ExpressionCache::new(&config),
            config,
            catalog,
            monitor,
            queue: Mutex::new(DeferredQueue::new()),
        }
    }

    /// Uses the given rewriter to apply formulas, both before evaluating an expression and in
    /// [`Engine::apply_formula`]. The default rewriter leaves expressions unchanged.
    pub fn with_rewriter(mut self, rewriter: impl FormulaRewriter + 'static) -> Self {
        self.monitor = self.monitor.with_rewriter(rewriter);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<FormulaCatalog> {
        &self.catalog
    }

    pub fn monitor(&self) -> &ComputationMonitor {
        &self.monitor
    }

    /// Parses the expression, reusing a cached tree if there is one.
    pub fn parse(&self, expression: &str) -> Result<Expr, Error> {
        if self.config.enable_caching {
            if let Some(expr) = self.cache.get_ast(expression) {
                return Ok(expr);
            }
        }

        log::debug!("parsing `{}`", expression);
        let expr = parse_with_depth(expression, self.config.max_depth)?;
        if self.config.enable_caching {
            self.cache.put_ast(expression, expr.clone());
        }
        Ok(expr)
    }

    /// Returns the formulas detected in the expression, most confident first.
    pub fn detect_formulas(&self, expression: &str) -> Vec<FormulaMatch> {
        if self.config.enable_caching {
            if let Some(matches) = self.cache.get_formulas(expression) {
                return matches;
            }
        }

        let matches = self.monitor.matcher().detect(expression);
        log::debug!("detected {} formulas in `{}`", matches.len(), expression);
        if self.config.enable_caching {
            self.cache.put_formulas(expression, matches.clone());
        }
        matches
    }

    /// Evaluates the expression with the given variable bindings.
    ///
    /// This never fails: if the expression cannot be parsed, or evaluation panics, the returned
    /// result has a `final_result` of `"ERROR"` and describes the problem in its
    /// `error_message`.
    ///
    /// A result served from the cache ends with an extra `"cached_result"` step.
    pub fn evaluate(&self, expression: &str, bindings: &Bindings) -> EvaluationResult {
        if self.config.enable_caching {
            if let Some(mut result) = self.cache.get_evaluation(expression, bindings) {
                result.computation_steps.push(ComputationStep {
                    step_number: result.computation_steps.len() + 1,
                    expression: expression.to_string(),
                    result: result.final_result.clone(),
                    operation: "cached_result".to_string(),
                    applied_formulas: Vec::new(),
                    is_numeric: result.evaluation_kind == EvaluationKind::Numeric,
                    explanation: format!("Cached result: {}", result.final_result),
                });
                return result;
            }
        }

        match catch_unwind(AssertUnwindSafe(|| self.evaluate_uncached(expression, bindings))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::error!("evaluation of `{}` panicked: {}", expression, message);
                self.monitor.error_result(expression, &format!("Internal error: {}", message))
            },
        }
    }

    fn evaluate_uncached(&self, expression: &str, bindings: &Bindings) -> EvaluationResult {
        let expr = match self.parse(expression) {
            Ok(expr) => expr,
            Err(err) => return self.monitor.error_result(expression, &err.to_string()),
        };

        let applied = self.detect_formulas(expression);
        let result = self.monitor.evaluate_parsed(expression, &expr, bindings, applied);
        log::debug!(
            "evaluated `{}` to `{}` in {} steps",
            expression,
            result.final_result,
            result.step_count(),
        );

        if self.config.enable_caching {
            self.cache.put_evaluation(expression, bindings, result.clone());
        }
        result
    }

    /// Evaluates the expression, returning only the rendered result and the steps taken.
    pub fn evaluate_with_steps(
        &self,
        expression: &str,
        bindings: &Bindings,
    ) -> (String, Vec<ComputationStep>) {
        let result = self.evaluate(expression, bindings);
        (result.final_result, result.computation_steps)
    }

    /// Rewrites the expression according to the named formula, returning the rewritten
    /// expression.
    ///
    /// If the formula does not match the expression, the expression is returned unchanged (in
    /// canonical form).
    pub fn apply_formula(&self, expression: &str, formula_name: &str) -> Result<String, Error> {
        let expr = self.parse(expression)?;
        let Some(formula) = self.catalog.by_name(formula_name) else {
            let suggestions = self.catalog.suggest(formula_name)
                .into_iter()
                .map(str::to_owned)
                .collect();
            return Err(Error::new(
                vec![0..expression.len()],
                UnknownFormula { name: formula_name.to_string(), suggestions },
            ));
        };

        let found = self.detect_formulas(expression)
            .into_iter()
            .find(|m| m.formula_name == formula.name);
        match found {
            Some(found) => Ok(self.monitor.rewriter().rewrite(&expr, formula, &found).to_string()),
            None => {
                log::debug!("formula {:?} does not match `{}`", formula.name, expression);
                Ok(expr.to_string())
            },
        }
    }

    /// Checks that the expression parses.
    pub fn validate_expression(&self, expression: &str) -> (bool, Vec<String>) {
        self.monitor.validate_expression(expression)
    }

    /// Looks for patterns in the expression that usually indicate a mistake.
    pub fn check_correctness(&self, expression: &str) -> (bool, Vec<String>) {
        self.monitor.check_correctness(expression)
    }

    pub fn error_log(&self) -> Vec<String> {
        self.monitor.error_log()
    }

    pub fn warning_log(&self) -> Vec<String> {
        self.monitor.warning_log()
    }

    pub fn cache_stats(&self) -> EngineCacheStats {
        self.cache.stats()
    }

    /// Empties every cache.
    pub fn clear_cache(&self) {
        log::debug!("clearing caches");
        self.cache.clear();
    }

    /// Queues the expression for evaluation by [`Engine::drain_next`], returning the identifier
    /// its result will be recorded under.
    pub fn enqueue(&self, expression: &str, bindings: Bindings, priority: i32) -> Result<u64, Error> {
        if !self.config.enable_deferred {
            log::warn!("ignoring deferred evaluation of `{}`: the queue is disabled", expression);
            return Err(Error::new(vec![0..expression.len()], DeferredEvaluationDisabled));
        }
        Ok(self.queue.lock().push(expression, bindings, priority))
    }

    /// Evaluates the queued expression with the highest priority, records its result, and returns
    /// it along with its identifier. Returns [`None`] if the queue is empty.
    pub fn drain_next(&self) -> Option<(u64, EvaluationResult)> {
        let request = self.queue.lock().pop()?;
        let result = self.evaluate(&request.expression, &request.bindings);
        self.queue.lock().record(request.id, result.clone());
        Some((request.id, result))
    }

    /// Returns the result recorded for the queued expression with the given identifier.
    pub fn partial_result(&self, id: u64) -> Option<EvaluationResult> {
        self.queue.lock().partial_result(id).cloned()
    }

    pub fn queue_status(&self) -> QueueStatus {
        self.queue.lock().status()
    }

    /// Removes every queued expression and every recorded result.
    pub fn clear_queue(&self) {
        self.queue.lock().clear();
    }

    pub fn formulas_by_grade(&self, grade: u8) -> Vec<&FormulaDefinition> {
        self.catalog.by_grade(grade)
    }

    pub fn formulas_by_category(&self, category: &str) -> Vec<&FormulaDefinition> {
        self.catalog.by_category(category)
    }

    pub fn search_formulas(&self, query: &str) -> Vec<&FormulaDefinition> {
        self.catalog.search(query)
    }

    pub fn formula_by_name(&self, name: &str) -> Option<&FormulaDefinition> {
        self.catalog.by_name(name)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.catalog.categories()
    }

    pub fn formula_count(&self) -> usize {
        self.catalog.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_send_sync() {
        assert_send_sync::<Engine>();
    }

    #[test]
    fn panic_messages() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(42);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
