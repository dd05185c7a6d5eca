//! Supervised evaluation of expressions.
//!
//! The [`ComputationMonitor`] ties the [`formula`](crate::formula) and
//! [`numerical`](crate::numerical) modules together. It detects the formulas an expression
//! matches, evaluates the expression, annotates every step of the trace with the formulas its
//! result matches, and packages everything into an [`EvaluationResult`]. Expressions that cannot
//! be parsed produce an error result rather than an error.

pub mod result;

pub use result::{EvaluationKind, EvaluationResult};

use calctrace_parser::parser::{ast::expr::Expr, parse_with_depth};
use crate::formula::{FormulaCatalog, FormulaMatch, FormulaMatcher, FormulaRewriter, IdentityRewriter};
use crate::numerical::{ctxt::{Bindings, DEFAULT_MAX_DEPTH}, evaluate_with_depth};
use parking_lot::Mutex;
use std::sync::Arc;

/// Substrings of an expression that usually indicate a mistake, and the warning they produce.
const SUSPICIOUS: [(&str, &str); 4] = [
    ("0/0", "Potential division by zero"),
    ("sqrt(-", "Square root of negative number"),
    ("log(0", "Logarithm of non-positive number"),
    ("log(-", "Logarithm of non-positive number"),
];

/// Evaluates expressions, keeping logs of the errors and warnings encountered.
pub struct ComputationMonitor {
    catalog: Arc<FormulaCatalog>,
    matcher: FormulaMatcher,
    rewriter: Box<dyn FormulaRewriter>,
    max_depth: usize,
    error_log: Mutex<Vec<String>>,
    warning_log: Mutex<Vec<String>>,
}

impl std::fmt::Debug for ComputationMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputationMonitor")
            .field("formulas", &self.matcher.len())
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl ComputationMonitor {
    /// Creates a monitor that detects the formulas of the given catalog.
    pub fn new(catalog: Arc<FormulaCatalog>) -> Self {
        let matcher = FormulaMatcher::new(&catalog);
        Self {
            catalog,
            matcher,
            rewriter: Box::new(IdentityRewriter),
            max_depth: DEFAULT_MAX_DEPTH,
            error_log: Mutex::new(Vec::new()),
            warning_log: Mutex::new(Vec::new()),
        }
    }

    /// Use the given rewriter to apply the most likely formula before evaluating.
    pub fn with_rewriter(mut self, rewriter: impl FormulaRewriter + 'static) -> Self {
        self.rewriter = Box::new(rewriter);
        self
    }

    /// Set the maximum nesting depth used when parsing and evaluating.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn catalog(&self) -> &Arc<FormulaCatalog> {
        &self.catalog
    }

    pub fn matcher(&self) -> &FormulaMatcher {
        &self.matcher
    }

    pub fn rewriter(&self) -> &dyn FormulaRewriter {
        self.rewriter.as_ref()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses and evaluates the expression.
    pub fn monitor_evaluation(&self, source: &str, bindings: &Bindings) -> EvaluationResult {
        match parse_with_depth(source, self.max_depth) {
            Ok(expr) => {
                let applied = self.matcher.detect(&expr.to_string());
                self.evaluate_parsed(source, &expr, bindings, applied)
            },
            Err(err) => self.error_result(source, &err.to_string()),
        }
    }

    /// Evaluates an expression that was already parsed from `source`, given the formulas
    /// detected in it.
    ///
    /// The most confident formula, if any, is handed to the rewriter before evaluation.
    pub fn evaluate_parsed(
        &self,
        source: &str,
        expr: &Expr,
        bindings: &Bindings,
        applied: Vec<FormulaMatch>,
    ) -> EvaluationResult {
        let rewritten = applied.first()
            .and_then(|found| {
                let formula = self.catalog.by_name(&found.formula_name)?;
                Some(self.rewriter.rewrite(expr, formula, found))
            });
        let expr = rewritten.as_ref().unwrap_or(expr);

        let (value, mut steps) = evaluate_with_depth(expr, bindings, self.max_depth);
        for step in &mut steps {
            step.applied_formulas = self.matcher.detect(&step.result);
        }

        let is_exact = !steps.iter().any(|step| step.is_error());
        let mut warnings = steps.iter()
            .filter(|step| step.is_warning())
            .map(|step| step.result.clone())
            .collect::<Vec<_>>();
        warnings.extend(self.check_correctness(source).1);
        if !warnings.is_empty() {
            self.warning_log.lock().extend(warnings.iter().cloned());
        }

        EvaluationResult {
            original_expression: source.to_string(),
            final_result: value.to_string(),
            evaluation_kind: EvaluationKind::of(&value),
            applied_formulas: applied,
            computation_steps: steps,
            is_exact,
            error_message: None,
            warnings,
        }
    }

    /// Creates the result of an expression that could not be evaluated, and logs the error.
    pub fn error_result(&self, source: &str, message: &str) -> EvaluationResult {
        let entry = format!("Evaluation error: {}", message);
        log::debug!("{}: `{}`", entry, source);
        self.error_log.lock().push(entry);
        EvaluationResult::error(source, message)
    }

    /// Checks that the expression parses. Returns whether it is valid, along with the reasons it
    /// is not.
    pub fn validate_expression(&self, source: &str) -> (bool, Vec<String>) {
        match parse_with_depth(source, self.max_depth) {
            Ok(_) => (true, Vec::new()),
            Err(err) => (false, vec![format!("Validation error: {}", err)]),
        }
    }

    /// Looks for patterns in the expression that usually indicate a mistake. Returns whether none
    /// were found, along with a warning for each one that was.
    ///
    /// This is only a heuristic and never prevents evaluation.
    pub fn check_correctness(&self, source: &str) -> (bool, Vec<String>) {
        let compact = source.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        let mut warnings: Vec<String> = Vec::new();
        for (needle, warning) in SUSPICIOUS {
            if compact.contains(needle) && !warnings.iter().any(|w| w == warning) {
                log::warn!("{} in `{}`", warning, source);
                warnings.push(warning.to_string());
            }
        }
        (warnings.is_empty(), warnings)
    }

    /// Returns the errors logged so far.
    pub fn error_log(&self) -> Vec<String> {
        self.error_log.lock().clone()
    }

    /// Returns the warnings logged so far.
    pub fn warning_log(&self) -> Vec<String> {
        self.warning_log.lock().clone()
    }

    pub fn clear_logs(&self) {
        self.error_log.lock().clear();
        self.warning_log.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn monitor() -> ComputationMonitor {
        ComputationMonitor::new(Arc::new(FormulaCatalog::builtin()))
    }

    #[test]
    fn numeric_evaluation() {
        let result = monitor().monitor_evaluation("2 + 3 * 4", &Bindings::new());
        assert_eq!(result.final_result, "14");
        assert_eq!(result.evaluation_kind, EvaluationKind::Numeric);
        assert!(result.is_exact);
        assert_eq!(result.error_message, None);
        assert_eq!(result.step_count(), 5);
    }

    #[test]
    fn symbolic_evaluation() {
        let result = monitor().monitor_evaluation("x + 1", &Bindings::new());
        assert_eq!(result.final_result, "(x + 1)");
        assert_eq!(result.evaluation_kind, EvaluationKind::Symbolic);
    }

    #[test]
    fn formulas_are_attached() {
        let result = monitor().monitor_evaluation("(x + y)^2", &Bindings::new());
        assert_eq!(result.applied_formulas[0].formula_name, "Perfect Square (a+b)²");

        // the step for the parenthesized sum matches the commutative property
        let paren = result.computation_steps.iter()
            .find(|step| step.operation == "parentheses")
            .unwrap();
        assert!(paren.applied_formulas.iter().any(|m| m.formula_name == "Commutative Addition"));
    }

    #[test]
    fn domain_errors_are_not_exact() {
        let monitor = monitor();
        let result = monitor.monitor_evaluation("sqrt(-1)", &Bindings::new());
        assert!(result.final_result.contains("square root of negative number"));
        assert!(!result.is_exact);
        assert_eq!(result.error_message, None);
        assert_eq!(result.warnings, vec!["Square root of negative number"]);
        assert_eq!(monitor.warning_log(), vec!["Square root of negative number"]);
    }

    #[test]
    fn parse_errors() {
        let monitor = monitor();
        let result = monitor.monitor_evaluation("2 +", &Bindings::new());
        assert_eq!(result.final_result, "ERROR");
        assert!(result.error_message.is_some());
        assert_eq!(monitor.error_log().len(), 1);
        assert!(monitor.error_log()[0].starts_with("Evaluation error: "));

        monitor.clear_logs();
        assert!(monitor.error_log().is_empty());
    }

    #[test]
    fn power_warnings() {
        let result = monitor().monitor_evaluation("10^60", &Bindings::new());
        assert!(result.is_exact);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("Warning: "));
    }

    #[test]
    fn validation() {
        let monitor = monitor();
        assert_eq!(monitor.validate_expression("sin(x) + 1"), (true, vec![]));

        let (valid, errors) = monitor.validate_expression("(1 + 2");
        assert!(!valid);
        assert!(errors[0].starts_with("Validation error: "));
    }

    #[test]
    fn correctness() {
        let monitor = monitor();
        assert_eq!(monitor.check_correctness("1 + 1"), (true, vec![]));
        assert_eq!(
            monitor.check_correctness("log(0) + log(-1) + 0 / 0"),
            (false, vec![
                "Potential division by zero".to_string(),
                "Logarithm of non-positive number".to_string(),
            ]),
        );
    }
}
