use crate::symbolic::step_collector::StepCollector;
use std::collections::HashMap;
use super::{error::EvalError, step::ComputationStep, value::Value};

/// The default maximum nesting depth of an evaluation. This is used to detect stack overflows.
pub const DEFAULT_MAX_DEPTH: usize = calctrace_parser::parser::DEFAULT_MAX_DEPTH;

/// Values bound to variable names for one evaluation.
pub type Bindings = HashMap<String, f64>;

/// A context to use when evaluating an expression, containing the variable bindings, the memo
/// table of already-evaluated sub-expressions, and the steps recorded so far.
///
/// A context is created for one evaluation and dropped afterwards; the memo table never outlives
/// the call that filled it.
#[derive(Debug, Clone)]
pub struct Ctxt<S = Vec<ComputationStep>> {
    /// The variables bound in this context.
    bindings: Bindings,

    /// Results of sub-expressions that were already evaluated, keyed by their canonical text.
    memo: HashMap<String, Value>,

    /// The steps recorded so far.
    steps: S,

    /// The number of steps recorded so far.
    step_count: usize,

    /// The current nesting depth.
    depth: usize,

    /// The maximum nesting depth.
    max_depth: usize,
}

impl<S: Default> Default for Ctxt<S> {
    fn default() -> Self {
        Self::new(Bindings::new())
    }
}

impl<S: Default> Ctxt<S> {
    /// Creates a context with the given variable bindings.
    pub fn new(bindings: Bindings) -> Self {
        Self {
            bindings,
            memo: HashMap::new(),
            steps: S::default(),
            step_count: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl<S> Ctxt<S> {
    /// Sets the maximum nesting depth of the context.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the value bound to the given variable.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Returns the variable bindings of this context.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Returns the maximum nesting depth of this context.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the steps recorded so far.
    pub fn steps(&self) -> &S {
        &self.steps
    }

    /// Consumes the context, returning the recorded steps.
    pub fn into_steps(self) -> S {
        self.steps
    }

    /// Returns the memoized result of the sub-expression with the given canonical text.
    pub(crate) fn memoized(&self, key: &str) -> Option<Value> {
        self.memo.get(key).cloned()
    }

    /// Stores the result of the sub-expression with the given canonical text.
    pub(crate) fn memoize(&mut self, key: String, value: Value) {
        self.memo.insert(key, value);
    }

    /// Enters one nesting level. Returns an error if that exceeds the maximum depth.
    pub(crate) fn enter(&mut self) -> Result<(), EvalError> {
        if self.depth >= self.max_depth {
            return Err(EvalError::RecursionLimit { max_depth: self.max_depth });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one nesting level.
    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl<S: StepCollector<ComputationStep>> Ctxt<S> {
    /// Returns true if steps pushed into this context are kept.
    pub fn is_recording(&self) -> bool {
        self.steps.is_recording()
    }

    /// Records a step. The explanation is only built if the steps are being kept.
    pub(crate) fn record(
        &mut self,
        expression: impl Into<String>,
        value: &Value,
        operation: impl Into<String>,
        explanation: impl FnOnce() -> String,
    ) {
        self.step_count += 1;
        if !self.steps.is_recording() {
            return;
        }

        let step = ComputationStep {
            step_number: self.step_count,
            expression: expression.into(),
            result: value.to_string(),
            operation: operation.into(),
            applied_formulas: Vec::new(),
            is_numeric: value.is_numeric(),
            explanation: explanation(),
        };
        log::trace!("step {}: {} -> {} ({})", step.step_number, step.expression, step.result, step.operation);
        self.steps.push(step);
    }

    /// Records an error (or warning) step for the given sub-expression, and returns the symbolic
    /// value that stands in for its result.
    pub(crate) fn fail(&mut self, expression: impl Into<String>, err: EvalError) -> Value {
        let value = Value::Symbolic(err.to_string());
        let message = value.to_string();
        self.record(expression, &value, err.tag(), || message);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_increase() {
        let mut ctxt = Ctxt::<Vec<ComputationStep>>::default();
        ctxt.record("1", &Value::Number(1.0), "number", || "Number value: 1".to_string());
        ctxt.fail("1 / 0", EvalError::DivisionByZero { lhs: 1.0, rhs: 0.0 });

        let steps = ctxt.into_steps();
        assert_eq!(steps.iter().map(|s| s.step_number).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(steps[1].operation, "error");
        assert_eq!(steps[1].result, "Error: Division by zero (1 / 0)");
        assert!(!steps[1].is_numeric);
    }

    #[test]
    fn depth_limit() {
        let mut ctxt = Ctxt::<()>::default().with_max_depth(1);
        assert!(ctxt.enter().is_ok());
        assert_eq!(ctxt.enter(), Err(EvalError::RecursionLimit { max_depth: 1 }));
        ctxt.leave();
        assert!(ctxt.enter().is_ok());
    }
}
