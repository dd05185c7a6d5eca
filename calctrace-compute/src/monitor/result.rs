use crate::formula::FormulaMatch;
use crate::numerical::{step::ComputationStep, value::Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of result an evaluation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationKind {
    /// The result is a number.
    Numeric,

    /// The result contains names, such as unbound variables or error messages.
    Symbolic,

    /// The result is made only of numbers, but could not be reduced to one, such as `(-8)^0.5`.
    Mixed,
}

impl EvaluationKind {
    /// Classifies an evaluated value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Number(_) => EvaluationKind::Numeric,
            Value::Symbolic(text) if text.chars().any(char::is_alphabetic) => EvaluationKind::Symbolic,
            Value::Symbolic(_) => EvaluationKind::Mixed,
        }
    }
}

/// The outcome of evaluating an expression from start to finish.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluationResult {
    /// The expression as it was given.
    pub original_expression: String,

    /// The rendered result, or `"ERROR"` if the expression could not be evaluated at all.
    pub final_result: String,

    pub evaluation_kind: EvaluationKind,

    /// The formulas detected in the whole expression, most confident first.
    pub applied_formulas: Vec<FormulaMatch>,

    /// The trace of the evaluation.
    pub computation_steps: Vec<ComputationStep>,

    /// Whether the result was computed without any error along the way.
    pub is_exact: bool,

    /// The reason the expression could not be evaluated, if it could not.
    pub error_message: Option<String>,

    /// Advisory warnings about the expression or its result.
    pub warnings: Vec<String>,
}

impl EvaluationResult {
    /// Creates the result of an expression that could not be evaluated.
    pub fn error(original_expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            original_expression: original_expression.into(),
            final_result: "ERROR".to_string(),
            evaluation_kind: EvaluationKind::Symbolic,
            applied_formulas: Vec::new(),
            computation_steps: Vec::new(),
            is_exact: false,
            error_message: Some(message.into()),
            warnings: Vec::new(),
        }
    }

    /// Returns true if the expression could not be evaluated at all.
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Returns the number of steps taken.
    pub fn step_count(&self) -> usize {
        self.computation_steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(EvaluationKind::of(&Value::Number(1.0)), EvaluationKind::Numeric);
        assert_eq!(EvaluationKind::of(&Value::Symbolic("(x + 1)".into())), EvaluationKind::Symbolic);
        assert_eq!(EvaluationKind::of(&Value::Symbolic("(-8)^0.5".into())), EvaluationKind::Mixed);
    }

    #[test]
    fn error_result() {
        let result = EvaluationResult::error("1 +", "Unexpected end of input");
        assert_eq!(result.final_result, "ERROR");
        assert_eq!(result.evaluation_kind, EvaluationKind::Symbolic);
        assert!(result.is_error());
        assert!(!result.is_exact);
        assert_eq!(result.step_count(), 0);
    }
}
