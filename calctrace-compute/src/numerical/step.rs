use crate::formula::FormulaMatch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of the trace recorded while evaluating an expression. Exactly one step is recorded
/// for every node visited, in the order the nodes finish evaluating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComputationStep {
    /// The 1-based position of this step in the trace.
    pub step_number: usize,

    /// The sub-expression that was evaluated, with its operands already evaluated, such as
    /// `2 + 12`.
    pub expression: String,

    /// The result of the sub-expression.
    pub result: String,

    /// The kind of operation performed, such as `"addition"`, `"sqrt"`,
    /// `"variable_substitution"`, `"cached_result"`, or `"error"`.
    pub operation: String,

    /// Formulas that match the result of this step.
    pub applied_formulas: Vec<FormulaMatch>,

    /// Whether the result is a number.
    pub is_numeric: bool,

    /// A human-readable description of the step.
    pub explanation: String,
}

impl ComputationStep {
    /// Returns true if this step records an error.
    pub fn is_error(&self) -> bool {
        self.operation == "error"
    }

    /// Returns true if this step records a warning.
    pub fn is_warning(&self) -> bool {
        self.operation == "warning"
    }
}
