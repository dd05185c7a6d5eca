use calctrace_parser::parser::ast::literal::number_to_string as num;
use std::fmt;

/// A failure while computing a single node.
///
/// These never abort evaluation. The [`Display`](fmt::Display) text of the error becomes the
/// symbolic value of the node, and is recorded in a step tagged `"error"` (or `"warning"` for
/// [`EvalError::PowerExtremelyLarge`]).
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Division by zero.
    DivisionByZero { lhs: f64, rhs: f64 },

    /// Modulo by zero.
    ModuloByZero { lhs: f64, rhs: f64 },

    /// The exponent is larger than 1000.
    PowerTooLarge { base: f64, exp: f64 },

    /// The exponent is smaller than -1000.
    PowerTooSmall { base: f64, exp: f64 },

    /// Zero raised to a negative power.
    ZeroToNegativePower { exp: f64 },

    /// The power is not finite or its magnitude exceeds 1e308.
    PowerOverflow { base: f64, exp: f64 },

    /// The magnitude of the power exceeds 1e50. This is a warning rather than an error.
    PowerExtremelyLarge { base: f64, exp: f64 },

    /// A sum, difference, product, or quotient that is not finite.
    ArithmeticOverflow { lhs: f64, op: &'static str, rhs: f64 },

    /// Square root of a negative number.
    NegativeSqrt { arg: f64 },

    /// Tangent at an odd multiple of π/2.
    TangentUndefined { arg: f64 },

    /// Base-10 logarithm of a non-positive number.
    LogNonPositive { arg: f64 },

    /// Natural logarithm of a non-positive number.
    LnNonPositive { arg: f64 },

    /// `exp` of a number too large to represent.
    ExpOverflow { arg: f64 },

    /// Factorial of a negative or non-integer number.
    FactorialDomain { arg: f64 },

    /// Factorial of a number greater than 170.
    FactorialOverflow { arg: f64 },

    /// Arcsine outside of [-1, 1].
    AsinDomain { arg: f64 },

    /// Arccosine outside of [-1, 1].
    AcosDomain { arg: f64 },

    /// Any other function whose result is not finite.
    FunctionOverflow { name: &'static str, arg: f64 },

    /// The expression is nested more deeply than the evaluator allows.
    RecursionLimit { max_depth: usize },
}

impl EvalError {
    /// Returns true if this error only warns about the result, rather than replacing a result
    /// that could not be computed.
    pub fn is_warning(&self) -> bool {
        matches!(self, EvalError::PowerExtremelyLarge { .. })
    }

    /// Returns the operation tag of the step that records this error.
    pub fn tag(&self) -> &'static str {
        if self.is_warning() {
            "warning"
        } else {
            "error"
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use EvalError::*;
        match self {
            DivisionByZero { lhs, rhs } => write!(f, "Error: Division by zero ({} / {})", num(*lhs), num(*rhs)),
            ModuloByZero { lhs, rhs } => write!(f, "Error: Modulo by zero ({} % {})", num(*lhs), num(*rhs)),
            PowerTooLarge { base, exp } => write!(f, "Error: Power too large ({}^{})", num(*base), num(*exp)),
            PowerTooSmall { base, exp } => write!(f, "Error: Power too small ({}^{})", num(*base), num(*exp)),
            ZeroToNegativePower { exp } => write!(f, "Error: Cannot raise 0 to negative power {}", num(*exp)),
            PowerOverflow { base, exp } => write!(f, "Error: Power overflow ({}^{})", num(*base), num(*exp)),
            PowerExtremelyLarge { base, exp } => {
                write!(f, "Warning: Power result extremely large ({}^{})", num(*base), num(*exp))
            },
            ArithmeticOverflow { lhs, op, rhs } => {
                write!(f, "Error: Arithmetic overflow ({} {} {})", num(*lhs), op, num(*rhs))
            },
            NegativeSqrt { arg } => write!(f, "Error: Cannot take square root of negative number {}", num(*arg)),
            TangentUndefined { arg } => {
                write!(f, "Error: Tangent is undefined at {} (cos({}) = 0)", num(*arg), num(*arg))
            },
            LogNonPositive { arg } => {
                write!(f, "Error: Cannot take logarithm of non-positive number {}", num(*arg))
            },
            LnNonPositive { arg } => {
                write!(f, "Error: Cannot take natural logarithm of non-positive number {}", num(*arg))
            },
            ExpOverflow { arg } => write!(f, "Error: Exponential overflow for {}", num(*arg)),
            FactorialDomain { arg } => {
                write!(f, "Error: Cannot take factorial of {} (must be non-negative integer)", num(*arg))
            },
            FactorialOverflow { arg } => write!(f, "Error: Factorial overflow for {} (max: 170)", num(*arg)),
            AsinDomain { arg } => write!(f, "Error: Arcsin domain error: {} not in [-1, 1]", num(*arg)),
            AcosDomain { arg } => write!(f, "Error: Arccos domain error: {} not in [-1, 1]", num(*arg)),
            FunctionOverflow { name, arg } => write!(f, "Error: {} overflow for {}", name, num(*arg)),
            RecursionLimit { max_depth } => {
                write!(f, "Error: Maximum nesting depth of {} exceeded", max_depth)
            },
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            EvalError::DivisionByZero { lhs: 1.0, rhs: 0.0 }.to_string(),
            "Error: Division by zero (1 / 0)",
        );
        assert_eq!(
            EvalError::NegativeSqrt { arg: -1.0 }.to_string(),
            "Error: Cannot take square root of negative number -1",
        );
        assert_eq!(EvalError::PowerExtremelyLarge { base: 10.0, exp: 60.0 }.tag(), "warning");
        assert_eq!(EvalError::PowerOverflow { base: 10.0, exp: 400.0 }.tag(), "error");
    }
}
