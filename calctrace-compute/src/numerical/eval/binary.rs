use calctrace_parser::parser::{
    ast::{binary::Binary, literal::number_to_string as num},
    token::op::BinOpKind,
};
use crate::numerical::{ctxt::Ctxt, error::EvalError, step::ComputationStep, value::Value};
use crate::symbolic::StepCollector;
use super::Eval;

/// Exponents with a larger magnitude are refused outright.
const MAX_EXPONENT: f64 = 1000.0;

/// Powers with a larger magnitude are reported as an overflow.
const POWER_OVERFLOW: f64 = 1e308;

/// Powers with a larger magnitude are reported with a warning.
const POWER_WARNING: f64 = 1e50;

/// Returns the result if it is finite, or an overflow error naming the operation otherwise.
fn finite(lhs: f64, op: BinOpKind, rhs: f64, result: f64) -> Result<Value, EvalError> {
    if result.is_finite() {
        Ok(Value::Number(result))
    } else {
        Err(EvalError::ArithmeticOverflow { lhs, op: op.symbol(), rhs })
    }
}

/// Raises `base` to the power of `exp`, guarding against results that cannot be represented.
///
/// A negative base with a fractional exponent has no real result, so the power is kept symbolic.
fn power(base: f64, exp: f64) -> Result<Value, EvalError> {
    if base < 0.0 && exp.fract() != 0.0 {
        return Ok(Value::Symbolic(format!("({})^{}", num(base), num(exp))));
    }
    if exp > MAX_EXPONENT {
        return Err(EvalError::PowerTooLarge { base, exp });
    }
    if exp < -MAX_EXPONENT {
        return Err(EvalError::PowerTooSmall { base, exp });
    }
    if base == 0.0 && exp < 0.0 {
        return Err(EvalError::ZeroToNegativePower { exp });
    }

    let result = base.powf(exp);
    if !result.is_finite() || result.abs() > POWER_OVERFLOW {
        Err(EvalError::PowerOverflow { base, exp })
    } else if result.abs() > POWER_WARNING {
        Err(EvalError::PowerExtremelyLarge { base, exp })
    } else {
        Ok(Value::Number(result))
    }
}

/// Evaluates a binary expression with two numeric operands.
///
/// The remainder takes the sign of the divisor, so that `-7 % 3` is `2`.
fn eval_operands(op: BinOpKind, lhs: f64, rhs: f64) -> Result<Value, EvalError> {
    match op {
        BinOpKind::Add => finite(lhs, op, rhs, lhs + rhs),
        BinOpKind::Sub => finite(lhs, op, rhs, lhs - rhs),
        BinOpKind::Mul => finite(lhs, op, rhs, lhs * rhs),
        BinOpKind::Div => {
            if rhs == 0.0 {
                Err(EvalError::DivisionByZero { lhs, rhs })
            } else {
                finite(lhs, op, rhs, lhs / rhs)
            }
        },
        BinOpKind::Mod => {
            if rhs == 0.0 {
                return Err(EvalError::ModuloByZero { lhs, rhs });
            }
            let rem = lhs % rhs;
            if rem != 0.0 && (rem < 0.0) != (rhs < 0.0) {
                finite(lhs, op, rhs, rem + rhs)
            } else {
                finite(lhs, op, rhs, rem)
            }
        },
        BinOpKind::Exp => power(lhs, rhs),
    }
}

/// Returns the operation tag of the binary operator.
fn tag(op: BinOpKind) -> &'static str {
    match op {
        BinOpKind::Add => "addition",
        BinOpKind::Sub => "subtraction",
        BinOpKind::Mul => "multiplication",
        BinOpKind::Div => "division",
        BinOpKind::Mod => "modulo",
        BinOpKind::Exp => "power",
    }
}

/// Describes a numeric binary operation.
fn explain(op: BinOpKind, lhs: f64, rhs: f64) -> String {
    let (lhs, rhs) = (num(lhs), num(rhs));
    match op {
        BinOpKind::Add => format!("Added {} and {}", lhs, rhs),
        BinOpKind::Sub => format!("Subtracted {} from {}", rhs, lhs),
        BinOpKind::Mul => format!("Multiplied {} by {}", lhs, rhs),
        BinOpKind::Div => format!("Divided {} by {}", lhs, rhs),
        BinOpKind::Mod => format!("Modulo of {} by {}", lhs, rhs),
        BinOpKind::Exp => format!("Raised {} to power {}", lhs, rhs),
    }
}

impl Eval for Binary {
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value {
        let left = self.lhs.eval(ctxt);
        let right = self.rhs.eval(ctxt);
        let expression = format!("{} {} {}", left, self.op, right);

        let (lhs, rhs) = match (left.as_number(), right.as_number()) {
            (Some(lhs), Some(rhs)) => (lhs, rhs),
            _ => {
                let value = Value::Symbolic(format!("({})", expression));
                ctxt.record(expression, &value, "symbolic_operation", || {
                    format!("Kept {} {} {} symbolic", left, self.op, right)
                });
                return value;
            },
        };

        match eval_operands(self.op, lhs, rhs) {
            Ok(value) => {
                let operation = if value.is_numeric() { tag(self.op) } else { "symbolic_operation" };
                ctxt.record(expression, &value, operation, || explain(self.op, lhs, rhs));
                value
            },
            Err(err) => ctxt.fail(expression, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_guard_order() {
        assert!(!power(-8.0, 1.0 / 3.0).unwrap().is_numeric());
        assert_eq!(power(-2.0, 3.0), Ok(Value::Number(-8.0)));
        assert_eq!(power(0.0, 0.0), Ok(Value::Number(1.0)));
        assert_eq!(power(2.0, -1001.0), Err(EvalError::PowerTooSmall { base: 2.0, exp: -1001.0 }));
    }

    #[test]
    fn arithmetic_overflow() {
        assert_eq!(
            eval_operands(BinOpKind::Mul, 1e300, 1e300),
            Err(EvalError::ArithmeticOverflow { lhs: 1e300, op: "*", rhs: 1e300 }),
        );
    }
}
