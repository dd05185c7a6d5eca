//! Roots, exponentials, and logarithms.

use crate::numerical::error::EvalError;
use super::helper::builtin;

builtin! {
    /// Square root. Defined for non-negative numbers.
    Sqrt "sqrt", "Square root", |n| {
        if n < 0.0 {
            Err(EvalError::NegativeSqrt { arg: n })
        } else {
            Ok(n.sqrt())
        }
    };

    /// The exponential function, `e^n`.
    Exp "exp", "Exponential", |n| {
        let result = n.exp();
        if result.is_finite() {
            Ok(result)
        } else {
            Err(EvalError::ExpOverflow { arg: n })
        }
    };

    /// Natural logarithm. Defined for positive numbers.
    Ln "ln", "Natural logarithm", |n| {
        if n <= 0.0 {
            Err(EvalError::LnNonPositive { arg: n })
        } else {
            Ok(n.ln())
        }
    };

    /// Base-10 logarithm. Defined for positive numbers.
    Log "log", "Log base 10", |n| {
        if n <= 0.0 {
            Err(EvalError::LogNonPositive { arg: n })
        } else {
            Ok(n.log10())
        }
    };
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use super::*;

    #[test]
    fn sqrt() {
        assert_float_absolute_eq!(Sqrt::eval_static(16.0).unwrap(), 4.0);
        assert_eq!(Sqrt::eval_static(-1.0), Err(EvalError::NegativeSqrt { arg: -1.0 }));
    }

    #[test]
    fn exp_overflow() {
        assert_float_absolute_eq!(Exp::eval_static(1.0).unwrap(), std::f64::consts::E);
        assert_eq!(Exp::eval_static(1000.0), Err(EvalError::ExpOverflow { arg: 1000.0 }));
    }

    #[test]
    fn logarithms() {
        assert_float_absolute_eq!(Log::eval_static(1000.0).unwrap(), 3.0);
        assert_float_absolute_eq!(Ln::eval_static(std::f64::consts::E).unwrap(), 1.0);
        assert!(Ln::eval_static(0.0).is_err());
        assert!(Log::eval_static(-5.0).is_err());
    }
}
