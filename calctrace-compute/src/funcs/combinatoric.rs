//! Counting functions.

use crate::numerical::error::EvalError;
use super::helper::builtin;

/// The largest argument whose factorial fits in an `f64`.
pub const MAX_FACTORIAL: f64 = 170.0;

builtin! {
    /// Factorial. Defined for non-negative integers up to 170.
    Factorial "factorial", "Factorial", |n| {
        if n < 0.0 || n.fract() != 0.0 {
            Err(EvalError::FactorialDomain { arg: n })
        } else if n > MAX_FACTORIAL {
            Err(EvalError::FactorialOverflow { arg: n })
        } else {
            Ok((2..=n as u32).fold(1.0, |acc, k| acc * f64::from(k)))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_factorials() {
        assert_eq!(Factorial::eval_static(0.0), Ok(1.0));
        assert_eq!(Factorial::eval_static(5.0), Ok(120.0));
    }

    #[test]
    fn factorial_domain() {
        assert_eq!(Factorial::eval_static(-1.0), Err(EvalError::FactorialDomain { arg: -1.0 }));
        assert_eq!(Factorial::eval_static(2.5), Err(EvalError::FactorialDomain { arg: 2.5 }));
        assert_eq!(Factorial::eval_static(171.0), Err(EvalError::FactorialOverflow { arg: 171.0 }));
        assert!(Factorial::eval_static(170.0).unwrap().is_finite());
    }
}
