//! Trigonometric and hyperbolic functions. All angles are in radians.

use crate::numerical::error::EvalError;
use std::f64::consts::{FRAC_PI_2, PI};
use super::helper::builtin;

/// How close an argument to `tan` may get to an odd multiple of π/2.
const TAN_POLE_TOLERANCE: f64 = 1e-10;

builtin! {
    /// Sine.
    Sin "sin", "Sine", |n| Ok(n.sin());

    /// Cosine.
    Cos "cos", "Cosine", |n| Ok(n.cos());

    /// Tangent. Undefined at odd multiples of π/2.
    Tan "tan", "Tangent", |n| {
        let k = ((n - FRAC_PI_2) / PI).round();
        if (n - FRAC_PI_2 - k * PI).abs() < TAN_POLE_TOLERANCE {
            Err(EvalError::TangentUndefined { arg: n })
        } else {
            Ok(n.tan())
        }
    };

    /// Arcsine. Defined on [-1, 1].
    Asin "asin", "Arcsin", |n| {
        if (-1.0..=1.0).contains(&n) {
            Ok(n.asin())
        } else {
            Err(EvalError::AsinDomain { arg: n })
        }
    };

    /// Arccosine. Defined on [-1, 1].
    Acos "acos", "Arccos", |n| {
        if (-1.0..=1.0).contains(&n) {
            Ok(n.acos())
        } else {
            Err(EvalError::AcosDomain { arg: n })
        }
    };

    /// Arctangent.
    Atan "atan", "Arctan", |n| Ok(n.atan());

    /// Hyperbolic sine.
    Sinh "sinh", "Hyperbolic sine", |n| Ok(n.sinh());

    /// Hyperbolic cosine.
    Cosh "cosh", "Hyperbolic cosine", |n| Ok(n.cosh());

    /// Hyperbolic tangent.
    Tanh "tanh", "Hyperbolic tangent", |n| Ok(n.tanh());
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
    fn tan_poles() {
        assert!(Tan::eval_static(FRAC_PI_2).is_err());
        assert!(Tan::eval_static(-FRAC_PI_2).is_err());
        assert!(Tan::eval_static(3.0 * FRAC_PI_2).is_err());
        assert_float_absolute_eq!(Tan::eval_static(PI / 4.0).unwrap(), 1.0);
        assert_float_absolute_eq!(Tan::eval_static(0.0).unwrap(), 0.0);
    }

    #[test]
    fn inverse_domains() {
        assert_float_absolute_eq!(Asin::eval_static(1.0).unwrap(), FRAC_PI_2);
        assert_eq!(Acos::eval_static(1.5), Err(EvalError::AcosDomain { arg: 1.5 }));
        assert!(Asin::eval_static(-1.01).is_err());
    }
}
