//! Rounding functions.

use super::helper::builtin;

builtin! {
    /// Absolute value.
    Abs "abs", "Absolute value", |n| Ok(n.abs());

    /// Round a number down to the nearest integer.
    Floor "floor", "Floor", |n| Ok(n.floor());

    /// Round a number up to the nearest integer.
    Ceil "ceil", "Ceiling", |n| Ok(n.ceil());

    /// Round a number to the nearest integer. Halfway cases round to the nearest even integer.
    Round "round", "Round", |n| Ok(n.round_ties_even());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_to_even() {
        assert_eq!(Round::eval_static(2.5), Ok(2.0));
        assert_eq!(Round::eval_static(3.5), Ok(4.0));
        assert_eq!(Round::eval_static(-2.5), Ok(-2.0));
        assert_eq!(Round::eval_static(2.6), Ok(3.0));
    }

    #[test]
    fn floor_ceil() {
        assert_eq!(Floor::eval_static(-1.5), Ok(-2.0));
        assert_eq!(Ceil::eval_static(-1.5), Ok(-1.0));
        assert_eq!(Abs::eval_static(-3.0), Ok(3.0));
    }
}
