//! Symbolic manipulation of expressions.
//!
//! # Calculus
//!
//! Differentiation and integration in this module are deliberately shallow. They do not build an
//! algebraic representation of the expression; instead, [`calculus`] inspects the canonical text
//! of the expression (as produced by its [`Display`](std::fmt::Display) implementation) and
//! recognizes a handful of shapes: powers of the variable, constants, the variable itself, sums
//! and two-factor products of those, and a few elementary functions applied directly to the
//! variable. Anything else is kept as an unevaluated `d/dx(..)` or `∫.. dx` placeholder.
//!
//! ```
//! use calctrace_compute::symbolic::calculus::{differentiate, integrate};
//! use calctrace_parser::parser::parse;
//!
//! let expr = parse("3 * x + x ^ 2").unwrap();
//! assert_eq!(differentiate("x", &expr.to_string()), "3 + 2*x^1");
//! assert_eq!(integrate("x", &expr.to_string()), "3*x^2/2 + x^3/3 + C");
//! ```
//!
//! # Step collection
//!
//! Algorithms that can explain themselves accept a [`StepCollector`], so that callers who do not
//! need the explanation can pass `()` and skip building it.

pub mod calculus;
pub mod step_collector;

pub use step_collector::StepCollector;
