//! Traced evaluation of expressions.
//!
//! Evaluation walks the tree produced by [`calctrace_parser`] bottom-up and records one
//! [`ComputationStep`] for every node it visits. The result of every sub-expression is memoized
//! by its canonical text for the duration of one evaluation; visiting an identical sub-expression
//! again records a `"cached_result"` step instead of walking it a second time.
//!
//! Evaluation never fails. Domain errors and overflows become a [`Value::Symbolic`] carrying the
//! error message, along with a step tagged `"error"`, and continue to propagate upward like any
//! other symbolic value.
//!
//! ```
//! use calctrace_compute::numerical::{evaluate, ctxt::Bindings, value::Value};
//! use calctrace_parser::parser::parse;
//!
//! let expr = parse("x + y").unwrap();
//! let bindings = Bindings::from([("x".to_string(), 5.0), ("y".to_string(), 3.0)]);
//! let (value, steps) = evaluate(&expr, &bindings);
//!
//! assert_eq!(value, Value::Number(8.0));
//! assert_eq!(steps.last().unwrap().operation, "addition");
//! ```

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod step;
pub mod value;

use calctrace_parser::parser::ast::expr::Expr;
use ctxt::{Bindings, Ctxt, DEFAULT_MAX_DEPTH};
use eval::Eval;
use step::ComputationStep;
use value::Value;

/// Evaluates the expression with the given variable bindings, returning its value and the steps
/// taken to compute it.
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> (Value, Vec<ComputationStep>) {
    evaluate_with_depth(expr, bindings, DEFAULT_MAX_DEPTH)
}

/// Evaluates the expression like [`evaluate`], with a custom maximum nesting depth.
pub fn evaluate_with_depth(
    expr: &Expr,
    bindings: &Bindings,
    max_depth: usize,
) -> (Value, Vec<ComputationStep>) {
    let mut ctxt = Ctxt::<Vec<ComputationStep>>::new(bindings.clone()).with_max_depth(max_depth);
    let value = expr.eval(&mut ctxt);
    log::debug!("evaluated `{}` to `{}` in {} steps", expr, value, ctxt.steps().len());
    (value, ctxt.into_steps())
}
