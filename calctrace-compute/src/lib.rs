//! Evaluation of calctrace expressions.
//!
//! - [`numerical`] evaluates an expression tree to a [`Value`](numerical::value::Value), recording
//!   every step taken.
//! - [`funcs`] contains the built-in functions callable from expressions.
//! - [`symbolic`] implements the textual differentiation and integration rules.
//! - [`formula`] holds the catalog of named formulas and detects them in expressions.
//! - [`monitor`] combines all of the above into a single traced [`EvaluationResult`].
//!
//! [`EvaluationResult`]: monitor::EvaluationResult

pub mod formula;
pub mod funcs;
pub mod monitor;
pub mod numerical;
pub mod symbolic;
