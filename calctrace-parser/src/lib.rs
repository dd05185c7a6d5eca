//! Lexer and parser for calctrace expressions.
//!
//! Expressions are arithmetic over numbers and variables with the operators `+ - * / ^ %`, calls
//! to built-in functions of one argument, parentheses, derivatives (`d/dx(x^2)`), and integrals
//! (`∫x^2 dx`, `∫_0^1 x^2 dx`).
//!
//! ```
//! use calctrace_parser::parser::{ast::Expr, parse};
//!
//! let expr = parse("2 + 3 * sqrt(x)").unwrap();
//! assert!(matches!(expr, Expr::Binary(_)));
//! assert_eq!(expr.to_string(), "2 + 3 * sqrt(x)");
//! ```

pub mod parser;
pub mod tokenizer;
