//! Parse, evaluate, and explain mathematical expressions step by step.
//!
//! The [`Engine`] is the entry point. It parses expressions, detects the named formulas they
//! match, evaluates them while recording every step taken, and caches all of this work so that
//! repeated requests are cheap.
//!
//! ```
//! use calctrace::{Bindings, Engine, EvaluationKind};
//!
//! let engine = Engine::default();
//!
//! let result = engine.evaluate("2 + 3 * 4", &Bindings::new());
//! assert_eq!(result.final_result, "14");
//! assert_eq!(result.evaluation_kind, EvaluationKind::Numeric);
//!
//! let bindings = Bindings::from([("x".to_string(), 5.0), ("y".to_string(), 3.0)]);
//! assert_eq!(engine.evaluate("x + y", &bindings).final_result, "8");
//!
//! let matches = engine.detect_formulas("(x+y)^2");
//! assert_eq!(matches[0].formula_name, "Perfect Square (a+b)²");
//! ```
//!
//! Expressions that cannot be computed numerically are not errors. Unbound variables, domain
//! errors, and overflows all produce a symbolic result:
//!
//! ```
//! use calctrace::{Bindings, Engine};
//!
//! let engine = Engine::default();
//! assert_eq!(engine.evaluate("2 * x + 1", &Bindings::new()).final_result, "((2 * x) + 1)");
//! assert!(engine.evaluate("1 / 0", &Bindings::new()).final_result.contains("Division by zero"));
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod queue;

pub use cache::{EngineCacheStats, ExpressionCache};
pub use calctrace_cache::CacheStats;
pub use calctrace_compute::{
    formula::{FormulaCatalog, FormulaDefinition, FormulaMatch, FormulaRewriter, IdentityRewriter},
    monitor::{EvaluationKind, EvaluationResult},
    numerical::{ctxt::Bindings, step::ComputationStep},
};
pub use calctrace_error::Error;
pub use calctrace_parser::parser::ast::expr::Expr;
pub use config::{CacheConfig, EngineConfig};
pub use engine::Engine;
pub use queue::{DeferredRequest, QueueStatus};
