//! Built-in functions of one argument.
//!
//! Every function is a unit struct implementing [`Builtin`]. The evaluator looks them up by
//! name through [`get`].

mod helper;

pub mod combinatoric;
pub mod power;
pub mod round;
pub mod trigonometry;

use crate::numerical::error::EvalError;
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt::Debug};

/// A built-in function of one argument.
pub trait Builtin: Debug + Send + Sync {
    /// Returns the name of the function, as written in expressions.
    fn name(&self) -> &'static str;

    /// Returns a short description of the function, used in step explanations.
    fn description(&self) -> &'static str;

    /// Calls the function with the given argument.
    fn eval(&self, arg: f64) -> Result<f64, EvalError>;
}

static BUILTINS: Lazy<HashMap<&'static str, Box<dyn Builtin>>> = Lazy::new(|| {
    let funcs: [Box<dyn Builtin>; 18] = [
        Box::new(trigonometry::Sin),
        Box::new(trigonometry::Cos),
        Box::new(trigonometry::Tan),
        Box::new(trigonometry::Asin),
        Box::new(trigonometry::Acos),
        Box::new(trigonometry::Atan),
        Box::new(trigonometry::Sinh),
        Box::new(trigonometry::Cosh),
        Box::new(trigonometry::Tanh),
        Box::new(power::Sqrt),
        Box::new(power::Exp),
        Box::new(power::Ln),
        Box::new(power::Log),
        Box::new(round::Abs),
        Box::new(round::Floor),
        Box::new(round::Ceil),
        Box::new(round::Round),
        Box::new(combinatoric::Factorial),
    ];
    funcs.into_iter().map(|f| (f.name(), f)).collect()
});

/// Returns every built-in function, keyed by name.
pub fn all() -> &'static HashMap<&'static str, Box<dyn Builtin>> {
    &BUILTINS
}

/// Returns the built-in function with the given name.
pub fn get(name: &str) -> Option<&'static dyn Builtin> {
    BUILTINS.get(name).map(|f| f.as_ref())
}

/// Returns the name of the built-in function most similar to the given name, if any is close
/// enough to be a likely typo.
pub fn suggest(name: &str) -> Option<&'static str> {
    BUILTINS.keys()
        .map(|candidate| (levenshtein(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2 && *distance < name.len())
        .min()
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use calctrace_parser::tokenizer::BUILTIN_FUNCTIONS;
    use super::*;

    #[test]
    fn every_tokenizer_builtin_is_callable() {
        for name in BUILTIN_FUNCTIONS {
            assert!(get(name).is_some(), "missing builtin {}", name);
        }
        assert_eq!(all().len(), BUILTIN_FUNCTIONS.len());
    }

    #[test]
    fn suggestions() {
        assert_eq!(suggest("sqr"), Some("sqrt"));
        assert_eq!(suggest("facorial"), Some("factorial"));
        assert_eq!(suggest("xyzzy"), None);
    }
}
