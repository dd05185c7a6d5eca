use calctrace_parser::parser::ast::literal::number_to_string;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of evaluating an expression.
///
/// Evaluation never fails outright: anything that cannot be computed numerically, whether
/// because a variable is unbound, an argument is outside a function's domain, or an arithmetic
/// result overflows, is carried as descriptive text in [`Value::Symbolic`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A numeric value.
    Number(f64),

    /// A symbolic expression or a descriptive message.
    Symbolic(String),
}

impl Value {
    /// Returns true if the value is a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Symbolic(_) => None,
        }
    }

    /// Builds a value from the text produced by a symbolic rule: text that reads as a plain
    /// number becomes a [`Value::Number`].
    pub fn from_rule_text(text: String) -> Self {
        match text.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Symbolic(text),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Symbolic(s)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", number_to_string(*n)),
            Value::Symbolic(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_text_conversion() {
        assert_eq!(Value::from_rule_text("0".to_string()), Value::Number(0.0));
        assert_eq!(Value::from_rule_text("-2.5".to_string()), Value::Number(-2.5));
        assert_eq!(Value::from_rule_text("2*x".to_string()), Value::Symbolic("2*x".to_string()));
        assert_eq!(Value::from_rule_text("inf".to_string()), Value::Symbolic("inf".to_string()));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Number(14.0).to_string(), "14");
        assert_eq!(Value::Symbolic("x".to_string()).to_string(), "x");
    }
}
