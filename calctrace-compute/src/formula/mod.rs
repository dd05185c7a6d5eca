//! Named mathematical identities, and detection of the identities an expression matches.
//!
//! A [`FormulaCatalog`] holds [`FormulaDefinition`]s, each of which carries a regular
//! expression describing the shape of the identity. The [`FormulaMatcher`] compiles the
//! patterns of a catalog once, and reports every formula whose pattern is found in an
//! expression as a [`FormulaMatch`], ranked by a heuristic confidence score.
//!
//! Detection only reports *structural* recognition. Rewriting an expression according to a
//! formula goes through the separate [`FormulaRewriter`] trait; the shipped
//! [`IdentityRewriter`] returns the expression unchanged.
//!
//! ```
//! use calctrace_compute::formula::{FormulaCatalog, FormulaMatcher};
//!
//! let catalog = FormulaCatalog::builtin();
//! let matcher = FormulaMatcher::new(&catalog);
//! let matches = matcher.detect("(x+y)^2");
//!
//! assert_eq!(matches[0].formula_name, "Perfect Square (a+b)²");
//! assert!(matches[0].confidence > 0.7);
//! ```

mod builtin;
pub mod catalog;
pub mod matcher;
pub mod rewriter;

pub use catalog::FormulaCatalog;
pub use matcher::{normalize, FormulaMatcher};
pub use rewriter::{FormulaRewriter, IdentityRewriter};

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named identity, with the pattern used to recognize it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormulaDefinition {
    /// The name of the formula, such as `"Perfect Square (a+b)²"`.
    pub name: String,

    /// The regular expression matched against normalized expressions. Capture groups stand for
    /// the variables of the formula.
    pub pattern: String,

    /// The template of the rewritten expression, where `\1`, `\2`, ... refer to the captures.
    pub replacement: String,

    /// The school grade at which the formula is usually taught.
    pub grade: u8,

    /// The broad category of the formula, such as `"Trigonometry"`.
    pub category: String,

    /// A short description of the formula.
    pub description: String,

    /// The topic of the formula. If the topic appears in an expression, matches of the formula
    /// are considered more likely.
    pub topic: String,
}

impl FormulaDefinition {
    /// Creates a formula definition.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
        grade: u8,
        category: impl Into<String>,
        description: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
            grade,
            category: category.into(),
            description: description.into(),
            topic: topic.into(),
        }
    }
}

/// A formula whose pattern was found in an expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormulaMatch {
    /// The name of the matched formula.
    pub formula_name: String,

    /// The pattern of the matched formula.
    pub pattern: String,

    /// The normalized expression that the pattern was matched against.
    pub matched_expression: String,

    /// The text captured by each capture group of the pattern, keyed by the 1-based index of
    /// the group. Groups that did not participate in the match are absent.
    pub captures: BTreeMap<usize, String>,

    /// How likely the match is to be meaningful, between 0 and 1.
    pub confidence: f64,
}
