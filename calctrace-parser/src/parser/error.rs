use ariadne::{Fmt, Label, Report, ReportKind};
use calctrace_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

/// Builds a report with one message, one label per span, and an optional help line.
fn build<'a, 'r>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    label: impl ToString,
    help: Option<String>,
) -> Report<'r, (&'a str, Range<usize>)> {
    let start = spans.first().map_or(0, |span| span.start);
    let label = label.to_string();
    let mut builder = Report::build(ReportKind::Error, src_id, start)
        .with_message(message)
        .with_labels(spans.iter().cloned().map(|span| {
            Label::new((src_id, span))
                .with_message(label.clone())
                .with_color(EXPR)
        }));
    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

/// A character that does not begin any token.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedCharacter {
    /// The offending character.
    pub ch: char,
}

impl fmt::Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unexpected character `{}`", self.ch)
    }
}

impl ErrorKind for UnexpectedCharacter {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            self,
            "I don't know what this character means",
            Some(format!(
                "expressions may contain numbers, names, {} and parentheses",
                "+ - * / ^ % =".fg(EXPR),
            )),
        )
    }
}

/// An unexpected token was encountered.
///
/// The `expected` field should also contain the word "a" or "an" at the beginning to make the
/// error grammatically correct.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// What the parser expected to see.
    pub expected: &'static str,

    /// The kind of token that was found.
    pub found: TokenKind,

    /// The lexeme of the token that was found.
    pub lexeme: String,
}

impl fmt::Display for UnexpectedToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected {}, found {} `{}`", self.expected, self.found, self.lexeme)
    }
}

impl ErrorKind for UnexpectedToken {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            format!("unexpected {}", self.found),
            format!("I expected to see {} here", self.expected),
            None,
        )
    }
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof {
    /// What the parser expected to see.
    pub expected: &'static str,
}

impl fmt::Display for UnexpectedEof {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unexpected end of expression, expected {}", self.expected)
    }
}

impl ErrorKind for UnexpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "unexpected end of expression",
            format!("you might need to add {} here", self.expected.fg(EXPR)),
            None,
        )
    }
}

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

impl fmt::Display for ExpectedEof {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected end of expression")
    }
}

impl ErrorKind for ExpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            self,
            format!("I could not understand the remaining {} here", "expression".fg(EXPR)),
            Some("implicit multiplication is not supported; write `2*x` instead of `2x`".to_string()),
        )
    }
}

/// An integral was not closed with a differential such as `dx`.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingDifferential;

impl fmt::Display for MissingDifferential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected a differential such as `dx` after the integrand")
    }
}

impl ErrorKind for MissingDifferential {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "missing differential",
            "this integral needs a differential",
            Some(format!("write the integral as {}", "∫(expression) dx".fg(EXPR))),
        )
    }
}

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, PartialEq)]
pub struct RecursionLimit {
    /// The maximum nesting depth.
    pub max_depth: usize,
}

impl fmt::Display for RecursionLimit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expression is nested more than {} levels deep", self.max_depth)
    }
}

impl ErrorKind for RecursionLimit {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "maximum nesting depth exceeded",
            format!("nesting exceeds {} levels here", self.max_depth),
            Some("try splitting the expression into smaller pieces".to_string()),
        )
    }
}

/// A chain of binary operators would produce a syntax tree taller than the parser allows.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTooLarge {
    /// The maximum height of a syntax tree.
    pub max_height: usize,
}

impl fmt::Display for ExpressionTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expression is too large: its operators chain more than {} levels deep", self.max_height)
    }
}

impl ErrorKind for ExpressionTooLarge {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "expression is too large",
            format!("the chain of operators exceeds {} levels here", self.max_height),
            Some("try splitting the expression into smaller pieces".to_string()),
        )
    }
}
