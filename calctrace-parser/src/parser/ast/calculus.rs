use crate::{
    parser::{
        ast::{expr::Expr, paren::Paren},
        error::{MissingDifferential, UnexpectedEof},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use calctrace_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns true if the string is a valid variable name.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns the byte index of the parenthesis that closes the one at `open`, if any.
fn matching_paren(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in source[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            },
            _ => {},
        }
    }
    None
}

/// A derivative of an expression, such as `d/dx(x^2)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Derivative {
    /// The variable of differentiation.
    pub var: String,

    /// The expression to differentiate.
    pub expr: Box<Expr>,

    /// The region of the source code that this derivative was parsed from.
    pub span: Range<usize>,
}

impl Derivative {
    /// Returns the span of the derivative.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a whole source of the form `d/d<var>(<expr>)`, where the parenthesis opened after
    /// the variable is closed by the last character of the source. Returns [`None`] if the source
    /// does not have this shape, so that it can be parsed by the general grammar instead.
    pub fn parse_literal(source: &str, max_depth: usize) -> Option<Result<Self, Error>> {
        let rest = source.strip_prefix("d/d")?;
        let open = 3 + rest.find('(')?;
        let var = &source[3..open];
        if !is_identifier(var) || matching_paren(source, open)? != source.len() - 1 {
            return None;
        }

        let inner = open + 1..source.len() - 1;
        Some(Parser::with_range(source, inner, max_depth)
            .and_then(|mut parser| parser.try_parse_full::<Expr>())
            .map(|expr| Self {
                var: var.to_owned(),
                expr: Box::new(expr),
                span: 0..source.len(),
            }))
    }
}

impl Parse for Derivative {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.expect(TokenKind::Derivative, "a derivative such as `d/dx`")?;
        input.expect(TokenKind::LeftParen, "an opening parenthesis `(`")?;
        let expr = Expr::parse(input)?;
        let close = input.expect(TokenKind::RightParen, "a closing parenthesis `)`")?;
        Ok(Self {
            var: token.lexeme["d/d".len()..].to_owned(),
            expr: Box::new(expr),
            span: token.span.start..close.span.end,
        })
    }
}

impl fmt::Display for Derivative {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "d/d{}(", self.var)?;
        self.expr.fmt(f)?;
        write!(f, ")")
    }
}

/// The bounds of a definite integral.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// The lower bound.
    pub lower: Expr,

    /// The upper bound.
    pub upper: Expr,
}

/// An integral of an expression, such as `∫x^2 dx` or `∫_0^1 x^2 dx`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Integral {
    /// The variable of integration.
    pub var: String,

    /// The integrand.
    pub expr: Box<Expr>,

    /// The bounds of integration, if this is a definite integral.
    pub bounds: Option<Box<Bounds>>,

    /// The region of the source code that this integral was parsed from.
    pub span: Range<usize>,
}

impl Integral {
    /// Returns the span of the integral.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a whole source of the form `∫<body> d<var>`, where the differential is separated
    /// from the body by whitespace. A body of the form `_<lower>^<upper> <integrand>` produces a
    /// definite integral. Returns [`None`] if the source does not have this shape.
    pub fn parse_literal(source: &str, max_depth: usize) -> Option<Result<Self, Error>> {
        let body = source.strip_prefix('∫')?;
        let marker = source.len() - 2;
        let mut tail = source.get(marker..)?.chars();
        let var = match (tail.next(), tail.next()) {
            (Some('d'), Some(var)) if var.is_ascii_alphabetic() => var,
            _ => return None,
        };

        let body_end = '∫'.len_utf8() + body.get(..body.len() - 2)?.trim_end().len();
        if body_end == marker {
            // no whitespace between the body and the differential
            return None;
        }

        let start = '∫'.len_utf8();
        let span = 0..source.len();
        let result = if source[start..body_end].trim_start().starts_with('_') {
            Self::parse_definite(source, start..body_end, max_depth)
                .map(|(bounds, expr)| (Some(Box::new(bounds)), expr))
        } else {
            Parser::with_range(source, start..body_end, max_depth)
                .and_then(|mut parser| parser.try_parse_full::<Expr>())
                .map(|expr| (None, expr))
        };

        Some(result.map(|(bounds, expr)| Self {
            var: var.to_string(),
            expr: Box::new(expr),
            bounds,
            span,
        }))
    }

    /// Parses `_<lower>^<upper> <integrand>` in the given range of the source. The lower bound
    /// ends at the first `^` outside parentheses, and the upper bound ends at the first
    /// whitespace outside parentheses.
    fn parse_definite(
        source: &str,
        range: Range<usize>,
        max_depth: usize,
    ) -> Result<(Bounds, Expr), Error> {
        let malformed = || Error::new(vec![range.clone()], UnexpectedEof {
            expected: "integral bounds written as `_lower^upper integrand`",
        });
        let text = &source[range.clone()];
        let underscore = range.start + text.find('_').ok_or_else(malformed)?;

        let mut depth = 0i32;
        let mut caret = None;
        let mut space = None;
        for (i, c) in source[underscore + 1..range.end].char_indices() {
            let i = underscore + 1 + i;
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                '^' if depth == 0 && caret.is_none() => caret = Some(i),
                c if c.is_whitespace() && depth == 0 => match caret {
                    // the upper bound must not be empty
                    Some(caret) if i > caret + 1 => {
                        space = Some(i);
                        break;
                    },
                    _ => {},
                },
                _ => {},
            }
        }

        let (caret, space) = caret.zip(space).ok_or_else(malformed)?;
        let parse = |range: Range<usize>| {
            Parser::with_range(source, range, max_depth)
                .and_then(|mut parser| parser.try_parse_full::<Expr>())
        };
        let lower = parse(underscore + 1..caret)?;
        let upper = parse(caret + 1..space)?;
        let expr = parse(space..range.end)?;
        Ok((Bounds { lower, upper }, expr))
    }
}

impl Parse for Integral {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.expect(TokenKind::Integral, "an integral sign `∫`")?;
        let paren = Paren::parse(input)?;
        let differential = match input.current_token() {
            Some(next) if next.kind == TokenKind::Differential => next.clone(),
            _ => return Err(input.error(MissingDifferential)),
        };
        input.advance();
        Ok(Self {
            var: differential.lexeme[1..].to_owned(),
            expr: Box::new(Expr::Paren(paren)),
            bounds: None,
            span: token.span.start..differential.span.end,
        })
    }
}

/// Writes an integral bound, wrapping anything more complex than a single term in parentheses so
/// that the bound can be read back.
fn fmt_bound(f: &mut fmt::Formatter, bound: &Expr) -> fmt::Result {
    match bound {
        Expr::Binary(_) | Expr::Unary(_) => write!(f, "({})", bound),
        _ => write!(f, "{}", bound),
    }
}

impl fmt::Display for Integral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "∫")?;
        if let Some(bounds) = &self.bounds {
            write!(f, "_")?;
            fmt_bound(f, &bounds.lower)?;
            write!(f, "^")?;
            fmt_bound(f, &bounds.upper)?;
            write!(f, " ")?;
        }
        self.expr.fmt(f)?;
        write!(f, " d{}", self.var)
    }
}
