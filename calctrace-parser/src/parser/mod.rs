pub mod ast;
pub mod error;
pub mod token;

use ast::{Derivative, Expr, Integral};
use calctrace_error::{Error, ErrorKind};
use error::{ExpectedEof, RecursionLimit, UnexpectedEof, UnexpectedToken};
use super::tokenizer::{tokenize, Token, TokenKind};
use std::ops::Range;

/// The default maximum nesting depth of parenthesized expressions, calls, and unary operators.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The maximum height of the tree built from one chain of binary operators, such as
/// `1 + 2 + 3 + ...`. Walking a taller tree recursively could overflow the stack.
pub const MAX_TREE_HEIGHT: usize = 400;

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The byte offset of the end of the parsed region, used to point at the end of input.
    end: usize,

    /// The current nesting depth.
    depth: usize,

    /// The maximum nesting depth.
    max_depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for a region of the given source. The spans of all tokens, nodes, and
    /// errors produced by the parser are relative to the start of the whole source.
    pub fn with_range(
        source: &'source str,
        range: Range<usize>,
        max_depth: usize,
    ) -> Result<Self, Error> {
        let offset = range.start;
        let mut tokens = tokenize(&source[range.clone()])
            .map_err(|err| err.offset_by(offset))?;
        for token in &mut tokens {
            token.span = token.span.start + offset..token.span.end + offset;
        }

        Ok(Self {
            tokens: tokens.into_boxed_slice(),
            cursor: 0,
            end: range.end,
            depth: 0,
            max_depth,
        })
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.end..self.end
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Moves the cursor past the current token. This function is a no-op if the cursor is at the
    /// end of the stream.
    pub fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self, expected: &'static str) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                // cloning is cheap: only Range<_> is cloned
                let token = token.clone();
                self.cursor += 1;
                Ok(token)
            },
            None => Err(self.error(UnexpectedEof { expected })),
        }
    }

    /// Consumes the next token if it is of the given kind. Otherwise, returns an error describing
    /// what was expected, and leaves the cursor where it was.
    pub fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token<'source>, Error> {
        let start = self.cursor;
        let token = self.next_token(expected)?;
        if token.kind == kind {
            Ok(token)
        } else {
            self.cursor = start;
            Err(Error::new(vec![token.span.clone()], UnexpectedToken {
                expected,
                found: token.kind,
                lexeme: token.lexeme.to_owned(),
            }))
        }
    }

    /// Runs the given parsing function one nesting level deeper, failing if that would exceed the
    /// maximum nesting depth.
    pub fn nested<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        if self.depth >= self.max_depth {
            return Err(self.error(RecursionLimit { max_depth: self.max_depth }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// Parses a complete expression with the default maximum nesting depth.
pub fn parse(source: &str) -> Result<Expr, Error> {
    parse_with_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parses a complete expression.
///
/// A source that is entirely one derivative, `d/d<var>(<expr>)`, or entirely one integral,
/// `∫<expr> d<var>`, is split on its text before the inner expression is parsed. This allows
/// multi-letter variables of differentiation and definite integrals written as
/// `∫_<lower>^<upper> <expr> d<var>`. Everything else is parsed by the expression grammar, which
/// must consume every token.
pub fn parse_with_depth(source: &str, max_depth: usize) -> Result<Expr, Error> {
    if let Some(result) = Derivative::parse_literal(source, max_depth) {
        return result.map(Expr::Derivative);
    }
    if let Some(result) = Integral::parse_literal(source, max_depth) {
        return result.map(Expr::Integral);
    }

    Parser::with_range(source, 0..source.len(), max_depth)?.try_parse_full::<Expr>()
}
