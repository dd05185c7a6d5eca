use logos::Logos;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The raw lexemes recognized by the lexer, before identifiers are classified into functions,
/// variables, and differentials.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[token("∫")]
    Integral,

    #[regex(r"d/d[a-zA-Z]")]
    Derivative,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[+\-*/^%=]")]
    Operator,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,
}

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A numeric literal, such as `3` or `2.5`.
    Number,

    /// A variable name, such as `x` or `rate_2`.
    Variable,

    /// One of `+ - * / ^ % =`.
    Operator,

    /// The name of a built-in function, directly followed by a [`TokenKind::LeftParen`].
    Function,

    LeftParen,
    RightParen,
    Comma,

    /// The integral sign, `∫`.
    Integral,

    /// A derivative operator, such as `d/dx`.
    Derivative,

    /// A differential, such as `dx`.
    Differential,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Variable => "variable",
            Self::Operator => "operator",
            Self::Function => "function",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::Comma => "`,`",
            Self::Integral => "`∫`",
            Self::Derivative => "derivative",
            Self::Differential => "differential",
        };
        write!(f, "{}", name)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns the byte offset of the token in the source.
    pub fn position(&self) -> usize {
        self.span.start
    }

    /// Returns true if the token is the given operator.
    pub fn is_op(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == op
    }
}
