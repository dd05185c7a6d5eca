use crate::{
    parser::{
        ast::{binary::Binary, expr::Expr},
        token::op::{Precedence, UnaryOpKind},
        Parser,
    },
    tokenizer::TokenKind,
};
use calctrace_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. The operand of a unary expression is always a power
/// expression, so `-x^2` is `-(x^2)`, and the operator can only appear once: `--x` is rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOpKind,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a factor: a unary expression if the stream starts with `+` or `-`, or a power
    /// expression otherwise.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let op = input.current_token()
            .filter(|token| token.kind == TokenKind::Operator)
            .and_then(|token| UnaryOpKind::from_lexeme(token.lexeme).map(|op| (op, token.span.start)));

        match op {
            Some((op, start)) => {
                input.advance();
                let operand = input.nested(|input| Binary::parse_level(input, Precedence::Exp))?;
                let end = operand.span().end;
                Ok(Expr::Unary(Self {
                    operand: Box::new(operand),
                    op,
                    span: start..end,
                }))
            },
            None => Binary::parse_level(input, Precedence::Exp),
        }
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.op)?;
        self.operand.fmt(f)
    }
}
