use crate::{
    parser::{
        ast::{expr::Expr, unary::Unary},
        error::ExpressionTooLarge,
        token::op::{BinOpKind, Precedence},
        Parser,
        MAX_TREE_HEIGHT,
    },
    tokenizer::TokenKind,
};
use calctrace_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses one operand of a binary expression at the given precedence level. Operands of
    /// `+` / `-` are factors, operands of `*` / `/` / `%` are (optionally negated) powers, and
    /// operands of `^` are primaries.
    fn parse_operand(input: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
        match precedence {
            Precedence::Term => Self::parse_level(input, Precedence::Factor),
            Precedence::Factor => Unary::parse_or_lower(input),
            Precedence::Exp => Expr::parse_primary(input),
        }
    }

    /// Returns the binary operator at the cursor if it belongs to the given precedence level.
    fn peek_op(input: &Parser, precedence: Precedence) -> Option<BinOpKind> {
        input.current_token()
            .filter(|token| token.kind == TokenKind::Operator)
            .and_then(|token| BinOpKind::from_lexeme(token.lexeme))
            .filter(|op| op.precedence() == precedence)
    }

    /// Parses a chain of operands joined by operators of the given precedence. Every level is
    /// left-associative, including `^`: `2^3^2` is `(2^3)^2`.
    ///
    /// A chain builds a left-deep tree, one level per operator. Chains whose tree would be taller
    /// than [`MAX_TREE_HEIGHT`] are rejected.
    pub fn parse_level(input: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
        let mut lhs = Self::parse_operand(input, precedence)?;
        let mut height = None;

        while let Some(op) = Self::peek_op(input, precedence) {
            let op_span = input.span();
            input.advance();
            let rhs = Self::parse_operand(input, precedence)?;

            let lhs_height = *height.get_or_insert_with(|| lhs.height());
            let new_height = 1 + lhs_height.max(rhs.height());
            if new_height > MAX_TREE_HEIGHT {
                return Err(Error::new(vec![op_span], ExpressionTooLarge {
                    max_height: MAX_TREE_HEIGHT,
                }));
            }
            height = Some(new_height);

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.lhs.fmt(f)?;
        write!(f, " {} ", self.op)?;
        self.rhs.fmt(f)
    }
}
