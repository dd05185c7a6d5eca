use crate::{
    parser::{
        ast::{
            binary::Binary,
            calculus::{Derivative, Integral},
            call::Call,
            literal::{LitNum, LitSym},
            paren::Paren,
            unary::Unary,
        },
        error::{UnexpectedEof, UnexpectedToken},
        token::op::Precedence,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use calctrace_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression.
///
/// An expression is any valid piece of text that can be evaluated to produce a value. Every node
/// exclusively owns its children, so cloning an expression produces an independent deep copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric literal, such as `2.5`.
    Number(LitNum),

    /// A variable, such as `x`.
    Variable(LitSym),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `abs(-1)`.
    Call(Call),

    /// A unary operation, such as `-1`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// A derivative, such as `d/dx(x^2)`.
    Derivative(Derivative),

    /// An integral, such as `∫x^2 dx`.
    Integral(Integral),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Number(num) => num.span(),
            Expr::Variable(sym) => sym.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
            Expr::Derivative(derivative) => derivative.span(),
            Expr::Integral(integral) => integral.span(),
        }
    }

    /// If this expression is a [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        let mut inner = self;
        while let Expr::Paren(paren) = inner {
            inner = &paren.expr;
        }
        inner
    }

    /// Returns the number of nodes on the longest path from this expression to a leaf.
    ///
    /// The tree is walked with an explicit stack, so this works on trees of any height.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, level)) = stack.pop() {
            height = height.max(level);
            match expr {
                Expr::Number(_) | Expr::Variable(_) => {},
                Expr::Paren(paren) => stack.push((&*paren.expr, level + 1)),
                Expr::Call(call) => stack.push((&*call.arg, level + 1)),
                Expr::Unary(unary) => stack.push((&*unary.operand, level + 1)),
                Expr::Binary(binary) => {
                    stack.push((&*binary.lhs, level + 1));
                    stack.push((&*binary.rhs, level + 1));
                },
                Expr::Derivative(derivative) => stack.push((&*derivative.expr, level + 1)),
                Expr::Integral(integral) => {
                    stack.push((&*integral.expr, level + 1));
                    if let Some(bounds) = &integral.bounds {
                        stack.push((&bounds.lower, level + 1));
                        stack.push((&bounds.upper, level + 1));
                    }
                },
            }
        }
        height
    }

    /// Parses a primary expression: a number, variable, function call, parenthesized
    /// expression, derivative, or integral.
    pub fn parse_primary(input: &mut Parser) -> Result<Self, Error> {
        const EXPECTED: &str = "a number, variable, function call, or `(`";

        let token = match input.current_token() {
            Some(token) => token.clone(),
            None => return Err(input.error(UnexpectedEof { expected: EXPECTED })),
        };

        match token.kind {
            TokenKind::Number => {
                input.advance();
                let value = token.lexeme.parse::<f64>()
                    .map_err(|_| Error::new(vec![token.span.clone()], UnexpectedToken {
                        expected: EXPECTED,
                        found: token.kind,
                        lexeme: token.lexeme.to_owned(),
                    }))?;
                Ok(Expr::Number(LitNum { value, span: token.span }))
            },
            TokenKind::Variable => {
                input.advance();
                Ok(Expr::Variable(LitSym { name: token.lexeme.to_owned(), span: token.span }))
            },
            // a bare differential such as `dx` stands for its variable
            TokenKind::Differential => {
                input.advance();
                Ok(Expr::Variable(LitSym {
                    name: token.lexeme[1..].to_owned(),
                    span: token.span.start + 1..token.span.end,
                }))
            },
            TokenKind::Function => input.nested(Call::parse).map(Expr::Call),
            TokenKind::LeftParen => input.nested(Paren::parse).map(Expr::Paren),
            TokenKind::Derivative => input.nested(Derivative::parse).map(Expr::Derivative),
            TokenKind::Integral => input.nested(Integral::parse).map(Expr::Integral),
            TokenKind::Operator | TokenKind::RightParen | TokenKind::Comma => {
                Err(Error::new(vec![token.span.clone()], UnexpectedToken {
                    expected: EXPECTED,
                    found: token.kind,
                    lexeme: token.lexeme.to_owned(),
                }))
            },
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        Binary::parse_level(input, Precedence::Term)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(num) => num.fmt(f),
            Expr::Variable(sym) => sym.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Derivative(derivative) => derivative.fmt(f),
            Expr::Integral(integral) => integral.fmt(f),
        }
    }
}
