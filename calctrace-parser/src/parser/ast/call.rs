use crate::{
    parser::{ast::{expr::Expr, literal::LitSym}, Parse, Parser},
    tokenizer::TokenKind,
};
use calctrace_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call with a single argument, such as `sqrt(x + 1)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The argument to the function.
    pub arg: Box<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the argument.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.expect(TokenKind::Function, "a function name")?;
        let open = input.expect(TokenKind::LeftParen, "an opening parenthesis `(`")?;
        let arg = Expr::parse(input)?;
        let close = input.expect(TokenKind::RightParen, "a closing parenthesis `)`")?;
        Ok(Self {
            name: LitSym {
                name: name.lexeme.to_owned(),
                span: name.span.clone(),
            },
            arg: Box::new(arg),
            span: name.span.start..close.span.end,
            paren_span: open.span.start..close.span.end,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        self.arg.fmt(f)?;
        write!(f, ")")
    }
}
