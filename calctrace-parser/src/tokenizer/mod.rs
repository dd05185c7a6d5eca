pub mod token;

use calctrace_error::Error;
use crate::parser::error::UnexpectedCharacter;
use logos::Logos;
use std::ops::Range;
use token::RawToken;
pub use token::{Token, TokenKind};

/// The names of the built-in functions. An identifier is only tokenized as a
/// [`TokenKind::Function`] if it is one of these names and is followed by `(`.
pub const BUILTIN_FUNCTIONS: [&str; 18] = [
    "sqrt", "sin", "cos", "tan", "log", "ln", "abs", "exp", "floor", "ceil", "round",
    "factorial", "asin", "acos", "atan", "sinh", "cosh", "tanh",
];

/// Returns true if the given name is a built-in function.
pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Returns true if the identifier is a differential such as `dx`: exactly the letter `d`
/// followed by one ASCII letter.
fn is_differential(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() == 2 && bytes[0] == b'd' && bytes[1].is_ascii_alphabetic()
}

/// Runs the raw lexer over the input, keeping whitespace so that identifiers can look past it.
fn raw_tokens(input: &str) -> Result<Vec<(RawToken, Range<usize>)>, Error> {
    let mut lexer = RawToken::lexer(input);
    let mut raw = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => raw.push((kind, span)),
            Err(()) => {
                let ch = input[span.start..].chars().next().unwrap_or('\u{FFFD}');
                let end = span.start + ch.len_utf8();
                return Err(Error::new(vec![span.start..end], UnexpectedCharacter { ch }));
            },
        }
    }

    Ok(raw)
}

/// Tokenizes the input, returning every non-whitespace token in source order, or an error
/// pointing at the first character that no token pattern matches.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let raw = raw_tokens(input)?;
    let mut tokens = Vec::with_capacity(raw.len());
    let mut iter = raw.iter();

    while let Some((kind, span)) = iter.next() {
        let lexeme = &input[span.clone()];
        let kind = match kind {
            RawToken::Whitespace => continue,
            RawToken::Integral => TokenKind::Integral,
            RawToken::Derivative => TokenKind::Derivative,
            RawToken::Number => TokenKind::Number,
            RawToken::Operator => TokenKind::Operator,
            RawToken::OpenParen => TokenKind::LeftParen,
            RawToken::CloseParen => TokenKind::RightParen,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Name if is_differential(lexeme) => TokenKind::Differential,
            RawToken::Name if is_builtin_function(lexeme) => {
                // look past any whitespace for the opening parenthesis
                let mut ahead = iter.clone();
                let paren = loop {
                    match ahead.next() {
                        Some((RawToken::Whitespace, _)) => continue,
                        Some((RawToken::OpenParen, paren)) => break Some(paren),
                        _ => break None,
                    }
                };

                match paren {
                    Some(paren) => {
                        tokens.push(Token {
                            span: span.clone(),
                            kind: TokenKind::Function,
                            lexeme,
                        });
                        tokens.push(Token {
                            span: span.end..paren.end,
                            kind: TokenKind::LeftParen,
                            lexeme: &input[paren.clone()],
                        });
                        iter = ahead;
                        continue;
                    },
                    None => TokenKind::Variable,
                }
            },
            RawToken::Name => TokenKind::Variable,
        };

        tokens.push(Token {
            span: span.clone(),
            kind,
            lexeme,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the expected kinds and lexemes.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize(input).unwrap();
        let actual = tokens.iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "2 + 3 * 4",
            [
                (TokenKind::Number, "2"),
                (TokenKind::Operator, "+"),
                (TokenKind::Number, "3"),
                (TokenKind::Operator, "*"),
                (TokenKind::Number, "4"),
            ],
        );
    }

    #[test]
    fn function_and_parens() {
        compare_tokens(
            "sqrt(x_1) % 2.5",
            [
                (TokenKind::Function, "sqrt"),
                (TokenKind::LeftParen, "("),
                (TokenKind::Variable, "x_1"),
                (TokenKind::RightParen, ")"),
                (TokenKind::Operator, "%"),
                (TokenKind::Number, "2.5"),
            ],
        );
    }

    #[test]
    fn function_paren_span_follows_name() {
        let tokens = tokenize("sin (x)").unwrap();
        assert_eq!(tokens[0].span, 0..3);
        assert_eq!(tokens[1].kind, TokenKind::LeftParen);
        assert_eq!(tokens[1].span.start, 3);
        assert_eq!(tokens[2].span, 5..6);
    }

    #[test]
    fn unknown_function_is_variable() {
        compare_tokens(
            "f(x), sin",
            [
                (TokenKind::Variable, "f"),
                (TokenKind::LeftParen, "("),
                (TokenKind::Variable, "x"),
                (TokenKind::RightParen, ")"),
                (TokenKind::Comma, ","),
                (TokenKind::Variable, "sin"),
            ],
        );
    }

    #[test]
    fn calculus_tokens() {
        compare_tokens(
            "d/dx(x^2) ∫(x) dx dxy",
            [
                (TokenKind::Derivative, "d/dx"),
                (TokenKind::LeftParen, "("),
                (TokenKind::Variable, "x"),
                (TokenKind::Operator, "^"),
                (TokenKind::Number, "2"),
                (TokenKind::RightParen, ")"),
                (TokenKind::Integral, "∫"),
                (TokenKind::LeftParen, "("),
                (TokenKind::Variable, "x"),
                (TokenKind::RightParen, ")"),
                (TokenKind::Differential, "dx"),
                (TokenKind::Variable, "dxy"),
            ],
        );
    }

    #[test]
    fn names_starting_with_d() {
        compare_tokens(
            "delta * distance + dy",
            [
                (TokenKind::Variable, "delta"),
                (TokenKind::Operator, "*"),
                (TokenKind::Variable, "distance"),
                (TokenKind::Operator, "+"),
                (TokenKind::Differential, "dy"),
            ],
        );
    }

    #[test]
    fn unexpected_character() {
        let err = tokenize("1 + $").unwrap_err();
        assert_eq!(err.spans, vec![4..5]);
        assert_eq!(err.kind.to_string(), "unexpected character `$`");
    }

    #[test]
    fn whitespace_only() {
        assert!(tokenize(" \t ").unwrap().is_empty());
    }
}
