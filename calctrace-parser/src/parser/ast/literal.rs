use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric literal, such as `3` or `2.5`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl LitNum {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_number(f, self.value)
    }
}

/// Writes a number in its shortest form: integral values without a fractional part, and negative
/// zero as `0`.
pub fn fmt_number(f: &mut fmt::Formatter, value: f64) -> fmt::Result {
    if value == 0.0 {
        write!(f, "0")
    } else {
        write!(f, "{}", value)
    }
}

/// Returns the shortest textual form of a number, as written by [`fmt_number`].
pub fn number_to_string(value: f64) -> String {
    struct Shortest(f64);

    impl fmt::Display for Shortest {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            fmt_number(f, self.0)
        }
    }

    Shortest(value).to_string()
}

/// A symbol / identifier literal, such as `x` or `rate`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this symbol was parsed from.
    pub span: Range<usize>,
}

impl LitSym {
    /// Returns the span of the symbol.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_form() {
        assert_eq!(number_to_string(14.0), "14");
        assert_eq!(number_to_string(2.5), "2.5");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(-3.0), "-3");
    }
}
