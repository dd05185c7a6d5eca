//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the source regions it points at.

use ariadne::{Color, Report};
use std::{fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// The [`Display`] implementation is the one-line message shown when the error is rendered as
/// plain text, such as in the `error_message` of an evaluation result.
pub trait ErrorKind: Debug + Display + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the byte offset of the first region this error points at, or `0` if the error has
    /// no spans.
    pub fn position(&self) -> usize {
        self.spans.first().map_or(0, |span| span.start)
    }

    /// Shifts every span of this error right by `offset` bytes. Used when an error was produced
    /// while parsing a slice of a larger source.
    pub fn offset_by(mut self, offset: usize) -> Self {
        for span in &mut self.spans {
            *span = span.start + offset..span.end + offset;
        }
        self
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind, Source};
    use super::*;

    #[derive(Debug)]
    struct Oops;

    impl Display for Oops {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "oops")
        }
    }

    impl ErrorKind for Oops {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message("oops")
                .with_label(Label::new((src_id, spans[0].clone())).with_message("right here"))
                .finish()
        }
    }

    #[test]
    fn display_includes_position() {
        let err = Error::new(vec![4..5], Oops);
        assert_eq!(err.to_string(), "oops at position 4");
        assert_eq!(err.offset_by(3).position(), 7);
    }

    #[test]
    fn report_renders_label() {
        let src = "1 + $";
        let err = Error::new(vec![4..5], Oops);
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(src)), &mut buf)
            .unwrap();

        let rendered = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(rendered.contains("oops"));
        assert!(rendered.contains("right here"));
    }
}
