use ariadne::{Fmt, Label, Report, ReportKind};
use calctrace_error::{ErrorKind, EXPR};
use std::{fmt, ops::Range};

/// Builds a report that labels every span with the same message.
fn build<'a, 'r>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    label: &str,
    help: Option<String>,
) -> Report<'r, (&'a str, Range<usize>)> {
    let start = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ReportKind::Error, src_id, start)
        .with_message(message)
        .with_labels(spans.iter().cloned().map(|span| {
            Label::new((src_id, span))
                .with_message(label)
                .with_color(EXPR)
        }));
    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

/// A deferred evaluation was requested from an engine configured without the deferred queue.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredEvaluationDisabled;

impl fmt::Display for DeferredEvaluationDisabled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "deferred evaluation is disabled")
    }
}

impl ErrorKind for DeferredEvaluationDisabled {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            self,
            "this expression cannot be queued",
            Some(format!("enable it with {}", "EngineConfig::with_deferred(true)".fg(EXPR))),
        )
    }
}

/// No formula of the catalog has the requested name.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownFormula {
    /// The requested name.
    pub name: String,

    /// Names of formulas similar to the requested name, closest first.
    pub suggestions: Vec<String>,
}

impl fmt::Display for UnknownFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown formula `{}`", self.name)?;
        if let Some(suggestion) = self.suggestions.first() {
            write!(f, " (did you mean `{}`?)", suggestion)?;
        }
        Ok(())
    }
}

impl ErrorKind for UnknownFormula {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let help = if self.suggestions.is_empty() {
            None
        } else {
            let list = self.suggestions.iter()
                .map(|name| format!("{}", name.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("similar formulas: {}", list))
        };
        build(src_id, spans, self, "this expression was to be rewritten", help)
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use calctrace_error::Error;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn unknown_formula_message() {
        let err = UnknownFormula {
            name: "Perfect Sqare".to_string(),
            suggestions: vec!["Perfect Square (a+b)²".to_string()],
        };
        assert_eq!(err.to_string(), "unknown formula `Perfect Sqare` (did you mean `Perfect Square (a+b)²`?)");
    }

    #[test]
    fn report_renders() {
        let src = "(x + y)^2";
        let err = Error::new(vec![0..src.len()], DeferredEvaluationDisabled);
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(src)), &mut buf)
            .unwrap();

        let rendered = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(rendered.contains("deferred evaluation is disabled"));
        assert!(rendered.contains("with_deferred"));
    }
}
