use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;
use super::{FormulaCatalog, FormulaMatch};

/// Normalizes an expression before matching: whitespace is removed, and the typographic
/// operators `×`, `÷`, `²`, and `³` are replaced by their ASCII forms.
pub fn normalize(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());
    for c in expr.chars() {
        match c {
            c if c.is_whitespace() => {},
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '²' => out.push_str("^2"),
            '³' => out.push_str("^3"),
            c => out.push(c),
        }
    }
    out
}

/// A formula pattern compiled for matching.
#[derive(Debug, Clone)]
struct CompiledFormula {
    name: String,
    pattern: String,
    topic: String,
    regex: Regex,
}

impl CompiledFormula {
    /// Scores a match of this formula's pattern starting at `start` in `expr`.
    fn confidence(&self, expr: &str, start: usize) -> f64 {
        let mut confidence = 0.5;
        if self.pattern.chars().count() > 10 {
            confidence += 0.2;
        }
        if start == 0 {
            confidence += 0.1;
        }
        if self.regex.captures_len() > 1 {
            confidence += 0.2;
        }
        // an empty topic is contained in every expression
        if expr.to_lowercase().contains(&self.topic.to_lowercase()) {
            confidence += 0.1;
        }
        f64::min(confidence, 1.0)
    }
}

/// Detects the formulas of a catalog in expressions.
///
/// The patterns of the catalog are compiled once, when the matcher is created. Patterns that fail
/// to compile are skipped.
#[derive(Debug, Clone)]
pub struct FormulaMatcher {
    formulas: Vec<CompiledFormula>,
}

impl FormulaMatcher {
    /// Compiles the patterns of the given catalog.
    pub fn new(catalog: &FormulaCatalog) -> Self {
        let formulas = catalog.all()
            .iter()
            .filter_map(|formula| {
                match RegexBuilder::new(&formula.pattern).case_insensitive(true).build() {
                    Ok(regex) => Some(CompiledFormula {
                        name: formula.name.clone(),
                        pattern: formula.pattern.clone(),
                        topic: formula.topic.clone(),
                        regex,
                    }),
                    Err(err) => {
                        log::warn!("skipping formula {:?}: invalid pattern: {}", formula.name, err);
                        None
                    },
                }
            })
            .collect();
        Self { formulas }
    }

    /// Returns the number of formulas whose pattern compiled successfully.
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Returns true if no formula could be compiled.
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Returns every formula found in the expression, most confident first. Formulas with the
    /// same confidence keep their catalog order.
    pub fn detect(&self, expr: &str) -> Vec<FormulaMatch> {
        let normalized = normalize(expr);
        let mut matches = self.formulas
            .iter()
            .filter_map(|formula| {
                let caps = formula.regex.captures(&normalized)?;
                let start = caps.get(0)?.start();
                let captures = caps.iter()
                    .enumerate()
                    .skip(1)
                    .filter_map(|(i, group)| Some((i, group?.as_str().to_owned())))
                    .collect::<BTreeMap<_, _>>();

                Some(FormulaMatch {
                    formula_name: formula.name.clone(),
                    pattern: formula.pattern.clone(),
                    matched_expression: normalized.clone(),
                    captures,
                    confidence: formula.confidence(&normalized, start),
                })
            })
            .collect::<Vec<_>>();

        matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        matches
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use pretty_assertions::assert_eq;
    use crate::formula::FormulaDefinition;
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(normalize(" (a × b) ÷ c² + d³ "), "(a*b)/c^2+d^3");
    }

    #[test]
    fn perfect_square() {
        let matcher = FormulaMatcher::new(&FormulaCatalog::builtin());
        let matches = matcher.detect("(x + y)^2");
        let top = &matches[0];
        assert_eq!(top.formula_name, "Perfect Square (a+b)²");
        assert_eq!(top.matched_expression, "(x+y)^2");
        assert_eq!(top.captures, BTreeMap::from([(1, "x".to_string()), (2, "y".to_string())]));
        assert!(top.confidence > 0.7);
    }

    #[test]
    fn case_insensitive() {
        let matcher = FormulaMatcher::new(&FormulaCatalog::builtin());
        let names = matcher.detect("SIN(2*x)")
            .into_iter()
            .map(|m| m.formula_name)
            .collect::<Vec<_>>();
        assert!(names.contains(&"Double Angle Sine".to_string()));
    }

    #[test]
    fn invalid_pattern_is_skipped() {
        let catalog = FormulaCatalog::new(vec![
            FormulaDefinition::new("Broken", "(", "", 6, "Misc", "", ""),
            FormulaDefinition::new("Plus", r"\+", "", 6, "Misc", "", ""),
        ]);
        let matcher = FormulaMatcher::new(&catalog);
        assert_eq!(matcher.len(), 1);
        assert_eq!(matcher.detect("1+2")[0].formula_name, "Plus");
    }

    #[test]
    fn scoring() {
        let catalog = FormulaCatalog::new(vec![
            FormulaDefinition::new("Short", r"\+", "", 6, "Misc", "", ""),
            FormulaDefinition::new("Topical", r"(x)\+(y)", "", 6, "Misc", "", "x"),
            FormulaDefinition::new("Long", r"([a-z])\s*\+\s*([a-z])", "", 6, "Misc", "", "Algebra"),
        ]);
        let matches = FormulaMatcher::new(&catalog).detect("1+x+y");
        let scores = matches.iter()
            .map(|m| (m.formula_name.as_str(), m.confidence))
            .collect::<Vec<_>>();

        // "Topical" has a short pattern (8 characters), captures, and its topic present: 0.8
        // "Long" has a long pattern and captures: 0.9
        // "Short" starts after the first character, and has no topic: 0.6
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0].0, "Long");
        assert_eq!(scores[1].0, "Topical");
        assert_eq!(scores[2].0, "Short");
        assert_float_absolute_eq!(scores[2].1, 0.6, 1e-9);
        for (_, confidence) in scores {
            assert!((0.0..=1.0).contains(&confidence));
        }
    }

    #[test]
    fn no_matches() {
        let matcher = FormulaMatcher::new(&FormulaCatalog::builtin());
        assert!(matcher.detect("42").is_empty());
    }
}
