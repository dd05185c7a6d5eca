use levenshtein::levenshtein;
use super::{builtin, FormulaDefinition};

/// Names within this edit distance of a requested name are offered as suggestions.
const MAX_SUGGESTION_DISTANCE: usize = 4;

/// An ordered collection of [`FormulaDefinition`]s.
///
/// The order of the catalog is the order in which formulas were added, and is preserved by every
/// query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaCatalog {
    formulas: Vec<FormulaDefinition>,
}

impl FormulaCatalog {
    /// Creates a catalog from the given formulas.
    pub fn new(formulas: Vec<FormulaDefinition>) -> Self {
        Self { formulas }
    }

    /// Creates a catalog holding the built-in formulas.
    pub fn builtin() -> Self {
        Self::new(builtin::formulas())
    }

    /// Adds a formula to the end of the catalog.
    pub fn add(&mut self, formula: FormulaDefinition) {
        self.formulas.push(formula);
    }

    /// Returns every formula in the catalog.
    pub fn all(&self) -> &[FormulaDefinition] {
        &self.formulas
    }

    /// Returns the number of formulas in the catalog.
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Returns true if the catalog holds no formulas.
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn by_grade(&self, grade: u8) -> Vec<&FormulaDefinition> {
        self.formulas.iter().filter(|f| f.grade == grade).collect()
    }

    /// Returns the formulas in the given category, compared case-insensitively.
    pub fn by_category(&self, category: &str) -> Vec<&FormulaDefinition> {
        self.formulas
            .iter()
            .filter(|f| f.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Returns the formulas with the given topic, compared case-insensitively.
    pub fn by_topic(&self, topic: &str) -> Vec<&FormulaDefinition> {
        self.formulas
            .iter()
            .filter(|f| f.topic.eq_ignore_ascii_case(topic))
            .collect()
    }

    /// Returns the formulas whose name, description, topic, or category contains the query,
    /// ignoring case.
    pub fn search(&self, query: &str) -> Vec<&FormulaDefinition> {
        let query = query.to_lowercase();
        self.formulas
            .iter()
            .filter(|f| {
                [&f.name, &f.description, &f.topic, &f.category]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Returns the formula with exactly the given name.
    pub fn by_name(&self, name: &str) -> Option<&FormulaDefinition> {
        self.formulas.iter().find(|f| f.name == name)
    }

    /// Returns the distinct categories of the catalog, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for formula in &self.formulas {
            if !categories.contains(&formula.category.as_str()) {
                categories.push(&formula.category);
            }
        }
        categories
    }

    /// Returns the names of formulas similar to the given name, closest first.
    pub fn suggest(&self, name: &str) -> Vec<&str> {
        let name = name.to_lowercase();
        let mut similar = self.formulas
            .iter()
            .map(|f| (levenshtein(&name, &f.name.to_lowercase()), f.name.as_str()))
            .filter(|(distance, _)| *distance < MAX_SUGGESTION_DISTANCE)
            .collect::<Vec<_>>();
        similar.sort_by_key(|(distance, _)| *distance);
        similar.into_iter().map(|(_, name)| name).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn small() -> FormulaCatalog {
        FormulaCatalog::new(vec![
            FormulaDefinition::new("Power of Zero", r"([a-z])\^0", "1", 7, "Powers", "Any number to power 0", "Powers"),
            FormulaDefinition::new("Tangent", r"tan\(([a-z])\)", "sin/cos", 10, "Trigonometry", "Tangent function", "Trigonometry"),
            FormulaDefinition::new("Power of One", r"([a-z])\^1", r"\1", 7, "Powers", "Any number to power 1", "Powers"),
        ])
    }

    #[test]
    fn builtin_is_populated() {
        let catalog = FormulaCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.by_name("Perfect Square (a+b)²").is_some());
        for category in ["Algebraic Identities", "Trigonometry", "Logarithms", "Roots", "Calculus", "Geometry"] {
            assert!(!catalog.by_category(category).is_empty(), "missing {}", category);
        }
    }

    #[test]
    fn builtin_names_are_unique() {
        let catalog = FormulaCatalog::builtin();
        let mut names = catalog.all().iter().map(|f| &f.name).collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn queries() {
        let catalog = small();
        assert_eq!(catalog.by_grade(7).len(), 2);
        assert_eq!(catalog.by_category("powers").len(), 2);
        assert_eq!(catalog.by_topic("TRIGONOMETRY")[0].name, "Tangent");
        assert_eq!(catalog.search("function").len(), 1);
        assert_eq!(catalog.search("power").len(), 2);
        assert_eq!(catalog.categories(), vec!["Powers", "Trigonometry"]);
    }

    #[test]
    fn add_appends() {
        let mut catalog = small();
        catalog.add(FormulaDefinition::new("Identity", "x", "x", 6, "Misc", "", ""));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.categories().last(), Some(&"Misc"));
    }

    #[test]
    fn suggestions() {
        let catalog = small();
        assert_eq!(catalog.suggest("tangnet"), vec!["Tangent"]);
        assert_eq!(catalog.suggest("power of one")[0], "Power of One");
        assert_eq!(catalog.suggest("power of zer")[0], "Power of Zero");
        assert!(catalog.suggest("completely unrelated").is_empty());
    }
}
