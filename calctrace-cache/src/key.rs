/// Builds the cache key of an expression evaluated with the given variable bindings.
///
/// The bindings are sorted by name, so the key does not depend on the iteration order of the map
/// they came from.
///
/// ```
/// use calctrace_cache::binding_key;
/// use std::collections::HashMap;
///
/// let bindings = HashMap::from([("y".to_string(), 3.0), ("x".to_string(), 5.0)]);
/// assert_eq!(
///     binding_key("x + y", bindings.iter().map(|(k, v)| (k, *v))),
///     r#"x + y|{"x": 5.0, "y": 3.0}"#,
/// );
/// ```
pub fn binding_key<K: AsRef<str>>(
    expression: &str,
    bindings: impl IntoIterator<Item = (K, f64)>,
) -> String {
    let mut bindings = bindings.into_iter().collect::<Vec<_>>();
    bindings.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));

    let pairs = bindings.iter()
        .map(|(name, value)| format!("{:?}: {:?}", name.as_ref(), value))
        .collect::<Vec<_>>();
    format!("{}|{{{}}}", expression, pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn empty_bindings() {
        assert_eq!(binding_key("1 + 1", Vec::<(&str, f64)>::new()), "1 + 1|{}");
    }

    #[test]
    fn order_independent() {
        let a = binding_key("x", [("b", 1.0), ("a", 2.5)]);
        let b = binding_key("x", [("a", 2.5), ("b", 1.0)]);
        assert_eq!(a, b);
        assert_eq!(a, r#"x|{"a": 2.5, "b": 1.0}"#);
    }

    #[test]
    fn values_distinguish_keys() {
        assert_ne!(binding_key("x", [("x", 1.0)]), binding_key("x", [("x", 2.0)]));
    }
}
