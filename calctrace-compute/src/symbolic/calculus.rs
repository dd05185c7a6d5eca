//! Textual differentiation and integration rules.
//!
//! The rules work on the canonical text of an expression with all whitespace removed, and try a
//! small fixed table of shapes in order. The first shape that matches produces the result;
//! anything unrecognized is returned as an unevaluated `d/dx(..)` or `∫.. dx` placeholder.

use once_cell::sync::Lazy;
use regex::Regex;

/// A bare power of an identifier, such as `x^2`, `(x^3)` or `x^(-1)`.
static POWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?([A-Za-z_][A-Za-z0-9_]*)\^(?:(-?\d+)|\((-?\d+)\))\)?$").unwrap()
});

/// A plain numeric literal, such as `3`, `2.5` or `-4`.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Removes all whitespace from the text.
fn compact(expr: &str) -> String {
    expr.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_number(expr: &str) -> bool {
    NUMBER.is_match(expr)
}

/// If the text is a power of `var` with an integer exponent, returns the exponent.
fn power_of(var: &str, expr: &str) -> Option<i64> {
    let caps = POWER.captures(expr)?;
    if &caps[1] != var {
        return None;
    }
    caps.get(2)
        .or_else(|| caps.get(3))
        .and_then(|exp| exp.as_str().parse().ok())
}

/// Splits the text at every occurrence of `op` outside of parentheses.
fn split_top_level(expr: &str, op: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in expr.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            c if c == op && depth == 0 => {
                parts.push(&expr[start..i]);
                start = i + c.len_utf8();
            },
            _ => {},
        }
    }
    parts.push(&expr[start..]);
    parts
}

/// The derivative of `var^n`.
fn power_derivative(var: &str, n: i64) -> String {
    match n {
        1 => "1".to_string(),
        0 => "0".to_string(),
        _ => format!("{}*{}^{}", n, var, n - 1),
    }
}

/// The antiderivative of `var^n`, without the constant of integration.
fn power_antiderivative(var: &str, n: i64) -> String {
    if n == -1 {
        format!("ln({})", var)
    } else {
        format!("{}^{}/{}", var, n + 1, n + 1)
    }
}

/// Rules 1 to 3: powers, constants, and the bare variable.
fn simple_derivative(var: &str, expr: &str) -> Option<String> {
    if let Some(n) = power_of(var, expr) {
        Some(power_derivative(var, n))
    } else if is_number(expr) {
        Some("0".to_string())
    } else if expr == var {
        Some("1".to_string())
    } else {
        None
    }
}

fn simple_antiderivative(var: &str, expr: &str) -> Option<String> {
    if let Some(n) = power_of(var, expr) {
        Some(power_antiderivative(var, n))
    } else if is_number(expr) {
        Some(format!("{}*{}", expr, var))
    } else if expr == var {
        Some(format!("{}^2/2", var))
    } else {
        None
    }
}

/// The derivative of a product of exactly two factors whose shape is `var*c`, `c*var` or
/// `var*var`.
fn product_derivative(var: &str, f: &str, g: &str) -> Option<String> {
    if f == var && is_number(g) {
        Some(g.to_string())
    } else if g == var && is_number(f) {
        Some(f.to_string())
    } else if f == var && g == var {
        Some(format!("2*{}", var))
    } else {
        None
    }
}

fn product_antiderivative(var: &str, f: &str, g: &str) -> Option<String> {
    if f == var && is_number(g) {
        Some(format!("{}*{}^2/2", g, var))
    } else if g == var && is_number(f) {
        Some(format!("{}*{}^2/2", f, var))
    } else if f == var && g == var {
        Some(format!("{}^3/3", var))
    } else {
        None
    }
}

/// Returns the two factors if the text is a top-level product of exactly two factors.
fn two_factors(expr: &str) -> Option<(&str, &str)> {
    match split_top_level(expr, '*').as_slice() {
        [f, g] if !f.is_empty() && !g.is_empty() => Some((f, g)),
        _ => None,
    }
}

/// Returns the addends if the text is a top-level sum of at least two terms.
fn addends(expr: &str) -> Option<Vec<&str>> {
    let parts = split_top_level(expr, '+');
    if parts.len() < 2 || parts.iter().any(|part| part.is_empty()) {
        return None;
    }
    Some(parts)
}

/// Differentiates the canonical text of an expression with respect to `var`.
///
/// ```
/// use calctrace_compute::symbolic::calculus::differentiate;
///
/// assert_eq!(differentiate("x", "x ^ 2"), "2*x^1");
/// assert_eq!(differentiate("x", "sin(x)"), "cos(x)");
/// assert_eq!(differentiate("x", "sin(2 * x)"), "d/dx(sin(2 * x))");
/// ```
pub fn differentiate(var: &str, expr: &str) -> String {
    let text = compact(expr);

    if let Some(result) = simple_derivative(var, &text) {
        return result;
    }

    if let Some(parts) = addends(&text) {
        return parts.into_iter()
            .map(|part| {
                simple_derivative(var, part)
                    .or_else(|| two_factors(part).and_then(|(f, g)| product_derivative(var, f, g)))
                    .unwrap_or_else(|| format!("d/d{}({})", var, part))
            })
            .collect::<Vec<_>>()
            .join(" + ");
    }

    if let Some((f, g)) = two_factors(&text) {
        return product_derivative(var, f, g).unwrap_or_else(|| {
            let df = simple_derivative(var, f).unwrap_or_else(|| format!("d/d{}({})", var, f));
            let dg = simple_derivative(var, g).unwrap_or_else(|| format!("d/d{}({})", var, g));
            format!("{}*{} + {}*{}", f, dg, g, df)
        });
    }

    let table = [
        ("sin", format!("cos({})", var)),
        ("cos", format!("-sin({})", var)),
        ("tan", format!("sec^2({})", var)),
        ("exp", format!("exp({})", var)),
        ("ln", format!("1/{}", var)),
        ("sqrt", format!("1/(2*sqrt({}))", var)),
        ("log", format!("1/({}*ln(10))", var)),
    ];
    for (name, result) in table {
        if text == format!("{}({})", name, var) {
            return result;
        }
    }

    format!("d/d{}({})", var, expr)
}

/// Integrates the canonical text of an expression with respect to `var`. The result of a rule
/// that applies includes the constant of integration `C`.
///
/// ```
/// use calctrace_compute::symbolic::calculus::integrate;
///
/// assert_eq!(integrate("x", "x ^ 2"), "x^3/3 + C");
/// assert_eq!(integrate("x", "x ^ 2 + 3"), "x^3/3 + 3*x + C");
/// assert_eq!(integrate("x", "x * sin(x)"), "∫x * sin(x) dx");
/// ```
pub fn integrate(var: &str, expr: &str) -> String {
    let text = compact(expr);

    if let Some(result) = simple_antiderivative(var, &text) {
        return format!("{} + C", result);
    }

    if let Some(parts) = addends(&text) {
        let terms = parts.into_iter()
            .map(|part| {
                simple_antiderivative(var, part)
                    .or_else(|| two_factors(part).and_then(|(f, g)| product_antiderivative(var, f, g)))
                    .unwrap_or_else(|| format!("∫{} d{}", part, var))
            })
            .collect::<Vec<_>>();
        return format!("{} + C", terms.join(" + "));
    }

    if let Some((f, g)) = two_factors(&text) {
        return match product_antiderivative(var, f, g) {
            Some(result) => format!("{} + C", result),
            None => format!("∫{} d{}", expr, var),
        };
    }

    let table = [
        (format!("sin({})", var), format!("-cos({})", var)),
        (format!("cos({})", var), format!("sin({})", var)),
        (format!("tan({})", var), format!("-ln(cos({}))", var)),
        (format!("exp({})", var), format!("exp({})", var)),
        (format!("1/{}", var), format!("ln({})", var)),
        (format!("sqrt({})", var), format!("(2/3)*{}^(3/2)", var)),
        (format!("ln({})", var), format!("{v}*ln({v}) - {v}", v = var)),
        (format!("log({})", var), format!("{v}*log({v}) - {v}/ln(10)", v = var)),
    ];
    for (integrand, result) in table {
        if text == integrand {
            return format!("{} + C", result);
        }
    }

    format!("∫{} d{}", expr, var)
}
