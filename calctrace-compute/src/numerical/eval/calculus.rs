use calctrace_parser::parser::ast::{
    calculus::{Derivative, Integral},
    expr::Expr,
};
use crate::numerical::{ctxt::Ctxt, step::ComputationStep, value::Value};
use crate::symbolic::{calculus, StepCollector};
use super::Eval;

/// The number of sub-intervals used when integrating numerically. Must be even.
const SIMPSON_INTERVALS: usize = 200;

/// Numerically integrates `body` with respect to `var` from `lower` to `upper`, using the
/// composite Simpson's rule. The remaining variables are bound as in `ctxt`.
///
/// Returns [`None`] if the body does not evaluate to a finite number at every sample point.
pub fn simpson<S>(
    body: &Expr,
    var: &str,
    lower: f64,
    upper: f64,
    ctxt: &Ctxt<S>,
) -> Option<f64> {
    let sample = |x: f64| {
        let mut bindings = ctxt.bindings().clone();
        bindings.insert(var.to_owned(), x);
        let mut sub = Ctxt::<()>::new(bindings).with_max_depth(ctxt.max_depth());
        body.eval(&mut sub)
            .as_number()
            .filter(|y| y.is_finite())
    };

    let step = (upper - lower) / SIMPSON_INTERVALS as f64;
    let mut sum = sample(lower)? + sample(upper)?;
    for i in 1..SIMPSON_INTERVALS {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * sample(lower + i as f64 * step)?;
    }
    Some(sum * step / 3.0)
}

impl Eval for Derivative {
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value {
        let inner = self.expr.innermost().to_string();
        let value = Value::from_rule_text(calculus::differentiate(&self.var, &inner));
        ctxt.record(self.to_string(), &value, "derivative", || {
            format!("Differentiated {} with respect to {}", inner, self.var)
        });
        value
    }
}

impl Eval for Integral {
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value {
        let inner = self.expr.innermost().to_string();

        let Some(bounds) = &self.bounds else {
            let value = Value::from_rule_text(calculus::integrate(&self.var, &inner));
            ctxt.record(self.to_string(), &value, "integral", || {
                format!("Integrated {} with respect to {}", inner, self.var)
            });
            return value;
        };

        let lower = bounds.lower.eval(ctxt);
        let upper = bounds.upper.eval(ctxt);
        let expression = format!("∫_{}^{} {} d{}", lower, upper, inner, self.var);

        let area = match (lower.as_number(), upper.as_number()) {
            (Some(lo), Some(hi)) => simpson(&self.expr, &self.var, lo, hi, ctxt),
            _ => None,
        };
        match area {
            Some(area) => {
                let value = Value::Number(area);
                ctxt.record(expression, &value, "definite_integral", || {
                    format!(
                        "Integrated {} from {} to {} with respect to {} using Simpson's rule",
                        inner, lower, upper, self.var,
                    )
                });
                value
            },
            None => {
                let value = Value::Symbolic(expression.clone());
                ctxt.record(expression, &value, "integral", || {
                    format!("Kept the integral of {} from {} to {} symbolic", inner, lower, upper)
                });
                value
            },
        }
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
    use calctrace_parser::parser::parse;
    use crate::numerical::ctxt::Bindings;
    use super::*;

    #[test]
    fn simpson_sine() {
        let body = parse("sin(x)").unwrap();
        let ctxt = Ctxt::<()>::default();
        let area = simpson(&body, "x", 0.0, std::f64::consts::PI, &ctxt).unwrap();
        assert_float_absolute_eq!(area, 2.0, 1e-6);
    }

    #[test]
    fn simpson_uses_outer_bindings() {
        let body = parse("a * x").unwrap();
        let ctxt = Ctxt::<()>::new(Bindings::from([("a".to_string(), 2.0)]));
        let area = simpson(&body, "x", 0.0, 1.0, &ctxt).unwrap();
        assert_float_absolute_eq!(area, 1.0, 1e-9);
    }

    #[test]
    fn simpson_rejects_symbolic_body() {
        let body = parse("x * y").unwrap();
        assert_eq!(simpson(&body, "x", 0.0, 1.0, &Ctxt::<()>::default()), None);
    }

    #[test]
    fn simpson_rejects_singularity() {
        let body = parse("1 / x").unwrap();
        assert_eq!(simpson(&body, "x", 0.0, 1.0, &Ctxt::<()>::default()), None);
    }
}
