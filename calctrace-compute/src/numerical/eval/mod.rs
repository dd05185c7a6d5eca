mod binary;
mod calculus;
mod call;
mod expr;
mod literal;
mod paren;
mod unary;

use crate::symbolic::StepCollector;
use super::{ctxt::Ctxt, step::ComputationStep, value::Value};

pub use calculus::simpson;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context. Every node visited
    /// records one step into the context.
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value;

    /// Evaluate the expression to produce a value, using a default context that discards the
    /// steps.
    fn eval_default(&self) -> Value {
        self.eval(&mut Ctxt::<()>::default())
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use calctrace_parser::parser::parse;
    use crate::numerical::{ctxt::Bindings, evaluate};
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval_str(source: &str) -> Value {
        parse(source).unwrap().eval_default()
    }

    fn bindings(pairs: &[(&str, f64)]) -> Bindings {
        pairs.iter().map(|(name, value)| (name.to_string(), *value)).collect()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval_str("1 + 2"), Value::Number(3.0));
        assert_eq!(eval_str("2 + 3 * 4"), Value::Number(14.0));
        assert_eq!(eval_str("10 - 4 - 3"), Value::Number(3.0));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval_str("((1 + 9) / 5) * 3"), Value::Number(6.0));
    }

    #[test]
    fn power_is_left_associative() {
        assert_eq!(eval_str("2 ^ 3 ^ 2"), Value::Number(64.0));
    }

    #[test]
    fn unary() {
        assert_eq!(eval_str("-3 + 5"), Value::Number(2.0));
        assert_eq!(eval_str("+4"), Value::Number(4.0));
        assert_eq!(eval_str("-(-2)"), Value::Number(2.0));
    }

    #[test]
    fn modulo_follows_sign_of_divisor() {
        assert_eq!(eval_str("7 % 3"), Value::Number(1.0));
        assert_eq!(eval_str("-7 % 3"), Value::Number(2.0));
        assert_eq!(eval_str("7 % -3"), Value::Number(-2.0));
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(eval_str("sin(0) + cos(0)").as_number().unwrap(), 1.0);
        assert_eq!(eval_str("sqrt(16)"), Value::Number(4.0));
        assert_eq!(eval_str("factorial(5)"), Value::Number(120.0));
        assert_eq!(eval_str("round(2.5)"), Value::Number(2.0));
        assert_eq!(eval_str("abs(-3)"), Value::Number(3.0));
    }

    #[test]
    fn domain_errors_become_symbolic() {
        assert_eq!(
            eval_str("sqrt(-1)"),
            Value::Symbolic("Error: Cannot take square root of negative number -1".to_string()),
        );
        assert_eq!(
            eval_str("1 / 0"),
            Value::Symbolic("Error: Division by zero (1 / 0)".to_string()),
        );
        assert_eq!(
            eval_str("5 % 0"),
            Value::Symbolic("Error: Modulo by zero (5 % 0)".to_string()),
        );
    }

    #[test]
    fn error_propagates_as_symbolic_operand() {
        assert_eq!(
            eval_str("1 / 0 + 1"),
            Value::Symbolic("(Error: Division by zero (1 / 0) + 1)".to_string()),
        );
    }

    #[test]
    fn power_guards() {
        assert_eq!(eval_str("(-8) ^ 0.5"), Value::Symbolic("(-8)^0.5".to_string()));
        assert_eq!(
            eval_str("2 ^ 1001"),
            Value::Symbolic("Error: Power too large (2^1001)".to_string()),
        );
        assert_eq!(
            eval_str("0 ^ (-1)"),
            Value::Symbolic("Error: Cannot raise 0 to negative power -1".to_string()),
        );
        assert_eq!(
            eval_str("10 ^ 400"),
            Value::Symbolic("Error: Power overflow (10^400)".to_string()),
        );
        assert_eq!(
            eval_str("10 ^ 60"),
            Value::Symbolic("Warning: Power result extremely large (10^60)".to_string()),
        );
    }

    #[test]
    fn variables() {
        let expr = parse("x + y").unwrap();
        let (value, steps) = evaluate(&expr, &bindings(&[("x", 5.0), ("y", 3.0)]));
        assert_eq!(value, Value::Number(8.0));
        assert_eq!(
            steps.iter().map(|s| s.operation.as_str()).collect::<Vec<_>>(),
            vec!["variable_substitution", "variable_substitution", "addition"],
        );
        assert_eq!(steps[0].explanation, "Substituted x = 5");
    }

    #[test]
    fn unbound_variable_stays_symbolic() {
        let (value, steps) = evaluate(&parse("2 * x + 1").unwrap(), &Bindings::new());
        assert_eq!(value, Value::Symbolic("((2 * x) + 1)".to_string()));
        assert_eq!(steps[1].operation, "variable_symbolic");
        assert_eq!(steps[2].operation, "symbolic_operation");
    }

    #[test]
    fn step_numbers_are_sequential() {
        let (_, steps) = evaluate(&parse("(1 + 2) * sqrt(9)").unwrap(), &Bindings::new());
        let numbers = steps.iter().map(|s| s.step_number).collect::<Vec<_>>();
        assert_eq!(numbers, (1..=steps.len()).collect::<Vec<_>>());
        assert_eq!(
            steps.iter().map(|s| s.operation.as_str()).collect::<Vec<_>>(),
            vec!["number", "number", "addition", "parentheses", "number", "sqrt", "multiplication"],
        );
    }

    #[test]
    fn repeated_subexpression_is_memoized() {
        let (value, steps) = evaluate(&parse("(2 + 3) * (2 + 3)").unwrap(), &Bindings::new());
        assert_eq!(value, Value::Number(25.0));
        let cached = steps.iter().filter(|s| s.operation == "cached_result").collect::<Vec<_>>();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].expression, "(2 + 3)");
        assert_eq!(cached[0].explanation, "Cached result: 5");
    }

    #[test]
    fn error_steps_are_tagged() {
        let (_, steps) = evaluate(&parse("sqrt(-4)").unwrap(), &Bindings::new());
        let last = steps.last().unwrap();
        assert!(last.is_error());
        assert!(!last.is_numeric);

        let (_, steps) = evaluate(&parse("10 ^ 60").unwrap(), &Bindings::new());
        assert!(steps.last().unwrap().is_warning());
    }

    #[test]
    fn derivative() {
        assert_eq!(eval_str("d/dx(x^2)"), Value::Symbolic("2*x^1".to_string()));
        assert_eq!(eval_str("d/dx(7)"), Value::Number(0.0));
        assert_eq!(eval_str("d/dx(sin(x))"), Value::Symbolic("cos(x)".to_string()));
    }

    #[test]
    fn indefinite_integral() {
        assert_eq!(eval_str("∫x^2 dx"), Value::Symbolic("x^3/3 + C".to_string()));
        assert_eq!(eval_str("∫cos(x) dx"), Value::Symbolic("sin(x) + C".to_string()));
    }

    #[test]
    fn definite_integral() {
        let (value, steps) = evaluate(&parse("∫_0^3 x^2 dx").unwrap(), &Bindings::new());
        assert_float_absolute_eq!(value.as_number().unwrap(), 9.0, 1e-9);
        assert_eq!(steps.last().unwrap().operation, "definite_integral");
    }

    #[test]
    fn definite_integral_with_symbolic_bound() {
        let value = eval_str("∫_0^b x dx");
        assert_eq!(value, Value::Symbolic("∫_0^b x dx".to_string()));
    }

    #[test]
    fn depth_limit_becomes_error_step() {
        let expr = parse("((((1))))").unwrap();
        let (value, steps) = crate::numerical::evaluate_with_depth(&expr, &Bindings::new(), 3);
        assert_eq!(value, Value::Symbolic("Error: Maximum nesting depth of 3 exceeded".to_string()));
        assert!(steps.iter().any(|s| s.is_error()));
    }

    #[test]
    fn flat_chain_is_not_nested() {
        let expr = parse(&vec!["1"; 300].join(" + ")).unwrap();
        let (value, steps) = crate::numerical::evaluate_with_depth(&expr, &Bindings::new(), 3);
        assert_eq!(value, Value::Number(300.0));
        assert!(steps.iter().all(|s| !s.is_error()));
    }

    #[test]
    fn unary_and_calls_nest() {
        let expr = parse("abs(-(sqrt(4)))").unwrap();
        let (value, _) = crate::numerical::evaluate_with_depth(&expr, &Bindings::new(), 4);
        assert_eq!(value, Value::Number(2.0));
        let (value, steps) = crate::numerical::evaluate_with_depth(&expr, &Bindings::new(), 3);
        assert!(value.to_string().contains("Maximum nesting depth of 3 exceeded"));
        assert_eq!(steps.iter().filter(|s| s.is_error()).count(), 1);
    }
}
