use calctrace_parser::parser::ast::call::Call;
use crate::funcs;
use crate::numerical::{ctxt::Ctxt, error::EvalError, step::ComputationStep, value::Value};
use crate::symbolic::StepCollector;
use super::Eval;

impl Eval for Call {
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value {
        let name = self.name.name.as_str();
        let arg = self.arg.eval(ctxt);
        let expression = format!("{}({})", name, arg);

        let Some(num) = arg.as_number() else {
            let value = Value::Symbolic(expression.clone());
            ctxt.record(expression, &value, "symbolic_function", || {
                format!("Kept {} of symbolic argument {}", name, arg)
            });
            return value;
        };

        let Some(func) = funcs::get(name) else {
            let value = Value::Symbolic(expression.clone());
            ctxt.record(expression, &value, "unknown_function", || match funcs::suggest(name) {
                Some(suggestion) => format!("Unknown function {} (did you mean {}?)", name, suggestion),
                None => format!("Unknown function {}", name),
            });
            return value;
        };

        match func.eval(num) {
            Ok(result) if result.is_finite() => {
                let value = Value::Number(result);
                ctxt.record(expression, &value, func.name(), || {
                    format!("{} of {}", func.description(), arg)
                });
                value
            },
            Ok(_) => ctxt.fail(expression, EvalError::FunctionOverflow { name: func.name(), arg: num }),
            Err(err) => ctxt.fail(expression, err),
        }
    }
}
