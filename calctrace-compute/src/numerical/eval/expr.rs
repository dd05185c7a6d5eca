use calctrace_parser::parser::ast::expr::Expr;
use crate::numerical::{ctxt::Ctxt, step::ComputationStep, value::Value};
use crate::symbolic::StepCollector;
use super::Eval;

impl Eval for Expr {
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value {
        let key = self.to_string();
        if let Some(value) = ctxt.memoized(&key) {
            ctxt.record(key, &value, "cached_result", || format!("Cached result: {}", value));
            return value;
        }

        // only grouping nodes nest; a chain of binary operators counts as one level
        let nests = !matches!(self, Expr::Number(_) | Expr::Variable(_) | Expr::Binary(_));
        if nests {
            if let Err(err) = ctxt.enter() {
                return ctxt.fail(key, err);
            }
        }

        let value = match self {
            Expr::Number(num) => num.eval(ctxt),
            Expr::Variable(sym) => sym.eval(ctxt),
            Expr::Paren(paren) => paren.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Derivative(derivative) => derivative.eval(ctxt),
            Expr::Integral(integral) => integral.eval(ctxt),
        };

        if nests {
            ctxt.leave();
        }
        ctxt.memoize(key, value.clone());
        value
    }
}
