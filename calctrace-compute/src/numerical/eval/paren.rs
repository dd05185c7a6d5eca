use calctrace_parser::parser::ast::paren::Paren;
use crate::numerical::{ctxt::Ctxt, step::ComputationStep, value::Value};
use crate::symbolic::StepCollector;
use super::Eval;

impl Eval for Paren {
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value {
        let value = self.expr.eval(ctxt);
        ctxt.record(format!("({})", value), &value, "parentheses", || {
            format!("Evaluated expression in parentheses: {}", self.expr)
        });
        value
    }
}
