use calctrace_parser::parser::ast::literal::{LitNum, LitSym};
use crate::numerical::{ctxt::Ctxt, step::ComputationStep, value::Value};
use crate::symbolic::StepCollector;
use super::Eval;

impl Eval for LitNum {
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value {
        let value = Value::Number(self.value);
        ctxt.record(self.to_string(), &value, "number", || format!("Number value: {}", value));
        value
    }
}

impl Eval for LitSym {
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value {
        match ctxt.get_var(&self.name) {
            Some(bound) => {
                let value = Value::Number(bound);
                ctxt.record(&*self.name, &value, "variable_substitution", || {
                    format!("Substituted {} = {}", self.name, value)
                });
                value
            },
            None => {
                let value = Value::Symbolic(self.name.clone());
                ctxt.record(&*self.name, &value, "variable_symbolic", || {
                    format!("Variable {} kept symbolic", self.name)
                });
                value
            },
        }
    }
}
