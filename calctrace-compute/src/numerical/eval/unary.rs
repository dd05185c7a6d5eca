use calctrace_parser::parser::{ast::unary::Unary, token::op::UnaryOpKind};
use crate::numerical::{ctxt::Ctxt, step::ComputationStep, value::Value};
use crate::symbolic::StepCollector;
use super::Eval;

impl Eval for Unary {
    fn eval<S: StepCollector<ComputationStep>>(&self, ctxt: &mut Ctxt<S>) -> Value {
        let operand = self.operand.eval(ctxt);
        let expression = format!("{}{}", self.op, operand);
        match operand.as_number() {
            Some(num) => {
                let (value, tag, verb) = match self.op {
                    UnaryOpKind::Neg => (Value::Number(-num), "negation", "Negated"),
                    UnaryOpKind::Pos => (Value::Number(num), "positive", "Kept the sign of"),
                };
                ctxt.record(expression, &value, tag, || format!("{} {}", verb, operand));
                value
            },
            None => {
                let value = Value::Symbolic(expression.clone());
                ctxt.record(expression, &value, "unary_symbolic", || {
                    format!("Applied unary {} to symbolic {}", self.op, operand)
                });
                value
            },
        }
    }
}
