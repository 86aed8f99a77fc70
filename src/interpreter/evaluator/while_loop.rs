use std::rc::Rc;

use log::trace;

use crate::{
    ast::{Body, Expr},
    interpreter::{environment::Context, evaluator::core::EvalResult, value::core::Value},
};

impl Context {
    /// Evaluates a `WHILE` loop.
    ///
    /// The condition is re-evaluated before every iteration, so a loop whose
    /// condition starts false runs zero times. A block body contributes its
    /// first statement's value per iteration.
    ///
    /// # Returns
    /// A list with one value per iteration.
    ///
    /// # Errors
    /// A condition that is neither a number nor a string is an
    /// `UnsupportedOperand` error.
    pub(crate) fn eval_while(self: &Rc<Self>, condition: &Expr, body: &Body) -> EvalResult<Value> {
        let mut results = Vec::new();

        loop {
            let holds = self.eval(condition)?
                            .as_condition(condition.position())
                            .map_err(|error| error.with_context(self))?;
            if !holds {
                break;
            }
            results.push(self.eval_body(body)?);
        }

        trace!("WHILE loop ran {} iterations", results.len());
        Ok(Value::from(results))
    }
}
