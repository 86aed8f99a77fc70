use std::rc::Rc;

use log::trace;

use crate::{
    ast::{Body, Expr},
    interpreter::{
        environment::Context, evaluator::core::EvalResult, position::Position, value::core::Value,
    },
};

impl Context {
    /// Evaluates a `FOR` loop.
    ///
    /// `start`, `end` and `step` are evaluated once, before the first
    /// iteration; `step` defaults to `1`. The direction comes from the sign of
    /// the step: a non-negative step runs while the variable is below `end`, a
    /// negative step runs while it is above `end`. The bound is exclusive, so
    /// `FOR i = 5 TO 1 THEN i` runs zero times while
    /// `FOR i = 5 TO 1 STEP -1 THEN i` yields `5, 4, 3, 2`.
    ///
    /// Each iteration binds the loop variable in the current scope, not in a
    /// scope of its own, so it remains visible after the loop with the last
    /// value it was given. A block body contributes its first statement's
    /// value per iteration.
    ///
    /// # Returns
    /// A list with one value per iteration.
    ///
    /// # Example
    /// ```
    /// use pilcrow::{get_result, interpreter::value::core::Value};
    ///
    /// let result = get_result("FOR i = -3 TO 2 THEN i").unwrap();
    /// let expected: Vec<Value> = (-3..2).map(|i| Value::Number(f64::from(i))).collect();
    ///
    /// assert_eq!(result, Value::from(vec![Value::from(expected)]));
    /// ```
    pub(crate) fn eval_for(self: &Rc<Self>,
                           var: &str,
                           start: &Expr,
                           end: &Expr,
                           step: Option<&Expr>,
                           body: &Body,
                           position: Position)
                           -> EvalResult<Value> {
        let start = self.eval_bound(start, "FOR start")?;
        let end = self.eval_bound(end, "FOR end")?;
        let step = match step {
            Some(step) => self.eval_bound(step, "FOR step")?,
            None => 1.0,
        };

        let ascending = step >= 0.0;
        let mut results = Vec::new();
        let mut i = start;

        while if ascending { i < end } else { i > end } {
            self.set_variable(var, Value::Number(i));
            i += step;
            results.push(self.eval_body(body)?);
        }

        trace!("FOR {var} at {position} ran {} iterations", results.len());
        Ok(Value::from(results))
    }

    /// Evaluates a loop bound, which must be a number.
    fn eval_bound(self: &Rc<Self>, expr: &Expr, operation: &str) -> EvalResult<f64> {
        self.eval(expr)?
            .as_number(operation, expr.position())
            .map_err(|error| error.with_context(self))
    }
}
