use std::rc::Rc;

use crate::{
    ast::{Body, IfCase},
    interpreter::{environment::Context, evaluator::core::EvalResult, value::core::Value},
};

impl Context {
    /// Evaluates an `IF` chain.
    ///
    /// Conditions are evaluated in order until one is true; only that branch
    /// is evaluated. Without a true condition the `ELSE` body is evaluated if
    /// present, otherwise the result is `NULL` (`0`).
    ///
    /// # Errors
    /// A condition that is neither a number nor a string is an
    /// `UnsupportedOperand` error; errors from the evaluated expressions are
    /// propagated.
    pub(crate) fn eval_if(self: &Rc<Self>,
                          cases: &[IfCase],
                          else_case: Option<&Body>)
                          -> EvalResult<Value> {
        for case in cases {
            let condition = self.eval(&case.condition)?;
            let holds = condition.as_condition(case.condition.position())
                                 .map_err(|error| error.with_context(self))?;
            if holds {
                return self.eval_body(&case.body);
            }
        }

        match else_case {
            Some(body) => self.eval_body(body),
            None => Ok(Value::NULL),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{get_result, interpreter::value::core::Value};

    fn last(source: &str) -> Value {
        match get_result(source).unwrap() {
            Value::List(values) => values.last().cloned().unwrap(),
            other => panic!("program produced {other}"),
        }
    }

    #[test]
    fn first_true_case_wins() {
        assert_eq!(last("IF 0 THEN 1 ELIF 1 THEN 2 ELIF 1 THEN 3 ELSE 4"), Value::Number(2.0));
        assert_eq!(last("IF 0 THEN 1 ELIF 0 THEN 2 ELIF 1 THEN 3 ELSE 4"), Value::Number(3.0));
    }

    #[test]
    fn no_match_without_else_is_null() {
        assert_eq!(last("IF 0 THEN 1 ELIF \"\" THEN 2"), Value::NULL);
    }

    #[test]
    fn only_the_matching_branch_runs() {
        assert_eq!(last("IF 1 THEN VAR x = 1 ELSE VAR y = 2\nx"), Value::Number(1.0));
        assert!(get_result("IF 1 THEN VAR x = 1 ELSE VAR y = 2\ny").is_err());
    }

    #[test]
    fn block_branch_yields_its_first_statement() {
        assert_eq!(last("IF 1 != 1 THEN\n\"SI\"\nELSE\n\"NO\"\n\"ignored\"\nEND"),
                   Value::from("NO"));
    }

    #[test]
    fn list_condition_is_an_error() {
        assert!(get_result("IF [] THEN 1").is_err());
    }
}
