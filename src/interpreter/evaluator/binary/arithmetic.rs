use crate::{
    ast::BinaryOperator,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        environment::Context,
        evaluator::{core::EvalResult, utils::unsupported},
        position::Position,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation between two numbers.
    ///
    /// Division by exactly zero is an error rather than an infinity or NaN.
    /// The operator must be one of `Add`, `Sub`, `Mul`, `Div` or `Pow`; other
    /// operators are not processed here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operation, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed number.
    ///
    /// # Example
    /// ```
    /// use pilcrow::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Context, position::Position, value::core::Value},
    /// };
    ///
    /// let x = Value::Number(2.0);
    /// let y = Value::Number(10.0);
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Pow, &x, &y, Position::start());
    /// assert_eq!(result.unwrap(), Value::Number(1024.0));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: Position)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let (Value::Number(a), Value::Number(b)) = (left, right) else {
            return Err(unsupported(op, left, right, position));
        };

        Ok(Value::Number(match op {
                             Add => a + b,
                             Sub => a - b,
                             Mul => a * b,
                             Div => {
                                 if *b == 0.0 {
                                     return Err(RuntimeError::new(RuntimeErrorKind::DivisionByZero,
                                                                  position));
                                 }
                                 a / b
                             },
                             Pow => a.powf(*b),
                             _ => return Err(unsupported(op, left, right, position)),
                         }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
        Context::eval_arithmetic(op, &Value::Number(a), &Value::Number(b), Position::start())
    }

    #[test]
    fn numeric_operations() {
        assert_eq!(number(BinaryOperator::Add, 1.5, 2.0).unwrap(), Value::Number(3.5));
        assert_eq!(number(BinaryOperator::Sub, 1.0, 3.0).unwrap(), Value::Number(-2.0));
        assert_eq!(number(BinaryOperator::Mul, 4.0, 2.5).unwrap(), Value::Number(10.0));
        assert_eq!(number(BinaryOperator::Div, 6.0, 3.0).unwrap(), Value::Number(2.0));
        assert_eq!(number(BinaryOperator::Pow, 2.0, 3.0).unwrap(), Value::Number(8.0));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let error = number(BinaryOperator::Div, 6.0, 0.0).unwrap_err();
        assert_eq!(error.kind, RuntimeErrorKind::DivisionByZero);

        let error = number(BinaryOperator::Div, 6.0, -0.0).unwrap_err();
        assert_eq!(error.kind, RuntimeErrorKind::DivisionByZero);
    }

    #[test]
    fn strings_do_not_multiply() {
        let error = Context::eval_arithmetic(BinaryOperator::Mul,
                                             &Value::from("ab"),
                                             &Value::Number(2.0),
                                             Position::start()).unwrap_err();

        assert_eq!(error.kind,
                   RuntimeErrorKind::UnsupportedOperand { operation: "*".into(),
                                                          left:      "string".into(),
                                                          right:     Some("number".into()), });
    }
}
