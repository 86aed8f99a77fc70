use crate::{
    ast::BinaryOperator,
    interpreter::{
        environment::Context,
        evaluator::{core::EvalResult, utils::unsupported},
        position::Position,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical operation between two values of the same kind.
    ///
    /// The operands are converted to booleans by truthiness: non-zero numbers
    /// and non-empty strings are true. Supported operators are logical AND and
    /// OR; the result is `1` or `0`.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operation, for error reporting.
    ///
    /// # Example
    /// ```
    /// use pilcrow::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Context, position::Position, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(1.0);
    /// let b = Value::Number(0.0);
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, &a, &b, Position::start());
    /// assert_eq!(result.unwrap(), Value::Number(1.0));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: Position)
                      -> EvalResult<Value> {
        let (Some(a), Some(b)) = (left.truthiness(), right.truthiness()) else {
            return Err(unsupported(op, left, right, position));
        };
        if std::mem::discriminant(left) != std::mem::discriminant(right) {
            return Err(unsupported(op, left, right, position));
        }

        match op {
            BinaryOperator::And => Ok(Value::from(a && b)),
            BinaryOperator::Or => Ok(Value::from(a || b)),
            _ => Err(unsupported(op, left, right, position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeErrorKind;

    #[test]
    fn strings_use_truthiness() {
        let result = Context::eval_logic(BinaryOperator::And,
                                         &Value::from("x"),
                                         &Value::from(""),
                                         Position::start());
        assert_eq!(result.unwrap(), Value::NULL);
    }

    #[test]
    fn mixed_kinds_are_unsupported() {
        let error = Context::eval_logic(BinaryOperator::Or,
                                        &Value::Number(1.0),
                                        &Value::from("x"),
                                        Position::start()).unwrap_err();
        assert!(matches!(error.kind, RuntimeErrorKind::UnsupportedOperand { .. }));
    }
}
