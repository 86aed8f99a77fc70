use std::rc::Rc;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        environment::Context,
        evaluator::{core::EvalResult, utils::unsupported_unary},
        position::Position,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates the operand of a prefix node, then applies the operator.
    pub(crate) fn eval_unary_op(self: &Rc<Self>,
                                op: UnaryOperator,
                                operand: &Expr,
                                position: Position)
                                -> EvalResult<Value> {
        let value = self.eval(operand)?;
        Self::eval_unary(op, &value, position).map_err(|error| error.with_context(self))
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns a number unchanged.
    /// - `Negate`: numeric negation.
    /// - `Not`: logical negation of a number or string by truthiness, giving
    ///   `1` or `0`.
    ///
    /// # Errors
    /// `UnsupportedOperand` for any other operand kind.
    ///
    /// # Example
    /// ```
    /// use pilcrow::{
    ///     ast::UnaryOperator,
    ///     interpreter::{environment::Context, position::Position, value::core::Value},
    /// };
    ///
    /// let at = Position::start();
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), at).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::from(""), at).unwrap();
    /// assert_eq!(v, Value::Number(1.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, Value::Number(n)) => Ok(Value::Number(*n)),
            (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
            (UnaryOperator::Not, _) => match value.truthiness() {
                Some(truth) => Ok(Value::from(!truth)),
                None => Err(unsupported_unary(op, value, position)),
            },
            _ => Err(unsupported_unary(op, value, position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeErrorKind;

    #[test]
    fn not_on_numbers() {
        let at = Position::start();

        assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::Number(0.0), at).unwrap(),
                   Value::from(true));
        assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::Number(3.0), at).unwrap(),
                   Value::from(false));
    }

    #[test]
    fn signs_need_numbers() {
        let at = Position::start();

        for op in [UnaryOperator::Plus, UnaryOperator::Negate] {
            let error = Context::eval_unary(op, &Value::from("1"), at).unwrap_err();
            assert_eq!(error.kind,
                       RuntimeErrorKind::UnsupportedOperand { operation: op.to_string(),
                                                              left:      "string".into(),
                                                              right:     None, });
        }
    }

    #[test]
    fn lists_have_no_negation() {
        let error = Context::eval_unary(UnaryOperator::Not, &Value::from(vec![]), Position::start())
            .unwrap_err();
        assert!(matches!(error.kind, RuntimeErrorKind::UnsupportedOperand { .. }));
    }
}
