use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        environment::Context,
        evaluator::{core::EvalResult, utils::unsupported},
        position::Position,
        value::core::Value,
    },
};

/// Maps a comparison operator and the ordering of its operands to the final
/// boolean.
///
/// An unordered pair (a NaN operand) satisfies only `!=`.
///
/// ## Returns
/// - `Some(bool)`: The outcome, if `op` is a comparison operator.
/// - `None`: For any other operator.
#[must_use]
pub fn comparison_result(op: BinaryOperator, ordering: Option<Ordering>) -> Option<bool> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    let holds = match (op, ordering) {
        (NotEqual, None) => true,
        (Equal | Less | Greater | LessEqual | GreaterEqual, None) => false,
        (Equal, Some(ordering)) => ordering.is_eq(),
        (NotEqual, Some(ordering)) => ordering.is_ne(),
        (Less, Some(ordering)) => ordering.is_lt(),
        (Greater, Some(ordering)) => ordering.is_gt(),
        (LessEqual, Some(ordering)) => ordering.is_le(),
        (GreaterEqual, Some(ordering)) => ordering.is_ge(),
        _ => return None,
    };
    Some(holds)
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Numbers compare numerically and strings compare lexicographically by
    /// character. The result is `1` for true and `0` for false.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `position`: Position of the operation, for error reporting.
    ///
    /// # Errors
    /// `UnsupportedOperand` unless both operands are numbers or both are
    /// strings.
    ///
    /// # Example
    /// ```
    /// use pilcrow::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Context, position::Position, value::core::Value},
    /// };
    ///
    /// let a = Value::from("B");
    /// let b = Value::from("B");
    ///
    /// let result = Context::eval_comparison(BinaryOperator::NotEqual, &a, &b, Position::start());
    ///
    /// assert_eq!(result.unwrap(), Value::Number(0.0));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: Position)
                           -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => return Err(unsupported(op, left, right, position)),
        };

        comparison_result(op, ordering).map(Value::from)
                                       .ok_or_else(|| unsupported(op, left, right, position))
    }
}
