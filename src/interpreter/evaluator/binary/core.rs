use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::Context, evaluator::core::EvalResult, position::Position, value::core::Value,
    },
};

impl Context {
    /// Evaluates both operands of a binary node, then applies the operator.
    ///
    /// Both sides are always evaluated, left first; `&&` and `||` do not
    /// short-circuit.
    pub(crate) fn eval_binary_op(self: &Rc<Self>,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 position: Position)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        Self::eval_binary(op, &left, &right, position).map_err(|error| error.with_context(self))
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operation by operator and operand kinds:
    /// - `+` appends to a list, concatenates two strings, or adds numbers.
    /// - `-` removes a list element by index, or subtracts numbers.
    /// - `/` reads a list element by index, or divides numbers.
    /// - `*` and `^` work on numbers only.
    /// - Comparisons use `eval_comparison`, `&&` and `||` use `eval_logic`.
    ///
    /// Every other pairing of kinds is an `UnsupportedOperand` error.
    ///
    /// # Parameters
    /// - `op`: The operator.
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
    /// let list = Value::from(vec![Value::from("a"), Value::from("b")]);
    /// let at = Position::start();
    ///
    /// let second = Context::eval_binary(BinaryOperator::Div, &list, &Value::Number(1.0), at);
    /// assert_eq!(second.unwrap(), Value::from("b"));
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::Number(1.0), &Value::from("x"), at);
    /// assert!(sum.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };

        match op {
            Add => match (left, right) {
                (Value::List(list), item) => Ok(Self::eval_list_append(list, item)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
                _ => Self::eval_arithmetic(op, left, right, position),
            },
            Sub => match (left, right) {
                (Value::List(list), Value::Number(index)) => {
                    Self::eval_list_remove(list, *index, position)
                },
                _ => Self::eval_arithmetic(op, left, right, position),
            },
            Div => match (left, right) {
                (Value::List(list), Value::Number(index)) => {
                    Self::eval_list_index(list, *index, position)
                },
                _ => Self::eval_arithmetic(op, left, right, position),
            },
            Mul | Pow => Self::eval_arithmetic(op, left, right, position),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, position)
            },
            And | Or => Self::eval_logic(op, left, right, position),
        }
    }
}
