use std::fmt::Display;

use crate::{
    ast::Body,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{evaluator::core::EvalResult, position::Position, value::core::Value},
};

/// Reduces the value of a block body to a single representative value.
///
/// A block evaluates to the list of its statement values; the first of them
/// stands for the whole block. Inline bodies are returned unchanged.
#[must_use]
pub fn collapse_block(body: &Body, value: Value) -> Value {
    if !body.is_block {
        return value;
    }
    match value {
        Value::List(statements) => statements.first().cloned().unwrap_or(Value::NULL),
        other => other,
    }
}

/// Verifies that a call supplies exactly as many arguments as there are
/// parameters.
///
/// ## Errors
/// `TooManyArguments` or `TooFewArguments`, naming `function`.
///
/// ## Example
/// ```
/// use pilcrow::interpreter::{evaluator::utils::check_arity, position::Position};
///
/// assert!(check_arity("sum", 2, 2, Position::start()).is_ok());
/// assert!(check_arity("sum", 2, 3, Position::start()).is_err());
/// ```
pub fn check_arity(function: &str,
                   expected: usize,
                   found: usize,
                   position: Position)
                   -> EvalResult<()> {
    let kind = match found.cmp(&expected) {
        std::cmp::Ordering::Equal => return Ok(()),
        std::cmp::Ordering::Greater => RuntimeErrorKind::TooManyArguments { function:
                                                                                function.to_string(),
                                                                            expected,
                                                                            found },
        std::cmp::Ordering::Less => RuntimeErrorKind::TooFewArguments { function:
                                                                            function.to_string(),
                                                                        expected,
                                                                        found },
    };
    Err(RuntimeError::new(kind, position))
}

/// Builds the error for an operator applied to kinds it does not support.
#[must_use]
pub fn unsupported(operation: impl Display,
                   left: &Value,
                   right: &Value,
                   position: Position)
                   -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::UnsupportedOperand { operation: operation.to_string(),
                                                             left:      left.kind_name()
                                                                            .to_string(),
                                                             right:     Some(right.kind_name()
                                                                                  .to_string()), },
                      position)
}

/// Builds the error for a prefix operator applied to a kind it does not
/// support.
#[must_use]
pub fn unsupported_unary(operation: impl Display, operand: &Value, position: Position) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::UnsupportedOperand { operation: operation.to_string(),
                                                             left:      operand.kind_name()
                                                                               .to_string(),
                                                             right:     None, },
                      position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;

    fn body(is_block: bool) -> Body {
        let expr = Expr::Number { value:    0.0,
                                  position: Position::start(), };
        if is_block { Body::block(expr) } else { Body::inline(expr) }
    }

    #[test]
    fn blocks_collapse_to_their_first_statement() {
        let statements = Value::from(vec![Value::from("first"), Value::from("second")]);

        assert_eq!(collapse_block(&body(true), statements.clone()), Value::from("first"));
        assert_eq!(collapse_block(&body(false), statements.clone()), statements);
    }

    #[test]
    fn arity_errors_distinguish_direction() {
        let too_few = check_arity("f", 2, 1, Position::start()).unwrap_err();
        let too_many = check_arity("f", 2, 3, Position::start()).unwrap_err();

        assert!(matches!(too_few.kind, RuntimeErrorKind::TooFewArguments { found: 1, .. }));
        assert!(matches!(too_many.kind, RuntimeErrorKind::TooManyArguments { found: 3, .. }));
    }
}
