use crate::{
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{evaluator::core::EvalResult, position::Position, value::core::Value},
    util::num::usize_to_f64,
};

/// Returns the number of elements of a list, or of characters of a string.
///
/// # Errors
/// `UnsupportedOperand` for any other kind.
///
/// # Example
/// ```
/// use pilcrow::interpreter::{evaluator::function::len::len, position::Position, value::core::Value};
///
/// let list = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
///
/// assert_eq!(len(&[list], Position::start()).unwrap(), Value::Number(2.0));
/// assert_eq!(len(&[Value::from("año")], Position::start()).unwrap(), Value::Number(3.0));
/// ```
pub fn len(args: &[Value], position: Position) -> EvalResult<Value> {
    match args.first() {
        Some(Value::List(elements)) => Ok(Value::Number(usize_to_f64(elements.len()))),
        Some(Value::String(text)) => Ok(Value::Number(usize_to_f64(text.chars().count()))),
        other => {
            let kind = other.map_or("nothing", Value::kind_name);
            Err(RuntimeError::new(RuntimeErrorKind::UnsupportedOperand { operation: "LEN".to_string(),
                                                                         left:      kind.to_string(),
                                                                         right:     None, },
                                  position))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list() {
        assert_eq!(len(&[Value::from(vec![])], Position::start()).unwrap(), Value::NULL);
    }

    #[test]
    fn numbers_have_no_length() {
        let error = len(&[Value::Number(12.0)], Position::start()).unwrap_err();

        assert_eq!(error.kind,
                   RuntimeErrorKind::UnsupportedOperand { operation: "LEN".into(),
                                                          left:      "number".into(),
                                                          right:     None, });
    }
}
