use std::rc::Rc;

use crate::{
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        environment::Context, evaluator::core::EvalResult, position::Position, value::core::Value,
    },
    util::num::f64_to_index_checked,
};

/// Builds the error for an index that addresses no element.
fn out_of_bounds(index: f64, length: usize, position: Position) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::IndexOutOfBounds { index, length }, position)
}

impl Context {
    /// Appends `item` to a copy of `list` (`list + item`).
    ///
    /// The original list value is left untouched.
    #[must_use]
    pub fn eval_list_append(list: &Rc<Vec<Value>>, item: &Value) -> Value {
        let mut elements = Vec::with_capacity(list.len() + 1);
        elements.extend(list.iter().cloned());
        elements.push(item.clone());
        Value::from(elements)
    }

    /// Returns a copy of `list` without the element at `index` (`list - index`).
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index` addresses no element.
    pub fn eval_list_remove(list: &Rc<Vec<Value>>,
                            index: f64,
                            position: Position)
                            -> EvalResult<Value> {
        let at = f64_to_index_checked(index, list.len()).ok_or_else(|| {
                                                              out_of_bounds(index,
                                                                            list.len(),
                                                                            position)
                                                          })?;
        let mut elements = list.as_ref().clone();
        elements.remove(at);
        Ok(Value::from(elements))
    }

    /// Returns the element at `index` (`list / index`).
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index` is negative, fractional or not below the
    /// list length.
    pub fn eval_list_index(list: &Rc<Vec<Value>>,
                           index: f64,
                           position: Position)
                           -> EvalResult<Value> {
        f64_to_index_checked(index, list.len()).and_then(|at| list.get(at).cloned())
                                               .ok_or_else(|| {
                                                   out_of_bounds(index, list.len(), position)
                                               })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Rc<Vec<Value>> {
        Rc::new(vec![Value::from("a"), Value::from("b"), Value::from("c")])
    }

    #[test]
    fn append_copies() {
        let list = letters();
        let appended = Context::eval_list_append(&list, &Value::Number(1.0));

        assert_eq!(list.len(), 3);
        assert_eq!(appended,
                   Value::from(vec![Value::from("a"),
                                    Value::from("b"),
                                    Value::from("c"),
                                    Value::Number(1.0)]));
    }

    #[test]
    fn remove_by_index() {
        let removed = Context::eval_list_remove(&letters(), 0.0, Position::start()).unwrap();
        assert_eq!(removed, Value::from(vec![Value::from("b"), Value::from("c")]));

        let error = Context::eval_list_remove(&letters(), 3.0, Position::start()).unwrap_err();
        assert_eq!(error.kind,
                   RuntimeErrorKind::IndexOutOfBounds { index: 3.0, length: 3 });
    }

    #[test]
    fn index_reads_one_element() {
        assert_eq!(Context::eval_list_index(&letters(), 1.0, Position::start()).unwrap(),
                   Value::from("b"));

        for bad in [5.0, -1.0, 1.5] {
            let error = Context::eval_list_index(&letters(), bad, Position::start()).unwrap_err();
            assert!(matches!(error.kind, RuntimeErrorKind::IndexOutOfBounds { length: 3, .. }));
        }
    }
}
