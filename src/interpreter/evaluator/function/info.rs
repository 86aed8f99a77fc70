use crate::interpreter::{evaluator::core::EvalResult, position::Position, value::core::Value};

/// Summary returned by `HELP`.
const HELP_TEXT: &str = "\
Statements are separated by newlines or '⁋'.
  VAR name = expr                       bind a variable in the current scope
  IF c THEN a ELIF d THEN b ELSE e      conditional; blocks close with END
  FOR i = start TO end STEP s THEN body counted loop, end exclusive
  WHILE c THEN body                     conditional loop
  FUNCTION name(a, b) => expr           function; a newline opens a block body
  list + v, list - i, list / i          append, remove and index
Built-ins: PRINT(value), NOW(), LEN(list), VERSION(), HELP()
Constants: NULL, TRUE, FALSE";

/// Returns the interpreter version.
///
/// # Example
/// ```
/// use pilcrow::interpreter::{
///     evaluator::function::info::version, position::Position, value::core::Value,
/// };
///
/// assert_eq!(version(&[], Position::start()).unwrap(),
///            Value::from(env!("CARGO_PKG_VERSION")));
/// ```
pub fn version(_args: &[Value], _position: Position) -> EvalResult<Value> {
    Ok(Value::from(env!("CARGO_PKG_VERSION")))
}

/// Returns a short description of the language.
pub fn help(_args: &[Value], _position: Position) -> EvalResult<Value> {
    Ok(Value::from(HELP_TEXT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_builtin() {
        let Value::String(text) = help(&[], Position::start()).unwrap() else {
            panic!("HELP must return a string");
        };

        for name in crate::interpreter::evaluator::function::builtin::BUILTIN_FUNCTIONS {
            assert!(text.contains(name), "{name} is missing from the help text");
        }
    }
}
