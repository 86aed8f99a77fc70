use log::info;

use crate::interpreter::{evaluator::core::EvalResult, position::Position, value::core::Value};

/// Logs a value and returns it unchanged.
///
/// The value is formatted with its `Display` implementation and emitted at
/// `info` level, so it is visible by default in the command-line runner.
///
/// # Example
/// ```
/// use pilcrow::interpreter::{
///     evaluator::function::print::print, position::Position, value::core::Value,
/// };
///
/// let result = print(&[Value::from("hola")], Position::start()).unwrap();
///
/// assert_eq!(result, Value::from("hola"));
/// ```
pub fn print(args: &[Value], _position: Position) -> EvalResult<Value> {
    let value = args.first().cloned().unwrap_or(Value::NULL);

    info!("{value}");
    Ok(value)
}
