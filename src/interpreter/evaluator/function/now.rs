use chrono::{DateTime, Utc};

use crate::interpreter::{evaluator::core::EvalResult, position::Position, value::core::Value};

/// Layout of the timestamps returned by `NOW`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current UTC date and time as `YYYY-MM-DD HH:MM:SS`.
pub fn now(_args: &[Value], _position: Position) -> EvalResult<Value> {
    Ok(Value::String(format_timestamp(Utc::now())))
}

/// Formats an instant the way `NOW` reports it.
///
/// # Example
/// ```
/// use chrono::DateTime;
/// use pilcrow::interpreter::evaluator::function::now::format_timestamp;
///
/// let instant = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
///
/// assert_eq!(format_timestamp(instant), "2023-11-14 22:13:20");
/// ```
#[must_use]
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let instant = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(format_timestamp(instant), "1970-01-01 00:00:00");
    }

    #[test]
    fn leap_day() {
        let instant = DateTime::from_timestamp(951_782_400, 0).unwrap();
        assert_eq!(format_timestamp(instant), "2000-02-29 00:00:00");
    }

    #[test]
    fn now_has_the_fixed_layout() {
        let Value::String(text) = now(&[], Position::start()).unwrap() else {
            panic!("NOW must return a string");
        };

        assert_eq!(text.len(), 19);
        assert_eq!(&text[4..5], "-");
        assert_eq!(&text[10..11], " ");
        assert_eq!(&text[13..14], ":");
    }
}
