/// Numeric conversion helpers.
///
/// Converts between the language's `f64` numbers and the `usize` indices and
/// lengths of lists and strings without silent truncation.
pub mod num;
