/// Entry points: the program rule and expressions.
///
/// Defines `ParseResult`, the whole-program `parse` function and the top
/// expression rule including `VAR` assignment.
pub mod core;

/// Statement sequences.
///
/// Parses newline-separated statements and backtracks over a trailing
/// statement that fails to parse.
pub mod statement;

/// Binary operator precedence levels.
///
/// Logical, comparison, additive, multiplicative and power operators.
pub mod binary;

/// Prefix operators, calls and atoms.
pub mod unary;

/// Keyword-led constructs with bodies: `IF`, `FOR`, `WHILE` and `FUNCTION`.
pub mod block;

/// The token cursor and helpers shared by the rules.
pub mod utils;

pub use self::core::{ParseResult, parse};
