/// Core evaluation logic.
///
/// Contains the `evaluate` entry point, the dispatch over node kinds, and
/// evaluation of literals, lists and variables.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, list operations, comparisons and
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements unary plus, arithmetic negation and logical NOT.
pub mod unary;

/// Evaluation of `IF` chains.
pub mod conditional;

/// Evaluation of counted `FOR` loops.
///
/// Evaluates the bounds once, rebinds the loop variable in the enclosing scope
/// and collects one value per iteration.
pub mod for_loop;

/// Evaluation of `WHILE` loops.
pub mod while_loop;

/// Function evaluation.
///
/// Handles function definitions, user-defined and built-in calls, and
/// argument checking.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

pub use self::core::{EvalResult, evaluate};
