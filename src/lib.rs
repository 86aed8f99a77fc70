//! # pilcrow
//!
//! pilcrow is a small imperative scripting language written in Rust.
//! Programs are sequences of statements separated by newlines or `⁋`, with
//! numbers, strings, lists, first-class functions with closures, `IF` chains,
//! and `FOR` and `WHILE` loops.
//!
//! Source text goes through three stages: [`tokenize`], [`parse`] and
//! [`evaluate`]. [`get_result`] runs all of them in a fresh global
//! environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use log::{debug, trace};

pub use crate::interpreter::{
    environment::global_context, evaluator::evaluate, lexer::tokenize, parser::parse,
};
use crate::{
    error::Error,
    interpreter::{environment::Context, value::core::Value},
};

/// The syntax tree.
///
/// `Expr` is produced by the parser and walked by the evaluator. Every node
/// records the position where it starts.
///
/// # Responsibilities
/// - Defines the node kinds of every language construct.
/// - Attaches source positions to nodes for error reporting.
/// - Renders trees as parenthesized text for the `ast` stage of the runner.
pub mod ast;
/// Error types for every stage of the pipeline.
///
/// Lexing, parsing and evaluation each have their own error type; `Error`
/// wraps them so the whole pipeline can use `?`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and the chain of active scopes for context.
pub mod error;
/// The stages of the interpreter.
///
/// Holds the lexer, parser, environment, values and evaluator. The functions
/// re-exported at the crate root cover the usual entry points.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert numbers used as list indices to `usize` without silent data loss.
/// - Convert lengths back to `f64`.
pub mod util;

/// Runs a program in a fresh global environment.
///
/// The source is tokenized, parsed and evaluated. The result is a list with
/// one value per top-level statement.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Examples
/// ```
/// use pilcrow::{get_result, interpreter::value::core::Value};
///
/// let result = get_result("VAR a = 2 ⁋ a * 3").unwrap();
/// assert_eq!(result, Value::from(vec![Value::Number(2.0), Value::Number(6.0)]));
///
/// // 'x' is not defined
/// assert!(get_result("VAR y = x + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Error> {
    run_in(source, &global_context())
}

/// Runs a program in an existing environment.
///
/// Bindings made by the program stay in `context`, so successive calls can
/// build on each other.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Examples
/// ```
/// use pilcrow::{global_context, interpreter::value::core::Value, run_in};
///
/// let context = global_context();
/// run_in("FUNCTION twice(x) => x * 2", &context).unwrap();
///
/// let result = run_in("twice(21)", &context).unwrap();
/// assert_eq!(result, Value::from(vec![Value::Number(42.0)]));
/// ```
pub fn run_in(source: &str, context: &Rc<Context>) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    trace!("{} tokens", tokens.len());

    let program = parse(&tokens)?;
    debug!("parsed program: {program}");

    Ok(evaluate(&program, context)?)
}
