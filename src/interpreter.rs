/// Source positions.
///
/// Declares `Position`, the offset, line and column attached to tokens, nodes
/// and errors.
pub mod position;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the position where it starts: numbers, strings, identifiers,
/// keywords, operators and statement separators.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Handles numeric and string literals, identifiers, keywords and operators.
/// - Reports illegal characters, malformed operators and unterminated strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over the token list. Statement lists are parsed
/// by trying a statement and rewinding when it does not fit, so a block ends
/// wherever its statements stop matching.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes with operator precedence.
/// - Parses inline and block bodies of `IF`, `FOR`, `WHILE` and `FUNCTION`.
/// - Reports syntax errors with the position of the offending token.
pub mod parser;
/// Scopes and bindings.
///
/// Declares `SymbolTable` and `Context`, and builds the global environment
/// with the constants and built-in functions.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, strings, lists and functions.
/// - Implements truthiness, equality and display of values.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree in a `Context`, applies operators, runs
/// control flow and calls functions.
///
/// # Responsibilities
/// - Evaluates every node kind to a `Value`.
/// - Creates a child context per function call.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
