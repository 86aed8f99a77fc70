use std::rc::Rc;

use crate::interpreter::{environment::Context, position::Position};

#[derive(Debug, Clone, PartialEq)]
/// Represents all the ways evaluation can fail.
pub enum RuntimeErrorKind {
    /// Tried to read a variable that is bound in no enclosing scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Divided a number by exactly zero.
    DivisionByZero,
    /// Read or removed a list element that does not exist.
    IndexOutOfBounds {
        /// The requested index as written by the program.
        index:  f64,
        /// The length of the list.
        length: usize,
    },
    /// Called a function with more arguments than it has parameters.
    TooManyArguments {
        /// The name of the function.
        function: String,
        /// The number of parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// Called a function with fewer arguments than it has parameters.
    TooFewArguments {
        /// The name of the function.
        function: String,
        /// The number of parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An operator was applied to value kinds it is not defined for.
    UnsupportedOperand {
        /// The operator or operation, such as `+` or `condition`.
        operation: String,
        /// Kind of the left (or only) operand.
        left:      String,
        /// Kind of the right operand, absent for unary operations.
        right:     Option<String>,
    },
    /// A built-in value names no registered built-in.
    UnknownBuiltIn {
        /// The unregistered name.
        name: String,
    },
    /// Tried to call a value that is neither a function nor a built-in.
    NotCallable {
        /// Kind of the value that was called.
        found: String,
    },
}

#[derive(Debug, Clone)]
/// An evaluation failure together with where it happened.
///
/// `position` is the node that failed. `context` is the scope that was active
/// when the error surfaced and is used only to print a call trail.
pub struct RuntimeError {
    /// What went wrong.
    pub kind:     RuntimeErrorKind,
    /// The source position of the failing node.
    pub position: Position,
    /// The scope active when the error surfaced.
    pub context:  Option<Rc<Context>>,
}

impl RuntimeError {
    /// Creates an error without an attached context.
    #[must_use]
    pub const fn new(kind: RuntimeErrorKind, position: Position) -> Self {
        Self { kind,
               position,
               context: None }
    }

    /// Attaches the scope active at the failure, unless the error already
    /// carries the scope it surfaced in.
    #[must_use]
    pub fn with_context(mut self, context: &Rc<Context>) -> Self {
        if self.context.is_none() {
            self.context = Some(Rc::clone(context));
        }
        self
    }

    /// Writes the chain of active scopes, innermost first.
    fn write_trail(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut position = self.position;
        let mut current = self.context.clone();

        while let Some(context) = current {
            write!(f, "\n  in {} at {position}", context.display_name)?;
            if let Some(entry) = context.entry_position {
                position = entry;
            }
            current = context.parent.clone();
        }

        Ok(())
    }
}

impl PartialEq for RuntimeError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.position == other.position
    }
}

impl std::fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "'{name}' is not defined"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "Index {index} is out of bounds for a list of length {length}")
            },
            Self::TooManyArguments { function,
                                     expected,
                                     found, } => write!(f,
                                                        "Too many arguments passed to '{function}': expected {expected}, found {found}"),
            Self::TooFewArguments { function,
                                    expected,
                                    found, } => write!(f,
                                                       "Too few arguments passed to '{function}': expected {expected}, found {found}"),
            Self::UnsupportedOperand { operation,
                                       left,
                                       right: Some(right), } => {
                write!(f, "Unsupported operands for '{operation}': {left} and {right}")
            },
            Self::UnsupportedOperand { operation,
                                       left,
                                       right: None, } => {
                write!(f, "Unsupported operand for '{operation}': {left}")
            },
            Self::UnknownBuiltIn { name } => write!(f, "Built-in function '{name}' does not exist"),
            Self::NotCallable { found } => write!(f, "A value of kind {found} cannot be called"),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Runtime error: {}.", self.kind)?;
        if self.context.is_none() {
            write!(f, " ({})", self.position)?;
        }
        self.write_trail(f)
    }
}

impl std::error::Error for RuntimeError {}
