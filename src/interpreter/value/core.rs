use std::rc::Rc;

use crate::{
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{evaluator::core::EvalResult, position::Position, value::function::Function},
};

/// Represents a runtime value in the interpreter.
///
/// Values have by-value semantics: reading a variable or passing an argument
/// hands out a copy, and no operation mutates a list in place. Lists share
/// their storage through an `Rc` until an operation builds a new one.
///
/// There is no boolean kind. Comparisons and logical operators produce
/// `Number(1.0)` for true and `Number(0.0)` for false.
///
/// Values carry no source position or owning context; runtime errors take
/// the position of the node that failed and the context active there.
#[derive(Debug, Clone)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A text value.
    String(String),
    /// An ordered sequence of values of any kinds.
    List(Rc<Vec<Self>>),
    /// A user-defined function together with its defining scope.
    Function(Rc<Function>),
    /// A built-in function, identified by its table name.
    BuiltIn(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Number(if v { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// The value bound to `NULL` and returned by an `IF` without a matching
    /// branch.
    pub const NULL: Self = Self::Number(0.0);

    /// Returns the name of the value's kind, for error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Function(_) => "function",
            Self::BuiltIn(_) => "built-in function",
        }
    }

    /// Returns the truthiness of numbers and strings.
    ///
    /// A number is true when it is non-zero, a string when it is non-empty.
    /// Other kinds have no truthiness and yield `None`.
    #[must_use]
    pub fn truthiness(&self) -> Option<bool> {
        match self {
            Self::Number(n) => Some(*n != 0.0),
            Self::String(s) => Some(!s.is_empty()),
            _ => None,
        }
    }

    /// Returns the truthiness of a value used as a condition.
    ///
    /// # Errors
    /// `UnsupportedOperand` if the value is neither a number nor a string.
    pub fn as_condition(&self, position: Position) -> EvalResult<bool> {
        self.truthiness().ok_or_else(|| {
                             RuntimeError::new(RuntimeErrorKind::UnsupportedOperand {
                                                   operation: "condition".to_string(),
                                                   left:      self.kind_name().to_string(),
                                                   right:     None,
                                               },
                                               position)
                         })
    }

    /// Returns the number inside a `Number` value.
    ///
    /// # Errors
    /// `UnsupportedOperand` naming `operation` for any other kind.
    pub fn as_number(&self, operation: &str, position: Position) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::new(RuntimeErrorKind::UnsupportedOperand {
                                           operation: operation.to_string(),
                                           left:      self.kind_name().to_string(),
                                           right:     None,
                                       },
                                       position)),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality. Functions compare by name, parameters and body,
    /// not by the scope they close over.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) | (Self::BuiltIn(a), Self::BuiltIn(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    match value {
                        Self::String(s) => write!(f, "{s:?}")?,
                        _ => write!(f, "{value}")?,
                    }
                }

                write!(f, "]")
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::BuiltIn(name) => write!(f, "<built-in function {name}>"),
        }
    }
}
