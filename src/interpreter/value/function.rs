use std::{fmt, rc::Rc};

use crate::{ast::Body, interpreter::environment::Context};

/// A user-defined function value.
///
/// Created when a `FUNCTION` expression is evaluated. The function keeps the
/// scope it was defined in; every call runs in a fresh scope whose parent is
/// that defining scope, not the caller's.
pub struct Function {
    /// Name given in the definition, if any.
    pub name:    Option<String>,
    /// Parameter names in order.
    pub params:  Vec<String>,
    /// The body shared with the defining AST node.
    pub body:    Body,
    /// The scope active where the function was defined.
    pub closure: Rc<Context>,
}

impl Function {
    /// Returns the name used in error messages and call trails.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

/// Prints the signature only; the closure may refer back to the function
/// itself.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("params", &self.params)
         .field("closure", &self.closure.display_name)
         .finish_non_exhaustive()
    }
}

/// Two functions are equal when they have the same name, parameters and body.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params && self.body == other.body
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.display_name())
    }
}
