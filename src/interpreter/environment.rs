use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use log::trace;

use crate::interpreter::{
    evaluator::function::builtin::BUILTIN_FUNCTIONS, position::Position, value::core::Value,
};

/// A mapping from names to values with lookup through enclosing tables.
///
/// Bindings are mutated in place through a shared reference, so a table can
/// be reachable from several scopes (for example the defining scope of
/// several closures) while still being updated.
pub struct SymbolTable {
    symbols: RefCell<HashMap<String, Value>>,
    parent:  Option<Rc<Self>>,
}

impl SymbolTable {
    /// Creates an empty table enclosed by `parent`.
    #[must_use]
    pub fn new(parent: Option<Rc<Self>>) -> Self {
        Self { symbols: RefCell::new(HashMap::new()),
               parent }
    }

    /// Looks `name` up in this table, then in each enclosing table.
    ///
    /// Returns a copy of the value, or `None` if no table binds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.symbols.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Binds `name` in this table, replacing any previous binding here.
    pub fn set(&self, name: &str, value: Value) {
        self.symbols.borrow_mut().insert(name.to_string(), value);
    }

    /// Removes the binding of `name` from this table only.
    pub fn remove(&self, name: &str) -> Option<Value> {
        self.symbols.borrow_mut().remove(name)
    }

    /// Returns the enclosing table.
    #[must_use]
    pub const fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }
}

/// A named scope frame.
///
/// Each context owns one symbol table whose parent is the parent context's
/// table. The root context is named `<program>`; a function call creates a
/// context named after the function, parented to the function's defining
/// context, and records the call site as its entry position.
///
/// ## Usage
///
/// The root context is built once with [`global_context`] and passed to
/// [`evaluate`](crate::interpreter::evaluator::evaluate). All evaluation
/// methods are called on an `Rc<Context>` so that function values can keep
/// the context they were defined in.
pub struct Context {
    /// Name shown in error trails.
    pub display_name:   String,
    /// The enclosing context.
    pub parent:         Option<Rc<Self>>,
    /// Where the context was entered from, for calls.
    pub entry_position: Option<Position>,
    /// The bindings of this scope.
    pub symbol_table:   Rc<SymbolTable>,
}

impl Context {
    /// Creates a context with no parent and an empty table.
    #[must_use]
    pub fn root(display_name: &str) -> Rc<Self> {
        Rc::new(Self { display_name:   display_name.to_string(),
                       parent:         None,
                       entry_position: None,
                       symbol_table:   Rc::new(SymbolTable::new(None)), })
    }

    /// Creates a context nested in `parent`, with a fresh table enclosed by the
    /// parent's table.
    #[must_use]
    pub fn child(parent: &Rc<Self>, display_name: &str, entry_position: Position) -> Rc<Self> {
        let symbol_table = SymbolTable::new(Some(Rc::clone(&parent.symbol_table)));

        Rc::new(Self { display_name:   display_name.to_string(),
                       parent:         Some(Rc::clone(parent)),
                       entry_position: Some(entry_position),
                       symbol_table:   Rc::new(symbol_table), })
    }

    /// Looks a variable up through the scope chain.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Value> {
        self.symbol_table.get(name)
    }

    /// Binds a variable in this scope.
    pub fn set_variable(&self, name: &str, value: Value) {
        self.symbol_table.set(name, value);
    }
}

/// Prints the chain of scope names; tables may contain closures over the
/// context itself.
impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
         .field("display_name", &self.display_name)
         .field("parent", &self.parent.as_ref().map(|p| &p.display_name))
         .field("entry_position", &self.entry_position)
         .finish_non_exhaustive()
    }
}

/// Builds a fresh root environment.
///
/// Binds the constants `NULL` and `FALSE` to `0`, `TRUE` to `1`, and every
/// built-in function under its name.
///
/// # Example
/// ```
/// use pilcrow::interpreter::{environment::global_context, value::core::Value};
///
/// let context = global_context();
///
/// assert_eq!(context.get_variable("TRUE"), Some(Value::Number(1.0)));
/// assert_eq!(context.get_variable("LEN"), Some(Value::BuiltIn("LEN".into())));
/// ```
#[must_use]
pub fn global_context() -> Rc<Context> {
    let context = Context::root("<program>");

    context.set_variable("NULL", Value::NULL);
    context.set_variable("TRUE", Value::from(true));
    context.set_variable("FALSE", Value::from(false));

    for name in BUILTIN_FUNCTIONS {
        context.set_variable(name, Value::BuiltIn((*name).to_string()));
    }

    trace!("global context ready with {} built-ins", BUILTIN_FUNCTIONS.len());
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_parent_tables() {
        let root = Context::root("<program>");
        root.set_variable("a", Value::Number(1.0));
        let inner = Context::child(&root, "f", Position::start());

        assert_eq!(inner.get_variable("a"), Some(Value::Number(1.0)));
        assert_eq!(inner.get_variable("b"), None);
    }

    #[test]
    fn inner_bindings_shadow_without_touching_the_parent() {
        let root = Context::root("<program>");
        root.set_variable("a", Value::Number(1.0));
        let inner = Context::child(&root, "f", Position::start());
        inner.set_variable("a", Value::Number(2.0));

        assert_eq!(inner.get_variable("a"), Some(Value::Number(2.0)));
        assert_eq!(root.get_variable("a"), Some(Value::Number(1.0)));
    }

    #[test]
    fn parent_updates_are_visible_from_children() {
        let root = Context::root("<program>");
        let inner = Context::child(&root, "f", Position::start());
        root.set_variable("late", Value::from("bound"));

        assert_eq!(inner.get_variable("late"), Some(Value::from("bound")));
    }

    #[test]
    fn remove_only_affects_the_local_table() {
        let table = Rc::new(SymbolTable::new(None));
        table.set("x", Value::NULL);
        let child = SymbolTable::new(Some(Rc::clone(&table)));

        assert_eq!(child.remove("x"), None);
        assert_eq!(table.remove("x"), Some(Value::NULL));
        assert_eq!(child.get("x"), None);
        assert!(child.parent().is_some());
    }

    #[test]
    fn globals_are_bound() {
        let context = global_context();

        assert_eq!(context.get_variable("NULL"), Some(Value::NULL));
        assert_eq!(context.get_variable("FALSE"), Some(Value::NULL));
        assert_eq!(context.get_variable("PRINT"), Some(Value::BuiltIn("PRINT".into())));
        assert_eq!(context.get_variable("NOW"), Some(Value::BuiltIn("NOW".into())));
    }
}
