use std::rc::Rc;

use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        environment::Context,
        evaluator::{
            core::EvalResult,
            function::{info, len, now, print},
            utils::check_arity,
        },
        position::Position,
        value::core::Value,
    },
};

/// Type alias for built-in function handlers.
///
/// A handler receives the evaluated arguments, already checked against the
/// declared parameter count, and the position of the call.
type BuiltinFn = fn(&[Value], Position) -> EvalResult<Value>;

/// Defines built-in functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a name, which is also the global variable the function is bound to,
/// - its parameter names,
/// - a function pointer implementing it.
///
/// The macro produces `BuiltinDef`, the static `BUILTIN_TABLE` used for
/// dispatch, and the public `BUILTIN_FUNCTIONS` name list.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                params: $params:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:   &'static str,
            params: &'static [&'static str],
            func:   BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, params: $params, func: $func },
            )*
        ];
        /// Names of all built-in functions, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "PRINT"   => { params: &["value"], func: print::print },
    "NOW"     => { params: &[],        func: now::now },
    "LEN"     => { params: &["list"],  func: len::len },
    "VERSION" => { params: &[],        func: info::version },
    "HELP"    => { params: &[],        func: info::help },
}

impl Context {
    /// Executes a built-in function by name.
    ///
    /// # Errors
    /// - `UnknownBuiltIn` if no built-in has this name.
    /// - `TooManyArguments` or `TooFewArguments` on an arity mismatch.
    /// - Any error raised by the handler.
    pub(crate) fn call_builtin(self: &Rc<Self>,
                               name: &str,
                               args: &[Value],
                               position: Position)
                               -> EvalResult<Value> {
        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            return Err(self.error(RuntimeErrorKind::UnknownBuiltIn { name: name.to_string() },
                                  position));
        };

        check_arity(builtin.name, builtin.params.len(), args.len(), position)
            .and_then(|()| (builtin.func)(args, position))
            .map_err(|error| error.with_context(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::environment::global_context;

    #[test]
    fn every_builtin_is_registered_once() {
        for (index, name) in BUILTIN_FUNCTIONS.iter().enumerate() {
            assert!(!BUILTIN_FUNCTIONS[index + 1..].contains(name), "{name} is duplicated");
        }
        assert_eq!(BUILTIN_FUNCTIONS.len(), BUILTIN_TABLE.len());
    }

    #[test]
    fn unknown_builtin() {
        let context = global_context();
        let error = context.call_builtin("MISSING", &[], Position::start()).unwrap_err();

        assert_eq!(error.kind, RuntimeErrorKind::UnknownBuiltIn { name: "MISSING".into() });
        assert!(error.context.is_some());
    }

    #[test]
    fn builtin_arity_is_checked() {
        let context = global_context();
        let error = context.call_builtin("LEN", &[], Position::start()).unwrap_err();

        assert_eq!(error.kind,
                   RuntimeErrorKind::TooFewArguments { function: "LEN".into(),
                                                       expected: 1,
                                                       found:    0, });
    }

    #[test]
    fn dispatches_to_the_handler() {
        let context = global_context();
        let list = Value::from(vec![Value::NULL, Value::NULL]);

        assert_eq!(context.call_builtin("LEN", &[list], Position::start()).unwrap(),
                   Value::Number(2.0));
    }
}
