use std::rc::Rc;

use log::trace;

use crate::{
    ast::{Body, Expr},
    error::RuntimeErrorKind,
    interpreter::{
        environment::Context,
        evaluator::{
            core::EvalResult,
            utils::{check_arity, collapse_block},
        },
        position::Position,
        value::{core::Value, function::Function},
    },
};

impl Context {
    /// Creates a function value closing over this context.
    ///
    /// A named function is also bound in this context under its name, which
    /// lets the body call itself.
    pub(crate) fn eval_function_def(self: &Rc<Self>,
                                    name: Option<&str>,
                                    params: &[String],
                                    body: &Body)
                                    -> Value {
        let function = Function { name:    name.map(str::to_string),
                                  params:  params.to_vec(),
                                  body:    body.clone(),
                                  closure: Rc::clone(self), };
        let value = Value::Function(Rc::new(function));

        if let Some(name) = name {
            self.set_variable(name, value.clone());
        }
        value
    }

    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    /// The callee must be a user-defined or built-in function.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `position`: Position of the call, recorded as the entry position of
    ///   the call's context.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is not a function.
    /// - `TooManyArguments` or `TooFewArguments` on an arity mismatch.
    /// - Any error raised by the function body.
    pub(crate) fn eval_call(self: &Rc<Self>,
                            callee: &Expr,
                            arguments: &[Expr],
                            position: Position)
                            -> EvalResult<Value> {
        let callee = self.eval(callee)?;
        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        match callee {
            Value::Function(function) => self.call_function(&function, args, position),
            Value::BuiltIn(name) => self.call_builtin(&name, &args, position),
            other => Err(self.error(RuntimeErrorKind::NotCallable { found: other.kind_name()
                                                                             .to_string() },
                                    position)),
        }
    }

    /// Executes a user-defined function.
    ///
    /// The call runs in a new context named after the function and parented
    /// to the function's defining context, so the body sees the bindings of
    /// the place it was written, not of the caller. Arguments are bound to the
    /// parameter names in the new context. A block body yields its first
    /// statement's value.
    ///
    /// # Errors
    /// Arity mismatches and errors raised by the body.
    pub fn call_function(self: &Rc<Self>,
                         function: &Function,
                         args: Vec<Value>,
                         position: Position)
                         -> EvalResult<Value> {
        check_arity(function.display_name(), function.params.len(), args.len(), position)
            .map_err(|error| error.with_context(self))?;

        trace!("calling {} with {} arguments", function.display_name(), args.len());

        let call_context = Context::child(&function.closure, function.display_name(), position);
        for (param, arg) in function.params.iter().zip(args) {
            call_context.set_variable(param, arg);
        }

        let value = call_context.eval(&function.body.expr)?;
        Ok(collapse_block(&function.body, value))
    }
}
