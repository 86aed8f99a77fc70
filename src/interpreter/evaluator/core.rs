use std::rc::Rc;

use crate::{
    ast::{Body, Expr},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        environment::Context, evaluator::utils::collapse_block, position::Position,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a parsed program in `root`.
///
/// The program is normally the [`Expr::List`] produced by the parser, so the
/// result is a list with one value per top-level statement. Bindings made by
/// the program stay in `root` afterwards.
///
/// # Errors
/// Returns the first runtime error; evaluation stops there.
///
/// # Example
/// ```
/// use pilcrow::interpreter::{
///     environment::global_context, evaluator::evaluate, lexer::tokenize, parser::parse,
///     value::core::Value,
/// };
///
/// let program = parse(&tokenize("VAR a = 6\na / 3").unwrap()).unwrap();
/// let context = global_context();
///
/// let result = evaluate(&program, &context).unwrap();
///
/// assert_eq!(result, Value::from(vec![Value::Number(6.0), Value::Number(2.0)]));
/// assert_eq!(context.get_variable("a"), Some(Value::Number(6.0)));
/// ```
pub fn evaluate(program: &Expr, root: &Rc<Context>) -> EvalResult<Value> {
    root.eval(program)
}

impl Context {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation; it dispatches
    /// on the node kind. Errors raised here carry this context so the error
    /// can print the chain of active scopes.
    pub fn eval(self: &Rc<Self>, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::String { value, .. } => Ok(Value::String(value.clone())),
            Expr::List { elements, .. } => self.eval_list(elements),
            Expr::VarAccess { name, position } => self.eval_var_access(name, *position),
            Expr::VarAssign { name, value, .. } => self.eval_var_assign(name, value),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position),
            Expr::UnaryOp { op,
                            operand,
                            position, } => self.eval_unary_op(*op, operand, *position),
            Expr::If { cases, else_case, .. } => self.eval_if(cases, else_case.as_ref()),
            Expr::For { var,
                        start,
                        end,
                        step,
                        body,
                        position, } => {
                self.eval_for(var, start, end, step.as_deref(), body, *position)
            },
            Expr::While { condition, body, .. } => self.eval_while(condition, body),
            Expr::FunctionDef { name, params, body, .. } => {
                Ok(self.eval_function_def(name.as_deref(), params, body))
            },
            Expr::Call { callee,
                         arguments,
                         position, } => self.eval_call(callee, arguments, *position),
        }
    }

    /// Evaluates a branch, loop or function body.
    ///
    /// A block body produces the list of its statement values, which is
    /// collapsed to its first element.
    pub(crate) fn eval_body(self: &Rc<Self>, body: &Body) -> EvalResult<Value> {
        let value = self.eval(&body.expr)?;
        Ok(collapse_block(body, value))
    }

    /// Builds an error raised in this context.
    pub(crate) fn error(self: &Rc<Self>, kind: RuntimeErrorKind, position: Position) -> RuntimeError {
        RuntimeError::new(kind, position).with_context(self)
    }

    /// Evaluates list elements left to right.
    fn eval_list(self: &Rc<Self>, elements: &[Expr]) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(values))
    }

    /// Reads a variable through the scope chain.
    fn eval_var_access(self: &Rc<Self>, name: &str, position: Position) -> EvalResult<Value> {
        self.get_variable(name).ok_or_else(|| {
                                   self.error(RuntimeErrorKind::UndefinedVariable { name:
                                                                                     name.to_string() },
                                              position)
                               })
    }

    /// Binds a variable in the current scope and yields the bound value.
    ///
    /// An existing binding in an enclosing scope is shadowed, not updated.
    fn eval_var_assign(self: &Rc<Self>, name: &str, value: &Expr) -> EvalResult<Value> {
        let value = self.eval(value)?;
        self.set_variable(name, value.clone());
        Ok(value)
    }
}
