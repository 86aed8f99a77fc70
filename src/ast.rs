use std::{fmt, rc::Rc};

use crate::interpreter::position::Position;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every construct of the language is an expression, statements included:
/// a `VAR` assignment yields the assigned value, loops yield lists and
/// function definitions yield the function. Each variant records the position
/// of its leftmost token for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. Integer and float literals both become `f64`.
    Number {
        /// The literal value.
        value:    f64,
        /// Position of the literal.
        position: Position,
    },
    /// A string literal with escapes already resolved.
    String {
        /// The literal value.
        value:    String,
        /// Position of the opening quote.
        position: Position,
    },
    /// A list literal such as `[1, "a", [2]]`.
    ///
    /// The parser also uses this node for statement sequences: the program
    /// root and block bodies are lists holding one element per statement.
    List {
        /// The element expressions in source order.
        elements: Vec<Self>,
        /// Position of the `[` or of the first statement.
        position: Position,
    },
    /// Reference to a variable by name.
    VarAccess {
        /// Name of the variable.
        name:     String,
        /// Position of the identifier.
        position: Position,
    },
    /// `VAR name = value`
    VarAssign {
        /// Name being bound.
        name:     String,
        /// Expression producing the bound value.
        value:    Box<Self>,
        /// Position of the `VAR` keyword.
        position: Position,
    },
    /// A binary operation such as `a + b` or `x <= 3`.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the left operand.
        position: Position,
    },
    /// A prefix operation: `+x`, `-x` or `!x`.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        operand:  Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// An `IF ... THEN ... ELIF ... ELSE ...` chain.
    If {
        /// Condition and body pairs, tried in order.
        cases:     Vec<IfCase>,
        /// Body used when no case matches.
        else_case: Option<Body>,
        /// Position of the `IF` keyword.
        position:  Position,
    },
    /// `FOR var = start TO end STEP step THEN body`
    For {
        /// Loop variable, bound in the enclosing scope.
        var:      String,
        /// First value of the loop variable.
        start:    Box<Self>,
        /// Exclusive bound.
        end:      Box<Self>,
        /// Increment; `1` when absent.
        step:     Option<Box<Self>>,
        /// Loop body.
        body:     Body,
        /// Position of the `FOR` keyword.
        position: Position,
    },
    /// `WHILE condition THEN body`
    While {
        /// Condition checked before every iteration.
        condition: Box<Self>,
        /// Loop body.
        body:      Body,
        /// Position of the `WHILE` keyword.
        position:  Position,
    },
    /// `FUNCTION name(params) => body` or a block function.
    FunctionDef {
        /// Name to bind the function to; anonymous when absent.
        name:     Option<String>,
        /// Parameter names in order.
        params:   Vec<String>,
        /// Function body.
        body:     Body,
        /// Position of the `FUNCTION` keyword.
        position: Position,
    },
    /// `callee(arguments)`
    Call {
        /// Expression producing the function to call.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Position of the callee.
        position:  Position,
    },
}

/// One `IF`/`ELIF` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfCase {
    /// The branch condition.
    pub condition: Expr,
    /// The branch body.
    pub body:      Body,
}

/// The body of a conditional branch, loop or function.
///
/// An inline body holds a single expression. A block body (opened by a line
/// break and closed by `END`) holds an [`Expr::List`] of statements; the
/// evaluator collapses its result to the value of the first statement so both
/// forms produce the same kind of result.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// The body expression, shared with function values created from it.
    pub expr:     Rc<Expr>,
    /// Whether the body is a statement block.
    pub is_block: bool,
}

impl Body {
    /// Wraps a single expression.
    #[must_use]
    pub fn inline(expr: Expr) -> Self {
        Self { expr:     Rc::new(expr),
               is_block: false, }
    }

    /// Wraps a statement list.
    #[must_use]
    pub fn block(statements: Expr) -> Self {
        Self { expr:     Rc::new(statements),
               is_block: true, }
    }
}

/// Binary operators, from lowest to highest precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    And,
    Or,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Negate,
    /// `!x`
    Not,
}

impl Expr {
    /// Returns the position of the node's leftmost token.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { position, .. }
            | Self::String { position, .. }
            | Self::List { position, .. }
            | Self::VarAccess { position, .. }
            | Self::VarAssign { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::If { position, .. }
            | Self::For { position, .. }
            | Self::While { position, .. }
            | Self::FunctionDef { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }
}

/// Writes `items` separated by `separator`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                                 items: &[T],
                                 separator: &str)
                                 -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Renders the tree as a compact, fully parenthesized expression.
///
/// ```
/// use pilcrow::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("1 + 2 * -3").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.to_string(), "[(1 + (2 * (-3)))]");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::String { value, .. } => write!(f, "{value:?}"),
            Self::List { elements, .. } => {
                write!(f, "[")?;
                write_joined(f, elements, ", ")?;
                write!(f, "]")
            },
            Self::VarAccess { name, .. } => write!(f, "{name}"),
            Self::VarAssign { name, value, .. } => write!(f, "(VAR {name} = {value})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::If { cases, else_case, .. } => {
                for (i, case) in cases.iter().enumerate() {
                    let keyword = if i == 0 { "(IF" } else { " ELIF" };
                    write!(f, "{keyword} {} THEN {}", case.condition, case.body)?;
                }
                if let Some(body) = else_case {
                    write!(f, " ELSE {body}")?;
                }
                write!(f, ")")
            },
            Self::For { var,
                        start,
                        end,
                        step,
                        body,
                        .. } => {
                write!(f, "(FOR {var} = {start} TO {end}")?;
                if let Some(step) = step {
                    write!(f, " STEP {step}")?;
                }
                write!(f, " THEN {body})")
            },
            Self::While { condition, body, .. } => write!(f, "(WHILE {condition} THEN {body})"),
            Self::FunctionDef { name, params, body, .. } => {
                write!(f, "(FUNCTION {}(", name.as_deref().unwrap_or(""))?;
                write_joined(f, params, ", ")?;
                write!(f, ") => {body})")
            },
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                write_joined(f, arguments, ", ")?;
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_block {
            return write!(f, "{}", self.expr);
        }

        write!(f, "{{")?;
        if let Expr::List { elements, .. } = self.expr.as_ref() {
            write_joined(f, elements, "; ")?;
        } else {
            write!(f, "{}", self.expr)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
