use std::{fmt, rc::Rc};

use crate::interpreter::{lexer::Token, value::core::Value};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every expression form the parser can produce. Each node
/// exclusively owns its children, so a parsed program is a strict tree. Nodes
/// that can fail at runtime keep the line of their operator token so the
/// evaluator can attribute errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (`nil`, `true`, `false`, a number or a string).
    Literal {
        /// The constant value.
        value: Value,
    },
    /// A parenthesized expression.
    Grouping {
        /// The enclosed expression.
        expr: Box<Self>,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line of the operator token.
        line: usize,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line of the operator token.
        line:  usize,
    },
    /// A short-circuiting `and`/`or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left one does not decide
        /// the result.
        right: Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// Assignment to an existing variable. Evaluates to the assigned value.
    Assign {
        /// The identifier token of the target.
        name:  Token,
        /// The value expression.
        value: Box<Self>,
    },
    /// Call expression (e.g. `fib(n - 1)`).
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Arguments, evaluated left to right.
        arguments: Vec<Self>,
        /// Line of the closing parenthesis.
        line:      usize,
    },
}

/// A user-defined function declaration.
///
/// Function values share the declaration through an `Rc` instead of copying
/// the body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The identifier token naming the function.
    pub name:   Token,
    /// The parameter names, in declaration order.
    pub params: Vec<Token>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
}

/// Represents a statement.
///
/// A program is a sequence of statements. `for` loops never appear here; the
/// parser desugars them into `Block` and `While`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `print expr;`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line of the `print` keyword.
        line: usize,
    },
    /// `var name = initializer;`
    Var {
        /// The identifier token of the variable.
        name:        Token,
        /// The initial value, `nil` when absent.
        initializer: Option<Expr>,
    },
    /// A braced list of statements with its own scope.
    Block {
        /// The statements of the block.
        statements: Vec<Self>,
    },
    /// `if (condition) then_branch else else_branch`
    If {
        /// The condition, tested for truthiness.
        condition:   Expr,
        /// Executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Executed otherwise, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `while (condition) body`
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
    /// `fun name(params) { body }`
    Function(Rc<FunctionDef>),
    /// `return value;`
    Return {
        /// The returned value, `nil` when absent.
        value: Option<Expr>,
        /// Line of the `return` keyword.
        line:  usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
///
/// Unary operators include negation and logical NOT.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

/// Renders an expression in fully parenthesized prefix form.
///
/// This is a debugging aid: every operator becomes explicit, which makes
/// precedence and associativity visible.
///
/// # Example
/// ```
/// use lox::{ast::Statement, error::Diagnostics, parse, scan};
///
/// let mut diagnostics = Diagnostics::default();
/// let tokens = scan("-1 + 2 * (3 - x);", &mut diagnostics);
/// let statements = parse(tokens, &mut diagnostics);
///
/// let Statement::Expression { expr } = &statements[0] else { panic!("not an expression") };
/// assert_eq!(expr.to_string(), "(+ (- 1) (* 2 (group (- 3 x))))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => match value {
                Value::String(s) => write!(f, "\"{s}\""),
                other => write!(f, "{other}"),
            },
            Self::Grouping { expr } => write!(f, "(group {expr})"),
            Self::Unary { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Logical { left, op, right } => write!(f, "({op} {left} {right})"),
            Self::Variable { name } => write!(f, "{}", name.lexeme),
            Self::Assign { name, value } => write!(f, "(= {} {value})", name.lexeme),
            Self::Call { callee, arguments, .. } => {
                write!(f, "(call {callee}")?;
                for argument in arguments {
                    write!(f, " {argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}
