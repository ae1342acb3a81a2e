use std::{cell::RefCell, io::Write, rc::Rc};

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::core::BUILTIN_TABLE,
        stack::ensure_sufficient_stack,
        value::{
            callable::{Callable, NativeFunction},
            core::Value,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `RuntimeError` that aborts the run.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `return` unwinds through any number of enclosing blocks and loops as
/// `Returning`; the nearest function call turns it back into a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// The statement ran to completion.
    Completed,
    /// A `return` statement was executed with this value.
    Returning(Value),
}

/// Stores the runtime state of the interpreter.
///
/// `Interpreter` is created once per session and reused for every run, so
/// global definitions persist across prompt lines. Everything `print`
/// produces goes to `out`.
///
/// ## Usage
///
/// ```
/// use lox::{error::Diagnostics, interpreter::evaluator::core::Interpreter, parse, scan};
///
/// let mut diagnostics = Diagnostics::default();
/// let program = parse(scan("print 1 + 2;", &mut diagnostics), &mut diagnostics);
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// interpreter.interpret(&program).unwrap();
///
/// assert_eq!(interpreter.output(), b"3\n");
/// ```
pub struct Interpreter<W: Write> {
    /// The outermost environment, holding natives and top-level names.
    pub(crate) globals:     Rc<RefCell<Environment>>,
    /// The innermost environment of the code currently executing.
    pub(crate) environment: Rc<RefCell<Environment>>,
    pub(crate) out:         W,
    /// Number of user function calls currently active.
    pub(crate) depth:       usize,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter writing to `out`, with the native functions
    /// already defined as globals.
    pub fn new(out: W) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));

        let mut interpreter = Self { environment: Rc::clone(&globals),
                                     globals,
                                     out,
                                     depth: 0 };

        for builtin in BUILTIN_TABLE {
            interpreter.define_native(builtin.name, builtin.arity, builtin.func);
        }

        interpreter
    }

    /// Defines a host function as a global.
    ///
    /// The function is checked for arity like any other callable and
    /// receives the evaluated arguments and the line of the call.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.define_native("answer", 0, |_, _| Ok(Value::Number(42.0)));
    ///
    /// assert_eq!(lox::Session::with_interpreter(interpreter).echo_line("answer();"),
    ///            Some(Value::Number(42.0)));
    /// ```
    pub fn define_native(&mut self,
                         name: &str,
                         arity: usize,
                         func: impl Fn(&[Value], usize) -> EvalResult<Value> + 'static) {
        let native = NativeFunction::new(name, arity, func);
        self.globals
            .borrow_mut()
            .define(name, Value::Callable(Callable::Native(Rc::new(native))));
    }

    /// The global environment.
    #[must_use]
    pub const fn globals(&self) -> &Rc<RefCell<Environment>> {
        &self.globals
    }

    /// The output channel `print` writes to.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the interpreter and returns its output channel.
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes a program.
    ///
    /// Statements run in order in the current environment. A `return` at top
    /// level ends the program early without error.
    ///
    /// # Errors
    /// The first `RuntimeError`, which aborts the remaining statements.
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<()> {
        debug!(statements = statements.len(), "executing program");

        for statement in statements {
            if let Flow::Returning(_) = self.execute(statement)? {
                debug!("top-level return ended the program");
                break;
            }
        }

        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant. Nested expressions
    /// and function calls all recurse through here, so the host stack is
    /// grown here when it runs low.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while evaluating the expression or a
    /// function it calls.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr(expr))
    }

    fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(value.clone()),
            Expr::Grouping { expr } => self.evaluate(expr),
            Expr::Unary { op, expr, line } => self.eval_unary(*op, expr, *line),
            Expr::Binary { left, op, right, line } => self.eval_binary(left, *op, right, *line),
            Expr::Logical { left, op, right } => self.eval_logical(left, *op, right),
            Expr::Variable { name } => {
                let environment = self.environment.borrow();
                environment.get(name)
            },
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.borrow_mut().assign(name, value.clone())?;
                Ok(value)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
        }
    }
}
