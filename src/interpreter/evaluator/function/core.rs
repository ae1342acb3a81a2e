use std::{cell::RefCell, io::Write, rc::Rc};

use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            function::builtin,
        },
        value::{
            callable::{Callable, Function},
            core::Value,
        },
    },
};

/// Maximum number of nested user function calls.
///
/// Deep calls never exhaust the host stack, since evaluation grows it on
/// demand. The limit turns runaway recursion into a runtime error instead of
/// unbounded memory use.
pub const MAX_CALL_DEPTH: usize = 4096;

/// Type alias for native function handlers.
///
/// A native receives a slice of evaluated argument values and the line of
/// the call.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines native functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity,
/// - a function pointer implementing the native.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (the table installed into every interpreter),
/// - `BUILTIN_FUNCTIONS` (public list of native names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub(crate) struct BuiltinDef {
            pub(crate) name:  &'static str,
            pub(crate) arity: usize,
            pub(crate) func:  BuiltinFn,
        }
        pub(crate) static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the native functions every interpreter starts with.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "clock" => { arity: 0, func: builtin::clock },
}

impl<W: Write> Interpreter<W> {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then every argument from left to
    /// right; only then are the callee's kind and arity checked.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line of the closing parenthesis, for error reporting.
    ///
    /// # Errors
    /// `NotCallable`, `ArityMismatch`, `StackOverflow`, or any error raised
    /// while evaluating the arguments or running the body.
    pub(crate) fn eval_call(&mut self, callee: &Expr, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        let callee = self.evaluate(callee)?;

        let arguments = arguments.iter()
                                 .map(|argument| self.evaluate(argument))
                                 .collect::<EvalResult<Vec<_>>>()?;

        let Value::Callable(callable) = callee else {
            return Err(RuntimeError::NotCallable { line });
        };

        self.call(&callable, arguments, line)
    }

    /// Invokes a callable with already evaluated arguments.
    ///
    /// A user function runs its body in a fresh environment whose parent is
    /// the function's closure, with each parameter bound to its argument.
    /// Falling off the end of the body yields `nil`.
    ///
    /// # Errors
    /// `ArityMismatch` before anything runs if the argument count is wrong,
    /// `StackOverflow` when calls nest deeper than [`MAX_CALL_DEPTH`], and
    /// any error raised by the body.
    pub fn call(&mut self, callable: &Callable, arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
        check_arity(callable, arguments.len(), line)?;
        trace!(name = callable.name(), arity = callable.arity(), "call");

        match callable {
            Callable::Native(native) => native.call(&arguments, line),
            Callable::Function(function) => self.call_function(function, arguments, line),
        }
    }

    fn call_function(&mut self, function: &Function, arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::StackOverflow { line });
        }

        let mut environment = Environment::with_enclosing(Rc::clone(&function.closure));
        for (param, argument) in function.declaration.params.iter().zip(arguments) {
            environment.define(param.lexeme.clone(), argument);
        }

        self.depth += 1;
        let flow = self.execute_block(&function.declaration.body, Rc::new(RefCell::new(environment)));
        self.depth -= 1;

        match flow? {
            Flow::Returning(value) => Ok(value),
            Flow::Completed => Ok(Value::Nil),
        }
    }
}

/// Checks that a call supplies exactly the number of arguments the callee
/// declares.
///
/// # Errors
/// `ArityMismatch` if `found` differs from the callee's arity.
fn check_arity(callable: &Callable, found: usize, line: usize) -> EvalResult<()> {
    let expected = callable.arity();

    if expected == found {
        Ok(())
    } else {
        Err(RuntimeError::ArityMismatch { expected,
                                          found,
                                          line })
    }
}
