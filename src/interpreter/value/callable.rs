use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    ast::FunctionDef,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// Signature of a host function: the evaluated arguments and the line of the
/// call, for error reporting.
pub type NativeFn = dyn Fn(&[Value], usize) -> EvalResult<Value>;

/// A value that can be called.
///
/// Cloning a `Callable` clones a handle; equality is identity.
#[derive(Clone)]
pub enum Callable {
    /// A function declared in the program.
    Function(Rc<Function>),
    /// A function provided by the host.
    Native(Rc<NativeFunction>),
}

/// A user function: its declaration and the environment it was declared in.
///
/// The closure is captured when the declaration executes, not when the
/// function is called, which is what makes scoping lexical.
pub struct Function {
    /// The declaration node, shared with the syntax tree.
    pub declaration: Rc<FunctionDef>,
    /// The environment visible at the declaration.
    pub closure:     Rc<RefCell<Environment>>,
}

/// A function implemented by the host.
pub struct NativeFunction {
    name:  String,
    arity: usize,
    func:  Box<NativeFn>,
}

impl Callable {
    /// The exact number of arguments the callable accepts.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Function(function) => function.declaration.params.len(),
            Self::Native(native) => native.arity,
        }
    }

    /// The name the callable was declared or registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function(function) => &function.declaration.name.lexeme,
            Self::Native(native) => &native.name,
        }
    }
}

impl Function {
    /// Binds a declaration to the environment it is declared in.
    #[must_use]
    pub const fn new(declaration: Rc<FunctionDef>, closure: Rc<RefCell<Environment>>) -> Self {
        Self { declaration,
               closure }
    }
}

impl NativeFunction {
    /// Wraps a host closure as a callable with a fixed arity.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::value::{callable::NativeFunction, core::Value};
    ///
    /// let double = NativeFunction::new("double", 1, |args, _line| {
    ///     Ok(Value::Number(args[0].as_number().unwrap_or(0.0) * 2.0))
    /// });
    ///
    /// assert_eq!(double.call(&[Value::Number(21.0)], 1).unwrap(), Value::Number(42.0));
    /// ```
    pub fn new(name: impl Into<String>,
               arity: usize,
               func: impl Fn(&[Value], usize) -> EvalResult<Value> + 'static)
               -> Self {
        Self { name: name.into(),
               arity,
               func: Box::new(func) }
    }

    /// Runs the host function.
    pub fn call(&self, arguments: &[Value], line: usize) -> EvalResult<Value> {
        (self.func)(arguments, line)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Native(a), Self::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(function) => write!(f, "<fn {}>", function.declaration.name.lexeme),
            Self::Native(_) => write!(f, "<native fn>"),
        }
    }
}

// The closure environment usually contains the function itself, so these
// print names only.
impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(function) => f.debug_tuple("Function")
                                         .field(&function.declaration.name.lexeme)
                                         .finish(),
            Self::Native(native) => f.debug_tuple("Native").field(&native.name).finish(),
        }
    }
}
