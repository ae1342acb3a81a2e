use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::core::Value},
};

/// One link of the lexical environment chain.
///
/// Each block and each function call gets its own environment whose parent
/// is the enclosing one. Environments are shared (`Rc<RefCell<_>>`) because
/// a closure must keep the environment it was declared in alive after the
/// block that created it has exited.
///
/// A function declared in a local scope is bound in the environment it
/// captures, which is a reference cycle. Such an environment is never freed,
/// so each call of a function that declares a nested function leaks its call
/// environment. Environments of plain calls and blocks are freed as soon as
/// they finish.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Self>>>,
}

impl Environment {
    /// Creates a root environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment nested inside `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: Rc<RefCell<Self>>) -> Self {
        Self { values:    HashMap::new(),
               enclosing: Some(enclosing), }
    }

    /// Binds `name` in this environment, replacing any existing binding here.
    ///
    /// Never touches an enclosing environment, so a declaration in an inner
    /// scope shadows rather than overwrites. Redeclaring a name in the same
    /// scope is allowed.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     environment::Environment,
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let mut environment = Environment::new();
    /// environment.define("a", Value::Number(1.0));
    /// environment.define("a", Value::Number(2.0));
    ///
    /// let name = Token::new(TokenKind::Identifier, "a", 1);
    /// assert_eq!(environment.get(&name).unwrap(), Value::Number(2.0));
    /// ```
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks `name` up here, then in each enclosing environment outward.
    ///
    /// # Errors
    /// `UndefinedVariable` carrying the token's line if no environment in
    /// the chain binds the name.
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow().get(name),
            None => Err(undefined(name)),
        }
    }

    /// Overwrites the binding of `name` in the nearest environment that has
    /// one.
    ///
    /// Assignment never creates a binding.
    ///
    /// # Errors
    /// `UndefinedVariable` if no environment in the chain binds the name.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow_mut().assign(name, value),
            None => Err(undefined(name)),
        }
    }

    /// Returns `true` if `name` is bound in this environment itself.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

fn undefined(name: &Token) -> RuntimeError {
    RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                      line: name.line, }
}
