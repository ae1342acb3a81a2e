use std::{
    cell::RefCell,
    io::Write,
    ops::{Deref, DerefMut},
    rc::Rc,
};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

/// Makes an environment current for as long as the guard lives.
///
/// Dropping the guard restores the environment that was current before,
/// whether the scope finished normally, returned, or failed with an error.
pub struct ScopeGuard<'a, W: Write> {
    interpreter: &'a mut Interpreter<W>,
    previous:    Option<Rc<RefCell<Environment>>>,
}

impl<W: Write> Drop for ScopeGuard<'_, W> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.interpreter.environment = previous;
        }
    }
}

impl<W: Write> Deref for ScopeGuard<'_, W> {
    type Target = Interpreter<W>;

    fn deref(&self) -> &Self::Target {
        &*self.interpreter
    }
}

impl<W: Write> DerefMut for ScopeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.interpreter
    }
}

impl<W: Write> Interpreter<W> {
    /// Switches to `environment` until the returned guard is dropped.
    pub(crate) fn scoped(&mut self, environment: Rc<RefCell<Environment>>) -> ScopeGuard<'_, W> {
        let previous = std::mem::replace(&mut self.environment, environment);

        ScopeGuard { interpreter: self,
                     previous:    Some(previous), }
    }

    /// Executes `statements` with `environment` as the current
    /// environment.
    ///
    /// Used for blocks (a fresh child of the current environment) and for
    /// function bodies (a fresh child of the closure). The previous
    /// environment is restored on every exit path.
    ///
    /// # Returns
    /// `Flow::Returning` as soon as a statement returns; the remaining
    /// statements are skipped.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by a statement.
    pub fn execute_block(&mut self,
                         statements: &[Statement],
                         environment: Rc<RefCell<Environment>>)
                         -> EvalResult<Flow> {
        let mut scope = self.scoped(environment);

        for statement in statements {
            if let Flow::Returning(value) = scope.execute(statement)? {
                return Ok(Flow::Returning(value));
            }
        }

        Ok(Flow::Completed)
    }

    /// Extracts the number from the operand of a unary operator.
    ///
    /// # Errors
    /// `OperandMustBeNumber` if the value is not a number.
    pub(crate) fn number_operand(operator: impl ToString, value: &Value, line: usize) -> EvalResult<f64> {
        value.as_number()
             .ok_or_else(|| RuntimeError::OperandMustBeNumber { operator: operator.to_string(),
                                                                line })
    }

    /// Extracts the numbers from both operands of a binary operator.
    ///
    /// # Errors
    /// `OperandsMustBeNumbers` unless both values are numbers.
    pub(crate) fn number_operands(operator: impl ToString,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<(f64, f64)> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
            _ => Err(RuntimeError::OperandsMustBeNumbers { operator: operator.to_string(),
                                                           line }),
        }
    }
}
