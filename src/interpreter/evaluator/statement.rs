use std::{cell::RefCell, io::Write, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Flow, Interpreter},
        stack::ensure_sufficient_stack,
        value::{
            callable::{Callable, Function},
            core::Value,
        },
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a single statement.
    ///
    /// # Returns
    /// `Flow::Returning` when a `return` ran inside this statement,
    /// `Flow::Completed` otherwise.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the statement.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.execute_statement(statement))
    }

    fn execute_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr } => {
                self.evaluate(expr)?;
                Ok(Flow::Completed)
            },
            Statement::Print { expr, line } => {
                let value = self.evaluate(expr)?;
                self.print(&value, *line)?;
                Ok(Flow::Completed)
            },
            Statement::Var { name, initializer } => {
                let value = self.eval_optional(initializer.as_ref())?;
                trace!(name = %name.lexeme, kind = value.type_name(), "define");
                self.environment.borrow_mut().define(name.lexeme.clone(), value);
                Ok(Flow::Completed)
            },
            Statement::Block { statements } => {
                let environment = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(RefCell::new(environment)))
            },
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Completed)
                }
            },
            Statement::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Flow::Returning(value) = self.execute(body)? {
                        return Ok(Flow::Returning(value));
                    }
                }
                Ok(Flow::Completed)
            },
            Statement::Function(declaration) => {
                let function = Function::new(Rc::clone(declaration), Rc::clone(&self.environment));
                let value = Value::Callable(Callable::Function(Rc::new(function)));

                self.environment
                    .borrow_mut()
                    .define(declaration.name.lexeme.clone(), value);
                Ok(Flow::Completed)
            },
            Statement::Return { value, line } => {
                let value = self.eval_optional(value.as_ref())?;
                trace!(line, kind = value.type_name(), "return");
                Ok(Flow::Returning(value))
            },
        }
    }

    /// Evaluates an optional expression, defaulting to `nil`.
    fn eval_optional(&mut self, expr: Option<&Expr>) -> EvalResult<Value> {
        match expr {
            Some(expr) => self.evaluate(expr),
            None => Ok(Value::Nil),
        }
    }

    /// Writes the textual form of `value` and a newline to the output.
    fn print(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.out, "{value}").map_err(|source| RuntimeError::Output { source, line })
    }
}
