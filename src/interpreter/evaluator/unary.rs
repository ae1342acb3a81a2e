use std::io::Write;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a unary operation.
    ///
    /// `-` requires a number operand. `!` accepts any value and negates its
    /// truthiness.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `expr`: The operand expression.
    /// - `line`: Line of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use lox::{get_output, Error};
    ///
    /// assert_eq!(get_output("print -(3); print !nil;").unwrap(), "-3\ntrue\n");
    /// assert!(matches!(get_output("print -\"a\";"), Err(Error::Runtime(_))));
    /// ```
    pub(crate) fn eval_unary(&mut self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.evaluate(expr)?;

        match op {
            UnaryOperator::Negate => Ok(Value::Number(-Self::number_operand(op, &value, line)?)),
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
