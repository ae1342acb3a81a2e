use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated, left first, before the operator is
    /// applied. Arithmetic is handled here; ordering and equality are
    /// delegated to `eval_comparison`.
    ///
    /// Division follows IEEE-754, so dividing by zero produces an infinity
    /// or `NaN` rather than an error.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    /// - `line`: Line of the operator, for error reporting.
    ///
    /// # Errors
    /// `OperandsMustBeNumbers` for arithmetic on non-numbers, and
    /// `OperandsMustBeNumbersOrStrings` for `+` on mixed operands.
    pub(crate) fn eval_binary(&mut self,
                              left: &Expr,
                              op: BinaryOperator,
                              right: &Expr,
                              line: usize)
                              -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op {
            BinaryOperator::Add => Self::eval_add(&left, &right, line),
            BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
                let (a, b) = Self::number_operands(op, &left, &right, line)?;

                Ok(Value::Number(match op {
                                     BinaryOperator::Sub => a - b,
                                     BinaryOperator::Mul => a * b,
                                     _ => a / b,
                                 }))
            },
            _ => Self::eval_comparison(op, &left, &right, line),
        }
    }

    /// Adds two numbers or concatenates two strings.
    fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::from(joined))
            },
            _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { line }),
        }
    }
}
