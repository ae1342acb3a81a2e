use std::io::Write;

use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The result is the operand that decided the outcome, not a boolean:
    /// `nil or "x"` is `"x"` and `0 and nil` is `nil`. The right operand is
    /// evaluated only when the left one does not decide.
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               op: LogicalOperator,
                               right: &Expr)
                               -> EvalResult<Value> {
        let left = self.evaluate(left)?;

        let decided = match op {
            LogicalOperator::Or => left.is_truthy(),
            LogicalOperator::And => !left.is_truthy(),
        };

        if decided { Ok(left) } else { self.evaluate(right) }
    }
}
