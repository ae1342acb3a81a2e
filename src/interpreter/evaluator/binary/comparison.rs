use std::io::Write;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates ordering and equality operators on two values.
    ///
    /// Ordering operators (`<`, `<=`, `>`, `>=`) require numbers. Equality
    /// (`==`, `!=`) accepts any pair of values and never fails; see
    /// [`Value`]'s `PartialEq` for the rules.
    ///
    /// # Example
    /// ```
    /// use lox::get_output;
    ///
    /// let output = get_output("print 1 < 2; print nil == false; print \"a\" != \"b\";").unwrap();
    /// assert_eq!(output, "true\nfalse\ntrue\n");
    /// ```
    pub(crate) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Equal => left == right,
            BinaryOperator::NotEqual => left != right,
            _ => {
                let (a, b) = Self::number_operands(op, left, right, line)?;

                match op {
                    BinaryOperator::Less => a < b,
                    BinaryOperator::LessEqual => a <= b,
                    BinaryOperator::Greater => a > b,
                    _ => a >= b,
                }
            },
        };

        Ok(Value::Bool(result))
    }
}
