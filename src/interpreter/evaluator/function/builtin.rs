use std::time::{SystemTime, UNIX_EPOCH};

use tracing::trace;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// `clock()`: seconds since the Unix epoch, with sub-second precision.
///
/// Meant for timing code, so only differences between two calls are
/// meaningful. A system clock set before the epoch reads as `0`.
///
/// # Example
/// ```
/// use lox::interpreter::{evaluator::function::builtin::clock, value::core::Value};
///
/// let Value::Number(seconds) = clock(&[], 1).unwrap() else { panic!("not a number") };
/// assert!(seconds > 0.0);
/// ```
pub fn clock(_args: &[Value], _line: usize) -> EvalResult<Value> {
    let seconds = SystemTime::now().duration_since(UNIX_EPOCH)
                                   .map_or(0.0, |elapsed| elapsed.as_secs_f64());

    trace!(seconds, "clock");
    Ok(Value::Number(seconds))
}
