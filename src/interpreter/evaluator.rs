/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparison and equality, and
/// the short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the expression dispatcher and the
/// `Flow` signal that carries `return` out of nested statements.
pub mod core;

/// Statement execution.
///
/// Runs declarations, control flow, `print` and `return`.
pub mod statement;

/// Utility functions for evaluation.
///
/// Provides the scope guard used for blocks and calls, and the operand
/// checks shared by the operators.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and native function calls, argument checking, and
/// return value computation.
pub mod function;
