/// Native function implementations.
///
/// Host functions available as globals in every interpreter.
pub mod builtin;

/// Call evaluation, argument checking and the native function table.
pub mod core;
