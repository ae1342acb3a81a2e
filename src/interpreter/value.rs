/// Callable values.
///
/// Defines `Callable`, the runtime representation of user functions
/// (declaration plus captured environment) and host-provided native
/// functions. Both expose an arity and a display name; the evaluator invokes
/// them through one call path.
pub mod callable;

/// The `Value` enum and its core behaviour: truthiness, equality and the
/// textual rendering used by `print`.
pub mod core;
