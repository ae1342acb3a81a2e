/// Dispatch of binary operators and arithmetic.
pub mod core;

/// Ordering and equality.
pub mod comparison;

/// Short-circuiting `and` and `or`.
pub mod logic;
