/// Dispatch of binary operations.
pub mod core;

/// Arithmetic on numbers and string concatenation.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;

/// Short-circuiting `and` / `or`.
pub mod logic;
