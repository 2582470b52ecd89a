/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and the short-circuiting logical
/// connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the statement executor, the expression evaluator and the
/// [`core::Flow`] signal that carries `return` out of a function body.
pub mod core;

/// Variable lookup and assignment over the global scope and the call stack.
pub mod scope;

/// Function evaluation.
///
/// Handles user-defined function calls, argument checking and the call frame
/// that owns a call's local scope.
pub mod function;
