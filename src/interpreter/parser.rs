/// Binary operator parsing.
///
/// Parses the precedence ladder from logical OR down to multiplication.
pub mod binary;
/// Sentinel-delimited statement bodies and the `if` chain that uses them.
pub mod block;
/// Core parsing entry points and token-stream helpers.
pub mod core;
/// Statement dispatch on the leading token.
pub mod statement;
/// Unary operators and primary expressions.
pub mod unary;
/// Shared helpers for lists and names.
pub mod utils;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, parse, parse_expression};
