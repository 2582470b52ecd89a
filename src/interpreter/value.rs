/// Runtime values and their conversions.
///
/// Defines the `Value` enum, how each kind prints, and how each kind converts
/// to a truth value.
pub mod core;
