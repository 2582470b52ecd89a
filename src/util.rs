/// Numeric helpers.
///
/// Parsing of numeric literal text and the single place that decides how
/// numbers are printed.
pub mod num;
