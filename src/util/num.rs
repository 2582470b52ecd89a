/// Largest magnitude below which whole numbers are printed positionally with
/// a trailing `.0`.
pub const MAX_POSITIONAL_WHOLE: f64 = 1e16;

/// Parses the text of a number token.
///
/// Number tokens are maximal runs of digits and dots, so the text may hold
/// several dots. Those are rejected here.
///
/// ## Example
/// ```
/// use pyhton::util::num::parse_number;
///
/// assert_eq!(parse_number("42"), Some(42.0));
/// assert_eq!(parse_number("2.5"), Some(2.5));
/// assert_eq!(parse_number("1.2.3"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    if text.matches('.').count() > 1 {
        return None;
    }
    text.parse().ok()
}

/// Formats a number the way `print` shows it.
///
/// Whole numbers keep one decimal place (`5.0`), everything else uses the
/// shortest representation that reads back to the same value.
///
/// ## Example
/// ```
/// use pyhton::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5.0");
/// assert_eq!(format_number(-3.0), "-3.0");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_POSITIONAL_WHOLE {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
