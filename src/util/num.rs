/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts the text of a number token into its value.
///
/// Digit group separators (`_`) are ignored and a leading `-` produced by
/// sign merging is accepted. Both `.5` and `5.` are valid forms.
///
/// # Parameters
/// - `text`: The literal as it appears in the token stream.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If nothing numeric remains once separators are removed (for
///   example a lone `.`).
///
/// # Example
/// ```
/// use spacecalc::util::num::parse_literal;
///
/// assert_eq!(parse_literal("69___420__"), Some(69_420.0));
/// assert_eq!(parse_literal("-.5"), Some(-0.5));
/// assert_eq!(parse_literal("1337."), Some(1337.0));
/// assert_eq!(parse_literal("."), None);
/// ```
#[must_use]
pub fn parse_literal(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    digits.parse().ok()
}

/// Splits the magnitude of `value` into its integer and fractional parts.
///
/// ## Returns
/// - `Some((integer, fraction))` when the integer part of `|value|` is exactly
///   representable as a `u64`.
/// - `None` for non-finite values and magnitudes above `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use spacecalc::util::num::split_magnitude;
///
/// assert_eq!(split_magnitude(-12.5), Some((12, 0.5)));
/// assert_eq!(split_magnitude(f64::INFINITY), None);
/// assert_eq!(split_magnitude(1e300), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn split_magnitude(value: f64) -> Option<(u64, f64)> {
    let magnitude = value.abs();
    if !magnitude.is_finite() || magnitude > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    let integer = magnitude.trunc();
    Some((integer as u64, magnitude - integer))
}
