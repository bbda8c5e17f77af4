/// Numeric helpers.
///
/// Converts number literals into `f64` values and splits results into the
/// integer and fractional parts used when they are displayed. Conversions that
/// could lose information return `None` instead of guessing.
pub mod num;
/// Source spans.
///
/// Declares [`span::Span`], the byte range every token and error carries so
/// the offending part of a statement can be underlined.
pub mod span;
