use std::fmt::{self, Display};

use crate::{
    error::Error,
    interpreter::statement::{Evaluation, StatementReport},
    util::num::split_magnitude,
};

/// Integer parts longer than this are grouped with `_`.
const MAX_PLAIN_INTEGER_LEN: usize = 5;
/// Digits shown after the decimal point at most.
const FRACTION_DIGITS: usize = 6;

const ANSI_RESET: &str = "\x1B[0m";

/// Terminal colors used by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Errors and the highlighted part of a statement.
    Red,
    /// Values.
    Yellow,
    /// The interactive prompt.
    Prompt,
}

impl Style {
    const fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Yellow => "\x1B[33m",
            Self::Prompt => "\x1B[1;34m",
        }
    }

    /// Wraps `text` in this style, or leaves it plain when `color` is off.
    #[must_use]
    pub fn paint<T: Display>(self, text: T, color: bool) -> Painted<T> {
        Painted { style: self,
                  text,
                  color }
    }
}

/// Text that prints with an optional ANSI color around it.
pub struct Painted<T> {
    style: Style,
    text:  T,
    color: bool,
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.color {
            write!(f, "{}{}{ANSI_RESET}", self.style.code(), self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// Formats a value for display.
///
/// - The integer part is grouped with `_` every 3 digits once it is longer
///   than 5 digits.
/// - The fractional part shows at most 6 digits with trailing zeros trimmed.
///   A fraction that rounds to zero prints as `.0`.
/// - Infinities print as `inf` and `-inf`.
///
/// # Example
/// ```
/// use spacecalc::display::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(69_420.0), "69420");
/// assert_eq!(format_number(1_234_567.5), "1_234_567.5");
/// assert_eq!(format_number(2.000_000_1), "2.0");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let (integer, fraction) = match split_magnitude(value) {
        Some((integer, fraction)) => {
            let (integer, fraction) = round_fraction(integer, fraction);
            (integer.to_string(), fraction)
        },
        None => (format!("{:.0}", value.abs()), None),
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(&integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Rounds `fraction` to the displayed digits, carrying into `integer` when it
/// rounds up to a whole. Returns `None` for an exact integer.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::float_cmp)]
fn round_fraction(integer: u64, fraction: f64) -> (u64, Option<String>) {
    if fraction == 0.0 {
        return (integer, None);
    }

    let scale = 10u64.pow(FRACTION_DIGITS as u32);
    let scaled = (fraction * scale as f64).round() as u64;
    let (integer, scaled) = if scaled >= scale { (integer + 1, 0) } else { (integer, scaled) };

    let digits = format!("{scaled:0width$}", width = FRACTION_DIGITS);
    let trimmed = digits.trim_end_matches('0');
    let fraction = if trimmed.is_empty() { "0" } else { trimmed };
    (integer, Some(fraction.to_string()))
}

/// Inserts `_` between groups of 3 digits, counting from the right.
fn group_digits(digits: &str) -> String {
    if digits.len() <= MAX_PLAIN_INTEGER_LEN {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('_');
        }
        grouped.push(c);
    }
    grouped
}

/// Renders a successful statement as `= value` or `= symbol = value`.
///
/// # Example
/// ```
/// use spacecalc::{display::render_value, interpreter::statement::Evaluation};
///
/// let evaluation = Evaluation { value:     16.0,
///                               symbol:    Some("B".to_string()),
///                               processed: "B = A*A".to_string(), };
/// assert_eq!(render_value(&evaluation, false), "= B = 16");
/// ```
#[must_use]
pub fn render_value(evaluation: &Evaluation, color: bool) -> String {
    let value = Style::Yellow.paint(format_number(evaluation.value), color);
    match &evaluation.symbol {
        Some(symbol) => format!("= {symbol} = {value}"),
        None => format!("= {value}"),
    }
}

/// Renders an error beneath the statement it occurred in.
///
/// The output is the statement with the offending text highlighted, a line of
/// carets under it, an `error at position N:` header and the message, all
/// indented like this:
///
/// ```text
///     1+1)
///        ^
/// error at position 3:
///     closing bracket never opened
/// ```
///
/// A span at the end of the statement is shown as one caret past the last
/// character.
///
/// # Example
/// ```
/// use spacecalc::{
///     display::render_error,
///     error::{Error, ParseError},
///     util::span::Span,
/// };
///
/// let error = Error::from(ParseError::UnmatchedClosingBracket { span: Span::at(3) });
/// let rendered = render_error("1+1)", &error, false);
/// assert_eq!(rendered,
///            "    1+1)\n       ^\nerror at position 3:\n    closing bracket never opened");
/// ```
#[must_use]
pub fn render_error(statement: &str, error: &Error, color: bool) -> String {
    let span = error.span();
    let mut line = statement.to_string();
    let (start, mut end) = (span.position, span.end());

    if start >= line.len() {
        line.extend(std::iter::repeat_n(' ', start + 1 - line.len()));
        end = start + 1;
    }
    end = end.clamp(start + 1, line.len());

    let (Some(left), Some(mid), Some(right)) =
        (line.get(..start), line.get(start..end), line.get(end..))
    else {
        return format!("{}: {error}", Style::Red.paint("error", color));
    };

    let carets = "^".repeat(mid.chars().count().max(1));
    format!("    {left}{}{right}\n    {}{}\n{} at position {start}:\n    {error}",
            Style::Red.paint(mid, color),
            " ".repeat(left.chars().count()),
            Style::Red.paint(carets, color),
            Style::Red.paint("error", color))
}

/// Renders the outcome of a statement with [`render_value`] or
/// [`render_error`].
#[must_use]
pub fn render_report(report: &StatementReport, color: bool) -> String {
    match &report.outcome {
        Ok(evaluation) => render_value(evaluation, color),
        Err(error) => render_error(&report.statement, error, color),
    }
}
