use thiserror::Error;

use crate::util::span::Span;

/// Parsing errors.
///
/// Defines all error types raised before evaluation starts: unexpected
/// characters found by the lexer, malformed sign/operand/operator sequences
/// found by the preprocessor and grammar violations found by the parser.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while an expression tree is evaluated: unknown
/// variables, division by zero and operations whose result is not a number.
pub mod runtime_error;

pub use parse_error::{ParseError, Stage};
pub use runtime_error::RuntimeError;

/// Any error a statement can fail with.
///
/// Every variant carries the [`Span`] of the offending text, so a front end
/// can underline it beneath the statement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The statement could not be turned into an expression tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the span of the offending text.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Parse(e) => e.span(),
            Self::Runtime(e) => e.span(),
        }
    }

    /// Returns the same error with its span moved right by `offset` bytes.
    ///
    /// Used to map errors of the expression after `symbol =` back into the
    /// coordinates of the whole statement.
    ///
    /// # Example
    /// ```
    /// use spacecalc::{
    ///     error::{Error, RuntimeError},
    ///     util::span::Span,
    /// };
    ///
    /// let error = Error::from(RuntimeError::DivisionByZero { span: Span::at(1) });
    /// assert_eq!(error.shifted(4).span(), Span::at(5));
    /// ```
    #[must_use]
    pub fn shifted(self, offset: usize) -> Self {
        match self {
            Self::Parse(e) => Self::Parse(e.shifted(offset)),
            Self::Runtime(e) => Self::Runtime(e.shifted(offset)),
        }
    }
}
