use thiserror::Error;

use crate::util::span::Span;

/// Represents all errors that can occur while an expression tree is
/// evaluated.
///
/// The span always points at the token responsible for the failure: the
/// symbol for lookups, the operator or function for domain errors, never
/// their operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("undefined variable '{name}'")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The symbol token.
        span: Span,
    },
    /// The right operand of `/`, `//` or `%` was zero.
    #[error("division by 0")]
    DivisionByZero {
        /// The operator token.
        span: Span,
    },
    /// An operator or function produced a result that is not a number.
    #[error("{expression} = NaN")]
    NotANumber {
        /// The failing operation with its operands, such as `2v-2`.
        expression: String,
        /// The operator or function token.
        span:       Span,
    },
}

impl RuntimeError {
    /// Returns the span of the offending token.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UndefinedVariable { span, .. }
            | Self::DivisionByZero { span }
            | Self::NotANumber { span, .. } => *span,
        }
    }

    /// Returns the same error with its span moved right by `offset` bytes.
    #[must_use]
    pub fn shifted(mut self, offset: usize) -> Self {
        match &mut self {
            Self::UndefinedVariable { span, .. }
            | Self::DivisionByZero { span }
            | Self::NotANumber { span, .. } => *span = span.shifted(offset),
        }
        self
    }
}
