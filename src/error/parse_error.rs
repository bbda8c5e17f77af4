use thiserror::Error;

use crate::util::span::Span;

/// The pipeline stage that raised a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Tokenizing the raw text.
    Lexer,
    /// Rewriting the token stream (signs, adjacency, spaces).
    Preprocessor,
    /// Building the expression tree or splitting the statement.
    Parser,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexer => write!(f, "lexer"),
            Self::Preprocessor => write!(f, "preprocessor"),
            Self::Parser => write!(f, "parser"),
        }
    }
}

/// Represents all errors that can occur during lexing, preprocessing or
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character outside the accepted alphabet.
    #[error("unexpected character '{character}'")]
    UnexpectedCharacter {
        /// The rejected character.
        character: char,
        /// Where it was found.
        span:      Span,
    },
    /// A sign with nothing left to apply it to.
    #[error("missing operand at the end")]
    MissingOperand {
        /// The dangling sign.
        span: Span,
    },
    /// Two numbers separated only by a space.
    #[error("two consecutive operands without operator")]
    ConsecutiveOperands {
        /// From the first number to the end of the second.
        span: Span,
    },
    /// Two operators separated by nothing or a single space.
    #[error("two consecutive operators")]
    ConsecutiveOperators {
        /// From the first operator to the end of the second.
        span: Span,
    },
    /// A `)` without a matching `(`.
    #[error("closing bracket never opened")]
    UnmatchedClosingBracket {
        /// The closing bracket.
        span: Span,
    },
    /// Found something other than an operator after a complete operand.
    #[error("operator expected, found '{found}'")]
    OperatorExpected {
        /// Text of the token found instead.
        found: String,
        /// The token found instead.
        span:  Span,
    },
    /// An operand was required but the input ended or something else came.
    #[error("expression expected")]
    ExpressionExpected {
        /// The token found instead, or one past the end.
        span: Span,
    },
    /// A number token that does not convert to a value, such as `.`.
    #[error("invalid number '{literal}'")]
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// The number token.
        span:    Span,
    },
    /// The left side of `=` is not a single symbol.
    #[error("assignment target must be a single symbol")]
    InvalidAssignment {
        /// The token that cannot start or continue the assignment target.
        span: Span,
    },
    /// A statement without any tokens.
    #[error("empty statement")]
    EmptyStatement {
        /// Start of the statement.
        span: Span,
    },
}

impl ParseError {
    /// Returns the span of the offending text.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnexpectedCharacter { span, .. }
            | Self::MissingOperand { span }
            | Self::ConsecutiveOperands { span }
            | Self::ConsecutiveOperators { span }
            | Self::UnmatchedClosingBracket { span }
            | Self::OperatorExpected { span, .. }
            | Self::ExpressionExpected { span }
            | Self::InvalidNumber { span, .. }
            | Self::InvalidAssignment { span }
            | Self::EmptyStatement { span } => *span,
        }
    }

    /// Returns the stage that raised this error.
    ///
    /// # Example
    /// ```
    /// use spacecalc::{
    ///     error::{ParseError, Stage},
    ///     util::span::Span,
    /// };
    ///
    /// let error = ParseError::ConsecutiveOperators { span: Span::new(1, 2) };
    /// assert_eq!(error.stage(), Stage::Preprocessor);
    /// ```
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::UnexpectedCharacter { .. } => Stage::Lexer,
            Self::MissingOperand { .. }
            | Self::ConsecutiveOperands { .. }
            | Self::ConsecutiveOperators { .. } => Stage::Preprocessor,
            Self::UnmatchedClosingBracket { .. }
            | Self::OperatorExpected { .. }
            | Self::ExpressionExpected { .. }
            | Self::InvalidNumber { .. }
            | Self::InvalidAssignment { .. }
            | Self::EmptyStatement { .. } => Stage::Parser,
        }
    }

    /// Returns the same error with its span moved right by `offset` bytes.
    #[must_use]
    pub fn shifted(mut self, offset: usize) -> Self {
        match &mut self {
            Self::UnexpectedCharacter { span, .. }
            | Self::MissingOperand { span }
            | Self::ConsecutiveOperands { span }
            | Self::ConsecutiveOperators { span }
            | Self::UnmatchedClosingBracket { span }
            | Self::OperatorExpected { span, .. }
            | Self::ExpressionExpected { span }
            | Self::InvalidNumber { span, .. }
            | Self::InvalidAssignment { span }
            | Self::EmptyStatement { span } => *span = span.shifted(offset),
        }
        self
    }
}
