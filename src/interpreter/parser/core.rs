use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
    util::span::Span,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A cursor over a preprocessed token stream.
///
/// The stream must not contain spaces. The parsing routines are spread over
/// the sibling modules as further `impl Parser` blocks.
pub struct Parser<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    pub(in crate::interpreter::parser) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    pub(in crate::interpreter::parser) fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    /// The most recently consumed token.
    pub(in crate::interpreter::parser) fn last(&self) -> Option<&'a Token> {
        self.index.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Where an error about the current token belongs: the token itself, or
    /// one past the last token when the input is exhausted.
    pub(in crate::interpreter::parser) fn current_span(&self) -> Span {
        match self.peek() {
            Some(token) => token.origin,
            None => self.tokens.last().map_or(Span::at(0), |t| t.origin.after()),
        }
    }
}

/// Parses a preprocessed token stream into an expression tree.
///
/// Grammar:
/// ```text
///     expression := primary (trigger expression)*
///     trigger    := operator | "(" | number after ")"
///     primary    := number | symbol | function primary | "(" expression ")"?
/// ```
///
/// # Parameters
/// - `tokens`: Output of the preprocessor.
///
/// # Returns
/// The root of the tree.
///
/// # Errors
/// - `ParseError::UnmatchedClosingBracket` for a `)` nothing opened.
/// - `ParseError::OperatorExpected` for two operands without operator.
/// - `ParseError::ExpressionExpected` when an operand is missing.
/// - `ParseError::InvalidNumber` for literals such as `.`.
///
/// # Example
/// ```
/// use spacecalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("(3)2").unwrap();
/// let Expr::Operation { op, .. } = parse_tokens(&tokens).unwrap() else {
///     panic!("expected an operation");
/// };
/// assert_eq!(op, BinaryOperator::Mul);
///
/// assert!(parse_tokens(&tokenize("1+1)").unwrap()).is_err());
/// ```
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expression(0)?;

    match parser.peek() {
        None => Ok(expr),
        Some(token) if token.kind == TokenKind::BracketClose => {
            Err(ParseError::UnmatchedClosingBracket { span: token.origin })
        },
        Some(token) => Err(ParseError::OperatorExpected { found: token.text.clone(),
                                                          span:  token.origin, }),
    }
}
