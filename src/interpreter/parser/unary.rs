use crate::{
    ast::{Expr, Function},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::num::parse_literal,
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := number
    ///              | symbol
    ///              | function primary
    ///              | "(" expression ")"?
    /// ```
    ///
    /// A bracket still open when the input ends is closed implicitly, so
    /// `(((2(2` is `2*2`. A function applies to the primary right after it;
    /// the preprocessor has already bracketed whatever a space made its
    /// argument.
    ///
    /// # Errors
    /// - `ParseError::InvalidNumber` for a literal without digits.
    /// - `ParseError::ExpressionExpected` for an operator, a `)` or the end of
    ///   the input where an operand belongs.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.next() else {
            return Err(ParseError::ExpressionExpected { span: self.current_span() });
        };

        match token.kind {
            TokenKind::Number => match parse_literal(&token.text) {
                Some(value) => Ok(Expr::Number { value,
                                                 token: token.clone() }),
                None => Err(ParseError::InvalidNumber { literal: token.text.clone(),
                                                        span:    token.origin, }),
            },
            TokenKind::Symbol => Ok(Expr::Symbol { name:  token.text.clone(),
                                                   token: token.clone(), }),
            TokenKind::Function => {
                let Some(function) = Function::from_symbol(&token.text) else {
                    return Err(ParseError::ExpressionExpected { span: token.origin });
                };
                let argument = self.parse_primary()?;
                Ok(Expr::FunctionCall { function,
                                        argument: Box::new(argument),
                                        token: token.clone() })
            },
            TokenKind::BracketOpen => {
                let inner = self.parse_expression(0)?;
                if self.peek().is_some_and(|t| t.kind == TokenKind::BracketClose) {
                    self.next();
                }
                Ok(inner)
            },
            _ => Err(ParseError::ExpressionExpected { span: token.origin }),
        }
    }
}
