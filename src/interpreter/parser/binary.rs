use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a binary expression by precedence climbing.
    ///
    /// Operators bind when their precedence is at least `min_precedence`; the
    /// right operand is parsed one tier higher, so every tier is
    /// left-associative: `3-4-5+6` is `((3-4)-5)+6`.
    ///
    /// Besides explicit operators, two tokens continue an expression with an
    /// implicit multiplication: an opening bracket (`3(2)`) and a number
    /// directly after a closing bracket (`(3)2`). Neither is consumed here.
    ///
    /// # Parameters
    /// - `min_precedence`: The lowest tier this call may combine.
    ///
    /// # Returns
    /// The expression tree up to the first closing bracket, the end of the
    /// input or an operator of lower precedence.
    ///
    /// # Errors
    /// `ParseError::OperatorExpected` when a token other than an operator or
    /// a trigger follows a complete operand.
    pub fn parse_expression(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let mut left = self.parse_primary()?;

        while let Some(token) = self.peek() {
            let Some((op, explicit)) = self.continuation(token)? else {
                break;
            };
            if op.precedence() < min_precedence {
                break;
            }
            if explicit {
                self.next();
            }

            let right = self.parse_expression(op.precedence() + 1)?;
            left = Expr::Operation { op,
                                     left: Box::new(left),
                                     right: Box::new(right),
                                     token: token.clone() };
        }

        Ok(left)
    }

    /// Classifies the token following a complete operand.
    ///
    /// Returns the operator it stands for and whether it is written out, or
    /// `None` when the expression ends at this token.
    fn continuation(&self, token: &Token) -> ParseResult<Option<(BinaryOperator, bool)>> {
        let after_bracket = self.last().is_some_and(|t| t.kind == TokenKind::BracketClose);

        match token.kind {
            TokenKind::BracketClose => Ok(None),
            TokenKind::Operator => match BinaryOperator::from_symbol(&token.text) {
                Some(op) => Ok(Some((op, true))),
                None => Err(operator_expected(token)),
            },
            TokenKind::BracketOpen => Ok(Some((BinaryOperator::Mul, false))),
            TokenKind::Number if after_bracket => Ok(Some((BinaryOperator::Mul, false))),
            _ => Err(operator_expected(token)),
        }
    }
}

fn operator_expected(token: &Token) -> ParseError {
    ParseError::OperatorExpected { found: token.text.clone(),
                                   span:  token.origin, }
}
