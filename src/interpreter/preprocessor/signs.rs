use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        preprocessor::core::PreprocessResult,
    },
    util::span::Span,
};

/// Merges unary minus signs into the number literal they apply to.
///
/// A `-` is a sign when the closest non-space token before it is missing, an
/// operator, an opening bracket or a function, and the closest non-space
/// token after it is a number. The sign is removed and the number becomes a
/// signed literal whose origin spans from the sign to the end of the digits.
/// Spaces between the sign and the number stay in the stream.
///
/// # Parameters
/// - `tokens`: The tokens as produced by the lexer.
///
/// # Returns
/// The tokens with signs merged.
///
/// # Errors
/// Returns `ParseError::MissingOperand` when a sign is the last token.
pub fn merge_signs(tokens: &[Token]) -> PreprocessResult<Vec<Token>> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut sign: Option<&Token> = None;

    for (index, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Number
           && let Some(minus) = sign.take()
        {
            merged.push(Token::new(TokenKind::Number,
                                   format!("-{}", token.text),
                                   Span::across(minus.origin, token.origin)));
            continue;
        }

        if token.kind == TokenKind::Operator && token.text == "-" {
            let left_is_operand = merged.iter()
                                        .rev()
                                        .find(|t| t.kind != TokenKind::Space)
                                        .is_some_and(|t| t.kind.is_operand());

            if !left_is_operand {
                match tokens[index + 1..].iter().find(|t| t.kind != TokenKind::Space) {
                    Some(next) if next.kind == TokenKind::Number => {
                        sign = Some(token);
                        continue;
                    },
                    None => return Err(ParseError::MissingOperand { span: token.origin }),
                    Some(_) => {},
                }
            }
        }

        merged.push(token.clone());
    }

    Ok(merged)
}

/// Rejects operands or operators that follow each other directly.
///
/// Two numbers separated by a single space and two operators separated by
/// nothing or a single space are errors. The error span covers both tokens.
///
/// # Errors
/// - `ParseError::ConsecutiveOperands` for `1 1`.
/// - `ParseError::ConsecutiveOperators` for `1++1` or `1+ +1`.
pub fn check_adjacency(tokens: &[Token]) -> PreprocessResult<()> {
    for (index, first) in tokens.iter().enumerate() {
        let rest = &tokens[index + 1..];
        match first.kind {
            TokenKind::Number => {
                if let [space, second, ..] = rest
                   && space.kind == TokenKind::Space
                   && second.kind == TokenKind::Number
                {
                    return Err(ParseError::ConsecutiveOperands { span: Span::across(first.origin,
                                                                                    second.origin) });
                }
            },
            TokenKind::Operator => {
                let second = match rest {
                    [space, second, ..] if space.kind == TokenKind::Space => Some(second),
                    [second, ..] => Some(second),
                    [] => None,
                };
                if let Some(second) = second
                   && second.kind == TokenKind::Operator
                {
                    return Err(ParseError::ConsecutiveOperators { span: Span::across(first.origin,
                                                                                     second.origin) });
                }
            },
            _ => {},
        }
    }

    Ok(())
}

/// Collapses runs of spaces left behind by [`merge_signs`] into one space.
pub fn collapse_spaces(tokens: &mut Vec<Token>) {
    tokens.dedup_by(|next, kept| next.kind == TokenKind::Space && kept.kind == TokenKind::Space);
}
