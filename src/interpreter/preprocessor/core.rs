use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, join_tokens, recalc_positions},
        preprocessor::{
            signs::{check_adjacency, collapse_spaces, merge_signs},
            spaces::SpaceExpander,
        },
    },
    util::span::Span,
};

pub type PreprocessResult<T> = Result<T, ParseError>;

/// Rewrites the tokens of one expression into the stream the parser reads.
///
/// Passes, in order:
/// 1. signs are merged into the numbers they precede,
/// 2. operand/operand and operator/operator neighbours are rejected,
/// 3. space runs left by the merges are collapsed,
/// 4. spaces are expanded into brackets.
///
/// Positions of the result are renumbered as a running sum starting at the
/// position of the first input token. Origins are left untouched, so errors
/// raised later still point into the tokenized text.
///
/// # Parameters
/// - `tokens`: The tokens of one expression, without `;` or `=`.
///
/// # Returns
/// A stream without any space token.
///
/// # Errors
/// - `ParseError::ExpressionExpected` for an empty stream.
/// - Any error raised by the sign and adjacency passes.
///
/// # Example
/// ```
/// use spacecalc::interpreter::{
///     lexer::{join_tokens, tokenize},
///     preprocessor::core::preprocess_tokens,
/// };
///
/// let tokens = tokenize("sin cos -2 * 2").unwrap();
/// let processed = preprocess_tokens(&tokens).unwrap();
/// assert_eq!(join_tokens(&processed), "sin(cos((-2)))*(2)");
///
/// assert!(preprocess_tokens(&tokenize("1+1 1").unwrap()).is_err());
/// ```
pub fn preprocess_tokens(tokens: &[Token]) -> PreprocessResult<Vec<Token>> {
    let Some(first) = tokens.first() else {
        return Err(ParseError::ExpressionExpected { span: Span::at(0) });
    };
    let start = first.position;

    let mut merged = merge_signs(tokens)?;
    check_adjacency(&merged)?;
    collapse_spaces(&mut merged);

    let mut expanded = SpaceExpander::new(&merged).expand();
    recalc_positions(&mut expanded, start);

    log::debug!("preprocessed {:?} into {:?}", join_tokens(tokens), join_tokens(&expanded));
    Ok(expanded)
}
