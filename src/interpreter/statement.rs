use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Environment,
        lexer::{Token, TokenKind, join_tokens, recalc_positions, tokenize},
        parser::core::parse_tokens,
        preprocessor::core::preprocess_tokens,
    },
    util::span::Span,
};

/// Characters trimmed from both ends of every statement.
const BLANKS: &[char] = &[' ', '\t', '\r', '\n'];

/// The result of a statement that evaluated successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The value of the expression.
    pub value:     f64,
    /// The variable the value was bound to, for assignments.
    pub symbol:    Option<String>,
    /// The expression as the parser read it, with spaces expanded into
    /// brackets. Assignments read `symbol = expression`.
    pub processed: String,
}

/// The outcome of one statement of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementReport {
    /// Zero-based index among the non-empty statements of the input.
    pub index:     usize,
    /// The statement text, trimmed. Error spans are byte offsets into it.
    pub statement: String,
    /// The evaluation or the error that stopped it.
    pub outcome:   Result<Evaluation, Error>,
}

/// Evaluates every `;`-separated statement of `input` in order.
///
/// Statements are trimmed and empty ones are skipped. A failing statement
/// does not stop the ones after it, and assignments made by earlier
/// statements are visible to later ones.
///
/// # Example
/// ```
/// use spacecalc::interpreter::{evaluator::core::Environment, statement::eval_input};
///
/// let mut env = Environment::new();
/// let reports = eval_input("A = 2 ;; B ; A*3", &mut env);
///
/// assert_eq!(reports.len(), 3);
/// assert_eq!(reports[0].outcome.as_ref().unwrap().symbol.as_deref(), Some("A"));
/// assert!(reports[1].outcome.is_err());
/// assert_eq!(reports[2].outcome.as_ref().unwrap().value, 6.0);
/// assert_eq!(reports[2].index, 2);
/// ```
pub fn eval_input(input: &str, env: &mut Environment) -> Vec<StatementReport> {
    input.split(';')
         .map(|segment| segment.trim_matches(BLANKS))
         .filter(|statement| !statement.is_empty())
         .enumerate()
         .map(|(index, statement)| StatementReport { index,
                                                     statement: statement.to_string(),
                                                     outcome: eval_statement(statement, env) })
         .collect()
}

/// Evaluates a single statement, which is either an expression or an
/// assignment `symbol = expression`.
///
/// A successful assignment binds the symbol in `env`; a failed one leaves
/// `env` untouched. Error spans are byte offsets into `statement`, also for
/// errors raised on the right-hand side of an assignment.
///
/// # Parameters
/// - `statement`: One statement, without `;`.
/// - `env`: The session variables.
///
/// # Errors
/// - `ParseError::EmptyStatement` when `statement` holds no token.
/// - `ParseError::InvalidAssignment` when the left side of `=` is not a
///   single symbol.
/// - Any error of the pipeline stages.
///
/// # Example
/// ```
/// use spacecalc::{
///     error::{Error, ParseError, RuntimeError},
///     interpreter::{evaluator::core::Environment, statement::eval_statement},
///     util::span::Span,
/// };
///
/// let mut env = Environment::new();
/// let evaluation = eval_statement("A = 1+1 *2", &mut env).unwrap();
/// assert_eq!(evaluation.value, 4.0);
/// assert_eq!(evaluation.processed, "A = (1+1)*2");
/// assert_eq!(env.get("A"), Some(4.0));
///
/// // Spans point into the whole statement, not the right-hand side.
/// let error = eval_statement("B = 1 + C", &mut env).unwrap_err();
/// assert_eq!(error,
///            Error::Runtime(RuntimeError::UndefinedVariable { name: "C".to_string(),
///                                                             span: Span::new(8, 1) }));
///
/// assert!(matches!(eval_statement("1 = 2", &mut env),
///                  Err(Error::Parse(ParseError::InvalidAssignment { .. }))));
/// ```
pub fn eval_statement(statement: &str, env: &mut Environment) -> Result<Evaluation, Error> {
    let tokens = tokenize(statement)?;
    let Some(first) = tokens.first() else {
        return Err(ParseError::EmptyStatement { span: Span::at(0) }.into());
    };

    if !tokens.iter().any(|t| t.kind == TokenKind::Equal) {
        let (value, processed) = evaluate_expression(&tokens, env)?;
        return Ok(Evaluation { value,
                               symbol: None,
                               processed });
    }

    let rest = skip_space(&tokens[1..]);
    let equal = match rest.first() {
        Some(equal) if first.kind == TokenKind::Symbol && equal.kind == TokenKind::Equal => equal,
        _ => {
            let span = tokens.iter()
                             .find(|t| t.kind == TokenKind::Equal)
                             .map_or(first.origin, |t| t.origin);
            return Err(ParseError::InvalidAssignment { span }.into());
        },
    };

    let rhs = skip_space(&rest[1..]);
    let Some(rhs_first) = rhs.first() else {
        return Err(ParseError::ExpressionExpected { span: equal.origin.after() }.into());
    };

    let prefix = rhs_first.origin.position;
    let mut rebased: Vec<Token> = rhs.to_vec();
    for token in &mut rebased {
        token.origin = token.origin.rebased(prefix);
    }
    recalc_positions(&mut rebased, 0);

    let (value, processed) =
        evaluate_expression(&rebased, env).map_err(|error| error.shifted(prefix))?;
    env.assign(first.text.clone(), value);
    log::debug!("bound {} = {value}", first.text);

    Ok(Evaluation { value,
                    symbol: Some(first.text.clone()),
                    processed: format!("{} = {processed}", first.text) })
}

/// Runs the preprocessor, parser and evaluator over the tokens of one
/// expression.
///
/// # Returns
/// The value together with the processed expression text.
fn evaluate_expression(tokens: &[Token], env: &Environment) -> Result<(f64, String), Error> {
    let processed = preprocess_tokens(tokens)?;
    let expr = parse_tokens(&processed)?;
    let value = env.eval(&expr)?;
    let text = join_tokens(&processed);
    log::debug!("evaluated {text:?} to {value}");
    Ok((value, text))
}

/// Drops one leading space token, if any.
fn skip_space(tokens: &[Token]) -> &[Token] {
    match tokens.split_first() {
        Some((space, rest)) if space.kind == TokenKind::Space => rest,
        _ => tokens,
    }
}
