/// The lexer module tokenizes statements.
///
/// The lexer reads the raw text and produces a stream of tokens, each
/// classified as a number, symbol, function, operator, bracket, `=`, `;` or
/// space and carrying its position in the text.
///
/// # Responsibilities
/// - Converts the input characters into positioned tokens.
/// - Reports the first character that starts no token.
pub mod lexer;
/// The preprocessor module turns the meaning of spaces into brackets.
///
/// Signs are merged into numbers, forbidden neighbours are rejected and every
/// space is either dropped or expanded into explicit grouping brackets, so the
/// parser never sees a space.
pub mod preprocessor;
/// The parser module builds the expression tree from preprocessed tokens.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Recognizes implicit multiplication and brackets left open.
/// - Reports syntax errors with the location of the offending token.
pub mod parser;
/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree against the session variables and reports
/// undefined variables, division by zero and results that are not a number.
pub mod evaluator;
/// The statement module drives the pipeline for whole inputs.
///
/// Splits the input into statements, recognizes assignments and keeps error
/// positions relative to the statement they occurred in.
pub mod statement;
