//! # spacecalc
//!
//! spacecalc is an arithmetic expression calculator in which spaces group.
//! `1+1 *2` is `(1+1)*2` and `sin 4*2` is `sin(4*2)`. Statements are
//! tokenized, preprocessed into explicit brackets, parsed by precedence
//! climbing and evaluated against a session of variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Environment,
    statement::{StatementReport, eval_input},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum together with the operators and
/// functions it is built from. The tree is built by the parser and walked by
/// the evaluator.
///
/// # Responsibilities
/// - Defines number, symbol, operation and function call nodes.
/// - Keeps the source token of every node for error reporting.
/// - Maps operator and function text to their enum variants and back.
pub mod ast;
/// Formats values and errors for a terminal.
///
/// Nothing in here influences evaluation. It groups digits, trims fractions,
/// underlines the offending part of a statement and optionally colors it.
pub mod display;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while a statement is
/// tokenized, preprocessed, parsed or evaluated. Every error carries the span
/// of the offending text in its statement.
///
/// # Responsibilities
/// - Defines error enums for every pipeline stage.
/// - Attaches spans and detailed messages for user feedback.
/// - Moves spans between coordinate systems for assignments.
pub mod error;
/// Orchestrates the evaluation of statements.
///
/// This module ties together lexing, preprocessing, parsing and evaluation
/// and exposes the statement driver a front end talks to.
///
/// # Responsibilities
/// - Coordinates all pipeline stages.
/// - Provides entry points for single statements and whole inputs.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General helpers for numbers and source spans.
///
/// # Responsibilities
/// - Convert number literals and split values for display without silent
///   data loss.
/// - Describe and move byte ranges of source text.
pub mod util;

/// Evaluates every statement of `input` against `env`.
///
/// Statements are separated by `;`. Each one is evaluated even if an earlier
/// one failed, and assignments persist in `env` for later statements and
/// later calls.
///
/// # Examples
/// ```
/// use spacecalc::{get_result, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::with_constants();
///
/// let reports = get_result("A = 1+1 *2; A+A", &mut env);
/// assert_eq!(reports[1].outcome.as_ref().unwrap().value, 8.0);
///
/// // Errors are reported per statement.
/// let reports = get_result("x + 1", &mut env);
/// assert!(reports[0].outcome.is_err());
/// ```
pub fn get_result(input: &str, env: &mut Environment) -> Vec<StatementReport> {
    eval_input(input, env)
}
