/// Core parsing logic.
///
/// Declares the [`core::Parser`] cursor over a preprocessed token stream and
/// the [`core::parse_tokens`] entry point.
pub mod core;

/// Binary expression parsing.
///
/// Implements precedence climbing over the operator tiers, including the
/// implicit multiplication triggers.
pub mod binary;

/// Primary expression parsing.
///
/// Handles numbers, symbols, function applications and bracketed
/// expressions, including brackets left open at the end of the input.
pub mod unary;
