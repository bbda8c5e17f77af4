/// Core evaluation logic and the variable environment.
///
/// Declares [`core::Environment`], the session state every statement is
/// evaluated against, and the recursive walk over expression trees.
pub mod core;

/// Binary operator evaluation.
///
/// Applies the arithmetic operators and rejects division by zero and results
/// that are not a number.
pub mod binary;

/// Builtin function evaluation.
pub mod function;
