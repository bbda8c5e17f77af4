/// Entry point of the preprocessor.
///
/// Runs all passes in order and renumbers the resulting token stream.
pub mod core;

/// Sign and adjacency passes.
///
/// Merges unary minus signs into number literals, rejects operands or
/// operators that follow each other without anything in between and collapses
/// the spaces those merges leave behind.
pub mod signs;

/// Space expansion.
///
/// Turns the remaining meaningful spaces into explicit brackets so that the
/// parser never sees a space.
pub mod spaces;
