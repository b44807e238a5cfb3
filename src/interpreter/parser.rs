/// Entry points of the parser.
///
/// Parses whole programs and expressions, and defines the `ParseResult`
/// alias shared by all parser modules.
pub mod core;

/// Statement parsing.
///
/// Handles `display`, `read`, assignments and the `if` / `while` control
/// flow statements.
pub mod statement;

/// Block parsing.
///
/// Parses the statement sequences that form the top-level program and the
/// bodies of `if`, `while` and procedures.
pub mod block;

/// Binary operator parsing.
///
/// Implements the relational, additive and multiplicative precedence layers.
pub mod binary;

/// Unary and primary expressions.
///
/// Handles unary minus, parenthesized expressions, literals, variables and
/// procedure calls.
pub mod unary;

/// Procedure declarations.
pub mod procedure;

/// Utility functions for the parser.
///
/// Provides token expectations, identifier parsing and comma-separated lists.
pub mod utils;
