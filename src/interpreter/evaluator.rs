/// Core evaluation logic.
///
/// Contains the `Evaluator`, its configuration and the dispatch over statement
/// and expression kinds.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic and the relational operators, which
/// yield `1` for true and `0` for false.
pub mod binary;

/// Input and output.
///
/// Writes the values of `display` statements and reads the integers consumed
/// by `read`.
pub mod io;

/// Procedure calls.
///
/// Handles argument checking, scope setup and the return slot.
pub mod procedure;
