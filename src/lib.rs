//! # simpas
//!
//! simpas is an interpreter for a small imperative language.
//! Programs are built from integer variables, assignments, `display` and
//! `read`, `if` and `while` blocks, and optional procedures with their own
//! parameters and locals.
//!
//! Source text goes through a lexer, a recursive descent parser producing an
//! immutable syntax tree, and a tree-walking evaluator.

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
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use log::debug;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalConfig, Evaluator},
        lexer::tokenize,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The tree is
/// built by the parser and walked read-only by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches line numbers to nodes for error reporting.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. Each
/// error carries the source line where it happened.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps them in a single [`Error`](crate::error::Error) for callers that do
///   not care which phase failed.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the runtime environment and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, environment and evaluator.
/// - Provides entry points for every phase.
pub mod interpreter;

/// Scans and parses `source` into a [`Program`].
///
/// # Errors
/// Returns the first scan or parse error.
///
/// # Examples
/// ```
/// use simpas::parse_program;
///
/// let program = parse_program("procedure one() one := 1 end display one()").unwrap();
/// assert_eq!(program.procedures.len(), 1);
/// assert_eq!(program.statements.len(), 1);
///
/// assert!(parse_program("display 12a").is_err());
/// ```
pub fn parse_program(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    debug!("scanned {} token(s)", tokens.len());

    let program = interpreter::parser::core::parse_program(&mut tokens.iter().peekable())?;
    Ok(program)
}

/// Parses and runs `source`, reading from `input` and writing to `output`.
///
/// Nothing is executed unless the whole program parses.
///
/// # Returns
/// The environment as the program left it.
///
/// # Errors
/// Returns the first scan, parse or runtime error.
pub fn run<R: BufRead, W: Write>(source: &str,
                                 input: R,
                                 output: W,
                                 config: EvalConfig)
                                 -> Result<Environment, Error> {
    let program = parse_program(source)?;

    let mut env = Environment::new();
    let mut evaluator = Evaluator::with_config(input, output, config);
    evaluator.exec(&program, &mut env)?;

    Ok(env)
}

/// Runs `source` with `input` as the text consumed by `read`, returning
/// everything the program displayed.
///
/// # Errors
/// Returns an error if scanning, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use simpas::get_result;
///
/// let output = get_result("display 3 read x ; display x * 2", "21\n").unwrap();
/// assert_eq!(output, "3\n42\n");
///
/// // Example with an intentional error (unknown variable).
/// assert!(get_result("display y", "").is_err());
/// ```
pub fn get_result(source: &str, input: &str) -> Result<String, Error> {
    let mut output = Vec::new();
    run(source, input.as_bytes(), &mut output, EvalConfig::default())?;

    Ok(String::from_utf8_lossy(&output).into_owned())
}
