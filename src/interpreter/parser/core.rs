use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_relational, block::parse_statements, procedure::parse_procedures,
            utils::check_nesting,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply parentheses and `if` / `while` / procedure blocks may nest.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parses a complete program.
///
/// Procedure declarations come first, followed by at least one statement.
/// The program must be followed by the end of input: a stray `end` or `else`
/// at top level is an error. Programs nesting parentheses or blocks deeper
/// than [`MAX_NESTING_DEPTH`] are rejected before parsing starts.
///
/// Grammar: `program := procedure* statement+ EOF`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs, ending in
///   [`Token::Eof`].
///
/// # Returns
/// The parsed [`Program`].
///
/// # Example
/// ```
/// use simpas::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("x := 1 ; display x").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_nesting(tokens, MAX_NESTING_DEPTH)?;

    let procedures = parse_procedures(tokens)?;
    let statements = parse_statements(tokens)?;

    match tokens.next() {
        Some((Token::Eof, _)) => {
            debug!("parsed {} procedure(s) and {} top-level statement(s)",
                   procedures.len(),
                   statements.len());
            Ok(Program { procedures,
                         statements })
        },
        Some((tok, line)) => Err(ParseError::unexpected("end of input", tok.describe(), *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the relational operators, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := relational`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_relational(tokens)
}
