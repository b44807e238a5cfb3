use std::iter::Peekable;

use crate::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::peek_token},
    },
};

/// Parses one or more statements.
///
/// Parsing stops, without consuming it, at the first `end`, `else` or end of
/// input in the lookahead. The caller is responsible for eating the
/// terminator.
///
/// Grammar: `statements := statement+`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement.
///
/// # Returns
/// The parsed statements, never empty.
///
/// # Errors
/// Returns `UnexpectedToken` if a terminator appears before any statement,
/// and propagates errors from statement parsing.
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        let (token, line) = peek_token(tokens)?;
        if matches!(token, Token::End | Token::Else | Token::Eof) {
            if statements.is_empty() {
                return Err(ParseError::unexpected("a statement", token.describe(), *line));
            }
            return Ok(statements);
        }
        statements.push(parse_statement(tokens)?);
    }
}

/// Parses the body of an `if`, `while` or procedure.
///
/// Grammar: `block := statement+`
///
/// The resulting [`Program`] never carries procedure declarations.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    Ok(Program::block(parse_statements(tokens)?))
}
