use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{Read, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, peek_token, skip_semicolon},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be:
/// - a display: `display expr [read name]`
/// - a read: `read name`
/// - an assignment: `[assign] name := expr`, where `=` is accepted in place
///   of `:=`
/// - a conditional: `if expr then block [else block] end`
/// - a loop: `while expr do block end`
///
/// Every statement may be followed by an optional `;`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the statement.
///
/// # Returns
/// The parsed `Statement` node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the lookahead cannot start a statement,
/// - a required keyword or operator is missing,
/// - a nested expression or block fails to parse.
///
/// # Example
/// ```
/// use simpas::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let tokens = tokenize("assign x = 2 ;").unwrap();
/// let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
///
/// assert!(matches!(statement, Statement::Assign { ref name, .. } if name == "x"));
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = peek_token(tokens)?;

    let statement = match token {
        Token::Display => parse_display(tokens)?,
        Token::Read => {
            tokens.next();
            Statement::Read(parse_read_target(tokens, *line)?)
        },
        Token::Assign => {
            tokens.next();
            parse_assignment(tokens)?
        },
        Token::Identifier(_) => parse_assignment(tokens)?,
        Token::If => parse_if(tokens)?,
        Token::While => parse_while(tokens)?,
        other => return Err(ParseError::unexpected("a statement", other.describe(), *line)),
    };

    skip_semicolon(tokens);
    trace!("line {}: parsed {statement:?}", statement.line_number());

    Ok(statement)
}

fn parse_display<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Display)?;
    let value = parse_expression(tokens)?;

    let read = if let Some((Token::Read, read_line)) = tokens.peek().copied() {
        tokens.next();
        Some(parse_read_target(tokens, *read_line)?)
    } else {
        None
    };

    Ok(Statement::Display { value,
                            read,
                            line })
}

fn parse_read_target<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Read>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = parse_identifier(tokens)?;
    Ok(Read { name, line })
}

fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = peek_token(tokens)?;
    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::ColonEquals | Token::Equals, _)) => {},
        Some((tok, line)) => return Err(ParseError::unexpected("':=' or '='", tok.describe(), *line)),
        None => return Err(ParseError::UnexpectedEndOfInput { line: *line }),
    }

    let value = parse_expression(tokens)?;

    Ok(Statement::Assign { name,
                           value,
                           line: *line })
}

/// Parses `if expr then block [else block] end`.
///
/// An `else if` chain is written as a nested `if` inside the else block, each
/// closed by its own `end`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::If)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then)?;
    let then_branch = parse_block(tokens)?;

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(parse_block(tokens)?)
    } else {
        None
    };

    expect(tokens, &Token::End)?;

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::While)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Do)?;
    let body = parse_block(tokens)?;
    expect(tokens, &Token::End)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}
