use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Returns the lookahead pair without consuming it.
///
/// The reference points into the token buffer rather than into the iterator,
/// so callers may keep it while advancing.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` once the stream, including its trailing
/// [`Token::Eof`], has been consumed.
pub(in crate::interpreter::parser) fn peek_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a (Token, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek()
          .copied()
          .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })
}

/// Consumes the lookahead if it is `expected`, failing otherwise.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token the grammar requires here.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns an `UnexpectedToken` error naming both the expected and the found
/// token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::unexpected(expected.describe(), tok.describe(), *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Checks that parentheses and blocks nest at most `limit` levels deep.
///
/// Every `(`, `if`, `while` and `procedure` opens a level; every `)` and `end`
/// closes one. Unbalanced input is left for the grammar to report. The scan
/// works on a clone of the iterator and consumes nothing.
///
/// # Errors
/// Returns `NestingTooDeep` at the first token that opens a level beyond
/// `limit`.
pub(in crate::interpreter::parser) fn check_nesting<'a, I>(tokens: &Peekable<I>,
                                                           limit: usize)
                                                           -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut depth = 0usize;

    for (token, line) in tokens.clone() {
        match token {
            Token::LParen | Token::If | Token::While | Token::Procedure => {
                depth += 1;
                if depth > limit {
                    return Err(ParseError::NestingTooDeep { limit,
                                                            line: *line });
                }
            },
            Token::RParen | Token::End => depth = depth.saturating_sub(1),
            _ => {},
        }
    }

    Ok(())
}

/// Consumes an optional statement terminator `;`.
pub(in crate::interpreter::parser) fn skip_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by procedure parameter lists, `var` lists and call
/// argument lists. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `)` or `;`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::unexpected(format!("',' or {}", closing.describe()),
                                                  tok.describe(),
                                                  *line));
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Keywords are separate tokens,
/// so they can never be used as names.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(ParseError::unexpected("an identifier", tok.describe(), *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
