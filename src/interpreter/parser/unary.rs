use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, peek_token},
        },
    },
};

/// Parses an optional unary minus in front of a value.
///
/// `-v` is represented as `-1 * v`, so the evaluator never sees a unary node.
/// Only a single `-` may precede a value; write `-(-x)` for a double negation.
///
/// Grammar: `negation := "-" value | value`
///
/// # Example
/// ```
/// use simpas::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::unary::parse_negation},
/// };
///
/// let tokens = tokenize("-7").unwrap();
/// let expr = parse_negation(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(expr, Expr::binary(Expr::Number(-1), BinaryOperator::Mul, Expr::Number(7), 1));
/// ```
pub fn parse_negation<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek().copied() {
        tokens.next();
        let value = parse_value(tokens)?;

        return Ok(Expr::binary(Expr::Number(-1), BinaryOperator::Mul, value, *line));
    }

    parse_value(tokens)
}

/// Parses a primary value.
///
/// Grammar: `value := "(" expression ")" | integer | identifier
///                  | identifier "(" [expression ("," expression)*] ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the value.
///
/// # Returns
/// A literal, variable, call or parenthesized expression node.
///
/// # Errors
/// Returns a `ParseError` if the lookahead cannot start a value or a
/// parenthesis is left unclosed.
pub fn parse_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = peek_token(tokens)?;

    match token {
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Token::Integer(n) => {
            tokens.next();
            Ok(Expr::Number(*n))
        },
        Token::Identifier(name) => {
            tokens.next();
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

                return Ok(Expr::ProcedureCall { name: name.clone(),
                                                arguments,
                                                line: *line });
            }
            Ok(Expr::Variable { name: name.clone(),
                                line: *line, })
        },
        other => Err(ParseError::unexpected("a number, a variable or '('",
                                            other.describe(),
                                            *line)),
    }
}
