use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_negation},
    },
};

/// Parses relational expressions.
///
/// Relational operators have the lowest precedence and are left-associative,
/// so `a < b = c` groups as `(a < b) = c`.
///
/// Grammar: `relational := additive (("=" | "<>" | "<" | ">" | "<=" | ">=")
/// additive)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// An expression node representing the relational chain.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, BinaryOperator::is_relational, parse_additive)
}

/// Parses additive expressions (`+` and `-`).
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// An expression node representing the sum or difference.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                     parse_multiplicative)
}

/// Parses multiplicative expressions (`*` and `/`).
///
/// Grammar: `multiplicative := negation (("*" | "/") negation)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// An expression node representing the product or quotient.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                     parse_negation)
}

/// Folds `operand (op operand)*` into a left-leaning tree for every operator
/// accepted by `accepts`.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           accepts: impl Fn(BinaryOperator) -> bool,
                           parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens)?;

    while let Some((token, line)) = tokens.peek().copied() {
        let Some(op) = token_to_binary_operator(token).filter(|op| accepts(*op)) else {
            break;
        };
        tokens.next();
        let right = parse_operand(tokens)?;
        left = Expr::binary(left, op, right, *line);
    }

    Ok(left)
}

/// Maps a token to its binary operator, if it is one.
///
/// # Example
/// ```
/// use simpas::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::NotEqual), Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(&Token::Percent), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    let op = match token {
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Sub,
        Token::Star => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        Token::Equals => BinaryOperator::Equal,
        Token::NotEqual => BinaryOperator::NotEqual,
        Token::Less => BinaryOperator::Less,
        Token::Greater => BinaryOperator::Greater,
        Token::LessEqual => BinaryOperator::LessEqual,
        Token::GreaterEqual => BinaryOperator::GreaterEqual,
        _ => return None,
    };
    Some(op)
}
