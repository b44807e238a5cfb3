use std::{collections::HashSet, iter::Peekable};

use log::debug;

use crate::{
    ast::ProcedureDecl,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::ParseResult,
            utils::{expect, parse_comma_separated, parse_identifier, skip_semicolon},
        },
    },
};

/// Parses the procedure declarations at the head of a program.
///
/// Grammar: `procedures := procedure*`
pub fn parse_procedures<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<ProcedureDecl>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut procedures = Vec::new();
    while let Some((Token::Procedure, _)) = tokens.peek() {
        procedures.push(parse_procedure(tokens)?);
    }
    Ok(procedures)
}

/// Parses a single procedure declaration.
///
/// Grammar: `procedure := "procedure" identifier "(" [identifier (","
/// identifier)*] ")" ["var" identifier ("," identifier)* ";"] block "end"
/// [";"]`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `procedure` keyword.
///
/// # Returns
/// The parsed [`ProcedureDecl`].
///
/// # Errors
/// Returns a `ParseError` if the declaration is malformed, or
/// `DuplicateBinding` if a parameter or local repeats a name already bound in
/// the procedure (the procedure name itself included).
///
/// # Example
/// ```
/// use simpas::interpreter::{lexer::tokenize, parser::procedure::parse_procedure};
///
/// let source = "procedure max(a, b) var m; m := a ; max := m end";
/// let tokens = tokenize(source).unwrap();
/// let decl = parse_procedure(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(decl.params, ["a", "b"]);
/// assert_eq!(decl.locals, ["m"]);
/// ```
pub fn parse_procedure<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ProcedureDecl>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Procedure)?;
    let name = parse_identifier(tokens)?;

    expect(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let locals = if let Some((Token::Var, _)) = tokens.peek() {
        tokens.next();
        parse_comma_separated(tokens, parse_identifier, &Token::Semicolon)?
    } else {
        Vec::new()
    };

    check_distinct_bindings(&name, &params, &locals, line)?;

    let body = parse_block(tokens)?;
    expect(tokens, &Token::End)?;
    skip_semicolon(tokens);

    debug!("line {line}: declared procedure '{name}' with {} parameter(s) and {} local(s)",
           params.len(),
           locals.len());

    Ok(ProcedureDecl { name,
                       params,
                       locals,
                       body,
                       line })
}

/// Ensures the return slot, parameters and locals all use different names.
fn check_distinct_bindings(procedure: &str,
                           params: &[String],
                           locals: &[String],
                           line: usize)
                           -> ParseResult<()> {
    let mut seen = HashSet::from([procedure]);

    for name in params.iter().chain(locals) {
        if !seen.insert(name.as_str()) {
            return Err(ParseError::DuplicateBinding { name: name.clone(),
                                                      procedure: procedure.to_string(),
                                                      line });
        }
    }

    Ok(())
}
