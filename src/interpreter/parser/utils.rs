use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, end_of_input},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call arguments. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma, to continue the list, or the closing token, to end it. The closing
/// token is consumed. An immediately encountered closing token produces an
/// empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if tokens.next_if(|token| token.kind == closing).is_some() {
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(token) if token.kind == TokenKind::Comma => {},
            Some(token) if token.kind == closing => break,
            Some(token) => return Err(ParseError::expected("',' or ')'", token)),
            None => return Err(end_of_input("',' or ')'")),
        }
    }

    Ok(items)
}

/// Parses a plain identifier and returns its name as written.
///
/// `expected` names the role of the identifier for the error message, e.g.
/// "a parameter name".
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &'static str)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == TokenKind::Identifier => Ok(token.text.clone()),
        Some(token) => Err(ParseError::expected(expected, token)),
        None => Err(end_of_input(expected)),
    }
}
