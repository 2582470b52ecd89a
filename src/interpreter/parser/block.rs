use std::iter::Peekable;

use crate::{
    ast::{IfStatement, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, expect, parse_expression, peek_kind, skip_newlines},
            statement::parse_statement,
        },
    },
};

/// Tokens that close an `if` or `elif` body.
pub const BRANCH_END: &[TokenKind] = &[TokenKind::Elif, TokenKind::Else, TokenKind::Def];

/// Tokens that close an `else` body or a function body.
pub const FUNCTION_END: &[TokenKind] = &[TokenKind::Def];

/// Parses statements until one of `terminators` or the end of input.
///
/// Bodies have no indentation or closing keyword. A body simply runs until
/// the next token that can only start an enclosing construct. Newlines
/// between statements are skipped, and the terminator itself is left in the
/// stream for the caller. Statements of the body are parsed at `depth`.
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>,
                         terminators: &[TokenKind],
                         depth: usize)
                         -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();
    loop {
        skip_newlines(tokens);
        let kind = peek_kind(tokens);
        if kind == TokenKind::Eof || terminators.contains(&kind) {
            break;
        }
        statements.push(parse_statement(tokens, depth)?);
    }
    Ok(statements)
}

/// Parses an `if` chain after its leading `if` keyword has been consumed.
///
/// Grammar:
/// ```text
///     if_statement := "if" expression ":" body
///                     ("elif" expression ":" body)*
///                     ("else" ":" body)?
/// ```
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a Token>
{
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::Colon, "':' after the if condition")?;
    let then_body = parse_body(tokens, BRANCH_END, depth)?;

    let mut elif_clauses = Vec::new();
    while tokens.next_if(|token| token.kind == TokenKind::Elif).is_some() {
        let condition = parse_expression(tokens, depth)?;
        expect(tokens, TokenKind::Colon, "':' after the elif condition")?;
        let body = parse_body(tokens, BRANCH_END, depth)?;
        elif_clauses.push((condition, body));
    }

    let else_body = if tokens.next_if(|token| token.kind == TokenKind::Else).is_some() {
        expect(tokens, TokenKind::Colon, "':' after else")?;
        Some(parse_body(tokens, FUNCTION_END, depth)?)
    } else {
        None
    };

    Ok(IfStatement { condition,
                     then_body,
                     elif_clauses,
                     else_body,
                     line })
}
