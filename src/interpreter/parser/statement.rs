use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{FUNCTION_END, parse_body, parse_if},
            core::{ParseResult, end_of_input, expect, nested, parse_expression, peek_kind},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses one statement, dispatching on its leading token.
///
/// Grammar:
/// ```text
///     statement := if_statement
///                | "def" IDENTIFIER "(" params? ")" ":" body
///                | "return" expression?
///                | "print" "(" expression ")"
///                | IDENTIFIER "=" expression
///                | expression
/// ```
///
/// `depth` is the number of bodies enclosing the statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let Some(&token) = tokens.peek() else {
        return Err(end_of_input("a statement"));
    };
    let line = token.line;

    match token.kind {
        TokenKind::If => {
            tokens.next();
            parse_if(tokens, line, nested(depth, token)?).map(Statement::If)
        },
        TokenKind::Def => {
            tokens.next();
            parse_function_definition(tokens, line, nested(depth, token)?)
        },
        TokenKind::Return => {
            tokens.next();
            parse_return(tokens, line, depth)
        },
        TokenKind::Print => {
            tokens.next();
            parse_print(tokens, line, depth)
        },
        _ => parse_assignment_or_expression(tokens, line, depth),
    }
}

fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    line: usize,
                                    depth: usize)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = parse_identifier(tokens, "a function name")?;
    expect(tokens, TokenKind::LParen, "'(' after the function name")?;
    let params = parse_comma_separated(tokens,
                                       |tokens| parse_identifier(tokens, "a parameter name"),
                                       TokenKind::RParen)?;
    expect(tokens, TokenKind::Colon, "':' after the parameter list")?;
    let body = parse_body(tokens, FUNCTION_END, depth)?;

    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         body,
                                         line }))
}

/// A bare `return` ends at the line break or at the end of input.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let value = match peek_kind(tokens) {
        TokenKind::NewLine | TokenKind::Eof => None,
        _ => Some(parse_expression(tokens, depth)?),
    };
    Ok(Statement::Return { value, line })
}

fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::LParen, "'(' after print")?;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::RParen, "')' to close print")?;
    Ok(Statement::Print { value, line })
}

/// Parses an expression and turns it into an assignment when a bare
/// identifier is followed by `=`.
///
/// Any other expression followed by `=` is left as an expression statement
/// and the `=` is not consumed.
fn parse_assignment_or_expression<'a, I>(tokens: &mut Peekable<I>,
                                        line: usize,
                                        depth: usize)
                                        -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens, depth)?;
    let assigns = peek_kind(tokens) == TokenKind::Assign;

    match expr {
        Expr::Identifier { name, .. } if assigns => {
            tokens.next();
            let value = parse_expression(tokens, depth)?;
            Ok(Statement::Assignment { name, value, line })
        },
        expr => Ok(Statement::Expression { expr, line }),
    }
}
