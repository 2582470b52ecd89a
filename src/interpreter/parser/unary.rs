use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, end_of_input, expect, nested, parse_expression},
            utils::parse_comma_separated,
        },
    },
    util::num::parse_number,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`    (numeric negation)
/// - `not`  (logical not)
///
/// Unary operators are right-associative, so an input like `not -x` is parsed
/// as `not (-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "not") unary
///            | primary
/// ```
///
/// Each prefix operator counts as one level of nesting.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let op = match tokens.peek().map(|token| token.kind) {
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        Some(TokenKind::Not) => UnaryOperator::Not,
        _ => return parse_primary(tokens, depth),
    };
    let Some(token) = tokens.next() else {
        return Err(end_of_input("an expression"));
    };
    let operand = parse_unary(tokens, nested(depth, token)?)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     line: token.line })
}

/// Parses a primary expression.
///
/// Primary expressions are literals, variable references, function calls and
/// parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | STRING
///              | BOOLEAN
///              | IDENTIFIER ("(" arguments? ")")?
///              | "(" expression ")"
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next() else {
        return Err(end_of_input("an expression"));
    };
    let line = token.line;

    match token.kind {
        TokenKind::Number => {
            let value = parse_number(&token.text).ok_or_else(|| {
                                                     ParseError::InvalidNumber { text:   token.text.clone(),
                                                                                 line,
                                                                                 column: token.column, }
                                                 })?;
            Ok(Expr::Number { value, line })
        },
        TokenKind::String => Ok(Expr::Str { value: token.text.clone(),
                                            line }),
        TokenKind::Boolean(value) => Ok(Expr::Bool { value, line }),
        TokenKind::Identifier => {
            let name = token.text.clone();
            if tokens.next_if(|next| next.kind == TokenKind::LParen).is_some() {
                let inner = nested(depth, token)?;
                let arguments = parse_comma_separated(tokens,
                                                      |tokens| parse_expression(tokens, inner),
                                                      TokenKind::RParen)?;
                Ok(Expr::Call { name,
                                arguments,
                                line })
            } else {
                Ok(Expr::Identifier { name, line })
            }
        },
        TokenKind::LParen => {
            let expr = parse_expression(tokens, nested(depth, token)?)?;
            expect(tokens, TokenKind::RParen, "')' to close the parenthesis")?;
            Ok(expr)
        },
        _ => Err(ParseError::unexpected(token)),
    }
}
