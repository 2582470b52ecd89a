use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or`, the lowest-precedence operator.
/// `depth` is the nesting level of the enclosing construct and is passed down
/// unchanged; only unary operators, parentheses and calls deepen it.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_logical_and(tokens, depth)?;
    while let Some(token) = tokens.next_if(|token| token.kind == TokenKind::Or) {
        let right = parse_logical_and(tokens, depth)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::Or,
                               right: Box::new(right),
                               line:  token.line, };
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := equality ("and" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_equality(tokens, depth)?;
    while let Some(token) = tokens.next_if(|token| token.kind == TokenKind::And) {
        let right = parse_equality(tokens, depth)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::And,
                               right: Box::new(right),
                               line:  token.line, };
    }
    Ok(left)
}

/// Parses `==` and `!=`.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_comparison(tokens, depth)?;
    loop {
        let Some(&token) = tokens.peek() else { break };
        let op = match token.kind {
            TokenKind::EqualEqual => ComparisonOperator::Equal,
            TokenKind::BangEqual => ComparisonOperator::NotEqual,
            _ => break,
        };
        tokens.next();
        let right = parse_comparison(tokens, depth)?;
        left = Expr::Comparison { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
    }
    Ok(left)
}

/// Parses ordering comparisons.
///
/// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_additive(tokens, depth)?;
    loop {
        let Some(&token) = tokens.peek() else { break };
        let op = match token.kind {
            TokenKind::Less => ComparisonOperator::Less,
            TokenKind::Greater => ComparisonOperator::Greater,
            TokenKind::LessEqual => ComparisonOperator::LessEqual,
            TokenKind::GreaterEqual => ComparisonOperator::GreaterEqual,
            _ => break,
        };
        tokens.next();
        let right = parse_additive(tokens, depth)?;
        left = Expr::Comparison { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        let Some(&token) = tokens.peek() else { break };
        let Some(op) = token_to_binary_operator(token.kind) else { break };
        if !matches!(op, BinaryOperator::Add | BinaryOperator::Sub) {
            break;
        }
        tokens.next();
        let right = parse_multiplicative(tokens, depth)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line: token.line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        let Some(&token) = tokens.peek() else { break };
        let Some(op) = token_to_binary_operator(token.kind) else { break };
        if !matches!(op, BinaryOperator::Mul | BinaryOperator::Div) {
            break;
        }
        tokens.next();
        let right = parse_unary(tokens, depth)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line: token.line };
    }
    Ok(left)
}

/// Maps a token kind to its arithmetic operator, if it is one.
///
/// # Example
/// ```
/// use pyhton::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(TokenKind::Less), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
