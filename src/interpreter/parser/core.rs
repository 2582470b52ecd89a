use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest allowed nesting of parentheses, calls, unary operators and `if`
/// bodies.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Parses a whole token stream into a [`Program`].
///
/// Parsing is single-shot and fail-fast: the first construct that matches no
/// grammar rule aborts with a [`ParseError`]. Blank lines between statements
/// are skipped.
///
/// # Example
/// ```
/// use pyhton::interpreter::{lexer::tokenize, parser::parse};
///
/// let program = parse(&tokenize("x = 1\n\nprnit(x)")).unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse(&tokenize("x = )")).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_newlines(&mut iter);
        if peek_kind(&mut iter) == TokenKind::Eof {
            break;
        }
        statements.push(parse_statement(&mut iter, 0)?);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// `depth` counts the constructs enclosing the expression. Top-level code
/// starts at `0`.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_logical_or(tokens, depth)
}

/// Enters one more level of nesting at `token`.
///
/// Fails with [`ParseError::NestingTooDeep`] once [`MAX_NESTING_DEPTH`] is
/// reached.
pub(in crate::interpreter::parser) fn nested(depth: usize, token: &Token) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { line:   token.line,
                                                column: token.column, });
    }
    Ok(depth + 1)
}

/// Kind of the next token, treating an exhausted stream as end of input.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
}

/// Consumes any run of newline tokens.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while peek_kind(tokens) == TokenKind::NewLine {
        tokens.next();
    }
}

/// Consumes the next token, which must be of `kind`.
///
/// `expected` describes the required token for the error message.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &'static str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(ParseError::expected(expected, token)),
        None => Err(end_of_input(expected)),
    }
}

/// Error for a stream that ran out without its end-of-input token.
pub(in crate::interpreter::parser) fn end_of_input(expected: &'static str) -> ParseError {
    ParseError::Expected { expected,
                           found: "end of input".to_string(),
                           line: 0,
                           column: 0 }
}
