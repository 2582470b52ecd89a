use thiserror::Error;

use crate::interpreter::lexer::Token;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a token that cannot start or continue the current construct.
    #[error("Syntax error on line {line}, column {column}: Unexpected token {token}.")]
    UnexpectedToken {
        /// The token encountered, as shown to the user.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A specific token was required but something else was found.
    #[error("Syntax error on line {line}, column {column}: Expected {expected}, found {found}.")]
    Expected {
        /// Description of what the grammar required.
        expected: &'static str,
        /// The token actually found, as shown to the user.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A number token that is not a valid number, such as `1.2.3`.
    #[error("Syntax error on line {line}, column {column}: Invalid number literal '{text}'.")]
    InvalidNumber {
        /// The literal text.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Parentheses, calls, unary operators or `if` bodies nested past
    /// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::MAX_NESTING_DEPTH).
    #[error("Syntax error on line {line}, column {column}: Expression nested too deeply.")]
    NestingTooDeep {
        /// The source line of the token that went one level too deep.
        line:   usize,
        /// The source column of that token.
        column: usize,
    },
}

impl ParseError {
    /// Builds an [`ParseError::UnexpectedToken`] pointing at `token`.
    #[must_use]
    pub fn unexpected(token: &Token) -> Self {
        Self::UnexpectedToken { token:  token.to_string(),
                                line:   token.line,
                                column: token.column, }
    }

    /// Builds an [`ParseError::Expected`] pointing at `found`.
    #[must_use]
    pub fn expected(expected: &'static str, found: &Token) -> Self {
        Self::Expected { expected,
                         found: found.to_string(),
                         line: found.line,
                         column: found.column }
    }
}
