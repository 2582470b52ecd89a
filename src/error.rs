use thiserror::Error;

/// Parsing errors.
///
/// Everything the parser can reject. These make up the `SyntaxError` class:
/// each one names the offending token and where it sits in the source.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program,
/// such as unknown names, wrong argument counts or division by zero.
pub mod runtime_error;
/// Source loading errors.
pub mod load_error;

pub use load_error::LoadError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete run, from reading the file to the last
/// statement.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The program text is not valid syntax.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Execution aborted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
