//! # pyhton
//!
//! pyhton is an interpreter for a small, dynamically typed, Python-like
//! language with one rule: keywords are written as typos. `deff`, `retrn`,
//! `prrint` and `esle` are how you spell `def`, `return`, `print` and `else`.
//!
//! Source text flows through a typo-aware lexer, a recursive-descent parser
//! and a tree-walking evaluator:
//!
//! ```
//! let mut out: Vec<u8> = Vec::new();
//! pyhton::run("x = 2\nprrint(x * 3)", &mut out).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "6.0\n");
//! ```
//!
//! A function body runs until the next `def` or the end of the input, so a
//! definition and the code calling it are fed to one [`Interpreter`] as
//! separate programs:
//!
//! ```
//! use pyhton::interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse};
//!
//! let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
//! for src in ["deff add(a, b):\n  retrn a + b", "prrint(add(2, 3))"] {
//!     interpreter.interpret(&parse(&tokenize(src)).unwrap()).unwrap();
//! }
//! assert_eq!(interpreter.into_output(), b"5.0\n");
//! ```
//!
//! [`Interpreter`]: interpreter::evaluator::core::Interpreter

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{io::Write, path::Path};

use crate::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse},
    loader::load_source,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for loading, parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (loader, parser, evaluator).
/// - Attaches line numbers, and columns for syntax errors.
/// - Wraps all of them in one [`error::Error`] for whole runs.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the typo matcher, lexer, parser, evaluator and
/// value representations.
pub mod interpreter;
/// Reading `.yp` program files.
pub mod loader;
/// General helpers shared by several phases.
pub mod util;

/// Runs a whole program and writes its output to `out`.
///
/// The source is tokenized, parsed in full, and only then executed, so a
/// syntax error anywhere means nothing runs. Execution stops at the first
/// runtime error; output written before it stays written.
///
/// # Examples
/// ```
/// use pyhton::{error::Error, run};
///
/// let mut out: Vec<u8> = Vec::new();
/// run("x = 2\nprnit(x * 3)", &mut out).unwrap();
/// assert_eq!(out, b"6.0\n");
///
/// // 'y' is never assigned.
/// let err = run("prnit(y)", Vec::<u8>::new()).unwrap_err();
/// assert!(matches!(err, Error::Runtime(_)));
/// ```
pub fn run<W: Write>(source: &str, out: W) -> Result<(), Error> {
    let tokens = tokenize(source);
    let program = parse(&tokens)?;

    let mut interpreter = Interpreter::with_output(out);
    interpreter.interpret(&program)?;
    Ok(())
}

/// Loads a `.yp` file and runs it with [`run`].
pub fn run_file<W: Write>(path: impl AsRef<Path>, out: W) -> Result<(), Error> {
    let source = load_source(path)?;
    run(&source, out)
}
