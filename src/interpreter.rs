/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages the global scope and the stack of call scopes, and writes program
/// output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions and control flow, including early `return`.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens with
/// their line and column. Words pass through the typo matcher, so `prrint`
/// and `retrn` come out as keyword tokens.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Resolves keyword typos to their keyword kind.
/// - Never fails; unknown characters are skipped.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Infers where bodies end from the next `elif`, `else` or `def`.
/// - Reports the first syntax error with its line and column.
pub mod parser;
/// Fuzzy keyword matching.
///
/// Decides whether a word is a single-edit typo of a vocabulary word: one
/// doubled letter, one missing letter, or two swapped neighbours.
pub mod typo;
/// The value module defines the runtime data types for evaluation.
pub mod value;
