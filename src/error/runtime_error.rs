use thiserror::Error;

/// Represents all errors that can occur during execution.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that is not bound in the visible scopes.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never defined.
    #[error("Error on line {line}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Function '{name}' expects {expected} arguments, got {found}.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments passed.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator was applied to values it does not support.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Function calls nested deeper than the interpreter allows.
    #[error("Error on line {line}: Maximum recursion depth exceeded while calling '{name}'.")]
    RecursionLimit {
        /// The function whose call went too deep.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` ran outside of any function call.
    #[error("Error on line {line}: 'return' outside of a function.")]
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing program output failed.
    #[error("Error on line {line}: Could not write output: {source}.")]
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}
