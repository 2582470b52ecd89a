use std::path::PathBuf;

use thiserror::Error;

/// Represents all errors that can occur while loading a source file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not carry the `.yp` extension.
    #[error("'{}' is not a pyhton source file; expected a '.yp' extension.", .path.display())]
    WrongExtension {
        /// The rejected path.
        path: PathBuf,
    },
    /// The file could not be read.
    #[error("Failed to read '{}': {source}.", .path.display())]
    Io {
        /// The path that was read.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}
