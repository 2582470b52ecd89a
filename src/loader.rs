use std::{fs, path::Path};

use crate::error::LoadError;

/// File extension every program file must carry.
pub const SOURCE_EXTENSION: &str = "yp";

/// Reads a program file as UTF-8 text.
///
/// The extension is checked before the filesystem is touched, so a wrong
/// extension is reported even for a path that does not exist.
///
/// # Example
/// ```
/// use pyhton::{error::LoadError, loader::load_source};
///
/// let err = load_source("script.py").unwrap_err();
/// assert!(matches!(err, LoadError::WrongExtension { .. }));
/// ```
pub fn load_source(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(LoadError::WrongExtension { path: path.to_path_buf() });
    }

    fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(),
                                                              source })
}
