//! Error types for document I/O.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`IoError`] as the error type.
pub type IoResult<T> = std::result::Result<T, IoError>;

/// Document I/O error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML encoding or decoding error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension maps to no known encoding.
    #[error("unsupported format: {}", path.display())]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },

    /// Document declares a different schema than requested.
    #[error("expected schema {expected}, found {found}")]
    SchemaMismatch {
        /// Schema the caller asked for
        expected: u32,
        /// Schema the document declares
        found: u32,
    },

    /// Document has no `schema` key.
    #[error("document has no schema key: {}", path.display())]
    MissingSchema {
        /// Offending path
        path: PathBuf,
    },
}
