//! Error types for curriculum-core.

use thiserror::Error;

/// Result type alias using StorageError.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage root not found: {0}")]
    NotFound(String),

    #[error("storage root is not a directory: {0}")]
    NotADirectory(String),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("file {name} is {size} bytes, limit is {limit}")]
    TooLarge { name: String, size: u64, limit: u64 },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure reported by a markdown renderer.
#[derive(Debug, Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);
