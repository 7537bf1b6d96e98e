//! Error types for todo-mile slot storage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during `FileStore` operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Slot name is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("Invalid slot name: {0:?}")]
    InvalidSlot(String),

    /// Reading or writing the slot failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Slot content is not a valid todo list encoding.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// Slot file that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to encode the list as JSON.
    #[error("Failed to serialize todo list: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Renaming the temporary file over the slot failed.
    #[error("Failed to replace {path}: {source}")]
    Persist {
        /// Slot file that was being replaced.
        path: PathBuf,
        /// Underlying persist error.
        #[source]
        source: tempfile::PersistError,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
