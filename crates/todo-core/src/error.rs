//! Error types for list operations.

use thiserror::Error;

/// Errors returned by index-addressed list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index does not point at an item of the current snapshot.
    #[error("no todo at index {index} (list has {len} item(s))")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// Replacement text was empty after trimming.
    #[error("todo text at index {index} must not be empty")]
    EmptyText {
        /// Position of the item being edited.
        index: usize,
    },
}
