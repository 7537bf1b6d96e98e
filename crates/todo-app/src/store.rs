//! Storage seam used by [`TodoService`](crate::TodoService).

use std::path::PathBuf;

use anyhow::Error;
use todo_core::TodoList;
use todo_store_file::{FileStore, StoreError};

/// Minimal storage abstraction required by [`TodoService`](crate::TodoService).
pub trait ListStore {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error>;

    /// Read the persisted list, or `None` if nothing was ever saved.
    ///
    /// # Errors
    /// Returns a store-specific error when the slot cannot be read or decoded.
    fn load(&self) -> Result<Option<TodoList>, Self::Error>;

    /// Replace the persisted list.
    ///
    /// # Errors
    /// Returns a store-specific error when writing fails.
    fn save(&self, list: &TodoList) -> Result<(), Self::Error>;

    /// Move an unreadable list aside so a later save does not destroy it.
    /// Returns where it went, or `None` if there was nothing to move.
    ///
    /// # Errors
    /// Returns a store-specific error when the list cannot be moved.
    fn quarantine(&self) -> Result<Option<PathBuf>, Self::Error>;

    /// Drop the persisted list entirely.
    ///
    /// # Errors
    /// Returns a store-specific error when removal fails.
    fn clear(&self) -> Result<(), Self::Error>;
}

impl ListStore for FileStore {
    type Error = StoreError;

    fn load(&self) -> Result<Option<TodoList>, Self::Error> {
        Self::load(self)
    }

    fn save(&self, list: &TodoList) -> Result<(), Self::Error> {
        Self::save(self, list)
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, Self::Error> {
        Self::quarantine(self)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        Self::clear(self)
    }
}
