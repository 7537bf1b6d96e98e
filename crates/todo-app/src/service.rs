//! Write-through service tying list operations to a storage slot.

use thiserror::Error;
use todo_core::{FilterSelector, FilterView, ListError, Priority, TodoCounts, TodoList, normalize_text};
use tracing::{error, info, warn};

use crate::notice::Notice;
use crate::store::ListStore;

/// Errors surfaced by [`TodoService`] mutations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The list operation itself was rejected.
    #[error(transparent)]
    List(#[from] ListError),
    /// Backing store failed to persist the new snapshot.
    #[error("store error: {0}")]
    Store(#[source] anyhow::Error),
}

/// Service façade that owns the current snapshot and writes it through to the store.
///
/// The list is loaded once in [`open`](Self::open) and saved after every
/// successful mutation. When a save fails the in-memory snapshot is left as
/// it was, so memory and storage never diverge.
pub struct TodoService<S> {
    store: S,
    list: TodoList,
}

impl<S> TodoService<S> {
    /// Current snapshot.
    #[must_use]
    pub const fn list(&self) -> &TodoList {
        &self.list
    }

    /// Items matching `selector`, paired with their index in the full list.
    #[must_use]
    pub fn filter_view(&self, selector: FilterSelector) -> FilterView<'_> {
        self.list.filter_view(selector)
    }

    /// Total, active and completed counts of the current snapshot.
    #[must_use]
    pub fn counts(&self) -> TodoCounts {
        self.list.counts()
    }

    /// Borrow the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ListStore> TodoService<S> {
    /// Load the persisted list once.
    ///
    /// An absent slot gives an empty list. A slot that cannot be read or
    /// decoded is moved aside with [`ListStore::quarantine`] and the service
    /// starts empty, so the next save does not destroy the old content.
    #[must_use]
    pub fn open(store: S) -> Self {
        let list = match store.load() {
            Ok(Some(list)) => list,
            Ok(None) => TodoList::new(),
            Err(err) => {
                let err: anyhow::Error = err.into();
                warn!(error = %format!("{err:#}"), "Failed to load todo list; starting empty");
                set_aside(&store);
                TodoList::new()
            }
        };
        info!(items = list.len(), "Opened todo list");
        Self { store, list }
    }

    /// Append a todo. Blank text is declined and returns `Ok(None)` without
    /// touching the store.
    ///
    /// # Errors
    /// Returns [`ServiceError::Store`] if the new snapshot cannot be saved.
    pub fn add(&mut self, raw_text: &str) -> Result<Option<Notice>, ServiceError> {
        let Some(text) = normalize_text(raw_text) else {
            return Ok(None);
        };
        let next = self.list.add(text);
        self.commit(next)?;
        info!(index = self.list.len() - 1, "Added todo");
        Ok(Some(Notice::added()))
    }

    /// Delete the todo at `index`.
    ///
    /// # Errors
    /// Returns [`ServiceError::List`] for an invalid index and
    /// [`ServiceError::Store`] if the new snapshot cannot be saved.
    pub fn remove(&mut self, index: usize) -> Result<Notice, ServiceError> {
        let next = self.list.remove(index)?;
        self.commit(next)?;
        info!(index, "Deleted todo");
        Ok(Notice::deleted())
    }

    /// Flip completion of the todo at `index`.
    ///
    /// # Errors
    /// Returns [`ServiceError::List`] for an invalid index and
    /// [`ServiceError::Store`] if the new snapshot cannot be saved.
    pub fn toggle_complete(&mut self, index: usize) -> Result<Notice, ServiceError> {
        let next = self.list.toggle_complete(index)?;
        let completed = next.get(index).is_some_and(|item| item.completed);
        self.commit(next)?;
        info!(index, completed, "Toggled todo");
        Ok(Notice::toggled(completed))
    }

    /// Replace text and priority of the todo at `index`; completion is kept.
    ///
    /// # Errors
    /// Returns [`ServiceError::List`] for an invalid index or blank text and
    /// [`ServiceError::Store`] if the new snapshot cannot be saved.
    pub fn update(&mut self, index: usize, new_text: &str, new_priority: Priority) -> Result<Notice, ServiceError> {
        let next = self.list.update(index, new_text, new_priority)?;
        self.commit(next)?;
        info!(index, priority = %new_priority, "Updated todo");
        Ok(Notice::updated())
    }

    /// Remove the storage slot and start over with an empty list.
    ///
    /// # Errors
    /// Returns [`ServiceError::Store`] if the slot cannot be removed.
    pub fn clear(&mut self) -> Result<Notice, ServiceError> {
        self.store.clear().map_err(|err| ServiceError::Store(err.into()))?;
        self.list = TodoList::new();
        info!("Cleared todo list");
        Ok(Notice::cleared())
    }

    fn commit(&mut self, next: TodoList) -> Result<(), ServiceError> {
        self.store
            .save(&next)
            .map_err(|err| ServiceError::Store(err.into()))?;
        self.list = next;
        Ok(())
    }
}

fn set_aside<S: ListStore>(store: &S) {
    match store.quarantine() {
        Ok(Some(backup)) => warn!(backup = %backup.display(), "Unreadable todo list kept as backup"),
        Ok(None) => {}
        Err(err) => {
            let err: anyhow::Error = err.into();
            error!(error = %format!("{err:#}"), "Could not move unreadable todo list aside; next save replaces it");
        }
    }
}
