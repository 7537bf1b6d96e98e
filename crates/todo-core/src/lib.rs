//! Domain types & list operations for todo-mile.
//!
//! Every mutating operation on [`TodoList`] borrows the current snapshot and
//! returns a fresh one. Items are addressed by their position in the list.

/// Error types for list operations.
pub mod error;
/// Derived filtered views.
pub mod filter;
/// Todo item record.
pub mod item;
/// Ordered todo collection and its operations.
pub mod list;
/// Priority tags.
pub mod priority;

pub use error::ListError;
pub use filter::{FilterSelector, FilterView, ParseFilterError};
pub use item::TodoItem;
pub use list::{TodoCounts, TodoList, normalize_text};
pub use priority::{ParsePriorityError, Priority};
