use serde::{Deserialize, Serialize};

use crate::error::ListError;
use crate::filter::{FilterSelector, FilterView};
use crate::item::TodoItem;
use crate::priority::Priority;

/// Trim user input and reject blank text.
///
/// Returns `None` when nothing but whitespace remains.
#[must_use]
pub fn normalize_text(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Ordered collection of todo items.
///
/// Position is the only identity an item has. Serialized transparently as a
/// JSON array of [`TodoItem`] records in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

/// Aggregate numbers over a list. `total == active + completed` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCounts {
    /// Number of items.
    pub total: usize,
    /// Items not completed yet.
    pub active: usize,
    /// Items marked as done.
    pub completed: usize,
}

impl TodoList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    /// All items in list order.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Iterate over items in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    /// Append a new open item with medium priority.
    ///
    /// Blank input is declined: the returned snapshot equals `self`. Use
    /// [`normalize_text`] beforehand when the caller needs to know.
    #[must_use]
    pub fn add(&self, raw_text: &str) -> Self {
        let mut next = self.clone();
        if let Some(text) = normalize_text(raw_text) {
            next.items.push(TodoItem::new(text));
        }
        next
    }

    /// Drop the item at `index`; later items move up by one.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] when `index >= len`.
    pub fn remove(&self, index: usize) -> Result<Self, ListError> {
        self.ensure_index(index)?;
        let mut next = self.clone();
        next.items.remove(index);
        Ok(next)
    }

    /// Flip the completion flag of the item at `index`.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] when `index >= len`.
    pub fn toggle_complete(&self, index: usize) -> Result<Self, ListError> {
        let mut next = self.clone();
        let item = next.item_mut(index)?;
        item.completed = !item.completed;
        Ok(next)
    }

    /// Replace text and priority of the item at `index`, keeping its
    /// completion flag.
    ///
    /// Surrounding whitespace is stripped from `new_text` before it is
    /// stored, the same way [`add`](Self::add) does, so the item holds the
    /// trimmed text rather than `new_text` verbatim.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] when `index >= len` and
    /// [`ListError::EmptyText`] when `new_text` is blank.
    pub fn update(&self, index: usize, new_text: &str, new_priority: Priority) -> Result<Self, ListError> {
        self.ensure_index(index)?;
        let text = normalize_text(new_text).ok_or(ListError::EmptyText { index })?;
        let mut next = self.clone();
        let item = next.item_mut(index)?;
        item.text = text.to_owned();
        item.priority = new_priority;
        Ok(next)
    }

    /// Items matching `selector`, paired with their index in this list.
    #[must_use]
    pub fn filter_view(&self, selector: FilterSelector) -> FilterView<'_> {
        FilterView::new(&self.items, selector)
    }

    /// Total, active and completed counts.
    #[must_use]
    pub fn counts(&self) -> TodoCounts {
        let completed = self.items.iter().filter(|item| item.completed).count();
        TodoCounts {
            total: self.items.len(),
            active: self.items.len() - completed,
            completed,
        }
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.items.len(),
        }
    }

    fn ensure_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut TodoItem, ListError> {
        let err = self.out_of_range(index);
        self.items.get_mut(index).ok_or(err)
    }
}

impl From<Vec<TodoItem>> for TodoList {
    fn from(items: Vec<TodoItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
