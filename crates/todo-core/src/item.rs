use serde::{Deserialize, Serialize};

use crate::priority::Priority;

/// A single task record.
///
/// Serialized as `{"text", "completed", "priority"}`. Older or hand-edited
/// records without `completed` or `priority` fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// User-supplied description, trimmed and non-empty.
    pub text: String,
    /// Whether the item has been done.
    #[serde(default)]
    pub completed: bool,
    /// Advisory urgency.
    #[serde(default)]
    pub priority: Priority,
}

impl TodoItem {
    /// Create an open item with the default priority.
    ///
    /// Callers are expected to pass text that already went through
    /// [`normalize_text`](crate::normalize_text).
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            priority: Priority::default(),
        }
    }

    /// Whether the item still needs doing.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_open_with_medium_priority() {
        let item = TodoItem::new("Buy milk");
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert!(item.is_active());
        assert_eq!(item.priority, Priority::Medium);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let item: TodoItem = serde_json::from_str(r#"{"text":"Call mom"}"#)
            .unwrap_or_else(|err| panic!("record must parse: {err}"));
        assert_eq!(item, TodoItem::new("Call mom"));
    }

    #[test]
    fn missing_text_is_rejected() {
        let parsed = serde_json::from_str::<TodoItem>(r#"{"completed":true,"priority":"low"}"#);
        assert!(parsed.is_err());
    }
}
