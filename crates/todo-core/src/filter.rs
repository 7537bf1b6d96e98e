use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::item::TodoItem;

/// Which subset of the list is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSelector {
    /// Every item.
    #[default]
    All,
    /// Items that are not completed yet.
    Active,
    /// Completed items only.
    Completed,
}

impl FilterSelector {
    /// Every selector, in menu order.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// String representation used in configuration files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Whether `item` belongs to this selector's subset.
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }
}

impl fmt::Display for FilterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid filter '{0}': expected all, active or completed")]
pub struct ParseFilterError(pub String);

impl FromStr for FilterSelector {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|selector| selector.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseFilterError(token.to_owned()))
    }
}

/// Lazy view over the items matching a [`FilterSelector`].
///
/// Yields `(index, item)` pairs where `index` is the position in the
/// unfiltered list, so it can be fed back into index-addressed operations.
/// Cloning the view restarts it from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct FilterView<'a> {
    items: &'a [TodoItem],
    selector: FilterSelector,
    next: usize,
}

impl<'a> FilterView<'a> {
    pub(crate) const fn new(items: &'a [TodoItem], selector: FilterSelector) -> Self {
        Self {
            items,
            selector,
            next: 0,
        }
    }

    /// Selector this view was built with.
    #[must_use]
    pub const fn selector(&self) -> FilterSelector {
        self.selector
    }
}

impl<'a> Iterator for FilterView<'a> {
    type Item = (usize, &'a TodoItem);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.items.get(self.next) {
            let index = self.next;
            self.next += 1;
            if self.selector.matches(item) {
                return Some((index, item));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len().saturating_sub(self.next);
        match self.selector {
            FilterSelector::All => (remaining, Some(remaining)),
            FilterSelector::Active | FilterSelector::Completed => (0, Some(remaining)),
        }
    }
}

impl FusedIterator for FilterView<'_> {}
