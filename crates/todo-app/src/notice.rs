//! Transient messages reported after a list mutation.

use serde::Serialize;
use std::fmt;

/// How a front end should present a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The requested change happened.
    Success,
    /// Neutral information, e.g. something was removed.
    Info,
}

impl Severity {
    /// Lowercase label for plain-text output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

/// Short user-facing message describing the outcome of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Text shown to the user.
    pub message: &'static str,
    /// Presentation hint.
    pub severity: Severity,
}

impl Notice {
    const fn new(message: &'static str, severity: Severity) -> Self {
        Self { message, severity }
    }

    pub(crate) const fn added() -> Self {
        Self::new("Todo added successfully!", Severity::Success)
    }

    pub(crate) const fn deleted() -> Self {
        Self::new("Todo deleted successfully!", Severity::Info)
    }

    pub(crate) const fn toggled(completed: bool) -> Self {
        if completed {
            Self::new("Todo completed!", Severity::Success)
        } else {
            Self::new("Todo marked as incomplete.", Severity::Success)
        }
    }

    pub(crate) const fn updated() -> Self {
        Self::new("Todo updated successfully!", Severity::Success)
    }

    pub(crate) const fn cleared() -> Self {
        Self::new("All todos cleared.", Severity::Info)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}
