//! File-backed storage slot for todo-mile.
//!
//! A slot is a single JSON file holding the whole list. Every save replaces
//! the file atomically; there are no partial writes and no history.

mod error;

pub use error::StoreError;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use todo_core::TodoList;
use tracing::{debug, info, warn};

/// Slot used when nothing else is configured.
pub const DEFAULT_SLOT: &str = "todos";

const SLOT_EXTENSION: &str = "json";
const CORRUPT_SUFFIX: &str = "corrupt";

/// Storage based on `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    slot: String,
    path: PathBuf,
}

impl FileStore {
    /// Open the slot `slot` inside `dir`. Nothing is touched on disk until the
    /// first save.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidSlot`] if the slot name is not usable as a file stem.
    pub fn open(dir: impl AsRef<Path>, slot: &str) -> Result<Self, StoreError> {
        validate_slot(slot)?;
        let dir = dir.as_ref().to_path_buf();
        let path = dir.join(format!("{slot}.{SLOT_EXTENSION}"));
        Ok(Self {
            dir,
            slot: slot.to_owned(),
            path,
        })
    }

    /// Directory holding the slot file.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Name of the slot.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Full path of the slot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted list.
    ///
    /// Returns `Ok(None)` when the slot has never been written. A slot holding
    /// JSON `null` reads as an empty list.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the file exists but cannot be read and
    /// [`StoreError::Parse`] if its content is not a todo list.
    pub fn load(&self) -> Result<Option<TodoList>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Slot is empty");
                return Ok(None);
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let list: Option<TodoList> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let list = list.unwrap_or_default();
        debug!(path = %self.path.display(), items = list.len(), "Loaded slot");
        Ok(Some(list))
    }

    /// Replace the slot with `list`.
    ///
    /// The list is written to a temporary file next to the slot and renamed
    /// over it, so readers see either the old or the new list.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the list cannot be
    /// encoded, or the file cannot be written or renamed.
    pub fn save(&self, list: &TodoList) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|err| StoreError::io(&self.dir, err))?;

        let body = serde_json::to_string_pretty(list).map_err(StoreError::Serialize)?;
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|err| StoreError::io(&self.dir, err))?;
        write_body(&mut tmp, &body).map_err(|err| StoreError::io(tmp.path(), err))?;
        tmp.persist(&self.path).map_err(|source| StoreError::Persist {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), items = list.len(), "Saved slot");
        Ok(())
    }

    /// Move an unreadable slot out of the way so the next save cannot
    /// overwrite it.
    ///
    /// The file is renamed to `<slot>.json.corrupt`, or
    /// `<slot>.json.corrupt.<n>` when earlier backups exist. Returns the
    /// backup path, or `None` when there is no slot file.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the rename fails.
    pub fn quarantine(&self) -> Result<Option<PathBuf>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.free_backup_path();
        fs::rename(&self.path, &backup).map_err(|err| StoreError::io(&self.path, err))?;
        warn!(path = %self.path.display(), backup = %backup.display(), "Moved unreadable slot aside");
        Ok(Some(backup))
    }

    fn free_backup_path(&self) -> PathBuf {
        let base = format!("{}.{SLOT_EXTENSION}.{CORRUPT_SUFFIX}", self.slot);
        std::iter::once(self.dir.join(&base))
            .chain((1_u32..).map(|n| self.dir.join(format!("{base}.{n}"))))
            .find(|candidate| !candidate.exists())
            .unwrap_or_else(|| self.dir.join(base))
    }

    /// Remove the slot file. Clearing a slot that was never written is a no-op.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Cleared slot");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::io(&self.path, err)),
        }
    }
}

fn write_body(tmp: &mut NamedTempFile, body: &str) -> std::io::Result<()> {
    tmp.write_all(body.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()
}

/// Check that `slot` is usable as a file stem: non-empty, ASCII alphanumerics, `-` or `_`.
///
/// # Errors
/// Returns [`StoreError::InvalidSlot`] otherwise.
pub fn validate_slot(slot: &str) -> Result<(), StoreError> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidSlot(slot.to_owned()))
    }
}
