//! `config.toml` loading and data directory resolution.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use todo_core::FilterSelector;
use todo_store_file::{DEFAULT_SLOT, validate_slot};

const CONFIG_FILE: &str = "config.toml";
const DATA_DIR_ENV: &str = "TODO_MILE_DIR";
const APP_DIR: &str = "todo-mile";
const FALLBACK_DIR: &str = ".todo-mile";

/// Top-level configuration loaded from `<data-dir>/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// `[storage]` table.
    #[serde(default)]
    pub storage: StorageConfig,
    /// `[view]` table.
    #[serde(default)]
    pub view: ViewConfig,
}

impl ProjectConfig {
    /// Load configuration from a data directory. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML for this
    /// schema, or names an unusable slot.
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Result<Self> {
        let config_path = data_dir.as_ref().join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        validate_slot(&self.storage.slot).context("invalid [storage] slot")?;
        Ok(())
    }
}

/// Storage block.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Slot name; the list lives in `<data-dir>/<slot>.json`.
    #[serde(default = "default_slot")]
    pub slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { slot: default_slot() }
    }
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_owned()
}

/// View block.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct ViewConfig {
    /// Filter used by `ls` when none is given.
    #[serde(default)]
    pub default_filter: FilterSelector,
}

/// Pick the data directory: explicit flag, then `$TODO_MILE_DIR`, then the
/// platform data directory, then `./.todo-mile`.
#[must_use]
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(dir: &Path, body: &str) -> Result<()> {
        let mut file = fs::File::create(dir.join(CONFIG_FILE))?;
        writeln!(file, "{body}")?;
        Ok(())
    }

    #[test]
    fn missing_config_returns_defaults() -> Result<()> {
        let dir = tempdir()?;
        let cfg = ProjectConfig::from_data_dir(dir.path())?;
        assert_eq!(cfg.storage.slot, "todos");
        assert_eq!(cfg.view.default_filter, FilterSelector::All);
        Ok(())
    }

    #[test]
    fn load_config_with_slot_and_filter() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[storage]\nslot = \"work\"\n[view]\ndefault_filter = \"active\"")?;

        let cfg = ProjectConfig::from_data_dir(dir.path())?;
        assert_eq!(cfg.storage.slot, "work");
        assert_eq!(cfg.view.default_filter, FilterSelector::Active);
        Ok(())
    }

    #[test]
    fn partial_config_keeps_other_defaults() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[view]\ndefault_filter = \"completed\"")?;

        let cfg = ProjectConfig::from_data_dir(dir.path())?;
        assert_eq!(cfg.storage.slot, "todos");
        assert_eq!(cfg.view.default_filter, FilterSelector::Completed);
        Ok(())
    }

    #[test]
    fn unknown_filter_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[view]\ndefault_filter = \"someday\"")?;

        let Err(err) = ProjectConfig::from_data_dir(dir.path()) else {
            panic!("unknown filter should error");
        };
        assert!(err.to_string().contains("failed to parse"));
        Ok(())
    }

    #[test]
    fn invalid_slot_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[storage]\nslot = \"../outside\"")?;

        let Err(err) = ProjectConfig::from_data_dir(dir.path()) else {
            panic!("path-like slot should error");
        };
        assert!(err.to_string().contains("invalid [storage] slot"));
        Ok(())
    }

    #[test]
    fn explicit_data_dir_wins() {
        let explicit = PathBuf::from("/srv/todos");
        assert_eq!(resolve_data_dir(Some(explicit.clone())), explicit);
    }
}
