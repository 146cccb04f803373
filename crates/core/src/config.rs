//! Application configuration
//!
//! Loaded from `hostel.toml` in the platform config directory. Every
//! field has a default, so a missing file or section is fine.
//!
//! ```toml
//! [storage]
//! data_dir = "/srv/hostel"
//! database = "hostel.db"
//! slot = "rooms"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::DEFAULT_ROOMS_SLOT;

pub const CONFIG_FILE_NAME: &str = "hostel.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_slot")]
    pub slot: String,
}

fn default_database() -> String {
    "hostel.db".to_string()
}

fn default_slot() -> String {
    DEFAULT_ROOMS_SLOT.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            database: default_database(),
            slot: default_slot(),
        }
    }
}

impl StorageConfig {
    /// Full database path, using `default_dir` unless overridden
    pub fn database_path(&self, default_dir: &Path) -> PathBuf {
        self.data_dir
            .as_deref()
            .unwrap_or(default_dir)
            .join(&self.database)
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load from `path`, falling back to defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Platform directories for the app
pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "hostel", "hostel").ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine data directory",
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage.database, "hostel.db");
        assert_eq!(config.storage.slot, "rooms");
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let config = AppConfig::from_toml_str("[storage]\nslot = \"annex\"\n").unwrap();
        assert_eq!(config.storage.slot, "annex");
        assert_eq!(config.storage.database, "hostel.db");
    }

    #[test]
    fn test_database_path() {
        let mut storage = StorageConfig::default();
        assert_eq!(
            storage.database_path(Path::new("/data")),
            PathBuf::from("/data/hostel.db")
        );

        storage.data_dir = Some(PathBuf::from("/srv/hostel"));
        storage.database = "rooms.db".to_string();
        assert_eq!(
            storage.database_path(Path::new("/data")),
            PathBuf::from("/srv/hostel/rooms.db")
        );
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            AppConfig::from_toml_str("[storage\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[storage]\ndatabase = \"test.db\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.storage.database, "test.db");
    }
}
