//! Configuration handling for the forms CLI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured catalog path
pub const CATALOG_ENV: &str = "TM_FORMS_CATALOG";

/// Filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "tm_forms=info";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormsConfig {
    /// JSON file holding the country and language tables
    pub catalog_path: Option<PathBuf>,
    /// Tracing filter directive, e.g. "tm_forms=debug"
    pub log_filter: Option<String>,
}

impl FormsConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "tmapp", "tm-forms")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a given file, defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: FormsConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Save configuration to file, returns where it was written
    pub fn save(&self) -> Result<Option<PathBuf>> {
        match Self::config_path() {
            Some(path) => {
                self.save_to(&path)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Catalog to use: explicit argument, then environment, then config
    pub fn resolve_catalog(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| std::env::var_os(CATALOG_ENV).map(PathBuf::from))
            .or_else(|| self.catalog_path.clone())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
