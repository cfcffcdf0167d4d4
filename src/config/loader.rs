//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ReconcileError, ReconcileResult};

use super::types::{MidnightPolicy, ReconcileConfig};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "reconcile.yaml";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── reconcile.yaml   # page size, midnight policy, approval filter
/// ```
///
/// # Example
///
/// ```no_run
/// use punchclock_reconcile::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Page size: {}", loader.page_size());
/// # Ok::<(), punchclock_reconcile::error::ReconcileError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReconcileConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `reconcile.yaml` is missing or unreadable
    /// - the file contains invalid YAML or unknown values
    /// - a value fails validation (e.g. `page_size: 0`)
    pub fn load<P: AsRef<Path>>(path: P) -> ReconcileResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml(&config_path)?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: ReconcileConfig) -> ReconcileResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses the YAML file. An empty file yields the defaults.
    fn load_yaml(path: &Path) -> ReconcileResult<ReconcileConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReconcileError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        if content.trim().is_empty() {
            return Ok(ReconcileConfig::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ReconcileError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &ReconcileConfig) -> ReconcileResult<()> {
        if config.page_size == 0 {
            return Err(ReconcileError::InvalidConfig {
                field: "page_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Returns the number of records requested per page.
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Returns the midnight policy for the hourly distribution.
    pub fn midnight_policy(&self) -> MidnightPolicy {
        self.config.midnight_policy
    }
}
