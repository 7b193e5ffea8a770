//! Runtime configuration.

use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/coffer_config.json5");

/// The largest inventory a config may ask for.
pub const MAX_INVENTORY_SIZE: usize = 1024;

/// Errors raised while loading a [`CofferConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or created.
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid JSON5.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The config file parsed but holds unusable values.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Settings for a banking session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CofferConfig {
    /// Path of the item definitions file.
    pub item_definitions: String,
    /// Number of inventory slots per player.
    pub inventory_size: usize,
    /// Log directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl CofferConfig {
    /// Writes the bundled default config to `path` unless a file is already there.
    ///
    /// Returns `true` if the file was written.
    pub fn create_default(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        Ok(true)
    }

    /// Reads, parses and validates the config at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::from_json5(&config_str)
    }

    /// Loads the config at `path`, writing the bundled default there first if it is missing.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if Self::create_default(path)? {
            log::info!("Wrote default config to {}", path.display());
        }
        Self::load(path)
    }

    /// Parses and validates a JSON5 config.
    pub fn from_json5(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_definitions.trim().is_empty() {
            return Err(ConfigError::Invalid("Item definitions path must not be empty"));
        }
        if !(1..=MAX_INVENTORY_SIZE).contains(&self.inventory_size) {
            return Err(ConfigError::Invalid("Inventory size must be in range 1..=1024"));
        }
        Ok(())
    }
}

impl Default for CofferConfig {
    fn default() -> Self {
        Self {
            item_definitions: "package-content/items.json".to_string(),
            inventory_size: 28,
            log_filter: default_log_filter(),
        }
    }
}
