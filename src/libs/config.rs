//! Application configuration.
//!
//! Worklog needs almost no configuration: the only tunable is the name of
//! the database file inside the platform data directory. Settings live in a
//! `config.json` next to the database; a missing file means defaults.

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::Deserialize;
use std::fs;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Override for the database file name. `None` uses the built-in default.
    pub db_file: Option<String>,
}

impl Config {
    /// Reads the configuration, falling back to defaults when the file does
    /// not exist or cannot be parsed.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }
}
