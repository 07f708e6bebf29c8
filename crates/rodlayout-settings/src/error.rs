//! Error types for the settings crate.

use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The configuration file could not be saved.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The configuration directory could not be found.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

impl SettingsError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        SettingsError::InvalidSetting {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
