//! Configuration for rodlayout
//!
//! Configuration is organized into logical sections:
//! - Logging (filter level, output format)
//! - Script generation (cell view binding, number precision)
//!
//! Files are JSON or TOML, picked by extension. The default location is
//! `<config dir>/rodlayout/config.toml`.

use rodlayout_core::CellView;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{SettingsError, SettingsResult};

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter level, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Where a generated script gets its cell view from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellViewSource {
    /// The variable is bound by whoever loads the script
    Caller,
    /// The cell view currently open in the layout editor
    #[default]
    Edit,
    /// A cell view opened by library, cell and view name
    Open,
}

/// Cell view opened by name when [`CellViewSource::Open`] is selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenCellView {
    pub lib: String,
    pub cell: String,
    #[serde(default = "default_view")]
    pub view: String,
    /// Access mode: `r`, `a` or `w`
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_view() -> String {
    "layout".to_string()
}

fn default_mode() -> String {
    "a".to_string()
}

/// Script generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptSettings {
    /// SKILL variable holding the cell view
    pub cell_view_var: String,
    pub source: CellViewSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<OpenCellView>,
    /// Decimals printed for coordinates and widths
    pub precision: usize,
    /// Append `dbSave` at the end of the script
    pub save_on_finish: bool,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            cell_view_var: "cv".to_string(),
            source: CellViewSource::Edit,
            open: None,
            precision: 4,
            save_on_finish: false,
        }
    }
}

impl ScriptSettings {
    /// The configured cell view variable as an identifier.
    pub fn cell_view(&self) -> SettingsResult<CellView> {
        CellView::new(self.cell_view_var.clone())
            .map_err(|e| SettingsError::invalid("script.cell_view_var", e.to_string()))
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingSettings,
    pub script: ScriptSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/rodlayout/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("rodlayout").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the default file if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => {
                tracing::debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if tracing::Level::from_str(&self.logging.level).is_err() {
            return Err(SettingsError::invalid(
                "logging.level",
                format!("unknown level '{}'", self.logging.level),
            ));
        }

        self.script.cell_view()?;

        if self.script.precision > 9 {
            return Err(SettingsError::invalid(
                "script.precision",
                "must be at most 9",
            ));
        }

        if self.script.source == CellViewSource::Open {
            let open = self.script.open.as_ref().ok_or_else(|| {
                SettingsError::invalid("script.open", "required when source is 'open'")
            })?;
            if open.lib.is_empty() || open.cell.is_empty() || open.view.is_empty() {
                return Err(SettingsError::invalid(
                    "script.open",
                    "lib, cell and view must not be empty",
                ));
            }
            if !matches!(open.mode.as_str(), "r" | "a" | "w") {
                return Err(SettingsError::invalid(
                    "script.open.mode",
                    format!("'{}' is not one of r, a, w", open.mode),
                ));
            }
        }

        Ok(())
    }
}
