//! rodlayout Settings Crate
//!
//! Handles configuration files, defaults and validation.

pub mod config;
pub mod error;

pub use config::{CellViewSource, Config, LoggingSettings, OpenCellView, ScriptSettings};
pub use error::{SettingsError, SettingsResult};
