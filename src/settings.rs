//! Terminal UI settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// User-configurable preferences for the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// List history newest first.
    #[serde(default)]
    descending_history: bool,

    /// Show square numbers (1-9) on empty squares.
    #[serde(default = "default_show_hints")]
    show_hints: bool,
}

fn default_show_hints() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            descending_history: false,
            show_hints: default_show_hints(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the history order.
    pub fn with_descending_history(mut self, descending: bool) -> Self {
        self.descending_history = descending;
        self
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
