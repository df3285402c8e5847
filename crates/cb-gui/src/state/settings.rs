//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed. Contacts
//! themselves are never written here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::theme::ThemeMode;

/// Default window size, in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 650.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 540.0;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display settings.
    pub display: DisplaySettings,

    /// Logging settings.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from the default path.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error so the caller can report it.
    pub fn try_load() -> Result<Self, SettingsError> {
        Self::try_load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn try_load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(SettingsError::io(path, e)),
        };

        toml::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| SettingsError::io(path, e))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ContactBook", "ContactBook")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Light or dark theme.
    pub theme: ThemeMode,
    /// Initial window width.
    pub window_width: f32,
    /// Initial window height.
    pub window_height: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

// =============================================================================
// LOGGING
// =============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level name (`error`, `warn`, `info`, `debug`, `trace`). `RUST_LOG` wins.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Write logs to this file instead of stderr.
    pub file: Option<PathBuf>,
    /// Allow contact field values in log output.
    pub log_contact_data: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            file: None,
            log_contact_data: false,
        }
    }
}
