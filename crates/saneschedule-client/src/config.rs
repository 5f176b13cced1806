//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/saneschedule/config.toml` by default. Every section is
//! optional; a missing file means defaults everywhere.

use std::path::{Path, PathBuf};

use saneschedule_core::{Conference, FormatOptions};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

// ---------------------------------------------------------------------------
// ClientConfig (config.toml)
// ---------------------------------------------------------------------------

/// Configuration for the saneschedule client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Where the event catalog comes from.
    pub catalog: CatalogSettings,

    /// Conference profile overrides.
    pub conference: Conference,

    /// Display settings.
    pub display: DisplaySettings,

    /// Preference storage settings.
    pub storage: StorageSettings,
}

/// Event catalog location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Path to the exported `events.json`.
    pub path: Option<PathBuf>,
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Emit OSC8 hyperlinks on titles.
    pub hyperlinks: bool,

    /// Maximum title length (truncated with ellipsis).
    pub max_title_length: Option<usize>,

    /// Append the room to agenda lines.
    pub show_location: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            hyperlinks: true,
            max_title_length: None,
            show_location: false,
        }
    }
}

/// Preference storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Path to the preference file.
    pub prefs_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> ClientResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::config(format!("failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> ClientResult<Self> {
        toml::from_str(content)
            .map_err(|e| ClientError::config(format!("failed to parse config: {}", e)))
    }

    /// The catalog file to read.
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join("events.json"))
    }

    /// The preference file to read and write.
    pub fn prefs_path(&self) -> PathBuf {
        self.storage
            .prefs_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join("preferences.json"))
    }

    /// Format options from the display section and conference day window.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            hyperlinks: self.display.hyperlinks,
            max_title_length: self.display.max_title_length,
            show_location: self.display.show_location,
            ..FormatOptions::for_conference(&self.conference)
        }
    }

    /// Checks settings that parse but cannot work.
    pub fn validate(&self) -> ClientResult<()> {
        let conference = &self.conference;
        if conference.day_start_hour >= conference.day_end_hour || conference.day_end_hour > 24 {
            return Err(ClientError::config(format!(
                "invalid day window {}..{}",
                conference.day_start_hour, conference.day_end_hour
            )));
        }
        if conference.storage_prefix.is_empty() {
            return Err(ClientError::config("storage_prefix must not be empty"));
        }
        Ok(())
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("saneschedule")
    }

    /// Returns the default data directory path.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("saneschedule")
    }
}
