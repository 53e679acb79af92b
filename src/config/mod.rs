// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[upload]` - Selection quota and search endpoint
//! - `[gallery]` - Swipe gesture threshold
//! - `[notifications]` - Auto-dismiss durations per severity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lookalike::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.upload.max_files = Some(8);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::selection::FileQuota;
use crate::error::{Error, Result};
use crate::ui::gallery::SwipeThreshold;
use crate::ui::notifications::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Lookalike";

// =============================================================================
// Section Structs
// =============================================================================

/// Upload and submission settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Maximum number of files that can be staged at once.
    #[serde(default = "default_max_files", skip_serializing_if = "Option::is_none")]
    pub max_files: Option<u32>,

    /// URL the multipart search request is posted to.
    #[serde(default = "default_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            endpoint: default_endpoint(),
        }
    }
}

/// Gallery viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Minimum touch displacement recognized as a swipe.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

/// Notification auto-dismiss durations in milliseconds (0 = persistent).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    #[serde(default = "default_success_ms", skip_serializing_if = "Option::is_none")]
    pub success_ms: Option<u64>,
    #[serde(default = "default_info_ms", skip_serializing_if = "Option::is_none")]
    pub info_ms: Option<u64>,
    #[serde(default = "default_warning_ms", skip_serializing_if = "Option::is_none")]
    pub warning_ms: Option<u64>,
    #[serde(default = "default_error_ms", skip_serializing_if = "Option::is_none")]
    pub error_ms: Option<u64>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_ms: default_success_ms(),
            info_ms: default_info_ms(),
            warning_ms: default_warning_ms(),
            error_ms: default_error_ms(),
        }
    }
}

impl NotificationConfig {
    /// Resolves the auto-dismiss duration for a severity, falling back to the built-in default.
    #[must_use]
    pub fn duration_for(&self, severity: Severity) -> Duration {
        let ms = match severity {
            Severity::Success => self.success_ms,
            Severity::Info => self.info_ms,
            Severity::Warning => self.warning_ms,
            Severity::Error => self.error_ms,
        };
        ms.map_or_else(|| severity.default_duration(), Duration::from_millis)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl Config {
    /// Selection quota with out-of-range values clamped.
    #[must_use]
    pub fn quota(&self) -> FileQuota {
        self.upload
            .max_files
            .map_or_else(FileQuota::default, FileQuota::new)
    }

    /// Search endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.upload.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Swipe threshold with out-of-range values clamped.
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.gallery
            .swipe_threshold
            .map_or_else(SwipeThreshold::default, SwipeThreshold::new)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_files() -> Option<u32> {
    Some(DEFAULT_MAX_FILES)
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_ENDPOINT.to_string())
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_success_ms() -> Option<u64> {
    Some(DEFAULT_SUCCESS_MS)
}

fn default_info_ms() -> Option<u64> {
    Some(DEFAULT_INFO_MS)
}

fn default_warning_ms() -> Option<u64> {
    Some(DEFAULT_WARNING_MS)
}

fn default_error_ms() -> Option<u64> {
    Some(DEFAULT_ERROR_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
            (
                Config::default(),
                Some(format!("Could not read settings, using defaults ({err})")),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(Error::from)
}

/// Saves configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            upload: UploadConfig {
                max_files: Some(8),
                endpoint: Some("http://search.local/".to_string()),
            },
            gallery: GalleryConfig {
                swipe_threshold: Some(75.0),
            },
            notifications: NotificationConfig {
                error_ms: Some(0),
                ..NotificationConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[upload]\nmax_files = 3\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.quota().value(), 3);
        assert_eq!(loaded.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            upload: UploadConfig {
                max_files: Some(0),
                endpoint: None,
            },
            gallery: GalleryConfig {
                swipe_threshold: Some(10_000.0),
            },
            ..Config::default()
        };
        assert_eq!(config.quota().value(), MIN_MAX_FILES);
        assert_eq!(config.swipe_threshold().value(), MAX_SWIPE_THRESHOLD);
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn notification_durations_follow_config() {
        let config = NotificationConfig {
            warning_ms: Some(1200),
            info_ms: None,
            ..NotificationConfig::default()
        };
        assert_eq!(
            config.duration_for(Severity::Warning),
            Duration::from_millis(1200)
        );
        assert_eq!(
            config.duration_for(Severity::Info),
            Duration::from_millis(DEFAULT_INFO_MS)
        );
        assert_eq!(
            config.duration_for(Severity::Error),
            Duration::from_millis(DEFAULT_ERROR_MS)
        );
    }
}
