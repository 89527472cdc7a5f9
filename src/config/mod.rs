// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification configuration, loaded from and saved
//! to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[queue]` - How many notifications may be visible at once
//! - `[timing]` - Host tick cadence
//! - `[durations]` - Per-kind auto-dismiss durations (`0` = persistent)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TOASTLINE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toastline::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.queue.max_visible = Some(3);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Toastline";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "TOASTLINE_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Active-set capacity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueConfig {
    /// Maximum simultaneously visible notifications.
    #[serde(default = "default_max_visible", skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
        }
    }
}

/// Timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// How often the host calls `Manager::tick` (milliseconds).
    #[serde(
        default = "default_tick_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
        }
    }
}

/// Per-kind duration overrides in milliseconds. Unset kinds use the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DurationsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub love_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celebration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic_ms: Option<u64>,
}

/// Complete configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub durations: DurationsConfig,
}

#[allow(clippy::unnecessary_wraps)] // serde default functions must match the field type
fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE)
}

#[allow(clippy::unnecessary_wraps)]
fn default_tick_interval() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

// =============================================================================
// Path Resolution
// =============================================================================

fn get_config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_dir {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(override_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If the file exists but
/// cannot be parsed, defaults are returned along with a warning key the
/// caller can surface as a notification.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
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
