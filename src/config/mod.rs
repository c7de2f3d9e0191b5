// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[toast]` - Defaults applied to every toast the application shows
//!
//! Numeric toast settings are clamped to the bounds in [`defaults`] when read,
//! so a hand-edited file can never produce an unusable toast.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{AnimationSpec, Curve, Motion};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    /// Inset from the anchor edge, in logical pixels.
    pub padding: f32,
    /// Seconds a toast stays visible.
    pub duration_secs: f64,
    /// Length of the show/hide transition, in milliseconds.
    pub animation_ms: u64,
    pub curve: Curve,
    pub motion: Motion,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            duration_secs: DEFAULT_DURATION_SECS,
            animation_ms: DEFAULT_ANIMATION_MS,
            curve: Curve::default(),
            motion: Motion::default(),
        }
    }
}

impl ToastConfig {
    /// Edge inset clamped to its bounds.
    #[must_use]
    pub fn padding(&self) -> f32 {
        if self.padding.is_nan() {
            return DEFAULT_PADDING;
        }
        self.padding.clamp(MIN_PADDING, MAX_PADDING)
    }

    /// Visible duration clamped to its bounds.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let secs = if self.duration_secs.is_nan() {
            DEFAULT_DURATION_SECS
        } else {
            self.duration_secs.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS)
        };
        Duration::from_secs_f64(secs)
    }

    /// Transition spec built from the animation settings.
    #[must_use]
    pub fn animation(&self) -> AnimationSpec {
        AnimationSpec {
            curve: self.curve,
            motion: self.motion,
            duration: Duration::from_millis(
                self.animation_ms.clamp(MIN_ANIMATION_MS, MAX_ANIMATION_MS),
            ),
        }
    }
}

/// Complete configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config and the i18n key of a warning explaining why.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default config");
            (Config::default(), Some(err.i18n_key().to_string()))
        }
    }
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
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
