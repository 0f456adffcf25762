// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget's construction contract, including loading
//! it from a `player.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_vplayer::config::{self, WidgetConfig};
//! use std::path::PathBuf;
//!
//! // Load the default configuration file, if any
//! let config = config::load().unwrap_or_default();
//!
//! // Or build one in code
//! let config = WidgetConfig {
//!     media_url: Some("video/mov_bbb.mp4".to_string()),
//!     host_selector: Some("body".to_string()),
//!     ..WidgetConfig::default()
//! };
//! assert!(config.validate().is_ok());
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./player.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded, config);
//! ```

mod defaults;

pub use defaults::*;

use crate::error::{InitError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "player.toml";
const APP_NAME: &str = "IcedVPlayer";

/// Options recognized at widget construction.
///
/// Only `media_url` and `host_selector` are checked by [`WidgetConfig::validate`].
/// The numeric steps are used as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_selector: Option<String>,
    #[serde(default = "default_volume_step")]
    pub volume_step: f64,
    #[serde(default = "default_rate_step")]
    pub rate_step: f64,
    /// Seconds skipped by the step buttons and edge double clicks.
    #[serde(default = "default_seek_step")]
    pub seek_step: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            media_url: None,
            host_selector: None,
            volume_step: DEFAULT_VOLUME_STEP,
            rate_step: DEFAULT_RATE_STEP,
            seek_step: DEFAULT_SEEK_STEP_SECS,
        }
    }
}

fn default_volume_step() -> f64 {
    DEFAULT_VOLUME_STEP
}

fn default_rate_step() -> f64 {
    DEFAULT_RATE_STEP
}

fn default_seek_step() -> f64 {
    DEFAULT_SEEK_STEP_SECS
}

impl WidgetConfig {
    /// Checks the two required options and returns them as
    /// `(media_url, host_selector)`.
    ///
    /// Blank strings count as missing. Suspicious numeric steps only produce
    /// a warning in the log.
    pub fn validate(&self) -> std::result::Result<(&str, &str), InitError> {
        let Some(media_url) = self.media_url() else {
            return Err(InitError::MissingMediaUrl);
        };
        let Some(host_selector) = self.host_selector() else {
            return Err(InitError::MissingHostSelector);
        };

        for (name, value) in [
            ("volume_step", self.volume_step),
            ("rate_step", self.rate_step),
            ("seek_step", self.seek_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                log::warn!("{name} = {value} is not a positive step, using it as-is");
            }
        }

        Ok((media_url, host_selector))
    }

    /// Returns the media URL exactly as configured, or `None` when it is
    /// missing or blank.
    #[must_use]
    pub fn media_url(&self) -> Option<&str> {
        self.media_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Returns the trimmed host selector, or `None` when it is missing or
    /// blank.
    #[must_use]
    pub fn host_selector(&self) -> Option<&str> {
        self.host_selector
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Returns the defaults when no file exists there.
pub fn load() -> Result<WidgetConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(WidgetConfig::default())
}

pub fn load_from_path(path: &Path) -> Result<WidgetConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &WidgetConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
