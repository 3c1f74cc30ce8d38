// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use iced_toast::toast::Position;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Move new toasts to the bottom-left corner
//! config.toast.position = Position::BottomLeft;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::toast::{AutoClose, Position};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Top-level settings file layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastDefaults,
    #[serde(default)]
    pub timing: Timing,
}

/// Values used for every option a caller leaves out.
///
/// The close callback has no persisted form and always defaults to a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastDefaults {
    pub position: Position,
    pub text: String,
    pub auto_close: AutoClose,
    pub manual_close: bool,
    pub show_progress: bool,
    pub pause_on_hover: bool,
    pub pause_on_focus_loss: bool,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            position: Position::from(DEFAULT_POSITION),
            text: DEFAULT_TEXT.to_string(),
            auto_close: AutoClose::after_millis(DEFAULT_AUTO_CLOSE_MS as i64),
            manual_close: DEFAULT_MANUAL_CLOSE,
            show_progress: DEFAULT_SHOW_PROGRESS,
            pause_on_hover: DEFAULT_PAUSE_ON_HOVER,
            pause_on_focus_loss: DEFAULT_PAUSE_ON_FOCUS_LOSS,
        }
    }
}

/// Host event loop timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub tick_interval_ms: u64,
    pub entry_delay_ms: u64,
    pub transition_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            entry_delay_ms: DEFAULT_ENTRY_DELAY_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl Timing {
    /// Countdown and progress tick interval, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_ms
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }

    /// Delay between construction and the entry transition.
    #[must_use]
    pub fn entry_delay(&self) -> Duration {
        Duration::from_millis(self.entry_delay_ms)
    }

    /// Duration of the enter/exit transitions.
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms.min(MAX_TRANSITION_MS))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a settings file, falling back to defaults when it cannot be parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid settings file {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
