//! Game settings and preferences
//!
//! Persisted separately from the high score, as JSON in the user's home
//! directory. Absent or unreadable files fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
    /// Use a high-contrast pipe palette
    pub high_contrast: bool,
    /// Fixed RNG seed for reproducible runs (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,
            high_contrast: false,
            seed: None,
        }
    }
}

impl Settings {
    /// File name under the home directory
    const FILE_NAME: &'static str = ".flappy_ball_settings.json";

    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(Self::FILE_NAME)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("unreadable settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings back out. Failures are logged and swallowed.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to write settings to {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("failed to encode settings: {err}"),
        }
    }
}
