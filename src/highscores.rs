//! High score persistence
//!
//! A single best score, stored as a bare non-negative integer in a text
//! file in the user's home directory. Read once at startup, overwritten
//! in full whenever a session beats it. Missing or corrupt files read as
//! zero; write failures are logged and never shown to the player.

use std::fs;
use std::path::PathBuf;

/// Owns the on-disk best score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// File name under the home directory
    const FILE_NAME: &'static str = ".flappy_ball_score";

    /// Store at the well-known default location
    pub fn at_default_path() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self {
            path: PathBuf::from(home).join(Self::FILE_NAME),
        }
    }

    /// Store at an explicit location (tests, unusual setups)
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored best score, defaulting to 0 on any failure
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse() {
                Ok(score) => {
                    log::info!("loaded high score {score} from {}", self.path.display());
                    score
                }
                Err(_) => {
                    log::warn!(
                        "unreadable high score file {}, starting at 0",
                        self.path.display()
                    );
                    0
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, starting at 0", self.path.display());
                0
            }
        }
    }

    /// Overwrite the stored best score. Failures are logged and swallowed;
    /// the in-session display keeps working either way.
    pub fn save(&self, score: u32) {
        match fs::write(&self.path, score.to_string()) {
            Ok(()) => log::info!("high score {score} saved to {}", self.path.display()),
            Err(err) => log::warn!(
                "failed to write high score to {}: {err}",
                self.path.display()
            ),
        }
    }
}
