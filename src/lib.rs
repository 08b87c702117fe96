//! Flappy Ball - a terminal arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, game state)
//! - `render`: Terminal presentation of a read-only state snapshot
//! - `highscores`: Single best-score persistence
//! - `settings`: Player preferences

pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScoreStore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions in world units (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Simulation tick rate the physics constants are calibrated for
    pub const TICK_HZ: u32 = 60;

    /// Ball defaults - the ball never moves horizontally
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_X: f32 = SCREEN_WIDTH / 4.0;
    pub const BALL_START_Y: f32 = SCREEN_HEIGHT / 2.0;

    /// Flap sets the vertical velocity to this value outright
    pub const FLAP_STRENGTH: f32 = -10.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    /// Shortest allowed top pipe
    pub const PIPE_MIN_HEIGHT: f32 = 100.0;
    /// Shortest allowed bottom pipe
    pub const PIPE_MIN_BOTTOM: f32 = 200.0;
    /// A new pair spawns once the newest pair has scrolled this far in
    pub const SPAWN_SPACING: f32 = 300.0;
}
