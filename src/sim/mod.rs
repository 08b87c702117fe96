//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable pipe ordering (leftmost first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod levels;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_pipes, ball_out_of_bounds};
pub use levels::{Level, LevelParams};
pub use rect::Rect;
pub use state::{Ball, GamePhase, GameState, PipePair};
pub use tick::{TickEvent, TickInput, spawn_pipe_pair, tick};
