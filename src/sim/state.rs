//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here. The RNG
//! stream is part of the state, so a serialized snapshot resumes exactly
//! where it left off.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::levels::Level;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; state is frozen until a restart
    GameOver,
}

/// The player's ball. Only the vertical axis is simulated; the horizontal
/// position is fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Vertical velocity in pixels per tick (positive = downward)
    pub vel_y: f32,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BALL_X, BALL_START_Y),
            vel_y: 0.0,
            radius: BALL_RADIUS,
        }
    }

    /// Square bounding box used for collision checks
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.radius)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A top/bottom pipe pair sharing one horizontal position.
///
/// The gap is fixed when the pair spawns; later level changes do not
/// reshape pipes already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    pub top: Rect,
    pub bottom: Rect,
    /// Vertical clearance this pair was spawned with
    pub gap: f32,
}

impl PipePair {
    /// Shared horizontal position of both pipes
    #[inline]
    pub fn x(&self) -> f32 {
        self.top.left()
    }

    /// Right edge of the pair
    #[inline]
    pub fn right(&self) -> f32 {
        self.top.right()
    }

    /// Scroll both pipes left by `dx`
    pub fn shift_left(&mut self, dx: f32) {
        self.top.pos.x -= dx;
        self.bottom.pos.x -= dx;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed this session's RNG stream started from
    pub seed: u64,
    /// Pipe placement RNG; advances with every spawn
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub ball: Ball,
    /// Active pipe pairs, leftmost first
    pub pipes: Vec<PipePair>,
    /// Pairs spawned this session
    pub score: u32,
    /// Current difficulty tier, derived from score, never regressing
    pub level: Level,
    /// Best score seen across sessions (mirrors the on-disk value)
    pub high_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh session with the given RNG seed and prior best score
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            ball: Ball::new(),
            pipes: Vec::new(),
            score: 0,
            level: Level::One,
            high_score,
            time_ticks: 0,
        }
    }

    /// Begin a new session in place.
    ///
    /// Resets the ball, pipes, score and level to their initial values.
    /// The best score and the RNG stream carry over, so a fixed seed gives
    /// one reproducible sequence across the whole process.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.ball = Ball::new();
        self.pipes.clear();
        self.score = 0;
        self.level = Level::One;
    }
}
