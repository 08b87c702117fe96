//! Per-tick simulation update
//!
//! Advances the game state by one fixed step, deterministically. The order
//! within a tick is load-bearing: input, physics, collision, scroll/spawn,
//! progression. Collision is evaluated against pipe positions from the
//! start of the tick, before anything scrolls.

use rand::Rng;

use super::collision::{ball_hits_pipes, ball_out_of_bounds};
use super::levels::Level;
use super::rect::Rect;
use super::state::{GamePhase, GameState, PipePair};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap this tick (edge-triggered; only honored while playing)
    pub flap: bool,
    /// Start a new session (only honored after a game over)
    pub restart: bool,
}

/// Things that happened during a tick, for the shell to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Flapped,
    PipeSpawned,
    LevelUp(Level),
    GameOver { score: u32 },
    /// The session's score beat the stored best; the shell should persist it
    NewHighScore { score: u32 },
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<TickEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        // Frozen. Only an explicit restart is accepted; play resumes on
        // the following tick.
        if input.restart {
            state.restart();
        }
        return events;
    }

    state.time_ticks += 1;
    let params = state.level.params();

    // Physics: gravity accumulates every tick; a flap replaces the
    // velocity outright instead of stacking on top of it.
    state.ball.vel_y += params.gravity;
    if input.flap {
        state.ball.vel_y = FLAP_STRENGTH;
        events.push(TickEvent::Flapped);
    }
    state.ball.pos.y += state.ball.vel_y;

    // Collision ends the run before the world scrolls this tick.
    if ball_hits_pipes(&state.ball, &state.pipes)
        || ball_out_of_bounds(&state.ball, SCREEN_HEIGHT)
    {
        state.phase = GamePhase::GameOver;
        events.push(TickEvent::GameOver { score: state.score });
        if state.score > state.high_score {
            state.high_score = state.score;
            events.push(TickEvent::NewHighScore { score: state.score });
        }
        return events;
    }

    // Scroll pipes left and drop pairs fully past the trailing edge.
    for pair in &mut state.pipes {
        pair.shift_left(params.scroll_velocity);
    }
    state.pipes.retain(|pair| pair.x() > -PIPE_WIDTH);

    // Spawn a new pair once the newest one has scrolled far enough in.
    // Score counts spawned pairs, not passed ones.
    let spawn_due = match state.pipes.last() {
        None => true,
        Some(last) => last.x() < SCREEN_WIDTH - SPAWN_SPACING,
    };
    if spawn_due {
        let pair = spawn_pipe_pair(&mut state.rng, params.gap_size);
        state.pipes.push(pair);
        state.score += 1;
        events.push(TickEvent::PipeSpawned);
    }

    // Re-derive the level from the updated score. Levels only ever move
    // forward; pipes already on screen keep the gap they spawned with.
    let next = Level::for_score(state.score).max(state.level);
    if next != state.level {
        state.level = next;
        events.push(TickEvent::LevelUp(next));
    }

    events
}

/// Build a pipe pair at the right edge of the play field.
///
/// The top pipe's height is drawn uniformly from the integer range
/// `[PIPE_MIN_HEIGHT, SCREEN_HEIGHT - gap - PIPE_MIN_BOTTOM]`; the bottom
/// pipe fills the remainder below the gap. `levels::validate_table`
/// guarantees the range is non-empty for every level.
pub fn spawn_pipe_pair(rng: &mut impl Rng, gap: f32) -> PipePair {
    let max_height = (SCREEN_HEIGHT - gap - PIPE_MIN_BOTTOM) as i32;
    let height = rng.random_range(PIPE_MIN_HEIGHT as i32..=max_height) as f32;
    PipePair {
        top: Rect::new(SCREEN_WIDTH, 0.0, PIPE_WIDTH, height),
        bottom: Rect::new(
            SCREEN_WIDTH,
            height + gap,
            PIPE_WIDTH,
            SCREEN_HEIGHT - height - gap,
        ),
        gap,
    }
}
