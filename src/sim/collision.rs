//! Collision detection for the ball against pipes and the field boundary
//!
//! Pure predicates, no mutation. The tick loop evaluates these right after
//! physics integration, against pipe positions from the start of the tick.

use super::state::{Ball, PipePair};

/// True if the ball's bounding box overlaps any pipe in the queue
pub fn ball_hits_pipes(ball: &Ball, pipes: &[PipePair]) -> bool {
    let bounds = ball.bounds();
    pipes
        .iter()
        .any(|pair| bounds.intersects(&pair.top) || bounds.intersects(&pair.bottom))
}

/// True if the ball has left the play field through the ground or ceiling
pub fn ball_out_of_bounds(ball: &Ball, visible_height: f32) -> bool {
    ball.pos.y + ball.radius > visible_height || ball.pos.y - ball.radius < 0.0
}
