//! Difficulty progression
//!
//! The level is a pure function of the cumulative score, and the tuning
//! parameters are a pure function of the level. No hidden state: calling
//! these twice with the same score always yields the same result.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::{PIPE_MIN_BOTTOM, PIPE_MIN_HEIGHT};

/// Score required to enter level 2
pub const LEVEL2_SCORE: u32 = 6;
/// Score required to enter level 3
pub const LEVEL3_SCORE: u32 = 12;

/// Difficulty tier. Advances with score, never regresses within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Level {
    #[default]
    One,
    Two,
    Three,
}

/// Level-dependent tuning values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParams {
    /// Leftward pipe movement per tick
    pub scroll_velocity: f32,
    /// Vertical clearance between a pair's top and bottom pipes
    pub gap_size: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
}

impl Level {
    /// The level a given cumulative score puts the session in
    pub fn for_score(score: u32) -> Level {
        if score >= LEVEL3_SCORE {
            Level::Three
        } else if score >= LEVEL2_SCORE {
            Level::Two
        } else {
            Level::One
        }
    }

    pub fn params(self) -> LevelParams {
        match self {
            Level::One => LevelParams {
                scroll_velocity: 5.0,
                gap_size: 220.0,
                gravity: 0.5,
            },
            Level::Two => LevelParams {
                scroll_velocity: 5.0,
                gap_size: 150.0,
                gravity: 0.7,
            },
            Level::Three => LevelParams {
                scroll_velocity: 6.0,
                gap_size: 120.0,
                gravity: 0.8,
            },
        }
    }

    /// 1-based tier number for display
    pub fn number(self) -> u32 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];
}

/// Validate the tuning table against the play field height.
///
/// Every level's gap must leave room for a top pipe of at least
/// `PIPE_MIN_HEIGHT` and a bottom pipe of at least `PIPE_MIN_BOTTOM`,
/// otherwise the pipe spawner has no valid height range to draw from.
/// A table that fails here is a programming error, fatal at startup.
pub fn validate_table(visible_height: f32) -> Result<()> {
    for level in Level::ALL {
        let gap = level.params().gap_size;
        let max_height = visible_height - gap - PIPE_MIN_BOTTOM;
        if max_height < PIPE_MIN_HEIGHT {
            bail!(
                "level {} gap {gap} leaves no valid pipe height range \
                 on a {visible_height}px tall play field",
                level.number()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCREEN_HEIGHT;

    #[test]
    fn test_thresholds_exact() {
        assert_eq!(Level::for_score(0), Level::One);
        assert_eq!(Level::for_score(5), Level::One);
        assert_eq!(Level::for_score(6), Level::Two);
        assert_eq!(Level::for_score(11), Level::Two);
        assert_eq!(Level::for_score(12), Level::Three);
        assert_eq!(Level::for_score(1000), Level::Three);
    }

    #[test]
    fn test_params_table() {
        let one = Level::One.params();
        assert_eq!(one.scroll_velocity, 5.0);
        assert_eq!(one.gap_size, 220.0);
        assert_eq!(one.gravity, 0.5);

        let two = Level::Two.params();
        assert_eq!(two.scroll_velocity, 5.0);
        assert_eq!(two.gap_size, 150.0);
        assert_eq!(two.gravity, 0.7);

        let three = Level::Three.params();
        assert_eq!(three.scroll_velocity, 6.0);
        assert_eq!(three.gap_size, 120.0);
        assert_eq!(three.gravity, 0.8);
    }

    #[test]
    fn test_for_score_is_pure() {
        for score in [0, 6, 12, 99] {
            assert_eq!(Level::for_score(score), Level::for_score(score));
            assert_eq!(
                Level::for_score(score).params(),
                Level::for_score(score).params()
            );
        }
    }

    #[test]
    fn test_level_ordering_monotone_in_score() {
        let mut prev = Level::One;
        for score in 0..40 {
            let level = Level::for_score(score);
            assert!(level >= prev);
            prev = level;
        }
    }

    #[test]
    fn test_table_valid_for_default_screen() {
        assert!(validate_table(SCREEN_HEIGHT).is_ok());
    }

    #[test]
    fn test_table_rejected_for_short_screen() {
        // 220px gap + 100 min top + 200 min bottom needs at least 520px
        assert!(validate_table(500.0).is_err());
    }
}
