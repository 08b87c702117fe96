//! End-to-end gameplay scenarios driven through the public API,
//! the way the shell drives the sim: tick, react to events, repeat.

use flappy_ball::consts::{BALL_X, PIPE_WIDTH, SCREEN_WIDTH};
use flappy_ball::highscores::HighScoreStore;
use flappy_ball::sim::{
    GamePhase, GameState, Level, PipePair, Rect, TickEvent, TickInput, tick,
};

fn idle() -> TickInput {
    TickInput::default()
}

fn restart() -> TickInput {
    TickInput {
        flap: false,
        restart: true,
    }
}

/// A distant pair that keeps the spawner quiet without threatening the ball
fn parked_pair() -> PipePair {
    PipePair {
        top: Rect::new(790.0, 0.0, PIPE_WIDTH, 150.0),
        bottom: Rect::new(790.0, 370.0, PIPE_WIDTH, 230.0),
        gap: 220.0,
    }
}

/// Tick with no input until the run ends, persisting best scores the way
/// the shell does. Returns the events from the final tick.
fn play_out(state: &mut GameState, store: Option<&HighScoreStore>) -> Vec<TickEvent> {
    for _ in 0..10_000 {
        let events = tick(state, &idle());
        if let Some(store) = store {
            for event in &events {
                if let TickEvent::NewHighScore { score } = event {
                    store.save(*score);
                }
            }
        }
        if state.phase == GamePhase::GameOver {
            return events;
        }
    }
    panic!("run never ended");
}

#[test]
fn session_ends_when_ball_falls() {
    let mut state = GameState::new(42, 0);
    let events = play_out(&mut state, None);

    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(
        events
            .iter()
            .any(|e| matches!(e, TickEvent::GameOver { .. }))
    );
}

#[test]
fn score_counts_spawns_not_passes() {
    // Deliberate behavior: the point is awarded the moment a pair spawns
    // at the right edge, long before the ball could reach it.
    let mut state = GameState::new(42, 0);
    let events = tick(&mut state, &idle());

    assert_eq!(state.score, 1);
    assert!(events.contains(&TickEvent::PipeSpawned));

    let pair = &state.pipes[0];
    assert_eq!(pair.x(), SCREEN_WIDTH);
    assert!(pair.x() - BALL_X > SCREEN_WIDTH / 2.0);
}

#[test]
fn better_score_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::at_path(dir.path().join("score"));
    store.save(10);

    let mut state = GameState::new(42, store.load());
    state.score = 15;
    state.pipes.push(parked_pair());
    play_out(&mut state, Some(&store));

    assert_eq!(state.high_score, 15);
    assert_eq!(store.load(), 15);
}

#[test]
fn worse_score_leaves_best_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::at_path(dir.path().join("score"));
    store.save(10);

    let mut state = GameState::new(42, store.load());
    state.score = 5;
    state.pipes.push(parked_pair());
    let events = play_out(&mut state, Some(&store));

    assert_eq!(state.high_score, 10);
    assert_eq!(store.load(), 10);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, TickEvent::NewHighScore { .. }))
    );
}

#[test]
fn restart_resets_everything_but_the_best_score() {
    let mut state = GameState::new(42, 3);
    state.score = 14;
    state.level = Level::Three;
    play_out(&mut state, None);
    assert_eq!(state.high_score, 15); // one more spawn before the crash

    tick(&mut state, &restart());

    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.level, Level::One);
    assert!(state.pipes.is_empty());
    assert_eq!(state.ball.vel_y, 0.0);
    assert_eq!(state.high_score, 15);

    // The new session actually plays
    tick(&mut state, &idle());
    assert!(state.ball.vel_y > 0.0);
    assert_eq!(state.score, 1);
}

#[test]
fn snapshot_round_trip_stays_deterministic() {
    let mut state = GameState::new(2024, 0);
    for i in 0..100u32 {
        let input = TickInput {
            flap: i % 13 == 0,
            restart: false,
        };
        tick(&mut state, &input);
    }

    let json = serde_json::to_string(&state).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, restored);

    // Both copies evolve identically, RNG stream included
    for i in 0..300u32 {
        let input = TickInput {
            flap: i % 7 == 0,
            restart: false,
        };
        tick(&mut state, &input);
        tick(&mut restored, &input);
    }
    assert_eq!(state, restored);
}
