//! Flappy Ball entry point
//!
//! Handles terminal setup/teardown and drives the fixed-cadence loop:
//! input capture, one simulation tick, render.

use std::io::{BufWriter, Write, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    ExecutableCommand, cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal,
};

use flappy_ball::consts::{SCREEN_HEIGHT, TICK_HZ};
use flappy_ball::highscores::HighScoreStore;
use flappy_ball::render::{self, Viewport};
use flappy_ball::settings::Settings;
use flappy_ball::sim::{GamePhase, GameState, TickEvent, TickInput, levels, tick};

const FRAME: Duration = Duration::from_micros(1_000_000 / TICK_HZ as u64);

fn main() -> Result<()> {
    env_logger::init();

    // A tuning table that cannot place pipes on this play field is a
    // programming error; refuse to start rather than fail mid-game.
    levels::validate_table(SCREEN_HEIGHT)?;

    let settings_path = Settings::default_path();
    let settings = Settings::load_or_default(&settings_path);
    if !settings_path.exists() {
        // Leave an editable template behind on first run
        settings.save(&settings_path);
    }

    let store = HighScoreStore::at_default_path();
    let seed = settings.seed.unwrap_or_else(seed_from_clock);
    log::info!("starting session with seed {seed}");
    let mut state = GameState::new(seed, store.load());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let result = run(&mut out, &mut state, &store, &settings);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    state: &mut GameState,
    store: &HighScoreStore,
    settings: &Settings,
) -> Result<()> {
    // Rolling one-second FPS counter for the HUD
    let mut fps = 0u32;
    let mut frames = 0u32;
    let mut window_start = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Drain all pending input events (non-blocking). Flap is
        // edge-triggered: one impulse per key press.
        let mut input = TickInput::default();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    // Space doubles as flap (playing) and restart (game over)
                    KeyCode::Char(' ') | KeyCode::Up => match state.phase {
                        GamePhase::Playing => input.flap = true,
                        GamePhase::GameOver => input.restart = true,
                    },
                    KeyCode::Char('r') | KeyCode::Char('R') => input.restart = true,
                    _ => {}
                }
            }
        }

        // One core tick; the shell reacts to what happened
        for event in tick(state, &input) {
            match event {
                TickEvent::NewHighScore { score } => store.save(score),
                TickEvent::LevelUp(level) => log::info!("reached level {}", level.number()),
                TickEvent::GameOver { score } => log::info!("game over at score {score}"),
                _ => {}
            }
        }

        frames += 1;
        if window_start.elapsed() >= Duration::from_secs(1) {
            fps = frames;
            frames = 0;
            window_start = Instant::now();
        }

        let (cols, rows) = terminal::size()?;
        render::render(out, state, Viewport { cols, rows }, settings, fps)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
