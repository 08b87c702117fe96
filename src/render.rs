//! Rendering layer - all terminal drawing lives here
//!
//! Each function receives a mutable writer and a read-only view of the
//! game state. No game logic is performed; this module only translates
//! state into terminal commands, scaling the 800x600 world onto whatever
//! cell grid the terminal provides.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Level, PipePair};

// ── Colour palette ───────────────────────────────────────────────────────────

const C_BALL: Color = Color::Red;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Pipe colour per level, matching the classic yellow/orange/green ramp
fn pipe_color(level: Level, high_contrast: bool) -> Color {
    if high_contrast {
        match level {
            Level::One => Color::White,
            Level::Two => Color::Cyan,
            Level::Three => Color::Magenta,
        }
    } else {
        match level {
            Level::One => Color::Yellow,
            Level::Two => Color::DarkYellow,
            Level::Three => Color::Green,
        }
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::One => "[ LEVEL 1 ]",
        Level::Two => "[ LEVEL 2 ]",
        Level::Three => "[ LEVEL 3 ]",
    }
}

// ── Viewport ─────────────────────────────────────────────────────────────────

/// Terminal area the world is scaled into
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    /// Rows available to the play field (row 0 is the HUD, the last row
    /// holds the controls hint)
    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(2)
    }

    fn col(&self, x: f32) -> i32 {
        (x / SCREEN_WIDTH * self.cols as f32).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y / SCREEN_HEIGHT * self.play_rows() as f32).floor() as i32 + 1
    }
}

// ── Public entry point ───────────────────────────────────────────────────────

/// Render one complete frame
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    view: Viewport,
    settings: &Settings,
    fps: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if view.cols == 0 || view.play_rows() == 0 {
        return out.flush();
    }

    let pipe = pipe_color(state.level, settings.high_contrast);
    for pair in &state.pipes {
        draw_pipe_pair(out, pair, view, pipe)?;
    }

    draw_ball(out, state, view)?;
    draw_hud(out, state, view, settings, fps)?;
    draw_controls_hint(out, view)?;

    if state.phase == GamePhase::GameOver {
        draw_game_over(out, state, view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()
}

// ── Play field ───────────────────────────────────────────────────────────────

fn draw_pipe_pair<W: Write>(
    out: &mut W,
    pair: &PipePair,
    view: Viewport,
    color: Color,
) -> std::io::Result<()> {
    let left = view.col(pair.x()).max(0);
    let mut right = view.col(pair.right()).min(view.cols as i32);
    if right <= left && pair.right() > 0.0 && pair.x() < SCREEN_WIDTH {
        right = (left + 1).min(view.cols as i32);
    }
    if right <= left {
        return Ok(());
    }
    let run = "█".repeat((right - left) as usize);

    out.queue(style::SetForegroundColor(color))?;

    // Top pipe hangs from the ceiling down to the gap
    let top_end = view.row(pair.top.bottom());
    for row in 1..top_end {
        out.queue(cursor::MoveTo(left as u16, row as u16))?;
        out.queue(Print(&run))?;
    }

    // Bottom pipe rises from the floor up to the gap
    let bottom_start = view.row(pair.bottom.top());
    let field_end = view.play_rows() as i32 + 1;
    for row in bottom_start..field_end {
        out.queue(cursor::MoveTo(left as u16, row as u16))?;
        out.queue(Print(&run))?;
    }

    Ok(())
}

fn draw_ball<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    let col = view.col(state.ball.pos.x).clamp(0, view.cols as i32 - 1);
    let row = view
        .row(state.ball.pos.y)
        .clamp(1, view.play_rows() as i32);

    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(style::SetForegroundColor(C_BALL))?;
    out.queue(Print("●"))?;
    Ok(())
}

// ── HUD (row 0) ──────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    view: Viewport,
    settings: &Settings,
    fps: u32,
) -> std::io::Result<()> {
    // Score (and optional FPS) — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    if settings.show_fps {
        out.queue(Print(format!("Score:{:>4}  FPS:{:>3}", state.score, fps)))?;
    } else {
        out.queue(Print(format!("Score:{:>4}", state.score)))?;
    }

    // Level — centre, coloured like its pipes
    let label = level_label(state.level);
    let lx = (view.cols / 2).saturating_sub(label.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(pipe_color(
        state.level,
        settings.high_contrast,
    )))?;
    out.queue(Print(label))?;

    // Best score — right
    let best = format!("Best:{:>4}", state.high_score);
    let rx = view.cols.saturating_sub(best.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&best))?;

    Ok(())
}

// ── Controls hint (last row) ─────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / ↑ : Flap   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    view: Viewport,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>4}", state.score);
    let new_best = state.score > 0 && state.score >= state.high_score;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>4} ★", state.high_score)
    } else {
        format!("Best Score:  {:>4}", state.high_score)
    };

    let frame: &[&str] = &[
        "╔══════════════════════╗",
        "║      GAME  OVER      ║",
        "╚══════════════════════╝",
    ];

    let cx = view.cols / 2;
    let total_rows = frame.len() + 3;
    let start_row = (view.rows / 2).saturating_sub(total_rows as u16 / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, line) in frame.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*line))?;
    }

    let score_row = start_row + frame.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let col = cx.saturating_sub(best_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(if new_best {
        Color::Yellow
    } else {
        Color::DarkGrey
    }))?;
    out.queue(Print(&best_line))?;

    let hint = "SPACE / R - Play Again   Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 2))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
