/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// run state.  No game logic is performed; this module only translates
/// state into terminal commands.  The simulation runs in abstract
/// play-field units, so everything is scaled down to the terminal grid
/// before drawing.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use shoot_survive::entities::{Bullet, Enemy, RunState, RunStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── World → terminal scaling ──────────────────────────────────────────────────

/// The drawable play area: row 0 is the HUD, rows 1 and `rows-2` are the
/// border bars, the last row is the controls hint.
struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    fn top(&self) -> u16 {
        2
    }

    fn bottom(&self) -> u16 {
        // Never above `top`, even in an absurdly short terminal.
        self.rows.saturating_sub(3).max(self.top())
    }

    /// World x → terminal column inside the side walls.
    fn col(&self, state: &RunState, x: f32) -> u16 {
        let inner = self.cols.saturating_sub(2).max(1) as f32;
        let c = 1.0 + (x / state.width) * (inner - 1.0);
        let right = (self.cols.saturating_sub(2) as i32).max(1);
        (c.round() as i32).clamp(1, right) as u16
    }

    /// World y → terminal row inside the border bars.  Returns None for
    /// positions above or below the visible play area (spawning enemies,
    /// breaching enemies).
    fn row(&self, state: &RunState, y: f32) -> Option<u16> {
        if y < 0.0 || y > state.height {
            return None;
        }
        let span = (self.bottom() - self.top()).max(1) as f32;
        let r = self.top() as f32 + (y / state.height) * span;
        Some((r.round() as u16).clamp(self.top(), self.bottom()))
    }

    /// World width → cell count, at least one cell.
    fn span(&self, state: &RunState, w: f32) -> u16 {
        let inner = self.cols.saturating_sub(2).max(1) as f32;
        ((w / state.width) * inner).round().max(1.0) as u16
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame into a `cols` × `rows` terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &RunState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let vp = Viewport::new(cols, rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &vp)?;
    draw_hud(out, state, &vp)?;

    for enemy in &state.enemies {
        draw_enemy(out, state, &vp, enemy)?;
    }
    for bullet in &state.bullets {
        draw_bullet(out, state, &vp, bullet)?;
    }
    draw_player(out, state, &vp)?;
    draw_controls_hint(out, &vp)?;

    match state.status {
        RunStatus::Paused => draw_paused(out, &vp)?,
        RunStatus::GameOver => draw_game_over(out, state, &vp)?,
        RunStatus::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let w = vp.cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in vp.top()..=vp.bottom() {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(vp.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &RunState, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", state.score)))?;

    let hearts: String = "♥".repeat(state.lives as usize);
    let lives_str = format!("Lives:{}", hearts);
    let rx = vp
        .cols
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &RunState, vp: &Viewport) -> std::io::Result<()> {
    // 2-row sprite:
    //   ▲       ← tip
    //  ◢█◣      ← hull
    let p = &state.player;
    let cx = vp.col(state, p.x);
    let Some(cy) = vp.row(state, p.y) else {
        return Ok(());
    };

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(Print("▲"))?;

    let hull_y = cy + 1;
    if hull_y <= vp.bottom() {
        out.queue(cursor::MoveTo(cx.saturating_sub(1).max(1), hull_y))?;
        out.queue(Print("◢█◣"))?;
    }

    Ok(())
}

fn draw_enemy<W: Write>(
    out: &mut W,
    state: &RunState,
    vp: &Viewport,
    enemy: &Enemy,
) -> std::io::Result<()> {
    // Drawn as a solid block proportional to the enemy's world size; a
    // half-spawned or breaching enemy is simply off screen until its
    // centre is inside the field.
    let Some(cy) = vp.row(state, enemy.y) else {
        return Ok(());
    };
    let span = vp.span(state, enemy.w);
    let cx = vp.col(state, enemy.x - enemy.w / 2.0);
    let max_col = vp.cols.saturating_sub(2);
    let clipped = span.min(max_col.saturating_sub(cx) + 1);

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(Print("▓".repeat(clipped as usize)))?;
    Ok(())
}

fn draw_bullet<W: Write>(
    out: &mut W,
    state: &RunState,
    vp: &Viewport,
    bullet: &Bullet,
) -> std::io::Result<()> {
    let Some(cy) = vp.row(state, bullet.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(vp.col(state, bullet.x), cy))?;
    out.queue(style::SetForegroundColor(C_BULLET))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_paused<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let lines: &[&str] = &[
        "╔══════════════╗",
        "║    PAUSED    ║",
        "╚══════════════╝",
    ];
    let cx = vp.cols / 2;
    let start_row = (vp.rows / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::SetForegroundColor(Color::Yellow))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, state: &RunState, vp: &Viewport) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);
    let hint = "R - Play Again  Q - Quit";

    let lines: &[&str] = &[
        "╔════════════════════╗",
        "║    GAME  OVER      ║",
        "╚════════════════════╝",
    ];

    let cx = vp.cols / 2;
    let total_rows = lines.len() + 2;
    let start_row = (vp.rows / 2).saturating_sub(total_rows as u16 / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
