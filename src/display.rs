/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.
///
/// Entities live in the fixed logical field (1100×650); every rectangle is
/// mapped to the terminal cell its centre falls in, inside a drawn border.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use bounce_blaster::entities::{
    Explosion, Facing, GameState, GameStatus, Hazard, PlayerVariant, Projectile, Rect,
    FIELD_HEIGHT, FIELD_WIDTH,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_HAZARD: Color = Color::Red;
const C_PROJECTILE: Color = Color::Cyan;
const C_EXPLOSION_BRIGHT: Color = Color::Yellow;
const C_EXPLOSION_DIM: Color = Color::DarkYellow;
const C_SCORE: Color = Color::Blue;
const C_HINT: Color = Color::DarkGrey;

// ── Field → cell mapping ──────────────────────────────────────────────────────

/// Terminal layout derived from the current terminal size: row 0 is the
/// controls hint, row 1 the top border, the play area sits inside the
/// border, and the last row holds the score.
struct Layout {
    cols: u16,
    rows: u16,
}

impl Layout {
    fn new(cols: u16, rows: u16) -> Layout {
        Layout { cols, rows }
    }

    fn inner_cols(&self) -> i64 {
        (self.cols.saturating_sub(2) as i64).max(1)
    }

    fn inner_rows(&self) -> i64 {
        (self.rows.saturating_sub(4) as i64).max(1)
    }

    /// Cell of a logical rectangle's centre.  Centres slightly outside the
    /// field (a hazard mid-bounce) are clamped onto the border cell.
    fn cell(&self, rect: &Rect) -> (u16, u16) {
        let (cx, cy) = rect.center();
        let cx = cx.clamp(0, FIELD_WIDTH) as i64;
        let cy = cy.clamp(0, FIELD_HEIGHT) as i64;
        let col = 1 + cx * (self.inner_cols() - 1).max(0) / FIELD_WIDTH as i64;
        let row = 2 + cy * (self.inner_rows() - 1).max(0) / FIELD_HEIGHT as i64;
        (col as u16, row as u16)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (cols, rows) = terminal::size()?;
    let layout = Layout::new(cols, rows);

    draw_border(out, &layout)?;
    draw_controls_hint(out)?;

    for explosion in &state.explosions {
        draw_explosion(out, explosion, &layout)?;
    }
    for projectile in &state.projectiles {
        draw_projectile(out, projectile, &layout)?;
    }
    for hazard in &state.hazards {
        draw_hazard(out, hazard, &layout)?;
    }
    draw_player(out, state, &layout)?;

    draw_score(out, state, &layout)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, &layout)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, layout.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let w = layout.cols as usize;
    let h = layout.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(layout.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// One glyph per orientation, precomputed; `Happy` and `Defeated` override
/// the directional sprite.
fn player_glyph(state: &GameState) -> &'static str {
    match state.player.variant {
        PlayerVariant::Happy => "☺",
        PlayerVariant::Defeated => "✖",
        PlayerVariant::Normal => match state.player.facing {
            Facing::Right => "→",
            Facing::UpRight => "↗",
            Facing::Up => "↑",
            Facing::UpLeft => "↖",
            Facing::Left => "←",
            Facing::DownLeft => "↙",
            Facing::Down => "↓",
            Facing::DownRight => "↘",
        },
    }
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, layout: &Layout) -> std::io::Result<()> {
    let (col, row) = layout.cell(&state.player.rect);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print(player_glyph(state)))?;
    Ok(())
}

fn draw_hazard<W: Write>(out: &mut W, hazard: &Hazard, layout: &Layout) -> std::io::Result<()> {
    let (col, row) = layout.cell(&hazard.rect);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_HAZARD))?;
    out.queue(Print("●"))?;
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    projectile: &Projectile,
    layout: &Layout,
) -> std::io::Result<()> {
    // Glyph fixed by the velocity angle, like a sprite rotated at spawn.
    let glyph = match (projectile.vx.signum(), projectile.vy.signum()) {
        (_, 0) => "─",
        (0, _) => "│",
        (1, -1) | (-1, 1) => "╱",
        _ => "╲",
    };
    let (col, row) = layout.cell(&projectile.rect);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_explosion<W: Write>(
    out: &mut W,
    explosion: &Explosion,
    layout: &Layout,
) -> std::io::Result<()> {
    let (col, row) = layout.cell(&explosion.rect);
    out.queue(cursor::MoveTo(col, row))?;
    if explosion.bright() {
        out.queue(style::SetForegroundColor(C_EXPLOSION_BRIGHT))?;
        out.queue(Print("✸"))?;
    } else {
        out.queue(style::SetForegroundColor(C_EXPLOSION_DIM))?;
        out.queue(Print("✦"))?;
    }
    Ok(())
}

// ── Score (bottom-left, last row) ─────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, state: &GameState, layout: &Layout) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, layout.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(&state.score.text))?;
    Ok(())
}

// ── Controls hint (row 0) ─────────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑↓←→ / WASD : Move   SPACE : Fire   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, layout: &Layout) -> std::io::Result<()> {
    let lines: &[&str] = &[
        "╔════════════════════╗",
        "║     GAME  OVER     ║",
        "╚════════════════════╝",
    ];
    let score_line = format!("Final Score: {}", state.score.value);

    let cx = layout.cols / 2;
    let total_rows = lines.len() as u16 + 1;
    let start_row = (layout.rows / 2).saturating_sub(total_rows / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    Ok(())
}
