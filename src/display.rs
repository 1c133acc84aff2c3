//! Rendering layer.  All terminal I/O lives here.
//!
//! Each function receives a mutable writer and the presentation view of the
//! game (`sprites` + `hud`).  No game logic is performed; this module only
//! translates field pixels into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use spacewar::entities::PowerUpKind;
use spacewar::{hud, sprites, EnemyType, GameState, GameStatus, Sprite, SpriteKind};

// ── Field → cell mapping ──────────────────────────────────────────────────────

/// Field pixels per terminal column.
const COL_PX: i32 = 10;
/// Field pixels per terminal row.
const ROW_PX: i32 = 20;
/// Terminal row of the first field row (row 0 is the HUD, row 1 the border).
const FIELD_TOP: u16 = 2;
/// Terminal column of the first field column (column 0 is the border).
const FIELD_LEFT: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_MUNITION: Color = Color::Cyan;
const C_ENEMY_BULLET: Color = Color::Magenta;
const C_BOSS_STAR: Color = Color::Yellow;
const C_LIFE_STAR: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

/// Size of the play area in cells.
pub fn field_cells(state: &GameState) -> (u16, u16) {
    (
        (state.config.field_width / COL_PX) as u16,
        (state.config.field_height / ROW_PX) as u16,
    )
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (cols, rows) = field_cells(state);
    draw_border(out, cols, rows)?;
    draw_hud(out, state, cols)?;

    for sprite in sprites(state).iter().filter(|s| s.visible) {
        draw_sprite(out, sprite, cols, rows)?;
    }

    draw_controls_hint(out, rows)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, FIELD_TOP + rows + 2))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, FIELD_TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, FIELD_TOP + rows))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in FIELD_TOP..FIELD_TOP + rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(FIELD_LEFT + cols, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    let hud = hud(state);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", hud.score)))?;

    let level_str = format!("[ LEVEL {}  WAVE {} ]", hud.level, hud.wave);
    let lx = (cols / 2).saturating_sub(level_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    let lives_str = format!("Lives:{}", "♥".repeat(hud.lives as usize));
    let rx = (cols + 2).saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

const PLAYER_GLYPH: &[&str] = &[" ▲ ", "/█\\"];
const MUNITION_GLYPH: &[&str] = &["║"];
const BULLET_GLYPH: &[&str] = &["↓"];
const BOSS_STAR_GLYPH: &[&str] = &["★"];
const LIFE_STAR_GLYPH: &[&str] = &["♥"];
const STRAIGHT_GLYPH: &[&str] = &["«▼»"];
const SINE_GLYPH: &[&str] = &["~◎~"];
const ZIGZAG_GLYPH: &[&str] = &["<Z>"];
const HOMING_GLYPH: &[&str] = &["(◉)"];
const PATROL_GLYPH: &[&str] = &["[=]"];
const BOSS_GLYPH: &[&str] = &["╔═◆◆═╗", "╚╦══╦╝", " ▼  ▼ "];

/// Glyph rows and colour for a sprite.
fn appearance(kind: SpriteKind) -> (&'static [&'static str], Color) {
    match kind {
        SpriteKind::Player => (PLAYER_GLYPH, C_PLAYER),
        SpriteKind::Munition => (MUNITION_GLYPH, C_MUNITION),
        SpriteKind::EnemyBullet => (BULLET_GLYPH, C_ENEMY_BULLET),
        SpriteKind::PowerUp(PowerUpKind::BossStar) => (BOSS_STAR_GLYPH, C_BOSS_STAR),
        SpriteKind::PowerUp(PowerUpKind::LifeStar) => (LIFE_STAR_GLYPH, C_LIFE_STAR),
        SpriteKind::Enemy(kind) => match kind {
            EnemyType::Straight => (STRAIGHT_GLYPH, Color::Green),
            EnemyType::Sine => (SINE_GLYPH, Color::Blue),
            EnemyType::Zigzag => (ZIGZAG_GLYPH, Color::Yellow),
            EnemyType::Homing => (HOMING_GLYPH, Color::Red),
            EnemyType::Patrol => (PATROL_GLYPH, Color::Cyan),
            EnemyType::Boss => (BOSS_GLYPH, Color::DarkRed),
        },
    }
}

fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let (lines, color) = appearance(sprite.kind);
    let col = sprite.rect.x.div_euclid(COL_PX);
    let row = sprite.rect.y.div_euclid(ROW_PX);

    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in lines.iter().enumerate() {
        let r = row + i as i32;
        if r < 0 || r >= rows as i32 {
            continue;
        }
        // Clip horizontally glyph by glyph so nothing lands on the border.
        for (j, ch) in line.chars().enumerate() {
            let c = col + j as i32;
            if ch == ' ' || c < 0 || c >= cols as i32 {
                continue;
            }
            out.queue(cursor::MoveTo(FIELD_LEFT + c as u16, FIELD_TOP + r as u16))?;
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, FIELD_TOP + rows + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SPACE : Fire   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);
    let level_line = format!("Reached level {}", state.level);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        (level_line.as_str(), Color::DarkGrey),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = FIELD_LEFT + cols / 2;
    let start_row = FIELD_TOP + (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
