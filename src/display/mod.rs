//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use xp_shooter::compute::hud;
use xp_shooter::entities::{Enemy, EnemyKind, GameState, GameStatus, Projectile, Tint};
use xp_shooter::geometry::Point;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_HUD_HP: Color = Color::Red;
const C_PLAYER: Color = Color::Cyan;
const C_FLASH: Color = Color::White;
const C_BAR_FULL: Color = Color::Green;
const C_BAR_EMPTY: Color = Color::DarkGrey;
const C_POPUP: Color = Color::Yellow;
const C_BEAM: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Aqua => Color::Cyan,
        Tint::Orange => Color::DarkYellow,
        Tint::Lime => Color::Green,
        Tint::Magenta => Color::Magenta,
        Tint::Red => Color::Red,
        Tint::Blue => Color::Blue,
        Tint::Gold => Color::Yellow,
        Tint::Purple => Color::DarkMagenta,
    }
}

// ── World ↔ cell mapping ──────────────────────────────────────────────────────

/// First terminal row of the play field (row 0 is the HUD).
const FIELD_TOP: u16 = 1;

/// Maps world units onto terminal cells. The field spans every column and
/// all rows between the HUD and the hint line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        Viewport { cols, rows, cell_width, cell_height }
    }

    fn field_rows(&self) -> u16 {
        self.rows.saturating_sub(FIELD_TOP + 1)
    }

    /// Field size in world units.
    pub fn field_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_width,
            self.field_rows() as f32 * self.cell_height,
        )
    }

    /// Centre of the cell at (`col`, `row`) in world units.
    pub fn to_world(&self, col: u16, row: u16) -> Point {
        let field_row = row.saturating_sub(FIELD_TOP).min(self.field_rows().saturating_sub(1));
        Point::new(
            (col as f32 + 0.5) * self.cell_width,
            (field_row as f32 + 0.5) * self.cell_height,
        )
    }

    /// Cell holding world point `p`, if it lies on the field.
    pub fn to_cell(&self, p: Point) -> Option<(u16, u16)> {
        if p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let col = (p.x / self.cell_width) as u32;
        let row = (p.y / self.cell_height) as u32;
        if col >= self.cols as u32 || row >= self.field_rows() as u32 {
            return None;
        }
        Some((col as u16, row as u16 + FIELD_TOP))
    }

    fn put<W: Write>(&self, out: &mut W, p: Point, glyph: &str) -> std::io::Result<()> {
        if let Some((col, row)) = self.to_cell(p) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print(glyph))?;
        }
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state, view)?;

    for enemy in &state.enemies {
        draw_enemy(out, enemy, view)?;
    }
    if let Some(end) = state.beam_end {
        draw_beam(out, state.fire_origin(), end, view)?;
    }
    for shot in state.projectiles.iter().chain(&state.boss_projectiles) {
        draw_projectile(out, shot, view)?;
    }

    draw_player(out, state, view)?;
    draw_controls_hint(out, view)?;

    match state.status {
        GameStatus::GameOver => draw_banner(out, view, "GAME  OVER", Color::Red)?,
        GameStatus::Victory => draw_banner(out, view, " VICTORY! ", Color::Green)?,
        GameStatus::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let h = hud(state);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Level: {:>2}  XP: {:>3}/{:<3}  Weapon: {}  Damage: {:>2}",
        h.level, h.xp, h.xp_to_next, h.weapon, h.base_damage
    )))?;

    let hp_text = format!("HP: {:>3}/{}", h.hp, h.max_hp);
    let x = view.cols.saturating_sub(hp_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HP))?;
    out.queue(Print(&hp_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    view.put(out, state.player.pos(), "●")
}

fn enemy_glyph(kind: EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Normal => "█",
        EnemyKind::Big => "▓",
        EnemyKind::Mini => "▒",
        EnemyKind::Elite => "◆",
        EnemyKind::Boss => "▚",
    }
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, view: &Viewport) -> std::io::Result<()> {
    let r = enemy.radius();
    let color = if enemy.flash > 0 { C_FLASH } else { tint_color(enemy.kind.tint()) };
    out.queue(style::SetForegroundColor(color))?;

    // Fill every cell whose centre falls inside the enemy's circle.
    let glyph = enemy_glyph(enemy.kind);
    let mut y = enemy.y - r + view.cell_height / 2.0;
    while y < enemy.y + r {
        let mut x = enemy.x - r + view.cell_width / 2.0;
        while x < enemy.x + r {
            let p = Point::new(x, y);
            if p.distance(enemy.pos()) < r {
                view.put(out, p, glyph)?;
            }
            x += view.cell_width;
        }
        y += view.cell_height;
    }
    // Always mark the centre so small enemies stay visible.
    view.put(out, enemy.pos(), glyph)?;

    draw_health_bar(out, enemy, view)?;

    if let Some(boss) = &enemy.boss {
        out.queue(style::SetForegroundColor(C_HUD))?;
        let label = Point::new(enemy.x - 2.5 * view.cell_width, enemy.y - r - 2.0 * view.cell_height);
        view.put(out, label, &format!("Lives: {}", boss.lives))?;
    }

    out.queue(style::SetForegroundColor(C_POPUP))?;
    for popup in &enemy.popups {
        let rise = 30u32.saturating_sub(popup.ticks) as f32;
        view.put(out, Point::new(popup.x + r, popup.y - r - rise), &format!("-{}", popup.amount))?;
    }
    Ok(())
}

fn draw_health_bar<W: Write>(out: &mut W, enemy: &Enemy, view: &Viewport) -> std::io::Result<()> {
    let r = enemy.radius();
    let Some((col, row)) = view.to_cell(Point::new(enemy.x - r, enemy.y - r - view.cell_height)) else {
        return Ok(());
    };
    let width = ((2.0 * r / view.cell_width).round() as usize).max(2);
    let filled = (width as f32 * enemy.hp.max(0) as f32 / enemy.max_hp.max(1) as f32).round() as usize;
    let filled = filled.min(width);

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BAR_FULL))?;
    out.queue(Print("━".repeat(filled)))?;
    out.queue(style::SetForegroundColor(C_BAR_EMPTY))?;
    out.queue(Print("─".repeat(width - filled)))?;
    Ok(())
}

fn draw_projectile<W: Write>(out: &mut W, shot: &Projectile, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(tint_color(shot.tint)))?;
    view.put(out, shot.pos(), "•")
}

fn draw_beam<W: Write>(out: &mut W, start: Point, end: Point, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BEAM))?;
    let step = view.cell_width.min(view.cell_height) / 2.0;
    let steps = (start.distance(end) / step).ceil() as usize;
    for i in 0..=steps {
        let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
        let p = Point::new(start.x + (end.x - start.x) * t, start.y + (end.y - start.y) * t);
        view.put(out, p, "*")?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("MOUSE : Aim/Move   CLICK : Fire   TAB : Weapon   Q : Quit"))?;
    Ok(())
}

// ── End-of-game overlay ───────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    view: &Viewport,
    title: &str,
    color: Color,
) -> std::io::Result<()> {
    let middle = format!("║    {}    ║", title);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", color),
        (&middle, color),
        ("╚══════════════════╝", color),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
