//! Enemy spawning, movement, and damage resolution.

use rand::Rng;

use crate::entities::{
    BossState, DamagePopup, Enemy, EnemyKind, GameState, Projectile, Tint,
};
use crate::geometry::Point;

use super::progression::{kill_xp, BOSS_LIFE_XP, MAX_LEVEL};

// ── Tuning ───────────────────────────────────────────────────────────────────

/// Levels on which every spawn is a mini.
const MINI_LEVELS: [u32; 3] = [2, 5, 9];
/// Row above the field where new enemies appear.
const SPAWN_Y: f32 = -50.0;

pub const BOSS_LIVES: u32 = 3;
const BOSS_TELEPORT_CHANCE: f64 = 0.015;
const BOSS_TELEPORT_COOLDOWN: i32 = 150;
const BOSS_SHOOT_COOLDOWN: i32 = 40;
const BOSS_VOLLEY: usize = 2;
const BOSS_SPREAD: f32 = 0.5;
const BOSS_SHOT_SPEED: f32 = 5.0;
const BOSS_SHOT_RADIUS: f32 = 12.0;
pub const BOSS_SHOT_DAMAGE: i32 = 15;
const BOSS_SHOT_LIFE: u32 = 200;
/// Keep-out margin from the field edges for the boss.
const BOSS_MARGIN: f32 = 50.0;
/// Flash length after the boss loses a life.
const BOSS_LIFE_FLASH: u32 = 30;

/// Damage dealt to the player by an enemy slipping past the bottom edge.
pub const ESCAPE_DAMAGE: i32 = 10;

fn descent_speed(level: u32) -> f32 {
    if level >= 5 {
        1.2
    } else {
        0.8
    }
}

/// Max HP for `kind` spawned at `level`: `ceil(base + (level - 1) * 0.5)`.
pub fn max_hp_for(kind: EnemyKind, level: u32) -> i32 {
    let scaled = kind.base_hp() as f32 + level.saturating_sub(1) as f32 * 0.5;
    scaled.ceil() as i32
}

pub fn new_enemy(kind: EnemyKind, x: f32, y: f32, level: u32) -> Enemy {
    let max_hp = max_hp_for(kind, level);
    Enemy {
        x,
        y,
        kind,
        hp: max_hp,
        max_hp,
        flash: 0,
        popups: Vec::new(),
        boss: (kind == EnemyKind::Boss).then(|| BossState {
            lives: BOSS_LIVES,
            teleport_cooldown: 0,
            shoot_cooldown: 0,
        }),
    }
}

/// Pick the variant of the next regular spawn.
pub fn choose_kind(level: u32, rng: &mut impl Rng) -> EnemyKind {
    if level >= MAX_LEVEL {
        return EnemyKind::Boss;
    }
    if MINI_LEVELS.contains(&level) {
        return EnemyKind::Mini;
    }
    let roll: f64 = rng.gen();
    if level >= 5 {
        match roll {
            r if r < 0.2 => EnemyKind::Elite,
            r if r < 0.5 => EnemyKind::Mini,
            _ => EnemyKind::Big,
        }
    } else {
        match roll {
            r if r < 0.1 => EnemyKind::Elite,
            r if r < 0.3 => EnemyKind::Big,
            _ => EnemyKind::Normal,
        }
    }
}

/// Add one enemy to the field. At the top level this clears the field and
/// brings in the boss instead.
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng) {
    let level = state.progression.level;
    let kind = choose_kind(level, rng);
    if kind == EnemyKind::Boss {
        state.enemies.clear();
        state
            .enemies
            .push(new_enemy(kind, state.width / 2.0, state.height / 4.0, level));
        state.boss_active = true;
        tracing::info!(frame = state.frame, "boss spawned");
        return;
    }
    let x = rng.gen_range(0.0..state.width.max(1.0));
    state.enemies.push(new_enemy(kind, x, SPAWN_Y, level));
    tracing::debug!(?kind, x, level, "enemy spawned");
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// Advance one enemy by a tick. Regular enemies descend; the boss may
/// teleport and fires volleys into `boss_shots`.
pub fn update_enemy(
    enemy: &mut Enemy,
    target: Point,
    level: u32,
    width: f32,
    height: f32,
    boss_shots: &mut Vec<Projectile>,
    rng: &mut impl Rng,
) {
    let Some(boss) = enemy.boss.as_mut() else {
        enemy.y += descent_speed(level);
        return;
    };

    if boss.teleport_cooldown <= 0 && rng.gen_bool(BOSS_TELEPORT_CHANCE) {
        let span = (width - 2.0 * BOSS_MARGIN).max(1.0);
        enemy.x = rng.gen_range(0.0..span) + BOSS_MARGIN;
        boss.teleport_cooldown = BOSS_TELEPORT_COOLDOWN;
    }

    if boss.shoot_cooldown <= 0 {
        let aim = (target.y - enemy.y).atan2(target.x - enemy.x);
        for _ in 0..BOSS_VOLLEY {
            let angle = aim + (rng.gen::<f32>() - 0.5) * BOSS_SPREAD;
            boss_shots.push(Projectile {
                x: enemy.x,
                y: enemy.y,
                dx: angle.cos() * BOSS_SHOT_SPEED,
                dy: angle.sin() * BOSS_SHOT_SPEED,
                radius: BOSS_SHOT_RADIUS,
                tint: Tint::Red,
                damage: BOSS_SHOT_DAMAGE,
                life: BOSS_SHOT_LIFE,
            });
        }
        boss.shoot_cooldown = BOSS_SHOOT_COOLDOWN;
    }

    boss.teleport_cooldown -= 1;
    boss.shoot_cooldown -= 1;

    enemy.x = enemy.x.max(BOSS_MARGIN).min(width - BOSS_MARGIN);
    enemy.y = enemy.y.max(BOSS_MARGIN).min(height / 2.0);
}

/// True for a non-boss enemy that has dropped below the bottom edge.
pub fn has_escaped(enemy: &Enemy, height: f32) -> bool {
    enemy.boss.is_none() && enemy.y > height
}

// ── Damage ───────────────────────────────────────────────────────────────────

/// Visual feedback attached to a hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitFx {
    pub flash: u32,
    /// Lifetime of the "-N" popup, or `None` for no popup.
    pub popup_ticks: Option<u32>,
}

/// Outcome of a lethal hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kill {
    pub kind: EnemyKind,
    pub xp: u32,
    /// The boss lost its final life.
    pub boss_defeated: bool,
}

/// Subtract `amount` HP from `enemy`. Returns `Some` when the hit was lethal.
///
/// A boss with lives to spare loses one, heals to full and flashes instead
/// of dying; only the final life leaves it at `hp <= 0` for removal.
pub fn apply_damage(enemy: &mut Enemy, amount: i32, fx: HitFx) -> Option<Kill> {
    enemy.hp -= amount;
    enemy.flash = fx.flash;
    if let Some(ticks) = fx.popup_ticks {
        enemy.popups.push(DamagePopup { amount, x: enemy.x, y: enemy.y, ticks });
    }
    if enemy.hp > 0 {
        return None;
    }

    let Some(boss) = enemy.boss.as_mut() else {
        return Some(Kill { kind: enemy.kind, xp: kill_xp(enemy.kind), boss_defeated: false });
    };
    boss.lives = boss.lives.saturating_sub(1);
    if boss.lives > 0 {
        enemy.hp = enemy.max_hp;
        enemy.flash = BOSS_LIFE_FLASH;
        tracing::info!(lives = boss.lives, "boss lost a life");
        Some(Kill { kind: EnemyKind::Boss, xp: BOSS_LIFE_XP, boss_defeated: false })
    } else {
        Some(Kill { kind: EnemyKind::Boss, xp: kill_xp(EnemyKind::Boss), boss_defeated: true })
    }
}

/// Count down the hit flash and expire popups.
pub fn tick_cosmetics(enemy: &mut Enemy) {
    enemy.flash = enemy.flash.saturating_sub(1);
    for popup in &mut enemy.popups {
        popup.ticks = popup.ticks.saturating_sub(1);
    }
    enemy.popups.retain(|p| p.ticks > 0);
}
