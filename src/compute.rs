//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG.

pub mod collision;
pub mod enemy;
pub mod progression;
pub mod weapon;

use rand::Rng;

use crate::entities::{
    FireControl, GameState, GameStatus, Hud, InputState, Player, Progression,
};
use crate::geometry::Point;

use self::enemy::{has_escaped, Kill, ESCAPE_DAMAGE};
use self::progression::{gain_xp, MAX_LEVEL};

pub const PLAYER_RADIUS: f32 = 20.0;
pub const PLAYER_MAX_HP: i32 = 100;
/// Distance of the starting position above the bottom edge.
const PLAYER_START_LIFT: f32 = 40.0;

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Milliseconds between regular spawns.
pub fn spawn_interval_ms(level: u32) -> f64 {
    if level >= 5 {
        1000.0
    } else {
        1500.0
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for a field of `width` x `height` world units.
pub fn init_state(width: f32, height: f32) -> GameState {
    GameState {
        player: Player {
            x: width / 2.0,
            y: height - PLAYER_START_LIFT,
            radius: PLAYER_RADIUS,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
        },
        enemies: Vec::new(),
        projectiles: Vec::new(),
        boss_projectiles: Vec::new(),
        progression: Progression::default(),
        fire: FireControl::default(),
        boss_active: false,
        boss_defeated: false,
        clock_ms: 0.0,
        last_spawn_ms: 0.0,
        beam_end: None,
        status: GameStatus::Playing,
        frame: 0,
        width,
        height,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Snap the player onto the pointer. There is no easing.
pub fn update_player(state: &GameState, pointer: Point) -> GameState {
    GameState {
        player: Player {
            x: pointer.x,
            y: pointer.y,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Select the next weapon slot (1 → 2 → 3 → 4 → 1).
pub fn cycle_weapon(state: &GameState) -> GameState {
    let slot = state.fire.slot.next();
    tracing::debug!(weapon = slot.number(), "weapon selected");
    GameState {
        fire: FireControl {
            slot,
            ..state.fire.clone()
        },
        ..state.clone()
    }
}

/// Status-row values for the current state.
pub fn hud(state: &GameState) -> Hud {
    Hud {
        level: state.progression.level,
        xp: state.progression.xp,
        xp_to_next: state.progression.xp_to_next,
        weapon: state.fire.slot.number(),
        base_damage: weapon::base_damage(state.progression.level, state.fire.slot),
        hp: state.player.hp,
        max_hp: state.player.max_hp,
    }
}

// ── Shared mutation helpers ─────────────────────────────────────────────────

/// Lower player HP, never below zero.
pub(crate) fn damage_player(player: &mut Player, amount: i32) {
    player.hp = (player.hp - amount).max(0);
}

/// Credit a kill: XP, and the boss-defeated latch.
pub(crate) fn award_kill(state: &mut GameState, kill: Kill) {
    if kill.boss_defeated {
        state.boss_defeated = true;
        tracing::info!(frame = state.frame, "boss defeated");
    }
    tracing::debug!(kind = ?kill.kind, xp = kill.xp, "kill credited");
    let (progression, _) = gain_xp(&state.progression, kill.xp);
    state.progression = progression;
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame of `dt_ms` milliseconds.
///
/// All randomness comes through `rng` so callers control determinism.
/// A state that is no longer `Playing` is returned unchanged; the host is
/// expected to stop stepping once it sees a terminal status.
pub fn tick(
    state: &GameState,
    input: &InputState,
    dt_ms: f64,
    rng: &mut impl Rng,
) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    let mut next = update_player(state, input.pointer);
    next.frame += 1;
    next.clock_ms += dt_ms.max(0.0);
    next.beam_end = None;
    let level = next.progression.level;

    // ── 1. Spawn ─────────────────────────────────────────────────────────────
    let spawn_due = next.clock_ms - next.last_spawn_ms > spawn_interval_ms(level);
    if spawn_due && !next.boss_active && !next.boss_defeated {
        enemy::spawn_enemy(&mut next, rng);
        next.last_spawn_ms = next.clock_ms;
    }

    // ── 2. Move enemies (the boss may fire here) ─────────────────────────────
    let target = next.player.pos();
    for e in next.enemies.iter_mut() {
        enemy::update_enemy(
            e,
            target,
            level,
            next.width,
            next.height,
            &mut next.boss_projectiles,
            rng,
        );
    }

    // ── 3. Enemies slipping past the bottom edge hurt the player ────────────
    let height = next.height;
    let before = next.enemies.len();
    next.enemies.retain(|e| !has_escaped(e, height));
    for _ in next.enemies.len()..before {
        damage_player(&mut next.player, ESCAPE_DAMAGE);
    }
    if next.player.hp <= 0 {
        return game_over(next);
    }

    // ── 4. Fire ──────────────────────────────────────────────────────────────
    weapon::fire(&mut next, input, rng);

    // ── 5. Projectiles & collisions ──────────────────────────────────────────
    collision::advance(&mut next.projectiles);
    collision::advance(&mut next.boss_projectiles);

    let kills = collision::resolve_player_shots(&mut next.enemies, &mut next.projectiles);
    for kill in kills {
        award_kill(&mut next, kill);
    }
    let taken = collision::resolve_boss_shots(&mut next.player, &mut next.boss_projectiles);
    damage_player(&mut next.player, taken);

    collision::sweep(&mut next.projectiles);
    collision::sweep(&mut next.boss_projectiles);

    // ── 6. Clear the dead & age cosmetics ────────────────────────────────────
    next.enemies.retain(|e| e.hp > 0);
    next.enemies.iter_mut().for_each(enemy::tick_cosmetics);
    next.boss_active = next.enemies.iter().any(|e| e.boss.is_some());

    // ── 7. Terminal states ───────────────────────────────────────────────────
    if next.player.hp <= 0 {
        return game_over(next);
    }
    if next.progression.level >= MAX_LEVEL && next.boss_defeated && next.enemies.is_empty() {
        next.status = GameStatus::Victory;
        tracing::info!(frame = next.frame, "victory");
    }

    next
}

fn game_over(mut state: GameState) -> GameState {
    state.status = GameStatus::GameOver;
    tracing::info!(frame = state.frame, level = state.progression.level, "game over");
    state
}
