//! Weapon table, standard shots and the beam.
//!
//! Slots 1-3 launch projectiles from the bottom-centre of the field toward
//! the pointer. Slot 4 is a continuous beam that stays on for a fixed window
//! and then locks out for a cooldown. A slot whose unlock level has not been
//! reached behaves like slot 1.

use rand::Rng;

use crate::entities::{BeamState, GameState, InputState, Projectile, Tint, WeaponSlot};
use crate::geometry::{distance_to_segment, unit_vector, Point};

use super::enemy::{apply_damage, HitFx};

pub const SHOT_SPEED: f32 = 15.0;
pub const SHOT_LIFE: u32 = 100;

pub const BEAM_UNLOCK_LEVEL: u32 = 10;
pub const BEAM_DURATION_MS: f64 = 5000.0;
pub const BEAM_COOLDOWN_MS: f64 = 3000.0;
/// Nominal beam power shown in the HUD; a tenth of it lands each tick.
pub const BEAM_POWER: i32 = 10;
pub const BEAM_TICK_DAMAGE: i32 = 1;
pub const BEAM_POPUP_CHANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponProfile {
    pub damage: i32,
    /// Ticks between shots.
    pub cooldown: u32,
    pub radius: f32,
    pub tint: Tint,
}

const BLASTER: WeaponProfile = WeaponProfile { damage: 3, cooldown: 9, radius: 6.0, tint: Tint::Aqua };
const CANNON: WeaponProfile = WeaponProfile { damage: 6, cooldown: 7, radius: 7.0, tint: Tint::Orange };
const PLASMA: WeaponProfile = WeaponProfile { damage: 9, cooldown: 5, radius: 8.0, tint: Tint::Lime };

pub fn unlock_level(slot: WeaponSlot) -> u32 {
    match slot {
        WeaponSlot::Blaster => 1,
        WeaponSlot::Cannon => 3,
        WeaponSlot::Plasma => 6,
        WeaponSlot::Beam => BEAM_UNLOCK_LEVEL,
    }
}

pub fn beam_unlocked(level: u32, slot: WeaponSlot) -> bool {
    slot == WeaponSlot::Beam && level >= BEAM_UNLOCK_LEVEL
}

/// Projectile parameters for `slot` at `level`, falling back to the blaster.
pub fn effective_profile(level: u32, slot: WeaponSlot) -> WeaponProfile {
    if level < unlock_level(slot) {
        return BLASTER;
    }
    match slot {
        WeaponSlot::Cannon => CANNON,
        WeaponSlot::Plasma => PLASMA,
        WeaponSlot::Blaster | WeaponSlot::Beam => BLASTER,
    }
}

/// Damage figure displayed for the current selection.
pub fn base_damage(level: u32, slot: WeaponSlot) -> i32 {
    if beam_unlocked(level, slot) {
        BEAM_POWER
    } else {
        effective_profile(level, slot).damage
    }
}

/// Build a standard shot from `origin` aimed at `target`.
///
/// Uses the angle rather than a normalised vector so a target sitting on
/// the origin still yields a valid heading (straight right).
pub fn launch_shot(origin: Point, target: Point, profile: &WeaponProfile) -> Projectile {
    let angle = (target.y - origin.y).atan2(target.x - origin.x);
    Projectile {
        x: origin.x,
        y: origin.y,
        dx: angle.cos() * SHOT_SPEED,
        dy: angle.sin() * SHOT_SPEED,
        radius: profile.radius,
        tint: profile.tint,
        damage: profile.damage,
        life: SHOT_LIFE,
    }
}

/// Advance the beam state machine to `now_ms`.
///
/// An active beam keeps its start time through a release or a slot switch;
/// the window is measured from first activation. Holding fire once the
/// window has run out starts the cooldown, which always runs to completion.
pub fn update_beam(beam: BeamState, firing: bool, now_ms: f64) -> BeamState {
    match (beam, firing) {
        (BeamState::CoolingDown { until_ms }, _) if now_ms < until_ms => beam,
        (BeamState::CoolingDown { .. }, true) | (BeamState::Idle, true) => {
            BeamState::Active { started_ms: now_ms }
        }
        (BeamState::CoolingDown { .. }, false) => BeamState::Idle,
        (BeamState::Active { started_ms }, true) if now_ms - started_ms >= BEAM_DURATION_MS => {
            tracing::debug!(now_ms, "beam overheated");
            BeamState::CoolingDown { until_ms: now_ms + BEAM_COOLDOWN_MS }
        }
        (BeamState::Active { .. }, _) | (BeamState::Idle, false) => beam,
    }
}

/// Beam segment: from `origin` through `pointer`, extended well past the
/// field so it always reaches the far edge.
pub fn beam_endpoints(origin: Point, pointer: Point, width: f32, height: f32) -> (Point, Point) {
    let (ux, uy) = unit_vector(origin, pointer);
    let reach = width.max(height) * 2.0;
    (origin, Point::new(origin.x + ux * reach, origin.y + uy * reach))
}

// ── Per-tick firing ──────────────────────────────────────────────────────────

/// Apply this tick's fire input to `state`: launch a shot, or run the beam.
pub(crate) fn fire(state: &mut GameState, input: &InputState, rng: &mut impl Rng) {
    let level = state.progression.level;
    let beam_mode = beam_unlocked(level, state.fire.slot);
    state.fire.beam = update_beam(state.fire.beam, beam_mode && input.firing, state.clock_ms);

    if beam_mode {
        state.fire.cooldown = state.fire.cooldown.saturating_sub(1);
        if input.firing && matches!(state.fire.beam, BeamState::Active { .. }) {
            sweep_beam(state, input.pointer, rng);
        }
        return;
    }

    if state.fire.cooldown > 0 {
        state.fire.cooldown -= 1;
        return;
    }
    if !input.firing {
        return;
    }
    let profile = effective_profile(level, state.fire.slot);
    let shot = launch_shot(state.fire_origin(), input.pointer, &profile);
    state.projectiles.push(shot);
    state.fire.cooldown = profile.cooldown;
}

/// Damage every live enemy the beam crosses this tick.
fn sweep_beam(state: &mut GameState, pointer: Point, rng: &mut impl Rng) {
    let (start, end) = beam_endpoints(state.fire_origin(), pointer, state.width, state.height);
    state.beam_end = Some(end);

    let mut kills = Vec::new();
    for enemy in state.enemies.iter_mut().filter(|e| e.hp > 0) {
        if distance_to_segment(enemy.pos(), start, end) < enemy.radius() {
            let fx = HitFx {
                flash: 2,
                popup_ticks: rng.gen_bool(BEAM_POPUP_CHANCE).then_some(20),
            };
            kills.extend(apply_damage(enemy, BEAM_TICK_DAMAGE, fx));
        }
    }
    for kill in kills {
        super::award_kill(state, kill);
    }
}
