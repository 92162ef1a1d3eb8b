//! All game entity types — pure data, no logic.

use crate::geometry::Point;

// ── Palette ───────────────────────────────────────────────────────────────────

/// Colour tag carried by entities; the renderer maps it to terminal colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Aqua,
    Orange,
    Lime,
    Magenta,
    Red,
    Blue,
    Gold,
    Purple,
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Normal,
    Big,
    Mini,
    Elite,
    Boss,
}

impl EnemyKind {
    pub fn radius(self) -> f32 {
        match self {
            EnemyKind::Normal => 25.0,
            EnemyKind::Big => 35.0,
            EnemyKind::Mini => 30.0,
            EnemyKind::Elite => 40.0,
            EnemyKind::Boss => 50.0,
        }
    }

    /// Hit points before level scaling.
    pub fn base_hp(self) -> i32 {
        match self {
            EnemyKind::Normal => 3,
            EnemyKind::Big => 10,
            EnemyKind::Mini => 20,
            EnemyKind::Elite => 25,
            EnemyKind::Boss => 200,
        }
    }

    pub fn tint(self) -> Tint {
        match self {
            EnemyKind::Normal => Tint::Red,
            EnemyKind::Big => Tint::Orange,
            EnemyKind::Mini => Tint::Blue,
            EnemyKind::Elite => Tint::Gold,
            EnemyKind::Boss => Tint::Purple,
        }
    }
}

/// Floating "-N" label above a damaged enemy. Cosmetic only.
#[derive(Clone, Debug, PartialEq)]
pub struct DamagePopup {
    pub amount: i32,
    pub x: f32,
    pub y: f32,
    /// Ticks left on screen.
    pub ticks: u32,
}

/// Fields only the boss carries.
#[derive(Clone, Debug, PartialEq)]
pub struct BossState {
    pub lives: u32,
    pub teleport_cooldown: i32,
    pub shoot_cooldown: i32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    pub hp: i32,
    pub max_hp: i32,
    /// Ticks of white tint left after a hit.
    pub flash: u32,
    pub popups: Vec<DamagePopup>,
    /// `Some` exactly when `kind == EnemyKind::Boss`.
    pub boss: Option<BossState>,
}

impl Enemy {
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A moving circle with a damage payload. Used for both player shots and
/// boss shots; the two live in separate collections on `GameState`.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    pub tint: Tint,
    pub damage: i32,
    /// Remaining lifetime in ticks; 0 means spent.
    pub life: u32,
}

impl Projectile {
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_spent(&self) -> bool {
        self.life == 0
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub hp: i32,
    pub max_hp: i32,
}

impl Player {
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ── Progression ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progression {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Progression { level: 1, xp: 0, xp_to_next: 10 }
    }
}

// ── Weapons ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponSlot {
    Blaster,
    Cannon,
    Plasma,
    Beam,
}

impl WeaponSlot {
    /// Slot number as shown to the player (1..=4).
    pub fn number(self) -> u8 {
        match self {
            WeaponSlot::Blaster => 1,
            WeaponSlot::Cannon => 2,
            WeaponSlot::Plasma => 3,
            WeaponSlot::Beam => 4,
        }
    }

    /// 1 → 2 → 3 → 4 → 1.
    pub fn next(self) -> WeaponSlot {
        match self {
            WeaponSlot::Blaster => WeaponSlot::Cannon,
            WeaponSlot::Cannon => WeaponSlot::Plasma,
            WeaponSlot::Plasma => WeaponSlot::Beam,
            WeaponSlot::Beam => WeaponSlot::Blaster,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BeamState {
    Idle,
    /// Firing since `started_ms` on the simulation clock.
    Active { started_ms: f64 },
    /// Re-activation refused until `until_ms`.
    CoolingDown { until_ms: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FireControl {
    pub slot: WeaponSlot,
    /// Ticks until the next standard shot may leave.
    pub cooldown: u32,
    pub beam: BeamState,
}

impl Default for FireControl {
    fn default() -> Self {
        FireControl { slot: WeaponSlot::Blaster, cooldown: 0, beam: BeamState::Idle }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// What the host observed this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputState {
    pub pointer: Point,
    pub firing: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Victory,
}

/// The entire simulation state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Shots fired by the player.
    pub projectiles: Vec<Projectile>,
    /// Shots fired by the boss at the player.
    pub boss_projectiles: Vec<Projectile>,
    pub progression: Progression,
    pub fire: FireControl,
    /// True while a boss with lives left is on the field.
    pub boss_active: bool,
    /// Set once the boss loses its last life; never cleared.
    pub boss_defeated: bool,
    /// Simulation clock in milliseconds, advanced by `tick`.
    pub clock_ms: f64,
    pub last_spawn_ms: f64,
    /// End point of the beam drawn this tick, if it fired.
    pub beam_end: Option<Point>,
    pub status: GameStatus,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}

impl GameState {
    /// Where standard shots and the beam originate: bottom-centre.
    pub fn fire_origin(&self) -> Point {
        Point::new(self.width / 2.0, self.height)
    }
}

/// Text shown in the status row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub weapon: u8,
    pub base_damage: i32,
    pub hp: i32,
    pub max_hp: i32,
}
