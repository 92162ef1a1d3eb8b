//! Experience and level-up rules.

use crate::entities::{EnemyKind, Progression};

pub const MAX_LEVEL: u32 = 10;

/// XP for knocking one life off a boss that still has lives left.
pub const BOSS_LIFE_XP: u32 = 10;
/// XP for the boss's final life.
pub const BOSS_FINAL_XP: u32 = 50;

/// XP for destroying a non-boss enemy of `kind`.
pub fn kill_xp(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Normal => 1,
        EnemyKind::Big => 3,
        EnemyKind::Mini => 6,
        EnemyKind::Elite => 11,
        EnemyKind::Boss => BOSS_FINAL_XP,
    }
}

/// Add `amount` XP, levelling up as many times as the total allows.
///
/// Each level-up subtracts the current threshold and grows the next one by
/// 1.5x (rounded down). Levelling stops at `MAX_LEVEL`; surplus XP is kept.
/// Returns the new progression and whether at least one level was gained.
pub fn gain_xp(progression: &Progression, amount: u32) -> (Progression, bool) {
    let mut next = Progression {
        xp: progression.xp + amount,
        ..progression.clone()
    };
    let mut leveled = false;
    while next.xp >= next.xp_to_next && next.level < MAX_LEVEL {
        next.xp -= next.xp_to_next;
        next.level += 1;
        next.xp_to_next = next.xp_to_next * 3 / 2;
        leveled = true;
    }
    if leveled {
        tracing::info!(level = next.level, xp = next.xp, xp_to_next = next.xp_to_next, "level up");
    }
    (next, leveled)
}
