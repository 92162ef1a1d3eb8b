//! Projectile motion and hit resolution.

use crate::entities::{Enemy, Player, Projectile};
use crate::geometry::circles_overlap;

use super::enemy::{apply_damage, HitFx, Kill};

const HIT_FLASH: u32 = 5;
const HIT_POPUP_TICKS: u32 = 30;

/// Move every projectile by its velocity and burn one tick of lifetime.
pub fn advance(shots: &mut [Projectile]) {
    for shot in shots.iter_mut() {
        shot.x += shot.dx;
        shot.y += shot.dy;
        shot.life = shot.life.saturating_sub(1);
    }
}

/// Test every live player shot against every live enemy.
///
/// A shot that connects is spent immediately, so it can damage at most one
/// enemy. Returns the kills in the order they happened.
pub fn resolve_player_shots(enemies: &mut [Enemy], shots: &mut [Projectile]) -> Vec<Kill> {
    let mut kills = Vec::new();
    for enemy in enemies.iter_mut() {
        for shot in shots.iter_mut() {
            if shot.is_spent() || enemy.hp <= 0 {
                continue;
            }
            if circles_overlap(enemy.pos(), enemy.radius(), shot.pos(), shot.radius) {
                shot.life = 0;
                let fx = HitFx { flash: HIT_FLASH, popup_ticks: Some(HIT_POPUP_TICKS) };
                kills.extend(apply_damage(enemy, shot.damage, fx));
            }
        }
    }
    kills
}

/// Test boss shots against the player. Returns the total damage dealt.
pub fn resolve_boss_shots(player: &mut Player, shots: &mut [Projectile]) -> i32 {
    let mut taken = 0;
    for shot in shots.iter_mut().filter(|s| !s.is_spent()) {
        if circles_overlap(player.pos(), player.radius, shot.pos(), shot.radius) {
            shot.life = 0;
            taken += shot.damage;
        }
    }
    taken
}

/// Drop spent projectiles.
pub fn sweep(shots: &mut Vec<Projectile>) {
    shots.retain(|s| !s.is_spent());
}
