use xp_shooter::compute::enemy::*;
use xp_shooter::entities::{EnemyKind, Projectile};
use xp_shooter::geometry::Point;

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

const PLAIN_HIT: HitFx = HitFx { flash: 5, popup_ticks: Some(30) };

// ── Hit points ────────────────────────────────────────────────────────────────

#[test]
fn max_hp_scales_with_level() {
    assert_eq!(max_hp_for(EnemyKind::Big, 1), 10);
    assert_eq!(max_hp_for(EnemyKind::Normal, 2), 4); // ceil(3.5)
    assert_eq!(max_hp_for(EnemyKind::Elite, 5), 27);
    assert_eq!(max_hp_for(EnemyKind::Boss, 10), 205); // ceil(204.5)
}

#[test]
fn max_hp_never_drops_as_level_rises() {
    for kind in [
        EnemyKind::Normal,
        EnemyKind::Big,
        EnemyKind::Mini,
        EnemyKind::Elite,
        EnemyKind::Boss,
    ] {
        for level in 1..10 {
            assert!(max_hp_for(kind, level) <= max_hp_for(kind, level + 1));
        }
    }
}

#[test]
fn new_enemy_starts_at_full_health() {
    let e = new_enemy(EnemyKind::Mini, 10.0, 20.0, 3);
    assert_eq!(e.hp, e.max_hp);
    assert_eq!(e.max_hp, 21);
    assert!(e.popups.is_empty());
    assert_eq!(e.flash, 0);
}

// ── Spawn mix ─────────────────────────────────────────────────────────────────

#[test]
fn mini_levels_always_spawn_minis() {
    let mut rng = seeded_rng();
    for level in [2, 5, 9] {
        for _ in 0..50 {
            assert_eq!(choose_kind(level, &mut rng), EnemyKind::Mini);
        }
    }
}

#[test]
fn early_levels_never_spawn_minis() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let kind = choose_kind(1, &mut rng);
        assert!(matches!(kind, EnemyKind::Normal | EnemyKind::Big | EnemyKind::Elite));
    }
}

#[test]
fn late_levels_never_spawn_normals() {
    let mut rng = seeded_rng();
    let mut seen_mini = false;
    for _ in 0..500 {
        let kind = choose_kind(7, &mut rng);
        assert!(matches!(kind, EnemyKind::Big | EnemyKind::Mini | EnemyKind::Elite));
        seen_mini |= kind == EnemyKind::Mini;
    }
    assert!(seen_mini);
}

#[test]
fn top_level_spawns_boss() {
    assert_eq!(choose_kind(10, &mut seeded_rng()), EnemyKind::Boss);
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn regular_enemies_descend_faster_from_level_five() {
    let mut shots: Vec<Projectile> = Vec::new();
    let target = Point::new(0.0, 0.0);
    let mut slow = new_enemy(EnemyKind::Big, 100.0, 0.0, 1);
    let mut fast = new_enemy(EnemyKind::Big, 100.0, 0.0, 5);
    update_enemy(&mut slow, target, 4, 800.0, 600.0, &mut shots, &mut seeded_rng());
    update_enemy(&mut fast, target, 5, 800.0, 600.0, &mut shots, &mut seeded_rng());
    assert_abs_diff_eq!(slow.y, 0.8, epsilon = 1e-5);
    assert_abs_diff_eq!(fast.y, 1.2, epsilon = 1e-5);
    assert_eq!(slow.x, 100.0);
    assert!(shots.is_empty());
}

#[test]
fn boss_fires_two_shot_volley_then_waits() {
    let mut shots = Vec::new();
    let mut boss = new_enemy(EnemyKind::Boss, 400.0, 150.0, 10);
    if let Some(b) = boss.boss.as_mut() {
        b.teleport_cooldown = 500;
    }
    let target = Point::new(400.0, 550.0);
    let mut rng = seeded_rng();

    update_enemy(&mut boss, target, 10, 800.0, 600.0, &mut shots, &mut rng);
    assert_eq!(shots.len(), 2);
    for s in &shots {
        assert_eq!(s.damage, BOSS_SHOT_DAMAGE);
        assert_eq!(s.life, 200);
        assert_abs_diff_eq!(s.dx.hypot(s.dy), 5.0, epsilon = 1e-4);
    }
    assert_eq!(boss.boss.as_ref().map(|b| b.shoot_cooldown), Some(39));

    for _ in 0..39 {
        update_enemy(&mut boss, target, 10, 800.0, 600.0, &mut shots, &mut rng);
    }
    assert_eq!(shots.len(), 2);
    update_enemy(&mut boss, target, 10, 800.0, 600.0, &mut shots, &mut rng);
    assert_eq!(shots.len(), 4);
}

#[test]
fn boss_stays_in_upper_half() {
    let mut shots = Vec::new();
    let mut boss = new_enemy(EnemyKind::Boss, 900.0, 500.0, 10);
    if let Some(b) = boss.boss.as_mut() {
        b.teleport_cooldown = 500;
        b.shoot_cooldown = 500;
    }
    update_enemy(&mut boss, Point::new(0.0, 0.0), 10, 800.0, 600.0, &mut shots, &mut seeded_rng());
    assert_eq!((boss.x, boss.y), (750.0, 300.0));
}

#[test]
fn boss_teleports_within_margins() {
    let mut shots = Vec::new();
    let mut boss = new_enemy(EnemyKind::Boss, 400.0, 150.0, 10);
    let mut rng = seeded_rng();
    let mut teleported = false;
    for _ in 0..2_000 {
        let before = boss.x;
        update_enemy(&mut boss, Point::new(400.0, 550.0), 10, 800.0, 600.0, &mut shots, &mut rng);
        assert!(boss.x >= 50.0 && boss.x <= 750.0);
        if boss.x != before {
            teleported = true;
            assert!(boss.boss.as_ref().map(|b| b.teleport_cooldown).unwrap_or(0) > 100);
        }
    }
    assert!(teleported);
}

#[test]
fn escape_only_counts_regular_enemies_below_field() {
    let below = new_enemy(EnemyKind::Normal, 0.0, 601.0, 1);
    let edge = new_enemy(EnemyKind::Normal, 0.0, 600.0, 1);
    let boss = new_enemy(EnemyKind::Boss, 0.0, 601.0, 10);
    assert!(has_escaped(&below, 600.0));
    assert!(!has_escaped(&edge, 600.0));
    assert!(!has_escaped(&boss, 600.0));
}

// ── Damage ────────────────────────────────────────────────────────────────────

#[test]
fn non_lethal_hit_marks_enemy() {
    let mut e = new_enemy(EnemyKind::Big, 100.0, 100.0, 1);
    assert_eq!(apply_damage(&mut e, 4, PLAIN_HIT), None);
    assert_eq!(e.hp, 6);
    assert_eq!(e.flash, 5);
    assert_eq!(e.popups.len(), 1);
    assert_eq!(e.popups[0].amount, 4);
}

#[test]
fn hit_without_popup_still_damages() {
    let mut e = new_enemy(EnemyKind::Big, 100.0, 100.0, 1);
    apply_damage(&mut e, 1, HitFx { flash: 2, popup_ticks: None });
    assert_eq!(e.hp, 9);
    assert!(e.popups.is_empty());
}

#[test]
fn lethal_hit_reports_kill() {
    let mut e = new_enemy(EnemyKind::Elite, 100.0, 100.0, 1);
    e.hp = 2;
    let kill = apply_damage(&mut e, 3, PLAIN_HIT).expect("lethal");
    assert_eq!(kill, Kill { kind: EnemyKind::Elite, xp: 11, boss_defeated: false });
    assert!(e.hp <= 0);
}

#[test]
fn boss_spends_lives_before_dying() {
    let mut boss = new_enemy(EnemyKind::Boss, 400.0, 150.0, 10);
    let max = boss.max_hp;

    for lives_left in [2, 1] {
        let kill = apply_damage(&mut boss, max, PLAIN_HIT).expect("life lost");
        assert_eq!(kill.xp, 10);
        assert!(!kill.boss_defeated);
        assert_eq!(boss.hp, max);
        assert_eq!(boss.flash, 30);
        assert_eq!(boss.boss.as_ref().map(|b| b.lives), Some(lives_left));
    }

    let kill = apply_damage(&mut boss, max, PLAIN_HIT).expect("final life");
    assert_eq!(kill, Kill { kind: EnemyKind::Boss, xp: 50, boss_defeated: true });
    assert_eq!(boss.boss.as_ref().map(|b| b.lives), Some(0));
    assert!(boss.hp <= 0);
}

#[test]
fn cosmetics_count_down_and_expire() {
    let mut e = new_enemy(EnemyKind::Big, 100.0, 100.0, 1);
    apply_damage(&mut e, 1, HitFx { flash: 2, popup_ticks: Some(2) });
    tick_cosmetics(&mut e);
    assert_eq!(e.flash, 1);
    assert_eq!(e.popups[0].ticks, 1);
    tick_cosmetics(&mut e);
    assert_eq!(e.flash, 0);
    assert!(e.popups.is_empty());
    tick_cosmetics(&mut e);
    assert_eq!(e.flash, 0);
}
