use xp_shooter::compute::progression::*;
use xp_shooter::entities::{EnemyKind, Progression};

fn start() -> Progression {
    Progression::default()
}

#[test]
fn reaching_threshold_levels_up() {
    let (p, leveled) = gain_xp(&start(), 10);
    assert!(leveled);
    assert_eq!(p, Progression { level: 2, xp: 0, xp_to_next: 15 });
}

#[test]
fn below_threshold_just_accumulates() {
    let (p, leveled) = gain_xp(&start(), 9);
    assert!(!leveled);
    assert_eq!(p, Progression { level: 1, xp: 9, xp_to_next: 10 });
}

#[test]
fn split_gains_match_single_gain_without_level_up() {
    let (a, _) = gain_xp(&start(), 3);
    let (a, _) = gain_xp(&a, 4);
    let (b, _) = gain_xp(&start(), 7);
    assert_eq!(a, b);
}

#[test]
fn surplus_carries_into_next_level() {
    let (p, _) = gain_xp(&start(), 13);
    assert_eq!(p, Progression { level: 2, xp: 3, xp_to_next: 15 });
}

#[test]
fn one_gain_can_cross_several_levels() {
    // 10 + 15 + 22 = 47
    let (p, leveled) = gain_xp(&start(), 50);
    assert!(leveled);
    assert_eq!(p, Progression { level: 4, xp: 3, xp_to_next: 33 });
}

#[test]
fn threshold_grows_by_half_rounded_down() {
    let mut p = start();
    let mut thresholds = vec![p.xp_to_next];
    while p.level < MAX_LEVEL {
        let need = p.xp_to_next;
        p = gain_xp(&p, need).0;
        thresholds.push(p.xp_to_next);
    }
    assert_eq!(thresholds, vec![10, 15, 22, 33, 49, 73, 109, 163, 244, 366]);
}

#[test]
fn level_is_capped() {
    let (p, _) = gain_xp(&start(), 1_000_000);
    assert_eq!(p.level, MAX_LEVEL);
    assert!(p.xp >= p.xp_to_next); // surplus kept at the cap

    let (q, leveled) = gain_xp(&p, 500);
    assert!(!leveled);
    assert_eq!(q.level, MAX_LEVEL);
}

#[test]
fn kill_rewards() {
    assert_eq!(kill_xp(EnemyKind::Normal), 1);
    assert_eq!(kill_xp(EnemyKind::Big), 3);
    assert_eq!(kill_xp(EnemyKind::Mini), 6);
    assert_eq!(kill_xp(EnemyKind::Elite), 11);
    assert_eq!(kill_xp(EnemyKind::Boss), BOSS_FINAL_XP);
    assert_eq!(BOSS_LIFE_XP, 10);
}
