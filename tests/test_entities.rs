use xp_shooter::compute::init_state;
use xp_shooter::compute::enemy::new_enemy;
use xp_shooter::entities::*;

#[test]
fn enemy_variant_table() {
    let table: Vec<(f32, i32, Tint)> = [
        EnemyKind::Normal,
        EnemyKind::Big,
        EnemyKind::Mini,
        EnemyKind::Elite,
        EnemyKind::Boss,
    ]
    .iter()
    .map(|k| (k.radius(), k.base_hp(), k.tint()))
    .collect();
    assert_eq!(
        table,
        vec![
            (25.0, 3, Tint::Red),
            (35.0, 10, Tint::Orange),
            (30.0, 20, Tint::Blue),
            (40.0, 25, Tint::Gold),
            (50.0, 200, Tint::Purple),
        ]
    );
}

#[test]
fn weapon_slot_numbers_and_cycle() {
    assert_eq!(WeaponSlot::Blaster.number(), 1);
    assert_eq!(WeaponSlot::Beam.number(), 4);
    assert_eq!(WeaponSlot::Blaster.next(), WeaponSlot::Cannon);
    assert_eq!(WeaponSlot::Beam.next(), WeaponSlot::Blaster);
}

#[test]
fn defaults_start_at_level_one_with_blaster() {
    assert_eq!(Progression::default(), Progression { level: 1, xp: 0, xp_to_next: 10 });
    let fire = FireControl::default();
    assert_eq!(fire.slot, WeaponSlot::Blaster);
    assert_eq!(fire.cooldown, 0);
    assert_eq!(fire.beam, BeamState::Idle);
}

#[test]
fn only_boss_carries_boss_state() {
    assert!(new_enemy(EnemyKind::Elite, 0.0, 0.0, 1).boss.is_none());
    assert!(new_enemy(EnemyKind::Boss, 0.0, 0.0, 10).boss.is_some());
}

#[test]
fn projectile_spent_when_life_runs_out() {
    let mut p = Projectile {
        x: 0.0,
        y: 0.0,
        dx: 1.0,
        dy: 1.0,
        radius: 6.0,
        tint: Tint::Aqua,
        damage: 3,
        life: 1,
    };
    assert!(!p.is_spent());
    p.life = 0;
    assert!(p.is_spent());
}

#[test]
fn fire_origin_is_bottom_centre() {
    let s = init_state(640.0, 480.0);
    let o = s.fire_origin();
    assert_eq!((o.x, o.y), (320.0, 480.0));
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(800.0, 600.0);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.progression.xp = 9;
    cloned.enemies.push(new_enemy(EnemyKind::Normal, 5.0, 5.0, 1));

    assert_eq!(original.player.x, 400.0);
    assert_eq!(original.progression.xp, 0);
    assert!(original.enemies.is_empty());
}
