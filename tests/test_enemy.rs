mod common;

use common::lone_enemy;
use spacewar::enemy::*;
use spacewar::entities::EnemyType;

const FAR_AWAY: (i32, i32) = (10_000, 10_000);

// ── formulas ──────────────────────────────────────────────────────────────────

#[test]
fn fire_periods_shrink_with_level_and_floor() {
    assert_eq!(shooter_fire_period(1), 960);
    assert_eq!(shooter_fire_period(20), 200);
    assert_eq!(shooter_fire_period(40), 200);
    assert_eq!(boss_fire_period(1), 114);
    assert_eq!(boss_fire_period(10), 60);
    assert_eq!(boss_fire_period(50), 40);
}

#[test]
fn level_multiplier_grows_linearly() {
    assert!((level_multiplier(0) - 1.0).abs() < 1e-6);
    assert!((level_multiplier(5) - 1.4).abs() < 1e-6);
}

// ── per-type movement ─────────────────────────────────────────────────────────

#[test]
fn straight_descends_rounded_up() {
    let mut e = lone_enemy(EnemyType::Straight, 100, 0, 1.0);
    e.update(FAR_AWAY, 1); // ceil(1.08)
    assert_eq!(e.rect.position(), (100, 2));
    e.update(FAR_AWAY, 0); // ceil(1.0)
    assert_eq!(e.rect.position(), (100, 3));
}

#[test]
fn sine_sweeps_around_spawn_column() {
    let mut e = lone_enemy(EnemyType::Sine, 100, 0, 1.0);
    e.sine_amp = 20.0;
    e.sine_freq = 0.1;
    for _ in 0..16 {
        e.update(FAR_AWAY, 0);
    }
    let expected = 100 + ((16.0f32 * 0.1).sin() * 20.0) as i32;
    assert_eq!(e.rect.x, expected);
    assert_eq!(e.rect.y, 16);
    assert_eq!(e.age_ticks, 16);
}

#[test]
fn sine_parameters_are_drawn_in_range() {
    for seed in 0..50u64 {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let e = spacewar::entities::Enemy::new(
            1,
            EnemyType::Sine,
            spacewar::geometry::Rect::new(0, 0, 40, 30),
            1,
            1.0,
            &mut rng,
        );
        assert!((10.0..40.0).contains(&e.sine_amp));
        assert!((0.03..0.15).contains(&e.sine_freq));
    }
}

#[test]
fn zigzag_flips_every_21_ticks() {
    let mut e = lone_enemy(EnemyType::Zigzag, 100, 0, 1.0);
    for _ in 0..21 {
        e.update(FAR_AWAY, 0);
    }
    assert_eq!(e.rect.x, 142);
    e.update(FAR_AWAY, 0);
    assert_eq!(e.rect.x, 140);
    for _ in 0..20 {
        e.update(FAR_AWAY, 0);
    }
    // 21 steps left, then flips right again
    assert_eq!(e.rect.x, 100);
    e.update(FAR_AWAY, 0);
    assert_eq!(e.rect.x, 102);
}

#[test]
fn homing_steps_toward_player() {
    let mut e = lone_enemy(EnemyType::Homing, 0, 0, 5.0);
    e.update((100, 0), 0); // 5 * 0.6 = 3 px along +x
    assert_eq!(e.rect.position(), (3, 0));

    let mut d = lone_enemy(EnemyType::Homing, 0, 0, 5.0);
    d.update((100, 100), 0); // 3 / sqrt(2) ≈ 2.12 per axis
    assert_eq!(d.rect.position(), (2, 2));
}

#[test]
fn homing_holds_still_on_top_of_player() {
    let mut e = lone_enemy(EnemyType::Homing, 50, 50, 5.0);
    e.update((50, 50), 3);
    assert_eq!(e.rect.position(), (50, 50));
}

#[test]
fn patrol_bounces_between_bounds() {
    let mut e = lone_enemy(EnemyType::Patrol, 100, 0, 2.0).with_patrol_bounds(100, 110);
    for _ in 0..6 {
        e.update(FAR_AWAY, 0);
    }
    // 102, 104, ... 112 is past the right bound, so the direction reverses
    assert_eq!(e.rect.x, 112);
    e.update(FAR_AWAY, 0);
    assert_eq!(e.rect.x, 110);
    // ceil(2 / 4) = 1 px down per tick
    assert_eq!(e.rect.y, 7);
}

#[test]
fn patrol_zero_right_bound_defaults_to_span() {
    let e = lone_enemy(EnemyType::Patrol, 100, 0, 2.0).with_patrol_bounds(50, 0);
    assert_eq!(e.patrol_left, 50);
    assert_eq!(e.patrol_right, 250);
}

#[test]
fn boss_descends_at_least_one_pixel() {
    let mut e = lone_enemy(EnemyType::Boss, 200, -100, 0.8);
    e.update(FAR_AWAY, 1);
    assert_eq!(e.rect.y, -99);
    let expected_x =
        200 + ((1.0f32 * (e.sine_freq / 2.0)).sin() * (e.sine_amp + 40.0)) as i32;
    assert_eq!(e.rect.x, expected_x);
}

// ── firing ────────────────────────────────────────────────────────────────────

#[test]
fn zigzag_fires_on_period() {
    let mut e = lone_enemy(EnemyType::Zigzag, 100, 0, 1.0);
    for _ in 0..959 {
        assert_eq!(e.update(FAR_AWAY, 1), None);
    }
    assert_eq!(e.update(FAR_AWAY, 1), Some(EnemyEvent::Fire { id: 1 }));
}

#[test]
fn homing_fires_on_period() {
    let mut e = lone_enemy(EnemyType::Homing, 100, 0, 1.0);
    let fired: Vec<u32> = (1..=400)
        .filter(|_| e.update(FAR_AWAY, 20).is_some())
        .collect();
    // period floors at 200 for high levels
    assert_eq!(fired, vec![200, 400]);
}

#[test]
fn boss_fires_on_its_own_period() {
    let mut e = lone_enemy(EnemyType::Boss, 100, 0, 0.8);
    for _ in 0..113 {
        assert_eq!(e.update(FAR_AWAY, 1), None);
    }
    assert_eq!(e.update(FAR_AWAY, 1), Some(EnemyEvent::Fire { id: 1 }));
}

#[test]
fn non_shooters_never_fire() {
    for kind in [EnemyType::Straight, EnemyType::Sine, EnemyType::Patrol] {
        let mut e = lone_enemy(kind, 100, 0, 1.0);
        assert!((0..2000).all(|_| e.update(FAR_AWAY, 1).is_none()));
    }
}

// ── damage ────────────────────────────────────────────────────────────────────

#[test]
fn damage_reports_destruction_exactly_once() {
    let mut e = lone_enemy(EnemyType::Straight, 0, 0, 1.0);
    e.health = 3;
    assert_eq!(e.damage(1), None);
    assert_eq!(e.health, 2);
    assert!(e.is_alive());
    assert_eq!(e.damage(2), Some(EnemyEvent::Destroyed { id: 1 }));
    assert!(!e.is_alive());
    assert_eq!(e.damage(1), None);
}

#[test]
fn relocate_reanchors_sweep() {
    let mut e = lone_enemy(EnemyType::Boss, 100, 100, 0.8);
    e.relocate(300, -50);
    assert_eq!(e.rect.position(), (300, -50));
    assert_eq!(e.initial_x, 300);
}
