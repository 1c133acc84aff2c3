#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use spacewar::entities::{Enemy, EnemyType, GameState};
use spacewar::geometry::Rect;
use spacewar::{init_state, SimConfig};

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A fresh game with the opening wave removed.  `enemies_remaining_in_wave`
/// is left non-zero so the wave-clear rule never fires on its own.
pub fn quiet_state() -> GameState {
    let mut state = init_state(SimConfig::default(), &mut seeded_rng());
    state.enemies.clear();
    state.enemies_remaining_in_wave = 99;
    state
}

/// Push an enemy of `kind` with its top-left at `(x, y)`; returns its id.
pub fn place_enemy(state: &mut GameState, kind: EnemyType, x: i32, y: i32, health: i32) -> u32 {
    place_enemy_with_speed(state, kind, x, y, health, 1.0)
}

pub fn place_enemy_with_speed(
    state: &mut GameState,
    kind: EnemyType,
    x: i32,
    y: i32,
    health: i32,
    speed: f32,
) -> u32 {
    let (w, h) = if kind == EnemyType::Boss {
        state.config.boss_size
    } else {
        state.config.enemy_size
    };
    let id = state.next_entity_id();
    let enemy = Enemy::new(id, kind, Rect::new(x, y, w, h), health, speed, &mut seeded_rng());
    state.enemies.push(enemy);
    id
}

/// A standalone enemy for movement tests.
pub fn lone_enemy(kind: EnemyType, x: i32, y: i32, speed: f32) -> Enemy {
    Enemy::new(1, kind, Rect::new(x, y, 40, 30), 1, speed, &mut seeded_rng())
}

/// Activate a munition with its top-left at `(x, y)`.
pub fn place_munition(state: &mut GameState, x: i32, y: i32) {
    assert!(state.munitions.fire(x, y), "munition pool full");
}
