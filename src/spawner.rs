//! Wave and boss-wave construction.
//!
//! Spawning only ever appends to `state.enemies`; it never fails.  Placement
//! avoids overlap on a best-effort basis.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::entities::{Enemy, EnemyType, GameState};
use crate::geometry::Rect;

/// Chance (one in N) that a regular enemy gets one extra hit point.
const TOUGH_ENEMY_ODDS: u32 = 5;
const PATROL_HALF_SPAN: i32 = 100;

/// Health of a regular enemy at `level`, before the random bonus.
pub fn base_enemy_health(level: u32) -> i32 {
    1 + (level / 3) as i32
}

pub fn boss_health(level: u32) -> i32 {
    5 + level as i32
}

pub fn boss_speed(level: u32) -> f32 {
    0.8 + level as f32 * 0.05
}

/// Size of the wave that follows a cleared wave.
pub fn next_wave_size(level: u32, wave_number: u32) -> u32 {
    4 + level * 2 + wave_number
}

/// Size of the first wave after a level-up.
pub fn level_wave_size(level: u32) -> u32 {
    4 + level * 2
}

/// Number of bosses the boss-star releases.
pub fn boss_count(level: u32) -> u32 {
    5 + level.saturating_sub(1)
}

/// A random spot above the field for an enemy of width `w`.
pub fn random_spawn_point(state: &GameState, w: i32, rng: &mut impl Rng) -> (i32, i32) {
    let max_x = (state.config.field_width - w).max(11);
    (rng.gen_range(10..max_x), rng.gen_range(-200..-30))
}

/// Start a new wave of `count` regular enemies.
pub fn spawn_wave(state: &mut GameState, count: u32, rng: &mut impl Rng) {
    state.wave_number += 1;
    state.enemies_remaining_in_wave = count;

    let (w, h) = state.config.enemy_size;
    let max_x = (state.config.field_width - 50).max(60);
    let level = state.level;

    for _ in 0..count {
        let kind = *EnemyType::REGULAR
            .choose(rng)
            .unwrap_or(&EnemyType::Straight);

        let mut rect = Rect::new(0, 0, w, h);
        for _ in 0..state.config.placement_attempts.max(1) {
            rect.move_to(rng.gen_range(10..max_x), rng.gen_range(-300..-30));
            if !state.enemies.iter().any(|e| e.rect.intersects(&rect)) {
                break;
            }
        }

        let mut health = base_enemy_health(level);
        if rng.gen_ratio(1, TOUGH_ENEMY_ODDS) {
            health += 1;
        }
        let speed = rng.gen_range(1.0f32..2.0) + level as f32 * 0.1;

        let id = state.next_entity_id();
        let mut enemy = Enemy::new(id, kind, rect, health, speed, rng);
        if kind == EnemyType::Patrol {
            let left = (rect.x - PATROL_HALF_SPAN).max(0);
            let right = (rect.x + PATROL_HALF_SPAN).min(state.config.field_width - w);
            enemy = enemy.with_patrol_bounds(left, right.max(left + 1));
        }
        state.enemies.push(enemy);
    }

    log::info!(
        "wave {} started: {} enemies (level {})",
        state.wave_number,
        count,
        level
    );
}

/// Release `count` bosses, spread across the field and staggered above it.
/// Bosses still alive from an earlier pickup stay counted.
pub fn spawn_bosses(state: &mut GameState, count: u32, rng: &mut impl Rng) {
    state.bosses_remaining += count;

    let (w, h) = state.config.boss_size;
    let spread = (state.config.field_width - 120).max(1);
    let level = state.level;

    for i in 0..count as i32 {
        let rect = Rect::new(60 + (i * 90) % spread, -100 - i * 120, w, h);
        let id = state.next_entity_id();
        let boss = Enemy::new(
            id,
            EnemyType::Boss,
            rect,
            boss_health(level),
            boss_speed(level),
            rng,
        );
        state.enemies.push(boss);
    }

    log::info!("boss wave: {} bosses at level {}", count, level);
}
