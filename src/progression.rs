//! Wave, boss and level progression, evaluated once at the end of a tick.

use rand::Rng;

use crate::entities::{GameState, PowerUp, PowerUpKind};
use crate::geometry::Rect;
use crate::spawner::{level_wave_size, next_wave_size, spawn_wave};

/// Run the end-of-tick transitions, each checked independently in order:
/// wave clear, boss-star, level-up, life-star.
///
/// The boss-star is guarded only by its own presence.  Level-up does not
/// wait for it, so the 30th kill of a level can spawn the star and level up
/// on the same tick, leaving the star on the field for pickup.
pub fn evaluate(state: &mut GameState, rng: &mut impl Rng) {
    let quota = state.config.boss_kill_quota;

    if state.enemies_remaining_in_wave == 0
        && state.bosses_remaining == 0
        && state.boss_star.is_none()
        && state.live_bosses() == 0
        && state.enemies.is_empty()
    {
        let count = next_wave_size(state.level, state.wave_number);
        spawn_wave(state, count, rng);
    }

    if state.enemies_killed_this_level >= quota && state.boss_star.is_none() {
        state.boss_star = Some(spawn_star(state, PowerUpKind::BossStar, rng));
        log::info!(
            "boss-star spawned after {} kills this level",
            state.enemies_killed_this_level
        );
    }

    if state.bosses_remaining == 0
        && state.enemies_killed_this_level >= quota
        && state.live_bosses() == 0
    {
        level_up(state, rng);
    }

    if state.total_kills >= state.next_life_threshold && state.life_star.is_none() {
        state.life_star = Some(spawn_star(state, PowerUpKind::LifeStar, rng));
        log::info!("life-star spawned at {} total kills", state.total_kills);
    }
}

fn level_up(state: &mut GameState, rng: &mut impl Rng) {
    state.level += 1;
    state.enemies_killed_this_level = 0;
    log::info!("level up: now level {}", state.level);
    let count = level_wave_size(state.level);
    spawn_wave(state, count, rng);
}

/// Place a star somewhere in the upper half of the field.
fn spawn_star(state: &GameState, kind: PowerUpKind, rng: &mut impl Rng) -> PowerUp {
    let size = state.config.star_size;
    let max_x = (state.config.field_width - 40).max(41);
    let max_y = (state.config.field_height / 2).max(41);
    PowerUp {
        kind,
        rect: Rect::new(rng.gen_range(40..max_x), rng.gen_range(40..max_y), size, size),
    }
}
