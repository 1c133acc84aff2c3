//! Collision and damage resolution.
//!
//! The tick calls these in a fixed order: munitions vs enemies, enemy bullets
//! vs player, enemy bodies vs player, power-ups vs player.  "First hit wins":
//! a munition is spent on the first live enemy it overlaps in collection
//! order, not the closest one.

use rand::Rng;

use crate::enemy::EnemyEvent;
use crate::entities::{EnemyType, GameEvent, GameState, GameStatus};
use crate::player::player_hit;
use crate::spawner::{boss_count, random_spawn_point, spawn_bosses};

/// Score for a regular kill.
pub const ENEMY_SCORE: u32 = 1;
/// Score per level for a boss kill.
pub const BOSS_SCORE_PER_LEVEL: u32 = 10;

/// Resolve every active munition against the live enemies.  Enemies taking
/// lethal damage are removed before this returns.
pub fn munitions_vs_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut destroyed = Vec::new();
    {
        let GameState {
            munitions, enemies, ..
        } = state;

        for munition in munitions.slots_mut().iter_mut().filter(|m| m.active) {
            let target = enemies
                .iter_mut()
                .find(|e| e.is_alive() && e.rect.intersects(&munition.rect));
            if let Some(enemy) = target {
                events.push(GameEvent::PlayHit);
                if let Some(EnemyEvent::Destroyed { id }) = enemy.damage(1) {
                    destroyed.push(id);
                }
                munition.deactivate();
            }
        }
    }

    for id in destroyed {
        handle_enemy_destroyed(state, id, events);
    }
}

/// Credit a kill and drop the enemy from the live collection.
///
/// Looks the enemy up by id first: a second call for the same id finds
/// nothing and returns `false` without touching score or counters.
pub fn handle_enemy_destroyed(state: &mut GameState, id: u32, events: &mut Vec<GameEvent>) -> bool {
    let Some(index) = state.enemies.iter().position(|e| e.id == id) else {
        return false;
    };
    let enemy = state.enemies.remove(index);
    events.push(GameEvent::PlayBoom);
    state.total_kills += 1;

    if enemy.kind == EnemyType::Boss {
        state.bosses_remaining = state.bosses_remaining.saturating_sub(1);
        state.score += BOSS_SCORE_PER_LEVEL * state.level;
        log::info!("boss destroyed, {} remaining", state.bosses_remaining);
    } else {
        state.score += ENEMY_SCORE;
        state.enemies_killed_this_level += 1;
        state.enemies_remaining_in_wave = state.enemies_remaining_in_wave.saturating_sub(1);
    }
    true
}

/// Enemy bullets against the player.  Ignored while invulnerable.
pub fn bullets_vs_player(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for i in 0..state.enemy_bullets.capacity() {
        if state.player.invulnerable || state.status == GameStatus::GameOver {
            return;
        }
        let bullet = &mut state.enemy_bullets.slots_mut()[i];
        if bullet.active && bullet.rect.intersects(&state.player.rect) {
            bullet.deactivate();
            player_hit(state, events);
        }
    }
}

/// Enemy bodies against the player.  Non-shooting types are destroyed on
/// contact and hit the player; shooting types cost points and are pushed
/// back above the field.  Contact is resolved while invulnerable too; only
/// the hit itself is absorbed.
pub fn enemies_vs_player(state: &mut GameState, events: &mut Vec<GameEvent>, rng: &mut impl Rng) {
    let mut i = 0;
    while i < state.enemies.len() {
        if state.status == GameStatus::GameOver {
            return;
        }
        if !state.enemies[i].rect.intersects(&state.player.rect) {
            i += 1;
            continue;
        }

        if state.enemies[i].kind.is_shooter() {
            state.score = state.score.saturating_sub(state.config.collision_penalty);
            let w = state.enemies[i].rect.w;
            let (x, y) = random_spawn_point(state, w, rng);
            state.enemies[i].relocate(x, y);
            i += 1;
        } else {
            state.enemies.remove(i);
            state.enemies_remaining_in_wave = state.enemies_remaining_in_wave.saturating_sub(1);
            events.push(GameEvent::PlayBoom);
            player_hit(state, events);
        }
    }
}

/// Power-up pickups.
pub fn powerups_vs_player(state: &mut GameState, rng: &mut impl Rng) {
    let player = state.player.rect;

    if state
        .boss_star
        .as_ref()
        .is_some_and(|star| star.rect.intersects(&player))
    {
        state.boss_star = None;
        log::info!("boss-star collected at level {}", state.level);
        let count = boss_count(state.level);
        spawn_bosses(state, count, rng);
    }

    if state
        .life_star
        .as_ref()
        .is_some_and(|star| star.rect.intersects(&player))
    {
        state.life_star = None;
        state.player.lives += 1;
        state.next_life_threshold += state.config.life_threshold_step;
        log::info!(
            "life-star collected: {} lives, next at {} kills",
            state.player.lives,
            state.next_life_threshold
        );
    }
}
