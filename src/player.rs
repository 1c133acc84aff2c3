//! Player movement and the health/lives controller.

use crate::config::SimConfig;
use crate::entities::{Controls, GameEvent, GameState, GameStatus, Player};
use crate::geometry::Rect;

pub fn new_player(config: &SimConfig) -> Player {
    Player {
        rect: Rect::new(
            config.player_start.0,
            config.player_start.1,
            config.player_size,
            config.player_size,
        ),
        lives: config.starting_lives,
        invulnerable: false,
        invulnerable_ticks: 0,
        visible: true,
    }
}

/// Apply every held movement intent once.  Each direction only moves while
/// the ship is still inside its bound, so the ship may overshoot a bound by
/// less than one step, never more.
pub fn move_player(player: &mut Player, controls: &Controls, config: &SimConfig) {
    let speed = config.player_speed;
    if controls.left && player.rect.x > config.player_min_x {
        player.rect.x -= speed;
    }
    if controls.right && player.rect.right() < config.player_max_right {
        player.rect.x += speed;
    }
    if controls.down && player.rect.y < config.player_max_y {
        player.rect.y += speed;
    }
    if controls.up && player.rect.y > config.player_min_y {
        player.rect.y -= speed;
    }
}

/// Count down the post-hit invulnerability window and blink the sprite.
/// The tick that finds the counter at zero is the first vulnerable one, so
/// a window of N ticks covers the N ticks after the hit.
pub fn tick_invulnerability(player: &mut Player, config: &SimConfig) {
    if !player.invulnerable {
        return;
    }
    if player.invulnerable_ticks == 0 {
        player.invulnerable = false;
        player.visible = true;
        return;
    }
    player.invulnerable_ticks -= 1;
    let period = config.blink_period.max(1);
    player.visible = (player.invulnerable_ticks / period) % 2 == 0;
}

/// The player has been hit.  No-op while invulnerable.
pub fn player_hit(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.player.invulnerable || state.status == GameStatus::GameOver {
        return;
    }

    state.player.lives = state.player.lives.saturating_sub(1);
    events.push(GameEvent::PlayHit);

    if state.player.lives == 0 {
        state.status = GameStatus::GameOver;
        events.push(GameEvent::GameOver {
            final_score: state.score,
        });
        log::info!(
            "game over: score {} at level {} wave {}",
            state.score,
            state.level,
            state.wave_number
        );
        return;
    }

    let (x, y) = state.config.respawn_position;
    state.player.rect.move_to(x, y);
    state.player.invulnerable = true;
    state.player.invulnerable_ticks = state.config.invulnerable_ticks;
    state.player.visible = true;
    log::debug!("player hit, {} lives left", state.player.lives);
}
