//! Game-step functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState` together with the events raised while producing it.  Side
//! effects are limited to the injected RNG.

use rand::Rng;

use crate::collision;
use crate::config::SimConfig;
use crate::enemy::EnemyEvent;
use crate::entities::{
    Command, Controls, EnemyType, GameEvent, GameState, GameStatus, PowerUpKind,
};
use crate::geometry::Rect;
use crate::player::{move_player, new_player, tick_invulnerability};
use crate::pool::ProjectilePool;
use crate::progression;
use crate::spawner::spawn_wave;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh level-1 game and spawn its opening wave.
pub fn init_state(config: SimConfig, rng: &mut impl Rng) -> GameState {
    let mut state = GameState {
        player: new_player(&config),
        controls: Controls::default(),
        enemies: Vec::new(),
        munitions: ProjectilePool::new(config.munition_pool, config.munition_size),
        enemy_bullets: ProjectilePool::new(config.enemy_bullet_pool, config.enemy_bullet_size),
        boss_star: None,
        life_star: None,
        score: 0,
        level: 1,
        wave_number: 0,
        enemies_remaining_in_wave: 0,
        bosses_remaining: 0,
        enemies_killed_this_level: 0,
        total_kills: 0,
        next_life_threshold: config.life_threshold_step,
        status: GameStatus::Playing,
        frame: 0,
        next_id: 1,
        config,
    };

    let opening = state.config.initial_wave_base + state.level * 2;
    spawn_wave(&mut state, opening, rng);
    state
}

// ── Input-driven state transitions ───────────────────────────────────────────

/// Apply one input command.  Commands are ignored once the game is over.
pub fn apply_command(state: &GameState, command: Command) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();
    if next.status == GameStatus::GameOver {
        return (next, events);
    }

    match command {
        Command::MoveLeft(held) => next.controls.left = held,
        Command::MoveRight(held) => next.controls.right = held,
        Command::MoveUp(held) => next.controls.up = held,
        Command::MoveDown(held) => next.controls.down = held,
        Command::Fire => {
            if fire_munition(&mut next) {
                events.push(GameEvent::PlayShoot);
            }
        }
    }
    (next, events)
}

/// Launch a munition from the nose of the ship.  A full pool drops the shot.
fn fire_munition(state: &mut GameState) -> bool {
    let (w, h) = state.munitions.size();
    let player = state.player.rect;
    let x = player.x + player.w / 2 - w / 2;
    let y = player.y - h;
    state.munitions.fire(x, y)
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  All randomness comes through `rng`
/// so callers control determinism (tests use a seeded RNG).
///
/// Order: player movement and invulnerability countdown, munitions move and
/// resolve against enemies, enemies move and fire, enemy bullets move, then
/// bullets vs player, enemies vs player, power-ups vs player and finally the
/// progression rules.  A game over anywhere in the chain ends the tick.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();
    if next.status == GameStatus::GameOver {
        return (next, events);
    }
    next.frame += 1;

    let controls = next.controls;
    move_player(&mut next.player, &controls, &next.config);
    tick_invulnerability(&mut next.player, &next.config);

    advance_munitions(&mut next);
    collision::munitions_vs_enemies(&mut next, &mut events);
    retire_spent_munitions(&mut next);

    advance_enemies(&mut next);
    advance_enemy_bullets(&mut next);

    collision::bullets_vs_player(&mut next, &mut events);
    if next.status == GameStatus::GameOver {
        return (next, events);
    }
    collision::enemies_vs_player(&mut next, &mut events, rng);
    if next.status == GameStatus::GameOver {
        return (next, events);
    }
    collision::powerups_vs_player(&mut next, rng);

    progression::evaluate(&mut next, rng);
    (next, events)
}

fn advance_munitions(state: &mut GameState) {
    let speed = state.config.munition_speed;
    for munition in state.munitions.slots_mut().iter_mut().filter(|m| m.active) {
        munition.rect.y -= speed;
    }
}

fn retire_spent_munitions(state: &mut GameState) {
    for munition in state.munitions.slots_mut() {
        if munition.active && munition.rect.bottom() < 0 {
            munition.deactivate();
        }
    }
}

/// Move every enemy, honour fire requests, and drop regular enemies that
/// left the bottom of the field.  Bosses never leave: they wrap to the top.
fn advance_enemies(state: &mut GameState) {
    let player = state.player.rect.position();
    let level = state.level;

    let mut shooters = Vec::new();
    for enemy in &mut state.enemies {
        if let Some(EnemyEvent::Fire { .. }) = enemy.update(player, level) {
            shooters.push(enemy.rect);
        }
    }
    for rect in shooters {
        fire_enemy_bullet(state, rect);
    }

    let limit = state.config.field_height + state.config.exit_margin;
    let before = state.enemies.len();
    state
        .enemies
        .retain(|e| e.kind == EnemyType::Boss || e.rect.y <= limit);
    let exited = (before - state.enemies.len()) as u32;
    state.enemies_remaining_in_wave = state.enemies_remaining_in_wave.saturating_sub(exited);

    for boss in state.enemies.iter_mut().filter(|e| e.rect.y > limit) {
        boss.rect.y = -boss.rect.h;
    }
}

fn fire_enemy_bullet(state: &mut GameState, from: Rect) {
    let (w, _) = state.enemy_bullets.size();
    let x = from.x + from.w / 2 - w / 2;
    if !state.enemy_bullets.fire(x, from.bottom()) {
        log::debug!("enemy bullet pool exhausted, shot dropped");
    }
}

fn advance_enemy_bullets(state: &mut GameState) {
    let speed = state.config.enemy_bullet_base_speed + state.level as i32;
    let floor = state.config.field_height;
    for bullet in state.enemy_bullets.slots_mut().iter_mut().filter(|b| b.active) {
        bullet.rect.y += speed;
        if bullet.rect.y > floor {
            bullet.deactivate();
        }
    }
}

// ── Presentation queries ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Enemy(EnemyType),
    Munition,
    EnemyBullet,
    PowerUp(PowerUpKind),
}

/// Position and visibility of one sprite-bearing entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub wave: u32,
}

/// Every sprite-bearing entity, including parked projectiles (invisible).
pub fn sprites(state: &GameState) -> Vec<Sprite> {
    let mut out = Vec::with_capacity(
        1 + state.enemies.len() + state.munitions.capacity() + state.enemy_bullets.capacity() + 2,
    );
    out.push(Sprite {
        kind: SpriteKind::Player,
        rect: state.player.rect,
        visible: state.player.visible && state.status == GameStatus::Playing,
    });
    out.extend(state.enemies.iter().map(|e| Sprite {
        kind: SpriteKind::Enemy(e.kind),
        rect: e.rect,
        visible: true,
    }));
    out.extend(state.munitions.slots().iter().map(|m| Sprite {
        kind: SpriteKind::Munition,
        rect: m.rect,
        visible: m.active,
    }));
    out.extend(state.enemy_bullets.slots().iter().map(|b| Sprite {
        kind: SpriteKind::EnemyBullet,
        rect: b.rect,
        visible: b.active,
    }));
    out.extend(
        state
            .boss_star
            .iter()
            .chain(state.life_star.iter())
            .map(|p| Sprite {
                kind: SpriteKind::PowerUp(p.kind),
                rect: p.rect,
                visible: true,
            }),
    );
    out
}

pub fn hud(state: &GameState) -> Hud {
    Hud {
        score: state.score,
        level: state.level,
        lives: state.player.lives,
        wave: state.wave_number,
    }
}
