//! All game entity types, as plain data.  Behaviour lives in the component
//! modules (`enemy`, `spawner`, `collision`, `progression`, `player`).

use crate::config::SimConfig;
use crate::geometry::Rect;
use crate::pool::ProjectilePool;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyType {
    Straight,
    Sine,
    Zigzag,
    Homing,
    Patrol,
    Boss,
}

impl EnemyType {
    /// The types the wave spawner draws from.
    pub const REGULAR: [EnemyType; 5] = [
        EnemyType::Straight,
        EnemyType::Sine,
        EnemyType::Zigzag,
        EnemyType::Homing,
        EnemyType::Patrol,
    ];

    /// Shooting types are not destroyed by ramming the player; they cost
    /// points and get pushed back above the field instead.
    pub fn is_shooter(self) -> bool {
        matches!(self, EnemyType::Zigzag | EnemyType::Homing | EnemyType::Boss)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Collecting it starts the boss encounter.
    BossStar,
    /// Collecting it grants one extra life.
    LifeStar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub rect: Rect,
}

/// Side effects the front end is expected to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PlayShoot,
    PlayHit,
    PlayBoom,
    GameOver { final_score: u32 },
}

/// Discrete commands from the input collaborator.  Movement commands carry
/// the held state of the key; `Fire` is edge triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft(bool),
    MoveRight(bool),
    MoveUp(bool),
    MoveDown(bool),
    Fire,
}

/// Movement intents currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub lives: u32,
    pub invulnerable: bool,
    pub invulnerable_ticks: u32,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyType,
    pub rect: Rect,
    pub health: i32,
    pub speed: f32,
    pub age_ticks: u32,
    pub initial_x: i32,
    pub sine_amp: f32,
    pub sine_freq: f32,
    pub zig_dir: i32,
    pub zig_step: u32,
    pub patrol_dir: i32,
    pub patrol_left: i32,
    pub patrol_right: i32,
    /// Set once lethal damage has been reported.
    pub destroyed: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so the step functions can take a
/// reference to the current state and hand back the next one.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: SimConfig,
    pub player: Player,
    pub controls: Controls,
    /// Live enemies, in spawn order.  Iteration order decides hit priority.
    pub enemies: Vec<Enemy>,
    pub munitions: ProjectilePool,
    pub enemy_bullets: ProjectilePool,
    pub boss_star: Option<PowerUp>,
    pub life_star: Option<PowerUp>,
    pub score: u32,
    pub level: u32,
    pub wave_number: u32,
    pub enemies_remaining_in_wave: u32,
    pub bosses_remaining: u32,
    pub enemies_killed_this_level: u32,
    pub total_kills: u32,
    pub next_life_threshold: u32,
    pub status: GameStatus,
    pub frame: u64,
    pub next_id: u32,
}

impl GameState {
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn live_bosses(&self) -> usize {
        self.enemies
            .iter()
            .filter(|e| e.kind == EnemyType::Boss)
            .count()
    }
}
