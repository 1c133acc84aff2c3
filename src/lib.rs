//! spacewar: deterministic simulation core for a 2D arcade shooter.
//!
//! - `compute`: the step functions (`init_state`, `apply_command`, `tick`)
//!   and presentation queries
//! - `enemy`: per-type enemy movement model
//! - `spawner`, `collision`, `progression`, `player`: the subsystems a tick runs
//! - `entities`, `pool`, `geometry`, `config`: data types
//!
//! Rendering, audio and key handling are left to the caller; the binary in
//! this crate provides a terminal front end.

pub mod collision;
pub mod compute;
pub mod config;
pub mod enemy;
pub mod entities;
pub mod geometry;
pub mod player;
pub mod pool;
pub mod progression;
pub mod spawner;

pub use compute::{apply_command, hud, init_state, sprites, tick, Hud, Sprite, SpriteKind};
pub use config::SimConfig;
pub use entities::{Command, EnemyType, GameEvent, GameState, GameStatus};
