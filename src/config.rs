//! Tunable simulation parameters.
//!
//! Every number the simulation uses lives here so a front end can override
//! a subset from JSON; anything missing from the input keeps its default.

use serde::{Deserialize, Serialize};

/// Nominal interval between ticks, in milliseconds.
pub const TICK_MILLIS: u64 = 20;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Field ────────────────────────────────────────────────────────────────
    pub field_width: i32,
    pub field_height: i32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_speed: i32,
    pub player_size: i32,
    pub player_start: (i32, i32),
    /// Left edge must stay above this to move left.
    pub player_min_x: i32,
    /// Right edge must stay below this to move right.
    pub player_max_right: i32,
    pub player_min_y: i32,
    pub player_max_y: i32,
    pub respawn_position: (i32, i32),
    pub starting_lives: u32,
    pub invulnerable_ticks: u32,
    pub blink_period: u32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub munition_pool: usize,
    pub munition_speed: i32,
    pub munition_size: (i32, i32),
    pub enemy_bullet_pool: usize,
    /// Enemy bullets fall at `enemy_bullet_base_speed + level` px per tick.
    pub enemy_bullet_base_speed: i32,
    pub enemy_bullet_size: (i32, i32),

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub enemy_size: (i32, i32),
    pub boss_size: (i32, i32),
    pub placement_attempts: u32,
    /// Non-boss enemies whose top passes `field_height + exit_margin` leave the field.
    pub exit_margin: i32,
    pub collision_penalty: u32,

    // ── Progression ──────────────────────────────────────────────────────────
    pub initial_wave_base: u32,
    pub boss_kill_quota: u32,
    pub life_threshold_step: u32,
    pub star_size: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: 600,
            field_height: 480,

            player_speed: 5,
            player_size: 40,
            player_start: (260, 400),
            player_min_x: 10,
            player_max_right: 580,
            player_min_y: 10,
            player_max_y: 400,
            respawn_position: (260, 400),
            starting_lives: 3,
            invulnerable_ticks: 80,
            blink_period: 5,

            munition_pool: 3,
            munition_speed: 20,
            munition_size: (8, 8),
            enemy_bullet_pool: 12,
            enemy_bullet_base_speed: 4,
            enemy_bullet_size: (6, 12),

            enemy_size: (40, 30),
            boss_size: (80, 60),
            placement_attempts: 30,
            exit_margin: 0,
            collision_penalty: 5,

            initial_wave_base: 6,
            boss_kill_quota: 30,
            life_threshold_step: 50,
            star_size: 20,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
