//! Enemy movement model.
//!
//! Each enemy type follows a closed-form rule per tick, so a run is fully
//! reproducible from the spawn parameters.  Entities never call back into the
//! game: `update` and `damage` return an [`EnemyEvent`] that the tick drains.

use rand::Rng;

use crate::entities::{Enemy, EnemyType};
use crate::geometry::Rect;

/// Requests raised by a single enemy during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyEvent {
    Fire { id: u32 },
    Destroyed { id: u32 },
}

/// Speed scaling shared by every movement rule.
pub fn level_multiplier(level: u32) -> f32 {
    1.0 + level as f32 * 0.08
}

/// Zigzag and Homing enemies fire once per this many ticks of age.
pub fn shooter_fire_period(level: u32) -> u32 {
    1000u32.saturating_sub(level * 40).max(200)
}

/// Bosses fire once per this many ticks of age.
pub fn boss_fire_period(level: u32) -> u32 {
    120u32.saturating_sub(level * 6).max(40)
}

const ZIGZAG_STEP: i32 = 2;
/// Direction flips when the step counter passes this value (every 21 ticks).
const ZIGZAG_SWING: u32 = 20;
const HOMING_DAMPING: f32 = 0.6;
const BOSS_EXTRA_AMPLITUDE: f32 = 40.0;
const DEFAULT_PATROL_SPAN: i32 = 200;

impl Enemy {
    /// Create an enemy at `rect`.  Sine amplitude and frequency are drawn
    /// here for every type; only Sine and Boss use them.
    pub fn new(
        id: u32,
        kind: EnemyType,
        rect: Rect,
        health: i32,
        speed: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let sine_amp = rng.gen_range(10..40) as f32;
        let sine_freq = rng.gen_range(0.03f32..0.15);
        Self {
            id,
            kind,
            rect,
            health,
            speed,
            age_ticks: 0,
            initial_x: rect.x,
            sine_amp,
            sine_freq,
            zig_dir: 1,
            zig_step: 0,
            patrol_dir: 1,
            patrol_left: rect.x,
            patrol_right: rect.x + DEFAULT_PATROL_SPAN,
            destroyed: false,
        }
    }

    /// Set the horizontal range a Patrol enemy sweeps.  A zero right bound
    /// means "left + 200".
    pub fn with_patrol_bounds(mut self, left: i32, right: i32) -> Self {
        self.patrol_left = left;
        self.patrol_right = if right == 0 {
            left + DEFAULT_PATROL_SPAN
        } else {
            right
        };
        self
    }

    pub fn is_alive(&self) -> bool {
        !self.destroyed && self.health > 0
    }

    /// Move to a new spot and re-anchor the sine sweep there.
    pub fn relocate(&mut self, x: i32, y: i32) {
        self.rect.move_to(x, y);
        self.initial_x = x;
    }

    /// Advance one tick.  Returns a fire request when this tick's age hits
    /// the type's firing period.
    pub fn update(&mut self, player: (i32, i32), level: u32) -> Option<EnemyEvent> {
        self.age_ticks += 1;
        let lm = level_multiplier(level);
        let descent = (self.speed * lm).ceil() as i32;
        let mut fire = false;

        match self.kind {
            EnemyType::Straight => {
                self.rect.y += descent;
            }
            EnemyType::Sine => {
                self.rect.y += descent;
                self.rect.x = self.initial_x + self.sine_offset(self.sine_freq, self.sine_amp);
            }
            EnemyType::Zigzag => {
                self.rect.y += descent;
                self.rect.x += ZIGZAG_STEP * self.zig_dir;
                self.zig_step += 1;
                if self.zig_step > ZIGZAG_SWING {
                    self.zig_step = 0;
                    self.zig_dir = -self.zig_dir;
                }
            }
            EnemyType::Homing => {
                let dx = (player.0 - self.rect.x) as f32;
                let dy = (player.1 - self.rect.y) as f32;
                let mag = (dx * dx + dy * dy).sqrt().max(1.0);
                let step = self.speed * lm * HOMING_DAMPING;
                self.rect.x += (dx / mag * step).round() as i32;
                self.rect.y += (dy / mag * step).round() as i32;
            }
            EnemyType::Patrol => {
                self.rect.x += (self.speed * self.patrol_dir as f32 * lm).round() as i32;
                if self.rect.x < self.patrol_left || self.rect.x > self.patrol_right {
                    self.patrol_dir = -self.patrol_dir;
                }
                self.rect.y += (self.speed / 4.0 * lm).ceil() as i32;
            }
            EnemyType::Boss => {
                self.rect.y += ((self.speed / 2.0 * lm).ceil() as i32).max(1);
                self.rect.x = self.initial_x
                    + self.sine_offset(self.sine_freq / 2.0, self.sine_amp + BOSS_EXTRA_AMPLITUDE);
                fire = self.age_ticks % boss_fire_period(level) == 0;
            }
        }

        if matches!(self.kind, EnemyType::Zigzag | EnemyType::Homing) {
            fire = self.age_ticks % shooter_fire_period(level) == 0;
        }

        fire.then_some(EnemyEvent::Fire { id: self.id })
    }

    /// Apply damage.  The first time health drops to zero or below a
    /// `Destroyed` event is returned; any later damage returns `None`.
    pub fn damage(&mut self, amount: i32) -> Option<EnemyEvent> {
        if self.destroyed {
            return None;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.destroyed = true;
            Some(EnemyEvent::Destroyed { id: self.id })
        } else {
            None
        }
    }

    fn sine_offset(&self, freq: f32, amp: f32) -> i32 {
        ((self.age_ticks as f32 * freq).sin() * amp) as i32
    }
}
