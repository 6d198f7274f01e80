//! Timer-driven enemy generator.

use rand::Rng;

use crate::constants::{
    ENEMY_HEIGHT, SCENE_HEIGHT, SCENE_WIDTH, SPAWN_INTERVAL_MAX_SECS, SPAWN_INTERVAL_MIN_SECS,
};
use crate::entities::Enemy;

/// Produces enemies on a randomized deadline. Every arming draws a fresh
/// interval, so spawn times form a renewal process rather than a fixed-rate
/// tick. Holding a single `Option` guarantees at most one pending deadline.
#[derive(Clone, Debug, Default)]
pub struct Spawner {
    next_at: Option<f64>,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the spawner: the next enemy appears between `SPAWN_INTERVAL_MIN_SECS`
    /// and `SPAWN_INTERVAL_MAX_SECS` from `now`.
    pub fn schedule(&mut self, now: f64, rng: &mut impl Rng) {
        self.next_at = Some(now + rng.gen_range(SPAWN_INTERVAL_MIN_SECS..SPAWN_INTERVAL_MAX_SECS));
    }

    /// Disarm. No spawn fires until the next `schedule`.
    pub fn cancel(&mut self) {
        self.next_at = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.next_at.is_some()
    }

    /// If the deadline has passed, create exactly one enemy just off the
    /// right edge at a random row and re-arm with a fresh interval.
    pub fn poll(&mut self, now: f64, rng: &mut impl Rng) -> Option<Enemy> {
        let due = self.next_at?;
        if now < due {
            return None;
        }
        // Whole-pixel row in [0, scene height - enemy height); the range is
        // derived from the live dimensions, so it cannot go out of bounds.
        let y = rng.gen_range(0..(SCENE_HEIGHT - ENEMY_HEIGHT) as i32) as f32;
        self.schedule(now, rng);
        Some(Enemy::new(SCENE_WIDTH, y))
    }
}
