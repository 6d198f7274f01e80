//! Game entity types: pure data plus small geometry helpers, no logic.

use crate::constants::{
    BLAST_SIZE, BLAST_SPEED, ENEMY_HEIGHT, ENEMY_SPEED, ENEMY_WIDTH, HERO_HEIGHT, HERO_WIDTH,
};

/// Opaque handle naming the sprite an entity is drawn with. Resolved to a
/// texture only inside the display layer, so the simulation never touches
/// the render backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKey {
    Hero,
    Enemy,
    Blast,
}

// ── Hero ──────────────────────────────────────────────────────────────────────

/// The player craft. `x`/`y` are its center point; created once at startup
/// and never destroyed.
#[derive(Clone, Debug)]
pub struct Hero {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// True while the pointer is depressed over the craft. Set by the input
    /// wiring, read by the core for positioning.
    pub dragging: bool,
    pub sprite: SpriteKey,
}

impl Hero {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: HERO_WIDTH,
            height: HERO_HEIGHT,
            dragging: false,
            sprite: SpriteKey::Hero,
        }
    }

    /// Whether a scene point falls inside the craft's box.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        (px - self.x).abs() <= self.width / 2.0 && (py - self.y).abs() <= self.height / 2.0
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

/// A craft crossing the scene right to left. `x`/`y` are its top-left corner.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal travel per tick, negative for leftward.
    pub speed: f32,
    pub sprite: SpriteKey,
    /// Cleared when the enemy escapes or is hit; dead enemies are purged at
    /// the end of the tick that killed them.
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed: -ENEMY_SPEED,
            sprite: SpriteKey::Enemy,
            alive: true,
        }
    }
}

// ── Blast ─────────────────────────────────────────────────────────────────────

/// A fired projectile travelling left to right. `x`/`y` are its top-left
/// corner.
#[derive(Clone, Debug)]
pub struct Blast {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub sprite: SpriteKey,
    pub alive: bool,
}

impl Blast {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: BLAST_SIZE,
            height: BLAST_SIZE,
            speed: BLAST_SPEED,
            sprite: SpriteKey::Blast,
            alive: true,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The whole simulation state. One owned instance is threaded by `&mut`
/// through the core functions; nothing lives in globals.
#[derive(Clone, Debug)]
pub struct GameState {
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    pub blasts: Vec<Blast>,
    /// Raw collision counter; the HUD shows a multiple of it.
    pub score: u32,
    /// Horizontal offset into the background strip.
    pub background_shift: f32,
    /// Wall-clock time of the last accepted fire, for the cooldown window.
    pub last_fire_at: Option<f64>,
}
