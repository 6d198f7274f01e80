//! Every gameplay tunable in one place.

// ── Scene ─────────────────────────────────────────────────────────────────────

pub const SCENE_WIDTH: f32 = 1000.0;
pub const SCENE_HEIGHT: f32 = 600.0;

// ── Hero ──────────────────────────────────────────────────────────────────────

pub const HERO_WIDTH: f32 = 75.0;
pub const HERO_HEIGHT: f32 = 65.0;
pub const HERO_START_X: f32 = 500.0;
pub const HERO_START_Y: f32 = 300.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: f32 = 128.0;
pub const ENEMY_HEIGHT: f32 = 128.0;
/// Leftward travel per tick.
pub const ENEMY_SPEED: f32 = 2.0;

/// A fresh spawn interval is drawn from this range every time the spawner
/// re-arms itself.
pub const SPAWN_INTERVAL_MIN_SECS: f64 = 1.0;
pub const SPAWN_INTERVAL_MAX_SECS: f64 = 5.0;

// ── Blasts ────────────────────────────────────────────────────────────────────

pub const BLAST_SIZE: f32 = 32.0;
/// Rightward travel per tick.
pub const BLAST_SPEED: f32 = 10.0;
/// Fire events inside this window after the last accepted fire are dropped.
pub const FIRE_COOLDOWN_SECS: f64 = 0.5;

// ── Background strip ──────────────────────────────────────────────────────────

pub const BACKGROUND_START_X: f32 = 100.0;
pub const BACKGROUND_SCROLL_STEP: f32 = 4.0;
/// The strip offset wraps to 0 once it reaches this value, which lines the
/// right end of the source image back up with its left end.
pub const BACKGROUND_WRAP_X: f32 = 920.0;
pub const BACKGROUND_SRC_WIDTH: f32 = 1000.0;
pub const BACKGROUND_SRC_HEIGHT: f32 = 1080.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// The on-screen score is the raw counter times this.
pub const SCORE_DISPLAY_MULTIPLIER: u32 = 10;
pub const HUD_FONT_SIZE: f32 = 16.0;
pub const HUD_SCORE_X: f32 = 920.0;
pub const HUD_HINT_X: f32 = 20.0;
pub const HUD_TEXT_Y: f32 = 580.0;

// ── Audio ─────────────────────────────────────────────────────────────────────

/// Volume for the one-shot cues (fire, explosion, escape).
pub const CUE_VOLUME: f32 = 0.75;
pub const FLYBY_VOLUME: f32 = 0.0;
pub const AMBIENCE_VOLUME: f32 = 0.25;

/// Looping channels restart this long before their configured end so the
/// loop seam is never heard.
pub const LOOP_RESTART_BUFFER_SECS: f64 = 0.7;
/// Durations of the looping tracks; must match the shipped audio files.
pub const FLYBY_LOOP_SECS: f64 = 6.0;
pub const AMBIENCE_LOOP_SECS: f64 = 12.0;
