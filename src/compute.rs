//! Pure game logic.
//!
//! Every function here works on an injected `GameState` (plus a wall-clock
//! instant where timing matters) and performs no I/O. Audio is requested by
//! returning `Cue`s; the host decides what to do with them. This keeps the
//! whole simulation drivable from tests.

use crate::constants::{
    BACKGROUND_SCROLL_STEP, BACKGROUND_START_X, BACKGROUND_WRAP_X, BLAST_SIZE, FIRE_COOLDOWN_SECS,
    HERO_START_X, HERO_START_Y, SCENE_WIDTH,
};
use crate::entities::{Blast, Enemy, GameState, Hero};

/// A sound the simulation wants played, in the order it was triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// A blast consumed an enemy.
    Explosion,
    /// An enemy left the scene unharmed.
    EnemyEscaped,
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Build the startup state: hero centered, empty collections, zero score.
pub fn new_state() -> GameState {
    GameState {
        hero: Hero::new(HERO_START_X, HERO_START_Y),
        enemies: Vec::new(),
        blasts: Vec::new(),
        score: 0,
        background_shift: BACKGROUND_START_X,
        last_fire_at: None,
    }
}

// ── Fire action ───────────────────────────────────────────────────────────────

/// Handle a fire event at wall-clock `now`. At most one blast is created per
/// cooldown window, measured from the last *accepted* fire; events inside
/// the window are dropped, never queued. Returns whether a blast was created.
pub fn try_fire(state: &mut GameState, now: f64) -> bool {
    if let Some(last) = state.last_fire_at {
        if now - last < FIRE_COOLDOWN_SECS {
            return false;
        }
    }
    state.last_fire_at = Some(now);
    let blast = Blast::new(state.hero.x, state.hero.y - BLAST_SIZE / 2.0);
    state.blasts.push(blast);
    true
}

// ── Collision rule ────────────────────────────────────────────────────────────

/// Axis-aligned overlap test between a blast and an enemy.
///
/// The x test is one-sided: a blast registers a hit from the moment its
/// leading edge passes the enemy's left edge, no matter how far right it has
/// already travelled.
/// TODO: bound it with `blast.x < enemy.x + enemy.width`; that changes which
/// shots connect, so it needs a scoring pass alongside.
pub fn blast_hits_enemy(blast: &Blast, enemy: &Enemy) -> bool {
    blast.x + blast.width > enemy.x
        && blast.y + blast.height > enemy.y
        && blast.y < enemy.y + enemy.height
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by one frame. Fixed order: background scroll,
/// blast advancement, enemy advancement with the escape check, the collision
/// pass over whatever is still alive, then a purge of everything that died.
/// An entity marked dead in an earlier step is invisible to every later one.
pub fn tick(state: &mut GameState) -> Vec<Cue> {
    let mut cues = Vec::new();

    // ── 1. Background scroll ─────────────────────────────────────────────────
    state.background_shift += BACKGROUND_SCROLL_STEP;
    if state.background_shift >= BACKGROUND_WRAP_X {
        state.background_shift = 0.0;
    }

    // ── 2. Advance blasts, retire off the right edge ─────────────────────────
    for blast in &mut state.blasts {
        blast.x += blast.speed;
        if blast.x > SCENE_WIDTH {
            blast.alive = false;
        }
    }

    // ── 3. Advance enemies, retire escapes ───────────────────────────────────
    // The escape check runs on the updated position and before the collision
    // pass, so an enemy escapes or collides in one tick, never both.
    for enemy in &mut state.enemies {
        enemy.x += enemy.speed;
        if enemy.x < -enemy.width {
            enemy.alive = false;
            cues.push(Cue::EnemyEscaped);
        }
    }

    // ── 4. Collision pass ────────────────────────────────────────────────────
    // First live match wins; both participants leave the pass immediately, so
    // each blast and each enemy is consumed at most once per tick.
    for blast in state.blasts.iter_mut().filter(|b| b.alive) {
        for enemy in state.enemies.iter_mut() {
            if enemy.alive && blast_hits_enemy(blast, enemy) {
                blast.alive = false;
                enemy.alive = false;
                state.score += 1;
                cues.push(Cue::Explosion);
                break;
            }
        }
    }

    // ── 5. Purge ─────────────────────────────────────────────────────────────
    // Compaction happens before this function returns, so neither the spawner
    // nor the next tick ever sees a dead element.
    state.blasts.retain(|b| b.alive);
    state.enemies.retain(|e| e.alive);

    cues
}
