//! Rendering layer: all draw calls live here.
//!
//! Each function receives an immutable view of the game state and the
//! texture bundle. No game logic is performed; this module only translates
//! state into blits and text.

use macroquad::prelude::*;

use crate::assets::Textures;
use crate::constants::{
    BACKGROUND_SRC_HEIGHT, BACKGROUND_SRC_WIDTH, HUD_FONT_SIZE, HUD_HINT_X, HUD_SCORE_X,
    HUD_TEXT_Y, SCENE_HEIGHT, SCENE_WIDTH, SCORE_DISPLAY_MULTIPLIER,
};
use crate::entities::{Blast, Enemy, GameState, Hero};

const HUD_COLOR: Color = WHITE;
const FIRE_HINT: &str = "Press SPACE to fire";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: background strip, blasts, enemies, then the
/// hero so it sits on top, then the HUD. Empty collections draw nothing.
pub fn render(state: &GameState, textures: &Textures) {
    clear_background(BLACK);

    draw_background(state.background_shift, textures);

    for blast in &state.blasts {
        draw_blast(blast, textures);
    }
    for enemy in &state.enemies {
        draw_enemy(enemy, textures);
    }

    draw_hero(&state.hero, textures);
    draw_hud(state.score);
}

// ── Background ────────────────────────────────────────────────────────────────

/// Blit a scene-sized window of the wide background image, offset by the
/// scroll value. The source is taller than the scene and is squashed to fit.
fn draw_background(shift: f32, textures: &Textures) {
    draw_texture_ex(
        &textures.background,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(SCENE_WIDTH, SCENE_HEIGHT)),
            source: Some(Rect::new(shift, 0.0, BACKGROUND_SRC_WIDTH, BACKGROUND_SRC_HEIGHT)),
            ..Default::default()
        },
    );
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_blast(blast: &Blast, textures: &Textures) {
    draw_texture_ex(
        textures.sprite(blast.sprite),
        blast.x,
        blast.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(blast.width, blast.height)),
            ..Default::default()
        },
    );
}

fn draw_enemy(enemy: &Enemy, textures: &Textures) {
    draw_texture_ex(
        textures.sprite(enemy.sprite),
        enemy.x,
        enemy.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(enemy.width, enemy.height)),
            ..Default::default()
        },
    );
}

/// The hero's position is its center, so the blit is offset by half a sprite.
fn draw_hero(hero: &Hero, textures: &Textures) {
    draw_texture_ex(
        textures.sprite(hero.sprite),
        hero.x - hero.width / 2.0,
        hero.y - hero.height / 2.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(hero.width, hero.height)),
            ..Default::default()
        },
    );
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud(score: u32) {
    let score_text = format!("Score: {}", score * SCORE_DISPLAY_MULTIPLIER);
    draw_text(&score_text, HUD_SCORE_X, HUD_TEXT_Y, HUD_FONT_SIZE, HUD_COLOR);
    draw_text(FIRE_HINT, HUD_HINT_X, HUD_TEXT_Y, HUD_FONT_SIZE, HUD_COLOR);
}
