//! Startup asset loading.
//!
//! Everything the game draws or plays is resolved here, once, before the
//! loop starts. A single failed load aborts startup; nothing in the core
//! ever sees a half-loaded bundle.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

use crate::entities::SpriteKey;

const HERO_IMAGE: &str = "assets/images/hero.png";
const ENEMY_IMAGE: &str = "assets/images/enemy.png";
const BLAST_IMAGE: &str = "assets/images/fireball.png";
const BACKGROUND_IMAGE: &str = "assets/images/scene.png";

const FIRE_SOUND: &str = "assets/sounds/fire.wav";
const EXPLODE_SOUND: &str = "assets/sounds/explode.wav";
const ESCAPE_SOUND: &str = "assets/sounds/escape.wav";
const FLYBY_SOUND: &str = "assets/sounds/flyby.wav";
const AMBIENCE_SOUND: &str = "assets/sounds/ambience.wav";

/// Drawable handles, opaque to the simulation.
pub struct Textures {
    pub hero: Texture2D,
    pub enemy: Texture2D,
    pub blast: Texture2D,
    pub background: Texture2D,
}

impl Textures {
    /// Resolve an entity's sprite handle to its texture.
    pub fn sprite(&self, key: SpriteKey) -> &Texture2D {
        match key {
            SpriteKey::Hero => &self.hero,
            SpriteKey::Enemy => &self.enemy,
            SpriteKey::Blast => &self.blast,
        }
    }
}

/// Playable handles, consumed by [`crate::audio::AudioBank`].
pub struct Sounds {
    pub fire: Sound,
    pub explode: Sound,
    pub escape: Sound,
    pub flyby: Sound,
    pub ambience: Sound,
}

/// The complete asset bundle, produced once at startup and passed into the
/// loop by value. There are no module-level handles anywhere.
pub struct Assets {
    pub textures: Textures,
    pub sounds: Sounds,
}

impl Assets {
    /// Resolve every texture and sound up front. Any failure propagates to
    /// the caller and is fatal to startup.
    pub async fn load() -> Result<Assets, macroquad::Error> {
        let textures = Textures {
            hero: load_pixel_texture(HERO_IMAGE).await?,
            enemy: load_pixel_texture(ENEMY_IMAGE).await?,
            blast: load_pixel_texture(BLAST_IMAGE).await?,
            background: load_pixel_texture(BACKGROUND_IMAGE).await?,
        };
        let sounds = Sounds {
            fire: load_sound(FIRE_SOUND).await?,
            explode: load_sound(EXPLODE_SOUND).await?,
            escape: load_sound(ESCAPE_SOUND).await?,
            flyby: load_sound(FLYBY_SOUND).await?,
            ambience: load_sound(AMBIENCE_SOUND).await?,
        };
        Ok(Assets { textures, sounds })
    }
}

/// Sprites are pixel art; nearest-neighbour keeps their edges crisp when the
/// blit rectangle is not a 1:1 scale.
async fn load_pixel_texture(path: &str) -> Result<Texture2D, macroquad::Error> {
    let texture = load_texture(path).await?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}
