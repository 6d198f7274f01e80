//! Audio channels: one-shot cues and self-restarting loops.
//!
//! One-shot cues always restart from time zero, and overlapping cues are
//! allowed to stack. Looping channels cannot ask the backend where playback
//! is, so each one carries its configured duration and restarts itself
//! shortly before the end from a per-frame clock check.

use macroquad::audio::{play_sound, set_sound_volume, stop_sound, PlaySoundParams, Sound};

use crate::assets::Sounds;
use crate::compute::Cue;
use crate::constants::{
    AMBIENCE_LOOP_SECS, AMBIENCE_VOLUME, CUE_VOLUME, FLYBY_LOOP_SECS, FLYBY_VOLUME,
    LOOP_RESTART_BUFFER_SECS,
};

// ── Loop bookkeeping ──────────────────────────────────────────────────────────

/// Restart arithmetic for a looping channel, kept free of sound handles so
/// it can be exercised from tests.
#[derive(Clone, Copy, Debug)]
pub struct LoopClock {
    pub duration: f64,
    pub started_at: f64,
}

impl LoopClock {
    pub fn new(duration: f64, now: f64) -> Self {
        Self {
            duration,
            started_at: now,
        }
    }

    /// Whether playback has reached the restart point, a fixed buffer before
    /// the configured end of the track.
    pub fn restart_due(&self, now: f64) -> bool {
        now >= self.started_at + self.duration - LOOP_RESTART_BUFFER_SECS
    }
}

// ── Channels ──────────────────────────────────────────────────────────────────

/// A continuously playing track that re-triggers itself near its end.
struct LoopChannel {
    sound: Sound,
    volume: f32,
    muted: bool,
    clock: LoopClock,
}

impl LoopChannel {
    fn start(sound: Sound, volume: f32, duration: f64, now: f64) -> Self {
        let channel = Self {
            sound,
            volume,
            muted: false,
            clock: LoopClock::new(duration, now),
        };
        channel.restart();
        channel
    }

    fn restart(&self) {
        stop_sound(&self.sound);
        play_sound(
            &self.sound,
            PlaySoundParams {
                looped: false,
                volume: self.effective_volume(),
            },
        );
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        set_sound_volume(&self.sound, self.effective_volume());
    }

    fn service(&mut self, now: f64) {
        if self.clock.restart_due(now) {
            self.clock.started_at = now;
            self.restart();
        }
    }
}

// ── Bank ──────────────────────────────────────────────────────────────────────

/// Every audio channel the game owns, with one mute switch covering all of
/// them.
pub struct AudioBank {
    fire: Sound,
    explode: Sound,
    escape: Sound,
    flyby: LoopChannel,
    ambience: LoopChannel,
    muted: bool,
}

impl AudioBank {
    /// Take ownership of the loaded sounds and start both looping tracks.
    pub fn start(sounds: Sounds, now: f64) -> Self {
        Self {
            fire: sounds.fire,
            explode: sounds.explode,
            escape: sounds.escape,
            flyby: LoopChannel::start(sounds.flyby, FLYBY_VOLUME, FLYBY_LOOP_SECS, now),
            ambience: LoopChannel::start(sounds.ambience, AMBIENCE_VOLUME, AMBIENCE_LOOP_SECS, now),
            muted: false,
        }
    }

    pub fn play_fire(&self) {
        self.play_one_shot(&self.fire);
    }

    /// Play the sound for a simulation cue.
    pub fn play(&self, cue: Cue) {
        match cue {
            Cue::Explosion => self.play_one_shot(&self.explode),
            Cue::EnemyEscaped => self.play_one_shot(&self.escape),
        }
    }

    /// Mute or unmute every channel at once.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.flyby.set_muted(muted);
        self.ambience.set_muted(muted);
    }

    /// Drive the looping channels' restart clocks; call once per frame.
    pub fn service_loops(&mut self, now: f64) {
        self.flyby.service(now);
        self.ambience.service(now);
    }

    fn play_one_shot(&self, sound: &Sound) {
        stop_sound(sound);
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: if self.muted { 0.0 } else { CUE_VOLUME },
            },
        );
    }
}
