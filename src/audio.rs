//! Audio cues
//!
//! The terminal has exactly one sound: the bell. Cues that matter to play
//! ring it; the rest are only logged. Background music is tracked as
//! state so a richer backend can pick it up.

use std::io::Write;

use crate::platform::AudioCue;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Avatar flapped
    Jump,
    /// A gated pair was cleared
    Score,
    /// Round ended
    GameOver,
    /// Round ended with a new session best
    HighScore,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Score => "score",
            SoundEffect::GameOver => "game_over",
            SoundEffect::HighScore => "high_score",
        }
    }

    /// Whether this cue is loud enough to ring the bell
    fn rings_bell(&self) -> bool {
        matches!(self, SoundEffect::Jump | SoundEffect::GameOver)
    }
}

/// Audio manager writing bell characters to a terminal stream
pub struct AudioManager<W: Write> {
    out: W,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    music_playing: bool,
}

impl<W: Write> AudioManager<W> {
    pub fn new(out: W, settings: &Settings) -> Self {
        Self {
            out,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            music_playing: false,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioCue for AudioManager<W> {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("Sound cue: {}", effect.name());
        if self.effective_volume() <= 0.0 || !effect.rings_bell() {
            return;
        }
        // Fire and forget; a failed bell is not worth interrupting play
        let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
    }

    fn set_music(&mut self, playing: bool) {
        if self.music_playing != playing {
            log::debug!("Background music {}", if playing { "on" } else { "off" });
        }
        self.music_playing = playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_rings_bell() {
        let mut audio = AudioManager::new(Vec::new(), &Settings::default());
        audio.play(SoundEffect::Jump);
        audio.play(SoundEffect::Score);
        audio.play(SoundEffect::GameOver);
        assert_eq!(audio.into_inner(), b"\x07\x07".to_vec());
    }

    #[test]
    fn test_muted_is_silent() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        let mut audio = AudioManager::new(Vec::new(), &settings);
        audio.play(SoundEffect::Jump);
        assert!(audio.into_inner().is_empty());
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let settings = Settings {
            sfx_volume: 0.0,
            ..Settings::default()
        };
        let mut audio = AudioManager::new(Vec::new(), &settings);
        audio.play(SoundEffect::GameOver);
        audio.set_muted(false);
        assert!(audio.into_inner().is_empty());
    }

    #[test]
    fn test_music_state() {
        let mut audio = AudioManager::new(Vec::new(), &Settings::default());
        assert!(!audio.music_playing());
        audio.set_music(true);
        assert!(audio.music_playing());
        audio.set_music(false);
        assert!(!audio.music_playing());
    }
}
