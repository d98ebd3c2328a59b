//! Platform abstraction layer
//!
//! The seams between the game and the outside world:
//! - Input events
//! - Drawing
//! - Audio cues
//! - Tick pacing
//!
//! `terminal` implements them on top of crossterm; tests use scripted fakes.

pub mod clock;
pub mod terminal;

use std::io;
use std::time::Duration;

use crate::audio::SoundEffect;
use crate::renderer::DrawCommand;

pub use clock::FixedRateClock;
pub use terminal::TerminalPlatform;

/// Player intents, already classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Jump,
    Restart,
}

/// Non-blocking source of input events
pub trait InputSource {
    /// Drain everything that arrived since the last poll
    fn poll(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Something that can show a frame of draw commands
pub trait Renderer {
    fn present(&mut self, commands: &[DrawCommand]) -> io::Result<()>;
}

/// Fire-and-forget audio
pub trait AudioCue {
    fn play(&mut self, effect: SoundEffect);
    /// Start or stop the looping background track
    fn set_music(&mut self, playing: bool);
}

/// Fixed-rate tick pacing
pub trait Clock {
    /// Block until the next tick is due; returns the time since the previous
    /// tick
    fn wait_for_next_tick(&mut self) -> Duration;
}
