//! Skyflap - a flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `renderer`: Scene composition into backend-agnostic draw commands
//! - `platform`: Input/render/audio/clock seams and the terminal backend
//! - `shell`: Menu, game-over and restart flow around the simulation

pub mod audio;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod shell;
pub mod sim;

pub use error::ShellError;
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
///
/// Physics values are per tick, not per second. The simulation only runs in
/// real time at `TICK_RATE`.
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Duration of one tick fed to the spawn cadence (90 ticks = 1500 ms)
    pub const SIM_DT: Duration = Duration::from_micros(16_667);

    /// Playfield dimensions
    pub const WIDTH: f32 = 400.0;
    pub const HEIGHT: f32 = 600.0;

    /// Downward acceleration (px/tick²)
    pub const GRAVITY: f32 = 0.4;
    /// Velocity set by a jump (px/tick, negative is up)
    pub const JUMP_STRENGTH: f32 = -8.0;

    /// Avatar sprite box and spawn center
    pub const AVATAR_WIDTH: f32 = 40.0;
    pub const AVATAR_HEIGHT: f32 = 30.0;
    pub const AVATAR_SPAWN_X: f32 = 100.0;
    pub const AVATAR_SPAWN_Y: f32 = HEIGHT / 2.0;
    /// Rotation limit in degrees
    pub const MAX_TILT_DEG: f32 = 30.0;
    /// Degrees of tilt per px/tick of velocity
    pub const TILT_PER_VELOCITY: f32 = 3.0;
    /// Flap animation frames
    pub const FLAP_FRAMES: u8 = 3;
    /// Fastest flap interval in ticks
    pub const MIN_FLAP_TICKS: i32 = 4;
    /// Slowest flap interval in ticks (at rest)
    pub const BASE_FLAP_TICKS: f32 = 10.0;

    /// Obstacles
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_SPEED: f32 = 4.0;
    pub const PIPE_FREQUENCY: Duration = Duration::from_millis(1500);
    /// Gap center keeps this distance from both playfield edges
    pub const GAP_CENTER_MARGIN: i32 = 150;

    /// Score awarded per obstacle cleared (a pair awards 1)
    pub const POINTS_PER_OBSTACLE: f32 = 0.5;
}
