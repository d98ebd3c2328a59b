//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod avatar;
pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use avatar::Avatar;
pub use collision::{Playfield, Rect, is_game_over};
pub use field::{Obstacle, ObstacleField};
pub use state::{AvatarPose, GameEvent, RenderSnapshot, RoundPhase, RoundState};
pub use tick::{TickInput, TickOutcome, tick};
