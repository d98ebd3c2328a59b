//! Round state and the snapshot handed to the presentation layer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::collision::{Playfield, Rect};
use super::field::ObstacleField;
use crate::consts::POINTS_PER_OBSTACLE;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Avatar is flying
    Running,
    /// Avatar hit something; terminal
    Ended,
}

/// Things that happened during a tick, drained by the shell for audio/logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Jump impulse applied
    Jumped,
    /// Obstacles cleared this tick
    Scored { obstacles: u32 },
    /// Round ended
    Crashed,
}

/// Avatar pose for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvatarPose {
    /// Sprite center (rotation pivot)
    pub center: Vec2,
    /// Unrotated sprite size
    pub size: Vec2,
    /// Degrees, positive is nose-up
    pub rotation_deg: f32,
    /// Flap frame index
    pub frame: u8,
}

/// Read-only per-tick view of the round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub avatar: AvatarPose,
    pub obstacles: Vec<Rect>,
    /// Score truncated to whole points
    pub score: u32,
    pub tick: u64,
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Seed the obstacle layout was drawn from
    pub seed: u64,
    pub phase: RoundPhase,
    pub avatar: Avatar,
    pub field: ObstacleField,
    /// Obstacles cleared; each is worth half a point
    pub passed_obstacles: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events recorded since the last drain
    pub events: Vec<GameEvent>,
}

impl RoundState {
    /// Start a round on the default playfield
    pub fn new(seed: u64) -> Self {
        Self::with_playfield(Playfield::default(), seed)
    }

    pub fn with_playfield(playfield: Playfield, seed: u64) -> Self {
        Self {
            seed,
            phase: RoundPhase::Running,
            avatar: Avatar::new(),
            field: ObstacleField::new(playfield, seed),
            passed_obstacles: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Exact score in half-point steps
    pub fn score(&self) -> f32 {
        self.passed_obstacles as f32 * POINTS_PER_OBSTACLE
    }

    /// Score as displayed: truncated to whole points
    pub fn display_score(&self) -> u32 {
        self.score() as u32
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    /// Take all events recorded so far
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            avatar: AvatarPose {
                center: self.avatar.center(),
                size: Avatar::sprite_size(),
                rotation_deg: self.avatar.rotation_deg,
                frame: self.avatar.frame,
            },
            obstacles: self.field.rects(),
            score: self.display_score(),
            tick: self.time_ticks,
        }
    }
}
