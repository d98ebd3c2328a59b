//! The player-controlled avatar

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// The falling, flapping avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left of the unrotated sprite box (x never changes)
    pub pos: Vec2,
    /// Vertical velocity in px/tick (positive is down)
    pub velocity: f32,
    /// Render tilt in degrees, positive is nose-up
    pub rotation_deg: f32,
    /// Current flap frame (0..FLAP_FRAMES)
    pub frame: u8,
    /// Ticks since the last frame change
    flap_timer: i32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

impl Avatar {
    /// Spawn at the fixed start point with zero velocity
    pub fn new() -> Self {
        let size = Self::sprite_size();
        let center = Vec2::new(AVATAR_SPAWN_X, AVATAR_SPAWN_Y);
        Self {
            pos: center - size / 2.0,
            velocity: 0.0,
            rotation_deg: 0.0,
            frame: 0,
            flap_timer: 0,
        }
    }

    #[inline]
    pub fn sprite_size() -> Vec2 {
        Vec2::new(AVATAR_WIDTH, AVATAR_HEIGHT)
    }

    /// Apply one tick of gravity: velocity first, then position
    ///
    /// Fall speed is deliberately unbounded.
    pub fn integrate(&mut self) {
        self.velocity += GRAVITY;
        self.pos.y += self.velocity;
    }

    /// Replace the current velocity with the jump impulse
    pub fn jump(&mut self) {
        self.velocity = JUMP_STRENGTH;
    }

    /// Advance the flap cycle and recompute tilt from the current velocity
    ///
    /// Flapping speeds up as |velocity| grows, never faster than one frame
    /// per `MIN_FLAP_TICKS`.
    pub fn animate(&mut self) {
        let flap_ticks = ((BASE_FLAP_TICKS - self.velocity.abs()) as i32).max(MIN_FLAP_TICKS);
        self.flap_timer += 1;
        if self.flap_timer >= flap_ticks {
            self.flap_timer = 0;
            self.frame = (self.frame + 1) % FLAP_FRAMES;
        }

        self.rotation_deg = Self::tilt_for(self.velocity);
    }

    /// Tilt in degrees for a given velocity
    pub fn tilt_for(velocity: f32) -> f32 {
        (-velocity * TILT_PER_VELOCITY).clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
    }

    /// Center of the sprite (rotation pivot)
    pub fn center(&self) -> Vec2 {
        self.pos + Self::sprite_size() / 2.0
    }

    /// Bounding box of the tilted sprite
    ///
    /// A tilted box needs a wider and taller axis-aligned rectangle, so the
    /// hit box grows slightly while diving or climbing.
    pub fn bounds(&self) -> Rect {
        let size = Self::sprite_size();
        let (sin, cos) = self.rotation_deg.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let rotated = Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos);
        Rect::from_center(self.center(), rotated)
    }
}
