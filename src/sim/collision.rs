//! Collision detection for axis-aligned boxes
//!
//! Everything in the playfield is judged by its bounding rectangle. There is
//! no swept test: overlap is checked on post-move positions once per tick, so
//! a fast pair of bodies may already overlap by a full tick of travel when
//! the hit is reported.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::Obstacle;
use crate::consts::{HEIGHT, WIDTH};

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test: rectangles that only share an edge do not collide
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Logical playfield the simulation runs in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

/// Decide whether the round is over
///
/// True when the avatar overlaps any obstacle, pokes above the top edge, or
/// drops below the bottom edge.
pub fn is_game_over(avatar: &Rect, obstacles: &[Obstacle], playfield: &Playfield) -> bool {
    if avatar.top() < 0.0 || avatar.bottom() > playfield.height {
        return true;
    }
    obstacles.iter().any(|o| avatar.intersects(&o.rect))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(x: f32, y: f32, h: f32) -> Obstacle {
        Obstacle {
            rect: Rect::new(x, y, 60.0, h),
            passed: false,
        }
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        let c = Rect::new(9.5, 5.0, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_top_edge_ends_round_without_obstacles() {
        let avatar = Rect::new(80.0, -0.5, 40.0, 30.0);
        assert!(is_game_over(&avatar, &[], &Playfield::default()));
    }

    #[test]
    fn test_bottom_edge_ends_round() {
        let field = Playfield::default();
        let resting = Rect::new(80.0, field.height - 30.0, 40.0, 30.0);
        assert!(!is_game_over(&resting, &[], &field));

        let sunk = Rect::new(80.0, field.height - 29.0, 40.0, 30.0);
        assert!(is_game_over(&sunk, &[], &field));
    }

    #[test]
    fn test_obstacle_overlap_ends_round() {
        let avatar = Rect::new(80.0, 285.0, 40.0, 30.0);
        let field = Playfield::default();

        // Gap between 200 and 400, avatar sits inside it
        let pipes = [obstacle(90.0, 0.0, 200.0), obstacle(90.0, 400.0, 200.0)];
        assert!(!is_game_over(&avatar, &pipes, &field));

        // Gap shifted up so the bottom pipe covers the avatar
        let pipes = [obstacle(90.0, 0.0, 100.0), obstacle(90.0, 300.0, 300.0)];
        assert!(is_game_over(&avatar, &pipes, &field));
    }
}
