//! Shape generation for the avatar sprite and menu icons

use glam::Vec2;

use super::{Color, DrawCommand, Palette};
use crate::sim::AvatarPose;

/// Vertical body offset per flap frame (wings level, down, up)
const FLAP_OFFSETS: [f32; 3] = [0.0, 3.0, -3.0];

/// Rotate a sprite-local offset by `deg` (counter-clockwise on a y-down screen)
#[inline]
pub fn rotate_offset(offset: Vec2, deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(offset.x * cos + offset.y * sin, -offset.x * sin + offset.y * cos)
}

/// Primitives for the avatar at its current pose
///
/// Sprite layout is relative to the 40x30 box center: body ellipse behind,
/// head circle at the front, eye on the head, beak pointing right.
pub fn avatar(pose: &AvatarPose, palette: &Palette) -> Vec<DrawCommand> {
    let rot = pose.rotation_deg;
    let at = |local: Vec2| pose.center + rotate_offset(local, rot);
    let circle = |local: Vec2, r: f32, color: Color| DrawCommand::Ellipse {
        center: at(local),
        radii: Vec2::splat(r),
        rotation_deg: 0.0,
        color,
    };

    let flap = FLAP_OFFSETS[pose.frame as usize % FLAP_OFFSETS.len()];

    vec![
        DrawCommand::Ellipse {
            center: at(Vec2::new(-5.0, flap)),
            radii: Vec2::new(15.0, 10.0),
            rotation_deg: rot,
            color: palette.body,
        },
        circle(Vec2::new(10.0, 0.0), 6.0, palette.head),
        circle(Vec2::new(12.0, -2.0), 3.0, palette.eye),
        circle(Vec2::new(12.0, -2.0), 1.0, palette.pupil),
        DrawCommand::Triangle {
            points: [
                at(Vec2::new(15.0, 0.0)),
                at(Vec2::new(20.0, -2.0)),
                at(Vec2::new(20.0, 2.0)),
            ],
            color: palette.beak,
        },
    ]
}

/// Restart icon: a ring with a left-pointing arrowhead inside
pub fn restart_icon(center: Vec2, color: Color) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Ring {
            center,
            radius: 30.0,
            thickness: 4.0,
            color,
        },
        DrawCommand::Triangle {
            points: [
                center + Vec2::new(-15.0, 0.0),
                center + Vec2::new(0.0, -15.0),
                center + Vec2::new(0.0, 15.0),
            ],
            color,
        },
    ]
}
