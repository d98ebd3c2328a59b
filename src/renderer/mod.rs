//! Backend-agnostic rendering
//!
//! The simulation hands out a `RenderSnapshot`; this module turns snapshots
//! and menu screens into a flat list of `DrawCommand`s in playfield
//! coordinates. A platform backend rasterizes them.

pub mod raster;
pub mod scene;
pub mod shapes;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

pub use raster::{Canvas, TextLabel};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const BLACK: Color = Color(0, 0, 0);
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole playfield
    Clear(Color),
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// Filled ellipse rotated about its center (degrees, positive is
    /// counter-clockwise on screen)
    Ellipse {
        center: Vec2,
        radii: Vec2,
        rotation_deg: f32,
        color: Color,
    },
    /// Circle outline
    Ring {
        center: Vec2,
        radius: f32,
        thickness: f32,
        color: Color,
    },
    Triangle {
        points: [Vec2; 3],
        color: Color,
    },
    /// Text centered on `center`; `size` is the nominal font height
    Text {
        text: String,
        center: Vec2,
        size: f32,
        color: Color,
    },
}

/// Colors for one visual theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub sky: Color,
    pub pipe: Color,
    pub text: Color,
    pub body: Color,
    pub head: Color,
    pub eye: Color,
    pub pupil: Color,
    pub beak: Color,
}

impl Palette {
    pub fn standard() -> Self {
        Self {
            sky: Color(135, 206, 250),
            pipe: Color(34, 139, 34),
            text: Color::WHITE,
            body: Color(255, 255, 0),
            head: Color(255, 0, 0),
            eye: Color::WHITE,
            pupil: Color::BLACK,
            beak: Color(255, 165, 0),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            sky: Color::BLACK,
            pipe: Color::WHITE,
            text: Color(255, 255, 0),
            body: Color(255, 255, 0),
            head: Color(255, 0, 255),
            eye: Color::WHITE,
            pupil: Color::BLACK,
            beak: Color(0, 255, 255),
        }
    }

    pub fn for_settings(high_contrast: bool) -> Self {
        if high_contrast {
            Self::high_contrast()
        } else {
            Self::standard()
        }
    }
}
