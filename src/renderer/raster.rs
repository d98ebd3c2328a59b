//! Software rasterizer for draw commands
//!
//! Scales the logical playfield onto a small pixel grid and samples each
//! primitive at pixel centers. Text is not rasterized; it comes back as
//! labels for the backend to print.

use glam::Vec2;

use super::shapes::rotate_offset;
use super::{Color, DrawCommand};
use crate::consts::{HEIGHT, WIDTH};

/// Text positioned in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    /// Center in canvas pixels
    pub x: usize,
    pub y: usize,
    pub color: Color,
    /// Large titles get emphasis (bold) where the backend supports it
    pub emphasis: bool,
}

/// Font size at or above which text is emphasized
const EMPHASIS_SIZE: f32 = 40.0;

/// Pixel buffer the playfield is drawn into
pub struct Canvas {
    w: usize,
    h: usize,
    px: Vec<Color>,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![Color::BLACK; w * h],
        }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, Color::BLACK);
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.px[y * self.w + x]
    }

    /// Logical units per pixel on each axis
    fn scale(&self) -> Vec2 {
        Vec2::new(WIDTH / self.w.max(1) as f32, HEIGHT / self.h.max(1) as f32)
    }

    /// Logical coordinate of a pixel center
    fn sample_point(&self, x: usize, y: usize) -> Vec2 {
        (Vec2::new(x as f32, y as f32) + 0.5) * self.scale()
    }

    /// Visit every pixel whose center lies in the logical box [min, max]
    fn fill_where(&mut self, min: Vec2, max: Vec2, color: Color, inside: impl Fn(Vec2) -> bool) {
        if self.w == 0 || self.h == 0 {
            return;
        }
        let scale = self.scale();
        let x0 = ((min.x / scale.x).floor().max(0.0) as usize).min(self.w);
        let y0 = ((min.y / scale.y).floor().max(0.0) as usize).min(self.h);
        let x1 = ((max.x / scale.x).ceil().max(0.0) as usize).min(self.w);
        let y1 = ((max.y / scale.y).ceil().max(0.0) as usize).min(self.h);

        for y in y0..y1 {
            for x in x0..x1 {
                if inside(self.sample_point(x, y)) {
                    self.px[y * self.w + x] = color;
                }
            }
        }
    }

    /// Draw all commands in order, returning the text labels
    pub fn render(&mut self, commands: &[DrawCommand]) -> Vec<TextLabel> {
        let mut labels = Vec::new();
        for command in commands {
            match command {
                DrawCommand::Clear(color) => self.px.fill(*color),
                DrawCommand::FillRect { rect, color } => {
                    let (min, max) = (rect.pos, rect.pos + rect.size);
                    self.fill_where(min, max, *color, |p| {
                        p.x >= min.x && p.x < max.x && p.y >= min.y && p.y < max.y
                    });
                }
                DrawCommand::Ellipse {
                    center,
                    radii,
                    rotation_deg,
                    color,
                } => {
                    let reach = Vec2::splat(radii.max_element());
                    let inv = -*rotation_deg;
                    self.fill_where(*center - reach, *center + reach, *color, |p| {
                        let local = rotate_offset(p - *center, inv) / *radii;
                        local.length_squared() <= 1.0
                    });
                }
                DrawCommand::Ring {
                    center,
                    radius,
                    thickness,
                    color,
                } => {
                    let inner = radius - thickness;
                    let reach = Vec2::splat(*radius);
                    self.fill_where(*center - reach, *center + reach, *color, |p| {
                        let d = p.distance(*center);
                        d <= *radius && d >= inner
                    });
                }
                DrawCommand::Triangle { points, color } => {
                    let min = points[0].min(points[1]).min(points[2]);
                    let max = points[0].max(points[1]).max(points[2]);
                    self.fill_where(min, max, *color, |p| in_triangle(p, points));
                }
                DrawCommand::Text {
                    text,
                    center,
                    size,
                    color,
                } => {
                    let pixel = *center / self.scale();
                    labels.push(TextLabel {
                        text: text.clone(),
                        x: pixel.x.max(0.0) as usize,
                        y: pixel.y.max(0.0) as usize,
                        color: *color,
                        emphasis: *size >= EMPHASIS_SIZE,
                    });
                }
            }
        }
        labels
    }
}

/// Point-in-triangle by edge signs (either winding)
fn in_triangle(p: Vec2, t: &[Vec2; 3]) -> bool {
    let edge = |a: Vec2, b: Vec2| (b - a).perp_dot(p - a);
    let d0 = edge(t[0], t[1]);
    let d1 = edge(t[1], t[2]);
    let d2 = edge(t[2], t[0]);
    let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;

    // 40x60 canvas: one pixel per 10x10 logical units
    fn canvas() -> Canvas {
        Canvas::new(40, 60)
    }

    #[test]
    fn test_clear_and_rect() {
        let mut c = canvas();
        let sky = Color(1, 2, 3);
        let pipe = Color(9, 9, 9);
        c.render(&[
            DrawCommand::Clear(sky),
            DrawCommand::FillRect {
                rect: Rect::new(100.0, 0.0, 60.0, 200.0),
                color: pipe,
            },
        ]);
        assert_eq!(c.get(0, 0), sky);
        assert_eq!(c.get(10, 0), pipe);
        assert_eq!(c.get(15, 19), pipe);
        assert_eq!(c.get(16, 0), sky);
        assert_eq!(c.get(10, 20), sky);
    }

    #[test]
    fn test_rect_partly_offscreen() {
        let mut c = canvas();
        let pipe = Color(9, 9, 9);
        c.render(&[DrawCommand::FillRect {
            rect: Rect::new(-30.0, 0.0, 60.0, 100.0),
            color: pipe,
        }]);
        assert_eq!(c.get(0, 0), pipe);
        assert_eq!(c.get(2, 0), pipe);
        assert_eq!(c.get(3, 0), Color::BLACK);
    }

    #[test]
    fn test_ellipse_and_ring() {
        let mut c = canvas();
        let fill = Color(200, 0, 0);
        c.render(&[DrawCommand::Ellipse {
            center: Vec2::new(200.0, 300.0),
            radii: Vec2::new(50.0, 20.0),
            rotation_deg: 0.0,
            color: fill,
        }]);
        assert_eq!(c.get(20, 30), fill);
        assert_eq!(c.get(24, 30), fill);
        assert_eq!(c.get(20, 33), Color::BLACK);

        let mut c = canvas();
        c.render(&[DrawCommand::Ring {
            center: Vec2::new(200.0, 300.0),
            radius: 100.0,
            thickness: 20.0,
            color: fill,
        }]);
        assert_eq!(c.get(20, 30), Color::BLACK);
        assert_eq!(c.get(29, 30), fill);
    }

    #[test]
    fn test_triangle_either_winding() {
        let fill = Color(0, 0, 200);
        for points in [
            [Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0), Vec2::new(0.0, 200.0)],
            [Vec2::new(0.0, 0.0), Vec2::new(0.0, 200.0), Vec2::new(200.0, 0.0)],
        ] {
            let mut c = canvas();
            c.render(&[DrawCommand::Triangle { points, color: fill }]);
            assert_eq!(c.get(1, 1), fill);
            assert_eq!(c.get(18, 18), Color::BLACK);
        }
    }

    #[test]
    fn test_text_becomes_label() {
        let mut c = canvas();
        let labels = c.render(&[DrawCommand::Text {
            text: "Game Over".into(),
            center: Vec2::new(200.0, 240.0),
            size: 40.0,
            color: Color::WHITE,
        }]);
        assert_eq!(
            labels,
            vec![TextLabel {
                text: "Game Over".into(),
                x: 20,
                y: 24,
                color: Color::WHITE,
                emphasis: true,
            }]
        );
    }
}
