//! Ephemeral draw descriptors.
//!
//! Each drawing primitive builds one of these from its arguments and submits
//! it to the backend immediately; descriptors carry no identity and are
//! discarded when the call returns. Rects, circles and sprites are anchored
//! by their own center so rotation is visually stable.

use crate::coords::Vec2;
use crate::paint::Color;

/// Shape payloads accepted by `Backend::draw_shape`.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
}

/// Center-anchored rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub center: Vec2,
    pub size: Vec2,
    pub rotation_deg: f32,
    pub color: Color,
}

/// Center-anchored circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub rotation_deg: f32,
    pub color: Color,
}

/// Horizontal text alignment relative to the anchor point.
///
/// The anchor denotes the left edge, horizontal center, or right edge of the
/// measured glyph bounds; vertically the anchor is always the centerline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Text outline parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Outline {
    pub thickness: f32,
    pub color: Color,
}

/// Text payload with alignment already resolved into a top-left origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Top-left of the glyph bounds in logical pixels.
    pub origin: Vec2,
    /// Font size in logical pixels.
    pub size_px: f32,
    pub color: Color,
    pub outline: Option<Outline>,
}

/// Sprite payload; the texture travels separately as a cache reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCmd {
    pub center: Vec2,
    pub scale: f32,
    pub rotation_deg: f32,
}

/// Expresses a line segment as a center-anchored rotated rectangle.
///
/// Returns `None` for a zero-length segment, which the caller treats as a
/// silent no-op instead of normalizing a zero vector.
pub(crate) fn line_to_rect(a: Vec2, b: Vec2, thickness: f32, color: Color) -> Option<RectCmd> {
    let d = b - a;
    let len = d.length();
    if len <= 1e-4 {
        return None;
    }

    Some(RectCmd {
        center: (a + b) * 0.5,
        size: Vec2::new(len, thickness),
        rotation_deg: d.y.atan2(d.x).to_degrees(),
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_line_is_none() {
        let p = Vec2::new(7.0, 3.0);
        assert!(line_to_rect(p, p, 2.0, Color::WHITE).is_none());
    }

    #[test]
    fn horizontal_line_maps_to_flat_rect() {
        let r = line_to_rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0, Color::WHITE)
            .unwrap();
        assert_eq!(r.center, Vec2::new(5.0, 0.0));
        assert_eq!(r.size, Vec2::new(10.0, 2.0));
        assert!(r.rotation_deg.abs() < 1e-5);
    }

    #[test]
    fn diagonal_line_rotation_and_length() {
        let r = line_to_rect(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), 1.0, Color::WHITE)
            .unwrap();
        assert!((r.size.x - 5.0).abs() < 1e-5);
        let expected = 4.0f32.atan2(3.0).to_degrees();
        assert!((r.rotation_deg - expected).abs() < 1e-4);
        assert_eq!(r.center, Vec2::new(1.5, 2.0));
    }
}
