/// Premultiplied RGBA color.
///
/// Invariant: `rgb` components are expected to be multiplied by `a`.
/// Premultiplication gives correct blending with linear filtering and matches
/// the backend's blend configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Creates an opaque color from byte components (`0`–`255`).
    ///
    /// This is the usual constructor for literal palette colors.
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a premultiplied color from straight-alpha byte components.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Creates a premultiplied color from straight-alpha `f32` components in `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_premultiplies() {
        let c = Color::rgba(255, 0, 255, 128);
        let a = 128.0 / 255.0;
        assert!((c.r - a).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
        assert!((c.b - a).abs() < 1e-6);
        assert!((c.a - a).abs() < 1e-6);
    }

    #[test]
    fn from_straight_clamps() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 2.0);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
    }
}
