//! Font loading and text measurement on top of fontdue.

use fontdue::layout::{CoordinateSystem, GlyphPosition, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// A parsed font plus the identity the glyph atlas keys on.
///
/// `key` is unique per loaded font for the backend's lifetime; the caches
/// never evict, so it can safely participate in atlas cache keys.
pub struct GlyphFont {
    pub(crate) font: fontdue::Font,
    pub(crate) key: usize,
}

/// Lays out `text` at `size_px` and returns positioned glyphs relative to a
/// top-left origin of (0, 0).
pub(crate) fn layout_glyphs(font: &fontdue::Font, text: &str, size_px: f32) -> Vec<GlyphPosition> {
    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(std::slice::from_ref(font), &TextStyle::new(text, size_px, 0));
    layout.glyphs().clone()
}

/// Measures the bounds `text` would occupy at `size_px`.
///
/// Width is the maximum pen position after each glyph (advance extent), which
/// matches the renderer's glyph placement; height is the maximum glyph
/// bottom. Empty text measures `(0, size_px * 1.2)` so vertical centering
/// stays stable.
pub(crate) fn measure(font: &fontdue::Font, text: &str, size_px: f32) -> Vec2 {
    let glyphs = layout_glyphs(font, text, size_px);
    if glyphs.is_empty() {
        return Vec2::new(0.0, size_px * 1.2);
    }

    let w = glyphs
        .iter()
        .map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, size_px);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        })
        .fold(0.0f32, f32::max);
    let h = glyphs
        .iter()
        .map(|g| g.y + g.height as f32)
        .fold(size_px, f32::max);
    Vec2::new(w, h)
}
