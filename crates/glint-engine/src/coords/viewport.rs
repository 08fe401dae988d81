/// Viewport size in logical pixels.
///
/// The context installs a full-surface viewport at creation time and tracks
/// resize events; draw coordinates are interpreted against it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
