//! Backend boundary.
//!
//! The context depends only on this capability set; any implementation of
//! [`Backend`] can stand behind it without changing the public contracts.
//! The shipped production implementation is [`window::WindowBackend`]
//! (winit + wgpu); tests substitute an in-memory recorder.

use std::path::Path;

use crate::config::Config;
use crate::coords::{Vec2, Viewport};
use crate::draw::{ShapeCmd, SpriteCmd, TextCmd};
use crate::error::Result;
use crate::input::{InputEvent, Key};
use crate::paint::Color;

pub mod window;

mod host;

/// Capabilities the context requires from a rendering/windowing backend.
///
/// `Font` and `Texture` stay opaque to the core; the context's caches own
/// them and callers only ever see handles.
pub trait Backend {
    type Font;
    type Texture;

    /// Materializes the surface from a configuration snapshot.
    ///
    /// Returns the surface's logical viewport, or a surface-creation error if
    /// the requested mode cannot be made.
    fn create_surface(&mut self, config: &Config) -> Result<Viewport>;

    /// Closes the surface. No-op when none exists.
    fn close_surface(&mut self);

    fn is_open(&self) -> bool;

    /// Drains pending window/input events without blocking beyond the
    /// platform's own event pump.
    fn poll_input(&mut self) -> Vec<InputEvent>;

    /// Point-in-time key poll, independent of the event drain.
    fn key_state(&self, key: Key) -> bool;

    /// Starts a frame by clearing to `color`.
    fn clear(&mut self, color: Color);

    fn draw_shape(&mut self, shape: &ShapeCmd);

    fn draw_text(&mut self, cmd: &TextCmd, font: &Self::Font);

    fn draw_sprite(&mut self, cmd: &SpriteCmd, texture: &Self::Texture);

    /// Presents the frame. May block on vertical sync; with a frame-rate cap
    /// configured it sleeps off the remainder of the frame budget. Both are
    /// deliberate, caller-visible throttles.
    fn present(&mut self);

    fn load_font(&mut self, path: &Path) -> Result<Self::Font>;

    fn load_texture(&mut self, path: &Path) -> Result<Self::Texture>;

    /// Measures the bounds `text` would occupy, without drawing.
    fn measure_text(&self, text: &str, font: &Self::Font, size_px: f32) -> Vec2;

    /// Current surface size in logical pixels.
    fn viewport(&self) -> Viewport;
}
