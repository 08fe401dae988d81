//! Production backend: winit window + wgpu renderer.
//!
//! winit's event loop is callback-driven; this backend owns it and advances
//! it with non-blocking pumps from `create_surface` and `poll_input`, keeping
//! the caller in control of the frame loop.

use std::path::Path;
use std::time::Duration;

use winit::event_loop::EventLoop;
use winit::platform::pump_events::EventLoopExtPumpEvents;

use crate::config::Config;
use crate::coords::{Vec2, Viewport};
use crate::draw::{ShapeCmd, SpriteCmd, TextCmd};
use crate::error::{Error, Result};
use crate::input::{InputEvent, Key};
use crate::paint::Color;
use crate::render::SpriteTexture;
use crate::text::{self, GlyphFont};

use super::host::WindowHost;
use super::Backend;

pub struct WindowBackend {
    event_loop: EventLoop<()>,
    host: WindowHost,
}

impl WindowBackend {
    pub fn new() -> Result<Self> {
        let event_loop = EventLoop::new()
            .map_err(|e| Error::surface_creation(format!("event loop unavailable: {e}")))?;
        Ok(Self { event_loop, host: WindowHost::default() })
    }

    /// Runs the platform event pump once without blocking.
    fn pump(&mut self) {
        self.event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.host);
    }
}

impl Backend for WindowBackend {
    type Font = GlyphFont;
    type Texture = SpriteTexture;

    fn create_surface(&mut self, config: &Config) -> Result<Viewport> {
        self.host.pending_config = Some(config.clone());
        self.host.init_error = None;

        // First creation is served by `resumed`, later ones by
        // `about_to_wait`; either way a few pumps may pass before the
        // platform delivers the window.
        for _ in 0..100 {
            self.pump();
            if self.host.open || self.host.init_error.is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(1));
        }

        if let Some(err) = self.host.init_error.take() {
            self.host.pending_config = None;
            return Err(Error::surface_creation(format!("{err:#}")));
        }
        if !self.host.open {
            self.host.pending_config = None;
            return Err(Error::surface_creation(
                "window system did not deliver the surface",
            ));
        }

        Ok(self.host.viewport)
    }

    fn close_surface(&mut self) {
        self.host.close();
        // Flush destruction through the platform before returning.
        self.pump();
    }

    fn is_open(&self) -> bool {
        self.host.open
    }

    fn poll_input(&mut self) -> Vec<InputEvent> {
        self.pump();
        std::mem::take(&mut self.host.events)
    }

    fn key_state(&self, key: Key) -> bool {
        self.host.input.key_down(key)
    }

    fn clear(&mut self, color: Color) {
        if let Some(renderer) = self.host.renderer.as_mut() {
            renderer.begin(color);
        }
    }

    fn draw_shape(&mut self, shape: &ShapeCmd) {
        if let Some(renderer) = self.host.renderer.as_mut() {
            renderer.push_shape(shape);
        }
    }

    fn draw_text(&mut self, cmd: &TextCmd, font: &GlyphFont) {
        if let Some(renderer) = self.host.renderer.as_mut() {
            renderer.push_text(cmd, font);
        }
    }

    fn draw_sprite(&mut self, cmd: &SpriteCmd, texture: &SpriteTexture) {
        if let Some(renderer) = self.host.renderer.as_mut() {
            renderer.push_sprite(cmd, texture);
        }
    }

    fn present(&mut self) {
        if let (Some(renderer), Some(gpu)) =
            (self.host.renderer.as_mut(), self.host.gpu.as_mut())
        {
            renderer.flush(gpu);
        }
    }

    fn load_font(&mut self, path: &Path) -> Result<GlyphFont> {
        let bytes = std::fs::read(path).map_err(|e| Error::resource_load(path, e))?;
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| Error::resource_load(path, e))?;

        let key = self.host.next_font_key;
        self.host.next_font_key += 1;
        log::debug!("loaded font {} as #{key}", path.display());
        Ok(GlyphFont { font, key })
    }

    fn load_texture(&mut self, path: &Path) -> Result<SpriteTexture> {
        let (Some(renderer), Some(gpu)) = (self.host.renderer.as_ref(), self.host.gpu.as_ref())
        else {
            return Err(Error::precondition("no surface: textures live on its device"));
        };
        let texture = renderer.load_texture(gpu, path)?;
        log::debug!("loaded texture {}", path.display());
        Ok(texture)
    }

    fn measure_text(&self, text: &str, font: &GlyphFont, size_px: f32) -> Vec2 {
        text::measure(&font.font, text, size_px)
    }

    fn viewport(&self) -> Viewport {
        self.host.viewport
    }
}
