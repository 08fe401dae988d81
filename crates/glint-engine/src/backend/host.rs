//! winit application handler behind [`super::window::WindowBackend`].
//!
//! winit owns the event-loop callbacks; the backend drives them with a
//! non-blocking pump, so this type buffers everything the caller later drains
//! through `poll_input`.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::Config;
use crate::coords::Viewport;
use crate::device::Gpu;
use crate::input::{InputEvent, InputState, Key};
use crate::render::Renderer;

#[derive(Default)]
pub(super) struct WindowHost {
    /// Set before pumping; consumed by the next window-creation opportunity.
    pub pending_config: Option<Config>,
    /// Desktop winit delivers `resumed` once per event-loop lifetime, so
    /// later surface requests are served from `about_to_wait` instead.
    has_resumed: bool,
    pub window: Option<Arc<Window>>,
    pub gpu: Option<Gpu>,
    pub renderer: Option<Renderer>,
    pub input: InputState,
    pub events: Vec<InputEvent>,
    /// Window/GPU setup failure, reported from `create_surface`.
    pub init_error: Option<anyhow::Error>,
    pub open: bool,
    pub viewport: Viewport,
    /// Monotonic identity for loaded fonts, used as an atlas cache key.
    pub next_font_key: usize,
}

impl WindowHost {
    pub fn close(&mut self) {
        self.renderer = None;
        self.gpu = None;
        self.window = None;
        self.open = false;
        self.input = InputState::default();
        self.events.clear();
    }

    /// True when a surface request is waiting and may be served now.
    fn wants_window(&self) -> bool {
        self.has_resumed && self.window.is_none() && self.pending_config.is_some()
    }

    fn serve_pending(&mut self, event_loop: &ActiveEventLoop) {
        let Some(config) = self.pending_config.take() else {
            return;
        };
        if let Err(e) = self.init_window(event_loop, config) {
            log::error!("surface creation failed: {e:#}");
            self.init_error = Some(e);
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop, config: Config) -> anyhow::Result<()> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_resizable(config.resizable)
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| anyhow::anyhow!("failed to create window: {e}"))?,
        );

        let gpu = pollster::block_on(Gpu::new(Arc::clone(&window), config.vsync))?;

        let scale = window.scale_factor();
        let logical = window.inner_size().to_logical::<f64>(scale);
        let viewport = Viewport::new(logical.width as f32, logical.height as f32);

        let renderer = Renderer::new(&gpu, &config, viewport);

        self.viewport = viewport;
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);
        self.open = true;
        Ok(())
    }
}

impl ApplicationHandler for WindowHost {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.has_resumed = true;
        self.serve_pending(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Surface recreation after a close lands here: `resumed` will not
        // fire again, but every pump passes through this callback.
        if self.wants_window() {
            self.serve_pending(event_loop);
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.events.push(InputEvent::CloseRequested);
            }

            WindowEvent::Resized(new_size) => {
                if let (Some(window), Some(gpu)) = (self.window.as_ref(), self.gpu.as_mut()) {
                    gpu.resize(new_size);
                    let logical = new_size.to_logical::<f64>(window.scale_factor());
                    self.viewport = Viewport::new(logical.width as f32, logical.height as f32);
                    if let Some(renderer) = self.renderer.as_mut() {
                        renderer.resize(gpu, self.viewport);
                    }
                    self.events.push(InputEvent::Resized {
                        width: self.viewport.width,
                        height: self.viewport.height,
                    });
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(window), Some(gpu)) = (self.window.as_ref(), self.gpu.as_mut()) {
                    let new_size = window.inner_size();
                    gpu.resize(new_size);
                    let logical = new_size.to_logical::<f64>(window.scale_factor());
                    self.viewport = Viewport::new(logical.width as f32, logical.height as f32);
                    if let Some(renderer) = self.renderer.as_mut() {
                        renderer.resize(gpu, self.viewport);
                    }
                }
            }

            WindowEvent::Focused(f) => {
                let ev = InputEvent::Focused(f);
                self.input.apply_event(&ev);
                self.events.push(ev);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let ev = InputEvent::Key {
                    key: map_key(event.physical_key),
                    pressed: event.state == ElementState::Pressed,
                    repeat: event.repeat,
                };
                self.input.apply_event(&ev);
                self.events.push(ev);
            }

            _ => {}
        }
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Space => Key::Space,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
            KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
            KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,

            KeyCode::KeyA => Key::A,
            KeyCode::KeyB => Key::B,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyE => Key::E,
            KeyCode::KeyF => Key::F,
            KeyCode::KeyG => Key::G,
            KeyCode::KeyH => Key::H,
            KeyCode::KeyI => Key::I,
            KeyCode::KeyJ => Key::J,
            KeyCode::KeyK => Key::K,
            KeyCode::KeyL => Key::L,
            KeyCode::KeyM => Key::M,
            KeyCode::KeyN => Key::N,
            KeyCode::KeyO => Key::O,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyT => Key::T,
            KeyCode::KeyU => Key::U,
            KeyCode::KeyV => Key::V,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyX => Key::X,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyZ => Key::Z,

            KeyCode::Digit0 => Key::Digit0,
            KeyCode::Digit1 => Key::Digit1,
            KeyCode::Digit2 => Key::Digit2,
            KeyCode::Digit3 => Key::Digit3,
            KeyCode::Digit4 => Key::Digit4,
            KeyCode::Digit5 => Key::Digit5,
            KeyCode::Digit6 => Key::Digit6,
            KeyCode::Digit7 => Key::Digit7,
            KeyCode::Digit8 => Key::Digit8,
            KeyCode::Digit9 => Key::Digit9,

            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode has no stable numeric form in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_request_is_served_only_after_first_resume() {
        let mut host = WindowHost::default();
        host.pending_config = Some(Config::default());
        assert!(!host.wants_window());

        host.has_resumed = true;
        assert!(host.wants_window());

        host.pending_config = None;
        assert!(!host.wants_window());
    }

    #[test]
    fn close_keeps_the_host_ready_for_a_new_request() {
        let mut host = WindowHost::default();
        host.has_resumed = true;
        host.open = true;

        host.close();
        assert!(!host.wants_window());

        host.pending_config = Some(Config::default());
        assert!(host.wants_window());
    }
}
