//! The drawing context: configuration, surface lifecycle, resource caches,
//! frame loop, and the immediate drawing primitives.
//!
//! A [`Context`] is an explicitly constructed, owned value; there is no
//! process-wide instance. Exactly one surface belongs to it, created from a
//! configuration snapshot and released on [`Context::shutdown`] or drop.
//!
//! # Frame ordering contract
//!
//! Per frame: `poll_events` → (optionally `delta_time`) → `begin_frame` →
//! draw calls → `end_frame`. Draw calls issued outside that window produce
//! undefined visual results — they are a usage error, documented rather than
//! enforced at the type level. Operations invoked before `create_surface`
//! succeeds do fail fast with a precondition error.

use std::path::Path;

use crate::backend::Backend;
use crate::backend::window::WindowBackend;
use crate::cache::{FontId, ResourceCache, TextureId};
use crate::config::{Config, HintKey, HintValue};
use crate::coords::{Vec2, Viewport};
use crate::draw::{
    line_to_rect, CircleCmd, Outline, RectCmd, ShapeCmd, SpriteCmd, TextAlign, TextCmd,
};
use crate::error::{Error, Result};
use crate::input::{InputEvent, Key};
use crate::paint::Color;
use crate::time::FrameClock;

/// Result of one `poll_events` drain.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FramePoll {
    /// True when a close request or the quit key (Escape) was observed.
    pub should_close: bool,
}

/// Single-surface immediate-mode drawing context.
pub struct Context<B: Backend> {
    config: Config,
    backend: B,
    viewport: Viewport,
    clear_color: Color,
    initialized: bool,
    clock: Option<FrameClock>,
    fonts: ResourceCache<B::Font>,
    textures: ResourceCache<B::Texture>,
}

impl Context<WindowBackend> {
    /// Creates a context backed by the production winit + wgpu backend.
    ///
    /// The surface does not exist yet; set hints, then call
    /// [`create_surface`](Self::create_surface).
    pub fn new() -> Result<Self> {
        Ok(Self::with_backend(WindowBackend::new()?))
    }
}

impl<B: Backend> Context<B> {
    /// Creates a context over an explicit backend, with default configuration.
    pub fn with_backend(backend: B) -> Self {
        Self {
            config: Config::default(),
            backend,
            viewport: Viewport::default(),
            clear_color: Color::rgb(18, 18, 20),
            initialized: false,
            clock: None,
            fonts: ResourceCache::new(),
            textures: ResourceCache::new(),
        }
    }

    // ── configuration ─────────────────────────────────────────────────────

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Writes one hint into the pending configuration.
    ///
    /// Fails on a variant mismatch, and fails once the surface exists: late
    /// mutation has no observable effect, so it is rejected rather than
    /// silently ignored.
    pub fn set_hint(&mut self, key: HintKey, value: HintValue) -> Result<()> {
        self.config_mut()?.apply_hint(key, value)
    }

    /// Typed access to the pending configuration.
    ///
    /// Same lifecycle rule as [`set_hint`](Self::set_hint): rejected after
    /// surface creation.
    pub fn config_mut(&mut self) -> Result<&mut Config> {
        if self.initialized {
            return Err(Error::config(
                "configuration is read-only once the surface exists",
            ));
        }
        Ok(&mut self.config)
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Materializes the surface from the current configuration snapshot.
    ///
    /// Installs the full-surface viewport, starts the frame timer, and marks
    /// the context initialized. A second call while the surface exists is a
    /// no-op. Backend refusal (invalid size, unsupported mode) is returned,
    /// never swallowed.
    pub fn create_surface(&mut self) -> Result<()> {
        if self.initialized {
            log::debug!("create_surface: surface already exists, ignoring");
            return Ok(());
        }

        self.config.validate()?;
        self.viewport = self.backend.create_surface(&self.config)?;
        self.clock = Some(FrameClock::start());
        self.initialized = true;
        log::info!(
            "surface created: {}x{} \"{}\"",
            self.config.width,
            self.config.height,
            self.config.title
        );
        Ok(())
    }

    /// Closes the surface and drops all cached resources.
    ///
    /// Safe to call any number of times; without a surface it is a no-op.
    /// The context itself stays usable: configuration may be edited again and
    /// a new surface created. Resource handles from before the shutdown are
    /// invalid afterwards.
    pub fn shutdown(&mut self) {
        if self.initialized {
            self.backend.close_surface();
            self.initialized = false;
            log::info!("surface closed");
        }
        self.clock = None;
        self.fonts.clear();
        self.textures.clear();
    }

    /// True iff the surface exists and the backend reports it open.
    pub fn is_surface_open(&self) -> bool {
        self.initialized && self.backend.is_open()
    }

    /// Current viewport in logical pixels.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn ensure_surface(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::precondition(
                "no surface: call create_surface() first",
            ))
        }
    }

    // ── frame loop ────────────────────────────────────────────────────────

    /// Drains all pending window/input events for this frame.
    ///
    /// Call at most once per frame, before drawing, to keep event semantics
    /// deterministic. `should_close` reports a window close request or the
    /// quit key (Escape) observed during this drain.
    pub fn poll_events(&mut self) -> Result<FramePoll> {
        self.ensure_surface()?;

        let mut poll = FramePoll::default();
        for ev in self.backend.poll_input() {
            match ev {
                InputEvent::CloseRequested => poll.should_close = true,
                InputEvent::Key { key: Key::Escape, pressed: true, .. } => {
                    poll.should_close = true;
                }
                InputEvent::Resized { width, height } => {
                    self.viewport = Viewport::new(width, height);
                }
                InputEvent::Key { .. } | InputEvent::Focused(_) => {}
            }
        }
        Ok(poll)
    }

    /// Seconds since the previous call (first call: since surface creation),
    /// resetting the internal timer.
    ///
    /// Sharp edge: this is a single-consumer clock. Calling it more than once
    /// per frame splits the frame time across the reads — the library does
    /// not detect that; read it exactly once per frame.
    pub fn delta_time(&mut self) -> Result<f32> {
        match self.clock.as_mut() {
            Some(clock) => Ok(clock.restart()),
            None => Err(Error::precondition(
                "no surface: call create_surface() first",
            )),
        }
    }

    /// Clears the surface to the current clear color. Must precede all draw
    /// calls in a frame.
    pub fn begin_frame(&mut self) -> Result<()> {
        self.ensure_surface()?;
        self.backend.clear(self.clear_color);
        Ok(())
    }

    /// Presents the frame's draw calls. Must be the last frame operation.
    ///
    /// May block on vertical sync when enabled; that throttling is a feature,
    /// not an error.
    pub fn end_frame(&mut self) -> Result<()> {
        self.ensure_surface()?;
        self.backend.present();
        Ok(())
    }

    /// Point-in-time hardware poll, independent of the event queue.
    ///
    /// False whenever no surface exists.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.initialized && self.backend.key_state(key)
    }

    /// Sets the color `begin_frame` clears to.
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    // ── resources ─────────────────────────────────────────────────────────

    /// Resolves `path` in the font cache, loading on first reference.
    ///
    /// Requires the surface (resources live on its device). The same path
    /// always yields the same handle; a load failure is returned and not
    /// cached, so a later acquire retries.
    pub fn load_font(&mut self, path: impl AsRef<Path>) -> Result<FontId> {
        self.ensure_surface()?;
        let backend = &mut self.backend;
        self.fonts
            .acquire(path.as_ref(), |p| backend.load_font(p))
            .map(FontId)
    }

    /// Resolves `path` in the texture cache, loading on first reference.
    ///
    /// Same caching and failure semantics as [`load_font`](Self::load_font).
    pub fn load_texture(&mut self, path: impl AsRef<Path>) -> Result<TextureId> {
        self.ensure_surface()?;
        let backend = &mut self.backend;
        self.textures
            .acquire(path.as_ref(), |p| backend.load_texture(p))
            .map(TextureId)
    }

    /// Bounds `text` would occupy at `size_px`, without drawing. Idempotent.
    pub fn measure_text(&self, text: &str, font: FontId, size_px: f32) -> Result<Vec2> {
        let font = self
            .fonts
            .get(font.0)
            .ok_or_else(|| Error::precondition("stale font handle"))?;
        Ok(self.backend.measure_text(text, font, size_px))
    }

    // ── drawing primitives ────────────────────────────────────────────────

    /// Draws a rectangle anchored at its center.
    pub fn draw_rect(
        &mut self,
        center: Vec2,
        size: Vec2,
        rotation_deg: f32,
        color: Color,
    ) -> Result<()> {
        self.ensure_surface()?;
        self.backend
            .draw_shape(&ShapeCmd::Rect(RectCmd { center, size, rotation_deg, color }));
        Ok(())
    }

    /// Draws a circle anchored at its center.
    ///
    /// Rotation is accepted for uniformity with the other primitives; a
    /// plain filled circle looks the same at any angle.
    pub fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        rotation_deg: f32,
        color: Color,
    ) -> Result<()> {
        self.ensure_surface()?;
        self.backend
            .draw_shape(&ShapeCmd::Circle(CircleCmd { center, radius, rotation_deg, color }));
        Ok(())
    }

    /// Draws a line segment of the given thickness.
    ///
    /// A zero-length segment submits nothing and is not an error.
    pub fn draw_line(&mut self, a: Vec2, b: Vec2, thickness: f32, color: Color) -> Result<()> {
        self.ensure_surface()?;
        if let Some(rect) = line_to_rect(a, b, thickness, color) {
            self.backend.draw_shape(&ShapeCmd::Rect(rect));
        }
        Ok(())
    }

    /// Draws `text` with the anchor interpreted per `align`.
    ///
    /// The anchor denotes the left edge, horizontal center, or right edge of
    /// the measured bounds, always at the vertical centerline — a deliberate
    /// choice that keeps HUD text stable regardless of glyph ascenders.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        text: &str,
        anchor: Vec2,
        size_px: f32,
        color: Color,
        align: TextAlign,
        outline: Option<Outline>,
        font: FontId,
    ) -> Result<()> {
        self.ensure_surface()?;
        let font = self
            .fonts
            .get(font.0)
            .ok_or_else(|| Error::precondition("stale font handle"))?;

        let bounds = self.backend.measure_text(text, font, size_px);
        let shift = match align {
            TextAlign::Left => 0.0,
            TextAlign::Center => bounds.x * 0.5,
            TextAlign::Right => bounds.x,
        };
        let origin = Vec2::new(anchor.x - shift, anchor.y - bounds.y * 0.5);

        self.backend.draw_text(
            &TextCmd { text: text.to_string(), origin, size_px, color, outline },
            font,
        );
        Ok(())
    }

    /// Draws a texture anchored at its center with uniform scale.
    pub fn draw_sprite(
        &mut self,
        texture: TextureId,
        center: Vec2,
        scale: f32,
        rotation_deg: f32,
    ) -> Result<()> {
        self.ensure_surface()?;
        let texture = self
            .textures
            .get(texture.0)
            .ok_or_else(|| Error::precondition("stale texture handle"))?;
        self.backend
            .draw_sprite(&SpriteCmd { center, scale, rotation_deg }, texture);
        Ok(())
    }
}

impl<B: Backend> Drop for Context<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::rc::Rc;

    /// Backend double recording submissions; fonts measure 10px per char,
    /// 12px tall, so alignment math is checkable exactly.
    #[derive(Default)]
    struct Recording {
        ops: Vec<String>,
        shapes: Vec<ShapeCmd>,
        texts: Vec<TextCmd>,
        font_loads: u32,
        texture_loads: u32,
    }

    #[derive(Default)]
    struct MockBackend {
        rec: Rc<RefCell<Recording>>,
        open: bool,
        queued_events: Vec<InputEvent>,
        keys_down: HashSet<Key>,
        missing_paths: HashSet<PathBuf>,
        refuse_surface: bool,
    }

    struct MockFont;
    struct MockTexture;

    impl Backend for MockBackend {
        type Font = MockFont;
        type Texture = MockTexture;

        fn create_surface(&mut self, config: &Config) -> Result<Viewport> {
            if self.refuse_surface {
                return Err(Error::surface_creation("mode not supported"));
            }
            self.open = true;
            Ok(Viewport::new(config.width as f32, config.height as f32))
        }

        fn close_surface(&mut self) {
            self.open = false;
            self.rec.borrow_mut().ops.push("close".into());
        }

        fn is_open(&self) -> bool {
            self.open
        }

        fn poll_input(&mut self) -> Vec<InputEvent> {
            std::mem::take(&mut self.queued_events)
        }

        fn key_state(&self, key: Key) -> bool {
            self.keys_down.contains(&key)
        }

        fn clear(&mut self, _color: Color) {
            self.rec.borrow_mut().ops.push("clear".into());
        }

        fn draw_shape(&mut self, shape: &ShapeCmd) {
            self.rec.borrow_mut().shapes.push(shape.clone());
        }

        fn draw_text(&mut self, cmd: &TextCmd, _font: &MockFont) {
            self.rec.borrow_mut().texts.push(cmd.clone());
        }

        fn draw_sprite(&mut self, _cmd: &SpriteCmd, _texture: &MockTexture) {
            self.rec.borrow_mut().ops.push("sprite".into());
        }

        fn present(&mut self) {
            self.rec.borrow_mut().ops.push("present".into());
        }

        fn load_font(&mut self, path: &Path) -> Result<MockFont> {
            self.rec.borrow_mut().font_loads += 1;
            if self.missing_paths.contains(path) {
                return Err(Error::resource_load(path, "no such file"));
            }
            Ok(MockFont)
        }

        fn load_texture(&mut self, path: &Path) -> Result<MockTexture> {
            self.rec.borrow_mut().texture_loads += 1;
            if self.missing_paths.contains(path) {
                return Err(Error::resource_load(path, "no such file"));
            }
            Ok(MockTexture)
        }

        fn measure_text(&self, text: &str, _font: &MockFont, _size_px: f32) -> Vec2 {
            Vec2::new(text.chars().count() as f32 * 10.0, 12.0)
        }

        fn viewport(&self) -> Viewport {
            Viewport::new(1024.0, 720.0)
        }
    }

    fn ctx() -> Context<MockBackend> {
        Context::with_backend(MockBackend::default())
    }

    fn ctx_with_surface() -> Context<MockBackend> {
        let mut c = ctx();
        c.create_surface().unwrap();
        c
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn surface_open_tracks_lifecycle() {
        let mut c = ctx();
        assert!(!c.is_surface_open());

        c.set_hint(HintKey::Title, HintValue::Text("T".into())).unwrap();
        c.set_hint(HintKey::Width, HintValue::Int(800)).unwrap();
        c.set_hint(HintKey::Height, HintValue::Int(600)).unwrap();
        c.set_hint(HintKey::Vsync, HintValue::Bool(true)).unwrap();

        c.create_surface().unwrap();
        assert!(c.is_surface_open());
        assert_eq!(c.viewport(), Viewport::new(800.0, 600.0));

        c.shutdown();
        assert!(!c.is_surface_open());
    }

    #[test]
    fn create_surface_is_a_noop_when_already_created() {
        let mut c = ctx_with_surface();
        c.create_surface().unwrap();
        assert!(c.is_surface_open());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut c = ctx_with_surface();
        c.shutdown();
        c.shutdown();
        assert!(!c.is_surface_open());
    }

    #[test]
    fn backend_refusal_surfaces_as_error() {
        let mut c = Context::with_backend(MockBackend {
            refuse_surface: true,
            ..MockBackend::default()
        });
        let err = c.create_surface().unwrap_err();
        assert!(matches!(err, Error::SurfaceCreation { .. }));
        assert!(!c.is_surface_open());
    }

    #[test]
    fn zero_size_config_fails_before_backend() {
        let mut c = ctx();
        c.set_hint(HintKey::Width, HintValue::Int(0)).unwrap();
        assert!(matches!(c.create_surface(), Err(Error::Config { .. })));
    }

    // ── configuration lifecycle ───────────────────────────────────────────

    #[test]
    fn hints_are_rejected_after_surface_creation() {
        let mut c = ctx_with_surface();
        let err = c
            .set_hint(HintKey::Title, HintValue::Text("late".into()))
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(c.config().title, "glint window");
    }

    #[test]
    fn mismatched_hint_reports_config_error() {
        let mut c = ctx();
        let err = c.set_hint(HintKey::Vsync, HintValue::Int(1)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(c.config().vsync);
    }

    // ── preconditions ─────────────────────────────────────────────────────

    #[test]
    fn frame_and_draw_ops_fail_fast_without_surface() {
        let mut c = ctx();
        assert!(matches!(c.poll_events(), Err(Error::Precondition { .. })));
        assert!(matches!(c.begin_frame(), Err(Error::Precondition { .. })));
        assert!(matches!(c.end_frame(), Err(Error::Precondition { .. })));
        assert!(matches!(c.delta_time(), Err(Error::Precondition { .. })));
        assert!(matches!(
            c.draw_rect(Vec2::zero(), Vec2::new(1.0, 1.0), 0.0, Color::WHITE),
            Err(Error::Precondition { .. })
        ));
        assert!(!c.is_key_down(Key::Space));
    }

    // ── frame loop ────────────────────────────────────────────────────────

    #[test]
    fn close_request_sets_should_close() {
        let mut c = ctx_with_surface();
        c.backend.queued_events.push(InputEvent::CloseRequested);
        assert!(c.poll_events().unwrap().should_close);
        // The drain consumed everything; the next poll is quiet.
        assert!(!c.poll_events().unwrap().should_close);
    }

    #[test]
    fn quit_key_press_sets_should_close() {
        let mut c = ctx_with_surface();
        c.backend.queued_events.push(InputEvent::Key {
            key: Key::Escape,
            pressed: true,
            repeat: false,
        });
        assert!(c.poll_events().unwrap().should_close);
    }

    #[test]
    fn quit_key_release_does_not_close() {
        let mut c = ctx_with_surface();
        c.backend.queued_events.push(InputEvent::Key {
            key: Key::Escape,
            pressed: false,
            repeat: false,
        });
        assert!(!c.poll_events().unwrap().should_close);
    }

    #[test]
    fn resize_events_update_the_viewport() {
        let mut c = ctx_with_surface();
        c.backend
            .queued_events
            .push(InputEvent::Resized { width: 640.0, height: 480.0 });
        c.poll_events().unwrap();
        assert_eq!(c.viewport(), Viewport::new(640.0, 480.0));
    }

    #[test]
    fn begin_and_end_frame_reach_the_backend_in_order() {
        let mut c = ctx_with_surface();
        c.begin_frame().unwrap();
        c.draw_circle(Vec2::new(1.0, 2.0), 3.0, 0.0, Color::WHITE).unwrap();
        c.end_frame().unwrap();

        let rec = c.backend.rec.borrow();
        assert_eq!(rec.ops, vec!["clear", "present"]);
        assert_eq!(rec.shapes.len(), 1);
    }

    #[test]
    fn delta_time_resets_on_read() {
        let mut c = ctx_with_surface();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let first = c.delta_time().unwrap();
        let second = c.delta_time().unwrap();
        assert!(first >= 0.004);
        assert!(second < 0.05);
        assert!(second < first);
    }

    #[test]
    fn is_key_down_reads_backend_state() {
        let mut c = ctx_with_surface();
        c.backend.keys_down.insert(Key::W);
        assert!(c.is_key_down(Key::W));
        assert!(!c.is_key_down(Key::S));
    }

    // ── resources ─────────────────────────────────────────────────────────

    #[test]
    fn repeated_font_acquire_loads_once_and_returns_same_handle() {
        let mut c = ctx_with_surface();
        let a = c.load_font("body.ttf").unwrap();
        let b = c.load_font("body.ttf").unwrap();
        assert_eq!(a, b);
        assert_eq!(c.backend.rec.borrow().font_loads, 1);
    }

    #[test]
    fn missing_texture_fails_and_retries_on_next_acquire() {
        let mut c = ctx_with_surface();
        c.backend.missing_paths.insert("missing.png".into());

        let err = c.load_texture("missing.png").unwrap_err();
        assert!(matches!(err, Error::ResourceLoad { .. }));

        let err = c.load_texture("missing.png").unwrap_err();
        assert!(matches!(err, Error::ResourceLoad { .. }));
        assert_eq!(c.backend.rec.borrow().texture_loads, 2);
    }

    #[test]
    fn shutdown_invalidates_resource_handles() {
        let mut c = ctx_with_surface();
        let font = c.load_font("body.ttf").unwrap();
        c.shutdown();
        c.create_surface().unwrap();
        assert!(matches!(
            c.measure_text("x", font, 16.0),
            Err(Error::Precondition { .. })
        ));
    }

    #[test]
    fn stale_handle_does_not_alias_a_recreated_resource() {
        let mut c = ctx_with_surface();
        let old = c.load_font("a.ttf").unwrap();
        c.shutdown();
        c.create_surface().unwrap();

        // The new font reuses the old handle's slot index; the stale handle
        // must still be rejected, not resolve to the new font.
        let new = c.load_font("b.ttf").unwrap();
        assert_ne!(old, new);
        assert!(matches!(
            c.measure_text("x", old, 16.0),
            Err(Error::Precondition { .. })
        ));
        assert!(c.measure_text("x", new, 16.0).is_ok());
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn zero_length_line_submits_nothing() {
        let mut c = ctx_with_surface();
        let p = Vec2::new(5.0, 5.0);
        c.draw_line(p, p, 2.0, Color::WHITE).unwrap();
        assert!(c.backend.rec.borrow().shapes.is_empty());
    }

    #[test]
    fn line_submits_center_anchored_rect() {
        let mut c = ctx_with_surface();
        c.draw_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0, Color::WHITE)
            .unwrap();
        let rec = c.backend.rec.borrow();
        let ShapeCmd::Rect(ref r) = rec.shapes[0] else {
            panic!("expected rect");
        };
        assert_eq!(r.center, Vec2::new(5.0, 0.0));
        assert_eq!(r.size, Vec2::new(10.0, 2.0));
    }

    #[test]
    fn centered_text_places_midpoint_at_anchor() {
        let mut c = ctx_with_surface();
        let font = c.load_font("body.ttf").unwrap();

        // Mock measures "abcd" as 40x12.
        c.draw_text(
            "abcd",
            Vec2::new(100.0, 50.0),
            16.0,
            Color::WHITE,
            TextAlign::Center,
            None,
            font,
        )
        .unwrap();

        let rec = c.backend.rec.borrow();
        let cmd = &rec.texts[0];
        assert!((cmd.origin.x + 20.0 - 100.0).abs() < 1e-5);
        assert!((cmd.origin.y + 6.0 - 50.0).abs() < 1e-5);
    }

    #[test]
    fn left_and_right_alignment_shift_the_origin() {
        let mut c = ctx_with_surface();
        let font = c.load_font("body.ttf").unwrap();
        let anchor = Vec2::new(100.0, 50.0);

        c.draw_text("ab", anchor, 16.0, Color::WHITE, TextAlign::Left, None, font)
            .unwrap();
        c.draw_text("ab", anchor, 16.0, Color::WHITE, TextAlign::Right, None, font)
            .unwrap();

        let rec = c.backend.rec.borrow();
        assert_eq!(rec.texts[0].origin.x, 100.0);
        assert_eq!(rec.texts[1].origin.x, 80.0);
    }

    #[test]
    fn measure_text_is_idempotent() {
        let mut c = ctx_with_surface();
        let font = c.load_font("body.ttf").unwrap();
        let a = c.measure_text("hello", font, 16.0).unwrap();
        let b = c.measure_text("hello", font, 16.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Vec2::new(50.0, 12.0));
    }
}
