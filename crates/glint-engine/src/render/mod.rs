//! Immediate-mode renderer.
//!
//! Draw calls accumulate into per-pipeline instance lists plus an ordered
//! batch list, so one render pass at present time replays everything in
//! submission order. Nothing persists across frames except the pipelines and
//! the glyph atlas.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::dpi::PhysicalSize;

use crate::config::Config;
use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::draw::{ShapeCmd, SpriteCmd, TextCmd};
use crate::paint::Color;
use crate::text::GlyphFont;

mod common;
mod glyphs;
mod solid;
mod sprites;

pub(crate) use sprites::SpriteTexture;

use glyphs::{GlyphInstance, GlyphPipeline};
use solid::{SolidInstance, SolidPipeline};
use sprites::{SpriteInstance, SpritePipeline};

/// Contiguous run of instances sharing one pipeline (and, for sprites, one
/// texture). Ranges index the per-pipeline instance vectors.
enum Batch {
    Solid { start: u32, end: u32 },
    Glyphs { start: u32, end: u32 },
    Sprites { bind: Arc<wgpu::BindGroup>, start: u32, end: u32 },
}

/// Sleeps off the remainder of a fixed frame budget at present time.
struct FramePacer {
    budget: Option<Duration>,
    last: Instant,
}

impl FramePacer {
    fn new(fps_limit: u32) -> Self {
        let budget = (fps_limit > 0).then(|| Duration::from_secs(1) / fps_limit);
        Self { budget, last: Instant::now() }
    }

    fn pace(&mut self) {
        if let Some(budget) = self.budget {
            let elapsed = self.last.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
        self.last = Instant::now();
    }
}

pub(crate) struct Renderer {
    device: wgpu::Device,
    queue: wgpu::Queue,

    solid: SolidPipeline,
    glyphs: GlyphPipeline,
    sprites: SpritePipeline,

    viewport: Viewport,
    clear_color: wgpu::Color,

    solid_instances: Vec<SolidInstance>,
    glyph_instances: Vec<GlyphInstance>,
    sprite_instances: Vec<SpriteInstance>,
    batches: Vec<Batch>,

    msaa_samples: u32,
    msaa_view: Option<wgpu::TextureView>,

    pacer: FramePacer,
}

impl Renderer {
    pub fn new(gpu: &Gpu, config: &Config, viewport: Viewport) -> Self {
        let device = gpu.device().clone();
        let queue = gpu.queue().clone();
        let format = gpu.surface_format();

        let msaa_samples = clamp_samples(config.msaa);
        let solid = SolidPipeline::new(&device, format, msaa_samples);
        let glyphs = GlyphPipeline::new(&device, format, msaa_samples);
        let sprites = SpritePipeline::new(&device, format, msaa_samples);

        let msaa_view =
            (msaa_samples > 1).then(|| create_msaa_view(&device, format, msaa_samples, gpu.size()));

        Self {
            device,
            queue,
            solid,
            glyphs,
            sprites,
            viewport,
            clear_color: wgpu::Color::BLACK,
            solid_instances: Vec::new(),
            glyph_instances: Vec::new(),
            sprite_instances: Vec::new(),
            batches: Vec::new(),
            msaa_samples,
            msaa_view,
            pacer: FramePacer::new(config.fps_limit),
        }
    }

    /// Resets the frame's accumulated draws and records the clear color.
    pub fn begin(&mut self, color: Color) {
        let [r, g, b, a] = color.to_array();
        self.clear_color = wgpu::Color { r: r as f64, g: g as f64, b: b as f64, a: a as f64 };
        self.solid_instances.clear();
        self.glyph_instances.clear();
        self.sprite_instances.clear();
        self.batches.clear();
    }

    pub fn push_shape(&mut self, shape: &ShapeCmd) {
        self.solid_instances.push(SolidInstance::from_shape(shape));
        let end = self.solid_instances.len() as u32;
        match self.batches.last_mut() {
            Some(Batch::Solid { end: e, .. }) => *e = end,
            _ => self.batches.push(Batch::Solid { start: end - 1, end }),
        }
    }

    pub fn push_text(&mut self, cmd: &TextCmd, font: &GlyphFont) {
        let start = self.glyph_instances.len() as u32;

        if let Some(outline) = cmd.outline {
            // Underdraw: the outline is the same glyph run stamped at eight
            // offsets around the fill.
            let t = outline.thickness;
            for offset in [
                [-t, 0.0], [t, 0.0], [0.0, -t], [0.0, t],
                [-t, -t], [t, -t], [-t, t], [t, t],
            ] {
                self.glyphs.push_text(
                    &self.queue,
                    font,
                    cmd,
                    outline.color,
                    offset,
                    &mut self.glyph_instances,
                );
            }
        }

        self.glyphs.push_text(
            &self.queue,
            font,
            cmd,
            cmd.color,
            [0.0, 0.0],
            &mut self.glyph_instances,
        );

        let end = self.glyph_instances.len() as u32;
        if end == start {
            return;
        }
        match self.batches.last_mut() {
            Some(Batch::Glyphs { end: e, .. }) => *e = end,
            _ => self.batches.push(Batch::Glyphs { start, end }),
        }
    }

    pub fn push_sprite(&mut self, cmd: &SpriteCmd, texture: &SpriteTexture) {
        self.sprite_instances.push(SpriteInstance::from_cmd(cmd, texture));
        let end = self.sprite_instances.len() as u32;
        match self.batches.last_mut() {
            Some(Batch::Sprites { bind, end: e, .. }) if Arc::ptr_eq(bind, &texture.bind_group) => {
                *e = end
            }
            _ => self.batches.push(Batch::Sprites {
                bind: Arc::clone(&texture.bind_group),
                start: end - 1,
                end,
            }),
        }
    }

    pub fn load_texture(&self, gpu: &Gpu, path: &std::path::Path) -> crate::Result<SpriteTexture> {
        self.sprites.load_texture(gpu.device(), gpu.queue(), path)
    }

    pub fn resize(&mut self, gpu: &Gpu, viewport: Viewport) {
        self.viewport = viewport;
        if self.msaa_samples > 1 {
            self.msaa_view = Some(create_msaa_view(
                &self.device,
                gpu.surface_format(),
                self.msaa_samples,
                gpu.size(),
            ));
        }
    }

    /// Uploads the frame's instances, replays the batches in one render pass
    /// and presents. Transient surface errors drop the frame.
    pub fn flush(&mut self, gpu: &mut Gpu) {
        self.solid
            .upload(&self.device, &self.queue, self.viewport, &self.solid_instances);
        self.glyphs
            .upload(&self.device, &self.queue, self.viewport, &self.glyph_instances);
        self.sprites
            .upload(&self.device, &self.queue, self.viewport, &self.sprite_instances);

        let mut frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => match gpu.handle_surface_error(err) {
                SurfaceErrorAction::Reconfigured => match gpu.begin_frame() {
                    Ok(frame) => frame,
                    Err(err) => {
                        log::warn!("dropping frame after surface reconfigure: {err}");
                        self.pacer.pace();
                        return;
                    }
                },
                SurfaceErrorAction::SkipFrame => {
                    self.pacer.pace();
                    return;
                }
                SurfaceErrorAction::Fatal => {
                    log::error!("fatal surface error; frame not presented");
                    self.pacer.pace();
                    return;
                }
            },
        };

        {
            let (view, resolve_target) = match self.msaa_view.as_ref() {
                Some(msaa) => (msaa, Some(&frame.view)),
                None => (&frame.view, None),
            };

            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("glint frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    depth_slice: None,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            for batch in &self.batches {
                match batch {
                    Batch::Solid { start, end } => self.solid.draw(&mut rpass, *start..*end),
                    Batch::Glyphs { start, end } => self.glyphs.draw(&mut rpass, *start..*end),
                    Batch::Sprites { bind, start, end } => {
                        self.sprites.draw(&mut rpass, bind, *start..*end)
                    }
                }
            }
        }

        gpu.submit(frame);
        self.pacer.pace();
    }
}

fn clamp_samples(msaa: u32) -> u32 {
    match msaa {
        0 | 1 => 1,
        2 | 3 => 2,
        4..=7 => 4,
        _ => 8,
    }
}

fn create_msaa_view(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    samples: u32,
    size: PhysicalSize<u32>,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("glint msaa target"),
        size: wgpu::Extent3d {
            width: size.width.max(1),
            height: size.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: samples,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::clamp_samples;

    #[test]
    fn sample_counts_clamp_to_supported_values() {
        assert_eq!(clamp_samples(0), 1);
        assert_eq!(clamp_samples(1), 1);
        assert_eq!(clamp_samples(2), 2);
        assert_eq!(clamp_samples(3), 2);
        assert_eq!(clamp_samples(4), 4);
        assert_eq!(clamp_samples(6), 4);
        assert_eq!(clamp_samples(8), 8);
        assert_eq!(clamp_samples(64), 8);
    }
}
