//! Shared GPU plumbing for the instanced-quad shape renderers.

use std::marker::PhantomData;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{Rect, Viewport};
use crate::paint::Color;
use crate::render::RenderCtx;

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING
}

/// Converts an overlay color to what the shader should output.
///
/// On sRGB surfaces the hardware re-encodes on write, so colors are
/// linearized first; otherwise they pass through.
pub(super) fn gpu_color(c: Color, surface_format: wgpu::TextureFormat) -> [f32; 4] {
    if surface_format.is_srgb() {
        c.to_linear()
    } else {
        [c.r, c.g, c.b, c.a]
    }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    pub(super) fn new(viewport: Viewport) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }

    pub(super) fn min_binding_size() -> Option<wgpu::BufferSize> {
        wgpu::BufferSize::new(std::mem::size_of::<Self>() as u64)
    }

    pub(super) fn layout_entry() -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Self::min_binding_size(),
            },
            count: None,
        }
    }

    pub(super) fn create_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<Self>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }
}

// ── unit quad ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Static vertex/index buffers for the unit quad.
pub(super) struct QuadBuffers {
    pub vbo: wgpu::Buffer,
    pub ibo: wgpu::Buffer,
}

impl QuadBuffers {
    pub(super) fn new(device: &wgpu::Device, label: &str) -> Self {
        Self {
            vbo: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} quad vbo")),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            ibo: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} quad ibo")),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            }),
        }
    }
}

// ── instance buffer ───────────────────────────────────────────────────────

/// Growable per-instance vertex buffer.
pub(super) struct InstanceBuffer<T> {
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
    label: &'static str,
    _marker: PhantomData<T>,
}

impl<T: Pod> InstanceBuffer<T> {
    pub(super) fn new(label: &'static str) -> Self {
        Self { buffer: None, capacity: 0, label, _marker: PhantomData }
    }

    /// Uploads `data`, growing the buffer to the next power of two if needed.
    pub(super) fn upload(&mut self, ctx: &RenderCtx<'_>, data: &[T]) -> Option<&wgpu::Buffer> {
        if data.is_empty() {
            return None;
        }
        if data.len() > self.capacity || self.buffer.is_none() {
            let cap = data.len().next_power_of_two().max(64);
            self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: (cap * std::mem::size_of::<T>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = cap;
        }
        let buffer = self.buffer.as_ref()?;
        ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(data));
        Some(buffer)
    }
}

// ── pipeline ──────────────────────────────────────────────────────────────

/// Builds an instanced-quad pipeline: buffer 0 is the unit quad, buffer 1
/// the per-instance data; blending is premultiplied alpha, no depth.
pub(super) fn create_quad_pipeline(
    ctx: &RenderCtx<'_>,
    label: &str,
    shader_src: &str,
    bind_group_layout: &wgpu::BindGroupLayout,
    instance_layout: wgpu::VertexBufferLayout<'static>,
) -> wgpu::RenderPipeline {
    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[bind_group_layout],
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[QuadVertex::layout(), instance_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: ctx.multisample(),
        multiview_mask: None,
        cache: None,
    })
}

/// Key under which a lazily built pipeline stays valid.
pub(super) type PipelineKey = (wgpu::TextureFormat, u32);

#[inline]
pub(super) fn pipeline_key(ctx: &RenderCtx<'_>) -> PipelineKey {
    (ctx.surface_format, ctx.sample_count)
}

// ── scissor ───────────────────────────────────────────────────────────────

/// Converts a logical-pixel clip rect to a physical scissor rect.
///
/// Returns `None` for a zero-area result (skip the draw). `clip = None`
/// means the whole viewport.
pub(super) fn logical_clip_to_scissor(
    clip: Option<Rect>,
    viewport: Viewport,
    scale: f32,
) -> Option<(u32, u32, u32, u32)> {
    let phys_vw = (viewport.width * scale).max(1.0) as u32;
    let phys_vh = (viewport.height * scale).max(1.0) as u32;

    let (x, y, w, h) = match clip {
        None => (0, 0, phys_vw, phys_vh),
        Some(r) => {
            let x = ((r.origin.x * scale).max(0.0) as u32).min(phys_vw);
            let y = ((r.origin.y * scale).max(0.0) as u32).min(phys_vh);
            let x2 = ((r.right() * scale).max(0.0) as u32).min(phys_vw);
            let y2 = ((r.bottom() * scale).max(0.0) as u32).min(phys_vh);
            (x, y, x2.saturating_sub(x), y2.saturating_sub(y))
        }
    };

    if w == 0 || h == 0 { None } else { Some((x, y, w, h)) }
}

/// Issues one instanced draw per run of equal clip rects.
pub(super) fn draw_clipped_runs(
    rpass: &mut wgpu::RenderPass<'_>,
    clips: &[Option<Rect>],
    viewport: Viewport,
    scale: f32,
) {
    let mut i = 0;
    while i < clips.len() {
        let clip = clips[i];
        let mut j = i + 1;
        while j < clips.len() && clips[j] == clip {
            j += 1;
        }
        if let Some((sx, sy, sw, sh)) = logical_clip_to_scissor(clip, viewport, scale) {
            rpass.set_scissor_rect(sx, sy, sw, sh);
            rpass.draw_indexed(0..6, 0, i as u32..j as u32);
        }
        i = j;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clip_covers_physical_viewport() {
        let s = logical_clip_to_scissor(None, Viewport::new(400.0, 300.0), 2.0);
        assert_eq!(s, Some((0, 0, 800, 600)));
    }

    #[test]
    fn clip_is_scaled_and_clamped() {
        let clip = Rect::new(350.0, -10.0, 100.0, 50.0);
        let s = logical_clip_to_scissor(Some(clip), Viewport::new(400.0, 300.0), 1.0);
        assert_eq!(s, Some((350, 0, 50, 40)));
    }

    #[test]
    fn empty_clip_skips_draw() {
        let clip = Rect::new(10.0, 10.0, 0.0, 5.0);
        assert_eq!(logical_clip_to_scissor(Some(clip), Viewport::new(100.0, 100.0), 1.0), None);
    }

    #[test]
    fn srgb_targets_get_linear_colors() {
        let grey = Color::from_hex(0x808080);
        let linear = gpu_color(grey, wgpu::TextureFormat::Bgra8UnormSrgb);
        let raw = gpu_color(grey, wgpu::TextureFormat::Bgra8Unorm);
        assert!(linear[0] < raw[0]);
        assert_eq!(raw[3], 1.0);
    }
}
