//! Depth-tested renderer for `world::Scene` meshes.
//!
//! Pipelines (built lazily per surface format and sample count):
//! - lambert: filled triangles, back-face culled, lit by the scene light
//! - basic: unlit triangles or, for wireframe materials, the geometry's edge
//!   list as lines; transparent variants blend and skip depth writes
//!
//! Opaque meshes draw first, transparent ones after, each group in scene order.

mod uniforms;

use std::collections::HashMap;
use std::rc::Rc;

use wgpu::util::DeviceExt;

use crate::device::DEPTH_FORMAT;
use crate::render::{RenderCtx, RenderTarget};
use crate::world::{Geometry, Material, Mesh, NodeId, PerspectiveCamera, Scene, Vertex};

use uniforms::{FrameUniform, ObjectUniform};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
enum PipelineKind {
    Lambert,
    BasicFill { blend: bool },
    BasicLines { blend: bool },
}

impl PipelineKind {
    fn of(material: &Material) -> Self {
        match material {
            Material::Lambert(_) => PipelineKind::Lambert,
            Material::Basic(m) if m.wireframe => PipelineKind::BasicLines { blend: m.transparent },
            Material::Basic(m) => PipelineKind::BasicFill { blend: m.transparent },
        }
    }

    fn is_transparent(self) -> bool {
        matches!(
            self,
            PipelineKind::BasicFill { blend: true } | PipelineKind::BasicLines { blend: true }
        )
    }
}

/// GPU resources cached per scene node.
struct MeshSlot {
    /// Held so the uploaded geometry cannot be freed and its address reused.
    geometry: Rc<Geometry>,
    triangles: wgpu::Buffer,
    triangle_vertices: u32,
    edges: wgpu::Buffer,
    edge_vertices: u32,
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Draws a [`Scene`] as seen by a [`PerspectiveCamera`].
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_key: Option<(wgpu::TextureFormat, u32)>,
    pipelines: HashMap<PipelineKind, wgpu::RenderPipeline>,

    frame_bgl: Option<wgpu::BindGroupLayout>,
    object_bgl: Option<wgpu::BindGroupLayout>,
    frame_ubo: Option<wgpu::Buffer>,
    frame_bind_group: Option<wgpu::BindGroup>,

    slots: Vec<Option<MeshSlot>>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) {
        let mut draws: Vec<(NodeId, PipelineKind)> = scene
            .visible_meshes()
            .map(|(id, mesh)| (id, PipelineKind::of(&mesh.material)))
            .collect();
        if draws.is_empty() {
            return;
        }
        // Stable: scene order is kept within each group.
        draws.sort_by_key(|(_, kind)| kind.is_transparent());

        self.ensure_layouts(ctx);
        for (_, kind) in &draws {
            self.ensure_pipeline(ctx, *kind);
        }

        let Some(frame_ubo) = self.frame_ubo.as_ref() else { return };
        ctx.queue.write_buffer(frame_ubo, 0, bytemuck::bytes_of(&FrameUniform::new(scene, camera)));

        for (id, _) in &draws {
            if let Some(mesh) = scene.mesh(*id) {
                self.sync_slot(ctx, *id, mesh);
            }
        }

        let Some(frame_bind_group) = self.frame_bind_group.as_ref() else { return };

        let mut rpass = target.begin_pass("prism mesh pass", true);
        rpass.set_bind_group(0, frame_bind_group, &[]);

        for (id, kind) in &draws {
            let Some(pipeline) = self.pipelines.get(kind) else { continue };
            let Some(Some(slot)) = self.slots.get(id.index()) else { continue };

            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(1, &slot.bind_group, &[]);
            match kind {
                PipelineKind::BasicLines { .. } => {
                    rpass.set_vertex_buffer(0, slot.edges.slice(..));
                    rpass.draw(0..slot.edge_vertices, 0..1);
                }
                _ => {
                    rpass.set_vertex_buffer(0, slot.triangles.slice(..));
                    rpass.draw(0..slot.triangle_vertices, 0..1);
                }
            }
        }
    }

    /// Uploads geometry on first sight (or when it is swapped) and refreshes
    /// the node's uniforms.
    fn sync_slot(&mut self, ctx: &RenderCtx<'_>, id: NodeId, mesh: &Mesh) {
        let index = id.index();
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }

        let uploaded = self.slots[index].as_ref().map(|slot| &slot.geometry);
        if needs_upload(uploaded, &mesh.geometry) {
            let Some(object_bgl) = self.object_bgl.as_ref() else { return };
            self.slots[index] = Some(create_slot(ctx, object_bgl, &mesh.name, &mesh.geometry));
        }

        if let Some(slot) = &self.slots[index] {
            ctx.queue.write_buffer(&slot.ubo, 0, bytemuck::bytes_of(&ObjectUniform::new(mesh)));
        }
    }

    fn ensure_layouts(&mut self, ctx: &RenderCtx<'_>) {
        let key = (ctx.surface_format, ctx.sample_count);
        if self.pipeline_key != Some(key) {
            self.pipelines.clear();
            self.pipeline_key = Some(key);
        }
        if self.frame_bgl.is_some() && self.object_bgl.is_some() && self.frame_bind_group.is_some() {
            return;
        }

        let frame_bgl = uniform_layout(ctx.device, "prism mesh frame bgl", FrameUniform::SIZE);
        let object_bgl = uniform_layout(ctx.device, "prism mesh object bgl", ObjectUniform::SIZE);

        let frame_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("prism mesh frame ubo"),
            size: FrameUniform::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prism mesh frame bind group"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: frame_ubo.as_entire_binding() }],
        });

        self.frame_bgl = Some(frame_bgl);
        self.object_bgl = Some(object_bgl);
        self.frame_ubo = Some(frame_ubo);
        self.frame_bind_group = Some(frame_bind_group);
        // Slots hold bind groups of the old layout.
        self.slots.clear();
        self.pipelines.clear();
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, kind: PipelineKind) {
        if self.pipelines.contains_key(&kind) {
            return;
        }
        let (Some(frame_bgl), Some(object_bgl)) = (self.frame_bgl.as_ref(), self.object_bgl.as_ref())
        else {
            return;
        };

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("prism mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("mesh.wgsl").into()),
        });

        let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism mesh pipeline layout"),
            bind_group_layouts: &[frame_bgl, object_bgl],
            immediate_size: 0,
        });

        let (topology, cull_mode, fragment, blend) = match kind {
            PipelineKind::Lambert => (
                wgpu::PrimitiveTopology::TriangleList,
                Some(wgpu::Face::Back),
                "fs_lambert",
                false,
            ),
            PipelineKind::BasicFill { blend } => (
                wgpu::PrimitiveTopology::TriangleList,
                Some(wgpu::Face::Back),
                "fs_basic",
                blend,
            ),
            PipelineKind::BasicLines { blend } => {
                (wgpu::PrimitiveTopology::LineList, None, "fs_basic", blend)
            }
        };

        let vertex_attrs = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("prism mesh pipeline {kind:?}")),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &vertex_attrs,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(fragment),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: blend.then_some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: !blend,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: ctx.multisample(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("built mesh pipeline {kind:?}");
        self.pipelines.insert(kind, pipeline);
    }
}

fn uniform_layout(device: &wgpu::Device, label: &str, size: u64) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(size),
            },
            count: None,
        }],
    })
}

/// `true` unless `uploaded` is the very geometry the node now holds.
fn needs_upload(uploaded: Option<&Rc<Geometry>>, geometry: &Rc<Geometry>) -> bool {
    !uploaded.is_some_and(|g| Rc::ptr_eq(g, geometry))
}

fn create_slot(
    ctx: &RenderCtx<'_>,
    object_bgl: &wgpu::BindGroupLayout,
    name: &str,
    geometry: &Rc<Geometry>,
) -> MeshSlot {
    let vertex_buffer = |label: &str, data: &[Vertex]| {
        // wgpu rejects zero-sized vertex buffers; keep one dummy vertex.
        let fallback = [Vertex { position: [0.0; 3], normal: [0.0; 3] }];
        let contents = if data.is_empty() { &fallback[..] } else { data };
        ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(contents),
            usage: wgpu::BufferUsages::VERTEX,
        })
    };

    let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("prism mesh {name} ubo")),
        size: ObjectUniform::SIZE,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("prism mesh {name} bind group")),
        layout: object_bgl,
        entries: &[wgpu::BindGroupEntry { binding: 0, resource: ubo.as_entire_binding() }],
    });

    log::debug!(
        "uploaded mesh {name:?}: {} triangles, {} edges",
        geometry.triangle_count(),
        geometry.edge_count()
    );

    MeshSlot {
        geometry: Rc::clone(geometry),
        triangles: vertex_buffer(&format!("prism mesh {name} triangles"), geometry.vertices()),
        triangle_vertices: geometry.vertices().len() as u32,
        edges: vertex_buffer(&format!("prism mesh {name} edges"), geometry.edges()),
        edge_vertices: geometry.edges().len() as u32,
        ubo,
        bind_group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sight_uploads() {
        let g = Rc::new(Geometry::icosahedron(1.0, 0));
        assert!(needs_upload(None, &g));
    }

    #[test]
    fn shared_handle_is_reused() {
        let g = Rc::new(Geometry::icosahedron(1.0, 0));
        let node = Rc::clone(&g);
        assert!(!needs_upload(Some(&g), &node));
    }

    #[test]
    fn swapped_geometry_reuploads_even_when_equal() {
        let uploaded = Rc::new(Geometry::icosahedron(1.0, 0));
        let swapped = Rc::new(Geometry::icosahedron(1.0, 0));
        assert!(needs_upload(Some(&uploaded), &swapped));
    }

    #[test]
    fn slot_keeps_uploaded_geometry_alive() {
        let node = Rc::new(Geometry::icosahedron(1.0, 0));
        let uploaded = Rc::clone(&node);
        drop(node);
        assert_eq!(Rc::strong_count(&uploaded), 1);
        let replacement = Rc::new(Geometry::icosahedron(2.0, 0));
        assert!(!Rc::ptr_eq(&uploaded, &replacement));
        assert!(needs_upload(Some(&uploaded), &replacement));
    }
}
