//! Recording `SceneRenderer` for GPU-free tests.

use glam::{Mat4, Vec3};
use prism_engine::render::SceneRenderer;
use prism_engine::world::{NodeId, PerspectiveCamera, Scene};

/// What the scene looked like at one `render` call.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    pub aspect: f32,
    pub projection: Mat4,
    pub solid_rotation: Vec3,
    pub shell_rotation: Vec3,
}

pub struct RecordingRenderer {
    solid: NodeId,
    shell: NodeId,
    pub sizes: Vec<(f32, f32)>,
    pub renders: Vec<RenderedFrame>,
}

impl RecordingRenderer {
    pub fn new(solid: NodeId, shell: NodeId) -> Self {
        Self { solid, shell, sizes: Vec::new(), renders: Vec::new() }
    }
}

impl SceneRenderer for RecordingRenderer {
    fn set_size(&mut self, width: f32, height: f32) {
        self.sizes.push((width, height));
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        let rotation = |id| scene.mesh(id).map(|m| m.transform.rotation).unwrap_or_default();
        self.renders.push(RenderedFrame {
            aspect: camera.aspect,
            projection: camera.projection_matrix(),
            solid_rotation: rotation(self.solid),
            shell_rotation: rotation(self.shell),
        });
    }
}
