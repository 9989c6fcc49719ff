use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::paint::Color;
use crate::world::{Material, Mesh, PerspectiveCamera, Scene};

/// Per-frame data shared by every mesh (group 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct FrameUniform {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
}

impl FrameUniform {
    pub(super) const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub(super) fn new(scene: &Scene, camera: &PerspectiveCamera) -> Self {
        let light = &scene.light;
        let [r, g, b, _] = Color::from_hex(light.color).to_linear();
        let i = light.intensity.max(0.0);
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            light_dir: light.direction_to_light().extend(0.0).to_array(),
            light_color: [r * i, g * i, b * i, 1.0],
        }
    }
}

/// Per-mesh data (group 1).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ObjectUniform {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    params: [f32; 4],
}

impl ObjectUniform {
    pub(super) const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub(super) fn new(mesh: &Mesh) -> Self {
        let (color, emissive, opacity) = match &mesh.material {
            Material::Lambert(m) => (m.color, m.emissive, 1.0),
            Material::Basic(m) => (m.color, 0x000000, m.effective_opacity()),
        };
        Self {
            model: mesh.transform.matrix().to_cols_array_2d(),
            normal_matrix: Mat4::from_mat3(mesh.transform.normal_matrix()).to_cols_array_2d(),
            color: Color::from_hex(color).to_linear(),
            emissive: Color::from_hex(emissive).to_linear(),
            params: [opacity, 0.0, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::world::{BasicMaterial, Geometry, LambertMaterial};

    #[test]
    fn uniform_sizes_match_wgsl_layout() {
        assert_eq!(FrameUniform::SIZE, 96);
        assert_eq!(ObjectUniform::SIZE, 176);
    }

    #[test]
    fn transparent_basic_material_carries_opacity() {
        let mesh = Mesh::new(
            "shell",
            Rc::new(Geometry::icosahedron(2.0, 0)),
            BasicMaterial { color: 0xaaaaaa, wireframe: true, transparent: true, opacity: 0.1 },
        );
        let u = ObjectUniform::new(&mesh);
        assert!((u.params[0] - 0.1).abs() < 1e-6);
        assert_eq!(u.emissive, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn lambert_emissive_is_linearized() {
        let mesh = Mesh::new(
            "solid",
            Rc::new(Geometry::icosahedron(1.0, 0)),
            LambertMaterial { color: 0x00ffff, emissive: 0x111111 },
        );
        let u = ObjectUniform::new(&mesh);
        assert_eq!(u.params[0], 1.0);
        assert!(u.emissive[0] > 0.0 && u.emissive[0] < 0x11 as f32 / 255.0);
        assert_eq!(u.color[0], 0.0);
        assert!((u.color[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn light_color_scales_with_intensity() {
        let mut scene = Scene::new();
        scene.light.intensity = 0.5;
        let camera = PerspectiveCamera::new(75.0, 1.0, 1.0, 500.0);
        let u = FrameUniform::new(&scene, &camera);
        assert!((u.light_color[0] - 0.5).abs() < 1e-6);
        assert_eq!(u.light_dir, [0.0, 1.0, 0.0, 0.0]);
    }
}
