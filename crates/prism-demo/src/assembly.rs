use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use prism_engine::coords::Viewport;
use prism_engine::world::{
    BasicMaterial, DirectionalLight, Geometry, LambertMaterial, Mesh, NodeId, PerspectiveCamera,
    Scene,
};

use crate::config::DemoConfig;

/// The object graph built once at startup.
pub struct World {
    pub scene: Rc<RefCell<Scene>>,
    pub camera: PerspectiveCamera,
    pub solid: NodeId,
    pub shell: NodeId,
}

/// Builds camera, light, solid and shell for a window of `width` x `height`.
pub fn assemble(config: &DemoConfig, width: f32, height: f32) -> World {
    let aspect = Viewport::new(width, height).aspect().unwrap_or(1.0);
    let mut camera = PerspectiveCamera::new(config.camera_fov, aspect, config.camera_near, config.camera_far);
    camera.position = Vec3::new(0.0, 0.0, config.camera_distance);
    camera.look_at(Vec3::ZERO);

    let mut scene = Scene::new();
    scene.background = config.background;
    scene.light = DirectionalLight::new(config.light_color, config.light_intensity);

    let solid = scene.add(Mesh::new(
        "solid",
        Rc::new(Geometry::icosahedron(config.solid_radius, 0)),
        LambertMaterial { color: config.solid_color, emissive: config.solid_emissive },
    ));

    let shell = scene.add(Mesh::new(
        "shell",
        Rc::new(Geometry::icosahedron(config.shell_radius, 0)),
        BasicMaterial {
            color: config.shell_color,
            wireframe: true,
            transparent: true,
            opacity: config.shell_opacity,
        },
    ));

    log::info!("scene assembled: {} meshes, camera aspect {aspect:.3}", scene.len());

    World { scene: Rc::new(RefCell::new(scene)), camera, solid, shell }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::world::Material;

    #[test]
    fn initial_aspect_matches_window() {
        let world = assemble(&DemoConfig::default(), 800.0, 600.0);
        assert!((world.camera.aspect - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(world.camera.position, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn solid_is_lit_cyan_at_origin() {
        let world = assemble(&DemoConfig::default(), 800.0, 600.0);
        let scene = world.scene.borrow();
        let solid = scene.mesh(world.solid).unwrap();
        assert_eq!(solid.material, Material::Lambert(LambertMaterial { color: 0x00ffff, emissive: 0x111111 }));
        assert_eq!(solid.transform.position, Vec3::ZERO);
        assert!(solid.visible);
        assert_eq!(solid.geometry.triangle_count(), 20);
    }

    #[test]
    fn shell_is_a_faint_wireframe() {
        let world = assemble(&DemoConfig::default(), 800.0, 600.0);
        let scene = world.scene.borrow();
        let shell = scene.mesh(world.shell).unwrap();
        match shell.material {
            Material::Basic(m) => {
                assert!(m.wireframe && m.transparent);
                assert_eq!(m.color, 0xaaaaaa);
                assert!((m.effective_opacity() - 0.1).abs() < 1e-6);
            }
            other => panic!("unexpected material {other:?}"),
        }
        assert_eq!(shell.geometry.edge_count(), 30);
    }

    #[test]
    fn zero_sized_window_falls_back_to_square_aspect() {
        let world = assemble(&DemoConfig::default(), 0.0, 0.0);
        assert_eq!(world.camera.aspect, 1.0);
    }
}
