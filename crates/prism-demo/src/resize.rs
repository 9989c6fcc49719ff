use prism_engine::render::SceneRenderer;
use prism_engine::world::{PerspectiveCamera, Scene};

/// Adapts camera and renderer to a new logical size and draws once.
///
/// A zero-sized notification (a minimised window) still reaches the
/// renderer so it can drop its surface size, but leaves the camera alone,
/// skips the render and returns `false`.
pub fn handle_resize<R: SceneRenderer>(
    renderer: &mut R,
    scene: &Scene,
    camera: &mut PerspectiveCamera,
    width: f32,
    height: f32,
) -> bool {
    if !(width > 0.0 && height > 0.0) {
        log::debug!("zero-sized resize to {width}x{height}; not rendering");
        renderer.set_size(width.max(0.0), height.max(0.0));
        return false;
    }

    camera.aspect = width / height;
    camera.update_projection_matrix();
    renderer.set_size(width, height);
    renderer.render(scene, camera);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::assemble;
    use crate::config::DemoConfig;
    use crate::testing::RecordingRenderer;

    #[test]
    fn updates_aspect_size_and_renders_once() {
        let mut world = assemble(&DemoConfig::default(), 800.0, 600.0);
        let mut renderer = RecordingRenderer::new(world.solid, world.shell);

        assert!(handle_resize(&mut renderer, &world.scene.borrow(), &mut world.camera, 1024.0, 512.0));

        assert_eq!(world.camera.aspect, 2.0);
        assert_eq!(renderer.sizes, vec![(1024.0, 512.0)]);
        assert_eq!(renderer.renders.len(), 1);
        assert_eq!(renderer.renders[0].aspect, 2.0);
    }

    #[test]
    fn projection_is_rebuilt_before_the_render() {
        let mut world = assemble(&DemoConfig::default(), 800.0, 600.0);
        let before = world.camera.projection_matrix();
        let mut renderer = RecordingRenderer::new(world.solid, world.shell);

        handle_resize(&mut renderer, &world.scene.borrow(), &mut world.camera, 600.0, 800.0);

        assert_ne!(world.camera.projection_matrix(), before);
        assert_eq!(renderer.renders[0].projection, world.camera.projection_matrix());
    }

    #[test]
    fn zero_size_reaches_renderer_but_not_camera() {
        let mut world = assemble(&DemoConfig::default(), 800.0, 600.0);
        let projection = world.camera.projection_matrix();
        let mut renderer = RecordingRenderer::new(world.solid, world.shell);

        assert!(!handle_resize(&mut renderer, &world.scene.borrow(), &mut world.camera, 800.0, 0.0));
        assert!(!handle_resize(&mut renderer, &world.scene.borrow(), &mut world.camera, 0.0, 0.0));

        assert!((world.camera.aspect - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(world.camera.projection_matrix(), projection);
        assert_eq!(renderer.sizes, vec![(800.0, 0.0), (0.0, 0.0)]);
        assert!(renderer.renders.is_empty());
    }

    #[test]
    fn repeated_sizes_are_idempotent() {
        let mut world = assemble(&DemoConfig::default(), 800.0, 600.0);
        let mut renderer = RecordingRenderer::new(world.solid, world.shell);

        handle_resize(&mut renderer, &world.scene.borrow(), &mut world.camera, 640.0, 480.0);
        let projection = world.camera.projection_matrix();
        handle_resize(&mut renderer, &world.scene.borrow(), &mut world.camera, 640.0, 480.0);

        assert_eq!(world.camera.projection_matrix(), projection);
        assert_eq!(renderer.sizes, vec![(640.0, 480.0), (640.0, 480.0)]);
    }
}
