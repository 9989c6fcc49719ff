use crate::core::{AppControl, FrameCtx};
use crate::paint::Color;
use crate::world::{PerspectiveCamera, Scene};

use super::{MeshRenderer, RenderCtx, RenderTarget, SceneRenderer};

type OverlayFn<'r> = dyn FnMut(&RenderCtx<'_>, &mut RenderTarget<'_>) + 'r;

/// [`SceneRenderer`] that presents to the window of a [`FrameCtx`].
///
/// Every `render` call acquires a swapchain image, clears it to the scene
/// background, draws the meshes, then the optional overlay, and presents.
/// A fatal surface error is latched and reported through
/// [`FrameRenderer::control`].
pub struct FrameRenderer<'r, 'a, 'w> {
    ctx: &'r mut FrameCtx<'a, 'w>,
    meshes: &'r mut MeshRenderer,
    overlay: Option<&'r mut OverlayFn<'r>>,
    control: AppControl,
}

impl<'r, 'a, 'w> FrameRenderer<'r, 'a, 'w> {
    pub fn new(ctx: &'r mut FrameCtx<'a, 'w>, meshes: &'r mut MeshRenderer) -> Self {
        Self { ctx, meshes, overlay: None, control: AppControl::Continue }
    }

    /// Draws `overlay` on top of the scene in every rendered frame.
    pub fn with_overlay(mut self, overlay: &'r mut OverlayFn<'r>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// `Exit` once any render hit a fatal surface error.
    pub fn control(&self) -> AppControl {
        self.control
    }
}

impl SceneRenderer for FrameRenderer<'_, '_, '_> {
    fn set_size(&mut self, width: f32, height: f32) {
        self.ctx.resize_surface(width, height);
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        let meshes = &mut *self.meshes;
        let overlay = &mut self.overlay;
        let control = self.ctx.render(Color::from_hex(scene.background), |rctx, target| {
            meshes.render(rctx, target, scene, camera);
            if let Some(draw_overlay) = overlay.as_mut() {
                draw_overlay(rctx, target);
            }
        });
        if control == AppControl::Exit {
            self.control = AppControl::Exit;
        }
    }
}
