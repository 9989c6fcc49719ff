use prism_engine::render::shapes::{CircleRenderer, RectRenderer, TextRenderer};
use prism_engine::render::{RenderCtx, RenderTarget};

use crate::scene::UiScene;

/// GPU renderers for a [`UiScene`]'s draw list, drawn on top of whatever is
/// already in the target.
#[derive(Default)]
pub struct OverlayRenderer {
    rects: RectRenderer,
    circles: CircleRenderer,
    text: TextRenderer,
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, ui: &mut UiScene) {
        if ui.draw_list.is_empty() {
            return;
        }
        let UiScene { draw_list, font_system, .. } = ui;
        self.rects.render(ctx, target, draw_list);
        self.circles.render(ctx, target, draw_list);
        self.text.render(ctx, target, draw_list, font_system);
    }
}
