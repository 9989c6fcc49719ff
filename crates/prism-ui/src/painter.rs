use prism_engine::coords::{Rect, Vec2};
use prism_engine::draw::{Border, CircleCmd, DrawList, TextCmd, ZIndex};
use prism_engine::paint::Color;
use prism_engine::text::{FontId, FontSystem};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API and exposes
/// per-frame input state so widgets can express hover / pressed visuals
/// directly in their paint implementations.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    regions: &'a mut Vec<Rect>,
    z: i32,
    /// Current mouse position in logical pixels.
    pub mouse_pos: Vec2,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        regions: &'a mut Vec<Rect>,
        mouse_pos: Vec2,
        mouse_pressed: bool,
    ) -> Self {
        Self { draw_list, font_system, regions, z: 0, mouse_pos, mouse_pressed }
    }

    // ── input queries ─────────────────────────────────────────────────────

    /// Returns `true` if the mouse cursor is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }

    /// Returns `true` if the primary button is held and the cursor is over `rect`.
    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && rect.contains(self.mouse_pos)
    }

    /// Marks `rect` as covered by the UI for this frame.
    ///
    /// Pointer input starting inside a captured region belongs to the UI
    /// (see `UiScene::wants_pointer`).
    pub fn capture_region(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.regions.push(rect);
        }
    }

    // ── text measurement ──────────────────────────────────────────────────

    pub fn measure_text(&self, text: &str, font: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        self.font_system.measure_text(text, font, size, max_width)
    }

    /// Returns a [`LayoutCtx`] borrowing this painter's font system.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx { fonts: self.font_system }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, color);
    }

    /// Rectangle outline of `width` drawn inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        let w = width.min(rect.size.x * 0.5).min(rect.size.y * 0.5).max(0.0);
        if w <= 0.0 {
            return;
        }
        let Rect { origin, size } = rect;
        self.fill_rect(Rect::new(origin.x, origin.y, size.x, w), color);
        self.fill_rect(Rect::new(origin.x, rect.bottom() - w, size.x, w), color);
        self.fill_rect(Rect::new(origin.x, origin.y + w, w, size.y - 2.0 * w), color);
        self.fill_rect(Rect::new(rect.right() - w, origin.y + w, w, size.y - 2.0 * w), color);
    }

    /// Circle with optional border.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push(z, CircleCmd { center, radius, color, border });
    }

    /// Text at `origin` (top-left of the first line), wrapped at `max_width`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let z = self.next_z();
        self.draw_list.push(z, TextCmd { text: text.into(), font, size, color, origin, max_width });
    }

    /// Single line of text vertically centered in `rect`, clipped to it.
    pub fn label(&mut self, text: &str, font: FontId, size: f32, color: Color, rect: Rect) {
        let y = rect.origin.y + (rect.size.y - size) * 0.5;
        self.push_clip(rect);
        self.text(text, font, size, color, Vec2::new(rect.origin.x, y), None);
        self.pop_clip();
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`Painter::pop_clip`].
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::draw::DrawCmd;

    #[test]
    fn draws_get_increasing_z() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut regions = Vec::new();
        {
            let mut p = Painter::new(&mut list, &fonts, &mut regions, Vec2::default(), false);
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
            p.fill_circle(Vec2::new(5.0, 5.0), 3.0, Color::BLACK, None);
        }
        let z: Vec<i32> = list.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(z, vec![0, 1]);
    }

    #[test]
    fn stroke_rect_emits_four_edges() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut regions = Vec::new();
        {
            let mut p = Painter::new(&mut list, &fonts, &mut regions, Vec2::default(), false);
            p.stroke_rect(Rect::new(0.0, 0.0, 20.0, 10.0), 1.0, Color::WHITE);
        }
        let rects = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Rect(_))).count();
        assert_eq!(rects, 4);
    }

    #[test]
    fn empty_regions_are_not_captured() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut regions = Vec::new();
        {
            let mut p = Painter::new(&mut list, &fonts, &mut regions, Vec2::default(), false);
            p.capture_region(Rect::new(0.0, 0.0, 0.0, 10.0));
            p.capture_region(Rect::new(0.0, 0.0, 5.0, 10.0));
        }
        assert_eq!(regions, vec![Rect::new(0.0, 0.0, 5.0, 10.0)]);
    }
}
