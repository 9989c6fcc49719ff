use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;
use prism_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Horizontal placement of a [`Text`] inside its rect.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    Center,
}

/// One line of text, vertically centered and clipped to the rect it is
/// painted into.
pub struct Text {
    pub text: String,
    pub font: FontId,
    pub size: f32,
    pub color: Color,
    pub align: Align,
}

impl Text {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color) -> Self {
        Self { text: text.into(), font, size, color, align: Align::Start }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

}

impl Align {
    /// Top-left of a run of size `measured` laid out in `rect`.
    fn place(self, rect: Rect, measured: Vec2) -> Vec2 {
        let x = match self {
            Align::Start => rect.origin.x,
            Align::Center => rect.origin.x + (rect.size.x - measured.x) * 0.5,
        };
        Vec2::new(x, rect.origin.y + (rect.size.y - measured.y) * 0.5)
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(ctx.fonts.measure_text(&self.text, self.font, self.size, None))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let measured = painter.measure_text(&self.text, self.font, self.size, None);
        let origin = self.align.place(rect, measured);
        painter.push_clip(rect);
        painter.text(&self.text, self.font, self.size, self.color, origin, None);
        painter.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_text_sits_in_the_middle() {
        let at = Align::Center.place(Rect::new(0.0, 0.0, 100.0, 20.0), Vec2::new(60.0, 10.0));
        assert_eq!(at, Vec2::new(20.0, 5.0));
    }

    #[test]
    fn start_aligned_text_keeps_the_left_edge() {
        let at = Align::Start.place(Rect::new(8.0, 40.0, 100.0, 27.0), Vec2::new(6.0, 11.0));
        assert_eq!(at, Vec2::new(8.0, 48.0));
    }
}
