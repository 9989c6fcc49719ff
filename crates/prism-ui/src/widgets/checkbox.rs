use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Widget;

/// A square checkbox. The owner decides what a click does through [`pick`](Self::pick).
pub struct Checkbox {
    checked: bool,
    box_size: f32,
    bg: Color,
    checked_color: Color,
    border_color: Color,
}

impl Checkbox {
    pub fn new() -> Self {
        Self {
            checked: false,
            box_size: 12.0,
            bg: Color::from_hex(0x303030),
            checked_color: Color::from_hex(0x806787),
            border_color: Color::from_hex(0x555555),
        }
    }

    pub fn checked(mut self, v: bool) -> Self { self.checked = v; self }

    /// Updates the displayed state.
    pub fn set_checked(&mut self, v: bool) {
        self.checked = v;
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// New state if `event` is a click pressed and released inside `rect`.
    pub fn pick(&self, event: &UiEvent, rect: Rect) -> Option<bool> {
        event.is_click_in(rect).then_some(!self.checked)
    }

    fn box_rect(&self, rect: Rect) -> Rect {
        let s = self.box_size.min(rect.size.y);
        Rect::new(rect.origin.x, rect.origin.y + (rect.size.y - s) * 0.5, s, s)
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Checkbox {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::new(self.box_size, self.box_size))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let b = self.box_rect(rect);
        painter.fill_rect(b, self.bg);

        let border = if painter.is_hovered(rect) { Color::from_hex(0x999999) } else { self.border_color };
        painter.stroke_rect(b, 1.0, border);

        if self.checked {
            let m = (b.size.x * 0.25).floor();
            let mark = Rect::new(b.origin.x + m, b.origin.y + m, b.size.x - 2.0 * m, b.size.y - 2.0 * m);
            painter.fill_rect(mark, self.checked_color);
        }
    }
}
