use prism_engine::coords::{Rect, Vec2};
use prism_engine::draw::Border;
use prism_engine::paint::Color;
use prism_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Widget;

const SWATCH_H: f32 = 19.0;
const FIELD_H: f32 = 100.0;
const STRIP_W: f32 = 15.0;
const GAP: f32 = 3.0;
const FIELD_CELLS: (u32, u32) = (16, 10);
const STRIP_BANDS: u32 = 24;

/// Hue/saturation/value color picker emitting `0xRRGGBB`.
///
/// Layout, top to bottom: a swatch showing the current color and its hex
/// code, then a saturation (x) / value (y) field with a hue strip at its
/// right. Pressing or dragging in the field or strip picks a color through
/// [`pick`](Self::pick).
pub struct ColorPicker {
    hex: u32,
    hue: f32,
    sat: f32,
    val: f32,
    font: Option<FontId>,
}

struct Parts {
    swatch: Rect,
    field: Rect,
    strip: Rect,
}

impl ColorPicker {
    /// Height the picker lays itself out in.
    pub const HEIGHT: f32 = SWATCH_H + GAP + FIELD_H;

    pub fn new(hex: u32) -> Self {
        let mut picker = Self { hex: 0, hue: 0.0, sat: 0.0, val: 0.0, font: None };
        picker.set_hex(hex);
        picker
    }

    pub(crate) fn set_font(&mut self, font: Option<FontId>) {
        self.font = font;
    }

    pub fn hex(&self) -> u32 {
        self.hex
    }

    /// Updates the displayed color.
    ///
    /// Hue is kept for achromatic colors so the field does not jump to red.
    pub fn set_hex(&mut self, hex: u32) {
        let hex = hex & 0xff_ffff;
        if hex == self.hex && self.val > 0.0 {
            return;
        }
        let (h, s, v) = Color::from_hex(hex).to_hsv();
        if s > 0.0 {
            self.hue = h;
        }
        self.sat = s;
        self.val = v;
        self.hex = hex;
    }

    /// Picks a color from a press, or from a drag that started in the field
    /// or the hue strip. Returns the new hex value.
    pub fn pick(&mut self, event: &UiEvent, rect: Rect) -> Option<u32> {
        let (pos, start) = match *event {
            UiEvent::Press { pos } => (pos, pos),
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start } => (pos, start),
            _ => return None,
        };

        let parts = Self::layout(rect);
        if parts.field.contains(start) {
            let f = parts.field.fraction_of(pos);
            self.sat = f.x;
            self.val = 1.0 - f.y;
        } else if parts.strip.contains(start) {
            self.hue = parts.strip.fraction_of(pos).y * 360.0;
        } else {
            return None;
        }

        self.hex = Color::from_hsv(self.hue, self.sat, self.val).to_hex();
        Some(self.hex)
    }

    fn layout(rect: Rect) -> Parts {
        let swatch = Rect::new(rect.origin.x, rect.origin.y, rect.size.x, SWATCH_H);
        let body = Rect::new(rect.origin.x, rect.origin.y + SWATCH_H + GAP, rect.size.x, FIELD_H);
        let (field, strip) = body.split_left((body.size.x - STRIP_W - GAP).max(0.0));
        let strip = Rect::new(strip.origin.x + GAP, strip.origin.y, (strip.size.x - GAP).max(0.0), strip.size.y);
        Parts { swatch, field, strip }
    }
}

impl Widget for ColorPicker {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 150.0 };
        constraints.constrain(Vec2::new(w, Self::HEIGHT))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let parts = Self::layout(rect);
        let current = Color::from_hex(self.hex);

        painter.fill_rect(parts.swatch, current);
        if let Some(font) = self.font {
            let text = if self.val > 0.5 && self.sat < 0.6 { Color::BLACK } else { Color::WHITE };
            let label = Rect::new(parts.swatch.origin.x + 4.0, parts.swatch.origin.y, parts.swatch.size.x - 4.0, SWATCH_H);
            painter.label(&format!("#{:06x}", self.hex), font, 11.0, text, label);
        }

        let (cols, rows) = FIELD_CELLS;
        let cw = parts.field.size.x / cols as f32;
        let ch = parts.field.size.y / rows as f32;
        for row in 0..rows {
            for col in 0..cols {
                let s = (col as f32 + 0.5) / cols as f32;
                let v = 1.0 - (row as f32 + 0.5) / rows as f32;
                let cell = Rect::new(
                    parts.field.origin.x + col as f32 * cw,
                    parts.field.origin.y + row as f32 * ch,
                    cw.ceil(),
                    ch.ceil(),
                );
                painter.fill_rect(cell, Color::from_hsv(self.hue, s, v));
            }
        }

        let bh = parts.strip.size.y / STRIP_BANDS as f32;
        for band in 0..STRIP_BANDS {
            let h = (band as f32 + 0.5) / STRIP_BANDS as f32 * 360.0;
            let r = Rect::new(parts.strip.origin.x, parts.strip.origin.y + band as f32 * bh, parts.strip.size.x, bh.ceil());
            painter.fill_rect(r, Color::from_hsv(h, 1.0, 1.0));
        }

        let marker = Vec2::new(
            parts.field.origin.x + self.sat * parts.field.size.x,
            parts.field.origin.y + (1.0 - self.val) * parts.field.size.y,
        );
        painter.fill_circle(marker, 4.0, current, Some(Border::new(1.5, Color::WHITE)));

        let hy = parts.strip.origin.y + self.hue / 360.0 * parts.strip.size.y;
        painter.fill_rect(Rect::new(parts.strip.origin.x - 1.0, hy - 1.0, parts.strip.size.x + 2.0, 2.0), Color::WHITE);
    }
}
