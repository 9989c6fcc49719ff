use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Widget;

/// A horizontal slider for selecting a value in a range.
///
/// Pressing anywhere on the track jumps to that position; dragging follows
/// the cursor, even outside the track, until release. [`pick`](Self::pick)
/// reports the proposed value and the owner applies it.
pub struct Slider {
    /// Current value (clamped to [min, max]).
    value: f32,
    min: f32,
    max: f32,
    track_color: Color,
    fill_color: Color,
}

impl Slider {
    pub fn new(min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: min,
            min,
            max,
            track_color: Color::from_hex(0x303030),
            fill_color: Color::from_hex(0x2fa1d6),
        }
    }

    pub fn value(mut self, v: f32) -> Self {
        self.set_value(v);
        self
    }
    pub fn fill_color(mut self, v: Color) -> Self { self.fill_color = v; self }

    /// Updates the displayed value, clamped to the range. NaN is ignored.
    pub fn set_value(&mut self, v: f32) {
        if v.is_finite() {
            self.value = v.clamp(self.min, self.max);
        }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    /// Value under a pointer event that belongs to this slider: a press on
    /// the track, or a drag that started on it.
    pub fn pick(&self, event: &UiEvent, rect: Rect) -> Option<f32> {
        match event {
            UiEvent::Press { pos } if rect.contains(*pos) => Some(self.value_at(rect, pos.x)),
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start } if rect.contains(*start) => {
                Some(self.value_at(rect, pos.x))
            }
            _ => None,
        }
    }

    /// Normalized value in [0, 1].
    fn normalized(&self) -> f32 {
        if (self.max - self.min).abs() < f32::EPSILON {
            0.0
        } else {
            ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        }
    }

    fn value_at(&self, rect: Rect, x: f32) -> f32 {
        let t = rect.fraction_of(Vec2::new(x, rect.origin.y)).x;
        self.min + t * (self.max - self.min)
    }
}

impl Widget for Slider {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 150.0 };
        constraints.constrain(Vec2::new(w, 19.0))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(rect, self.track_color);

        let fill_w = rect.size.x * self.normalized();
        if fill_w > 0.0 {
            let fill = Rect::new(rect.origin.x, rect.origin.y, fill_w, rect.size.y);
            let color = if painter.is_hovered(rect) {
                let (r, g, b, a) = self.fill_color.to_straight();
                Color::from_straight(r + 0.08, g + 0.08, b + 0.08, a)
            } else {
                self.fill_color
            };
            painter.fill_rect(fill, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Rect {
        Rect::new(100.0, 0.0, 60.0, 20.0)
    }

    #[test]
    fn press_maps_position_to_range() {
        let s = Slider::new(-3.0, 3.0);
        let v = s.pick(&UiEvent::Press { pos: Vec2::new(130.0, 10.0) }, track());
        assert_eq!(v, Some(0.0));
        let v = s.pick(&UiEvent::Press { pos: Vec2::new(100.0, 10.0) }, track());
        assert_eq!(v, Some(-3.0));
    }

    #[test]
    fn drag_outside_track_clamps_to_ends() {
        let s = Slider::new(-3.0, 3.0);
        let ev = UiEvent::Drag { pos: Vec2::new(900.0, 50.0), start: Vec2::new(110.0, 10.0) };
        assert_eq!(s.pick(&ev, track()), Some(3.0));
    }

    #[test]
    fn drags_started_elsewhere_are_ignored() {
        let s = Slider::new(0.0, 1.0);
        let ev = UiEvent::Drag { pos: Vec2::new(130.0, 10.0), start: Vec2::new(10.0, 10.0) };
        assert_eq!(s.pick(&ev, track()), None);
    }

    #[test]
    fn release_reports_final_position() {
        let s = Slider::new(0.0, 10.0);
        let ev = UiEvent::DragEnd { pos: Vec2::new(145.0, 5.0), start: Vec2::new(120.0, 5.0) };
        let v = s.pick(&ev, track()).unwrap_or(f32::NAN);
        assert!((v - 7.5).abs() < 1e-5);
    }

    #[test]
    fn set_value_clamps_and_skips_nan() {
        let mut s = Slider::new(-1.0, 1.0).value(0.5);
        s.set_value(f32::NAN);
        assert_eq!(s.get(), 0.5);
        s.set_value(5.0);
        assert_eq!(s.get(), 1.0);
    }
}
