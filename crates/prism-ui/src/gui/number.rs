use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;
use prism_engine::text::FontId;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::slider::Slider;

use super::controller::decimals_for_step;
use super::{Binding, Controller};

const ACCENT: u32 = 0x2fa1d6;

/// Numeric controller: slider plus value readout for a bound `f32`.
///
/// Every write is clamped to `[min, max]` and then snapped to the step;
/// out-of-range writes are never rejected. Non-finite writes are dropped.
pub struct NumberController {
    name: String,
    binding: Binding<f32>,
    min: f32,
    max: f32,
    step: Option<f32>,
    slider: Slider,
    font: Option<FontId>,
    on_change: Option<Box<dyn FnMut(f32)>>,
}

impl NumberController {
    pub fn new(name: impl Into<String>, binding: Binding<f32>, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let slider = Slider::new(min, max).value(binding.get()).fill_color(Color::from_hex(ACCENT));
        Self {
            name: name.into(),
            binding,
            min,
            max,
            step: None,
            slider,
            font: None,
            on_change: None,
        }
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = (step.is_finite() && step > 0.0).then_some(step);
        self
    }

    pub fn on_change(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Current bound value.
    pub fn value(&self) -> f32 {
        self.binding.get()
    }

    /// Clamps, snaps, writes the binding and fires `on_change`.
    ///
    /// Returns the value actually written.
    pub fn set_value(&mut self, raw: f32) -> Option<f32> {
        let Some(v) = self.constrain(raw) else {
            log::debug!("{}: ignoring non-finite value {raw}", self.name);
            return None;
        };
        self.binding.set(v);
        self.slider.set_value(v);
        log::debug!("{}: {v}", self.name);
        if let Some(f) = &mut self.on_change {
            f(v);
        }
        Some(v)
    }

    fn constrain(&self, raw: f32) -> Option<f32> {
        if raw.is_nan() {
            return None;
        }
        let v = raw.clamp(self.min, self.max);
        let v = match self.step {
            Some(step) => ((v / step).round() * step).clamp(self.min, self.max),
            None => v,
        };
        Some(v)
    }

    fn format(&self, v: f32) -> String {
        match self.step {
            Some(step) => format!("{v:.*}", decimals_for_step(step)),
            None => format!("{v:.3}"),
        }
    }

    fn split(control: Rect) -> (Rect, Rect) {
        let (slider, rest) = control.split_left((control.size.x * 0.66).floor());
        let readout = Rect::new(rest.origin.x + 6.0, rest.origin.y, (rest.size.x - 6.0).max(0.0), rest.size.y);
        (slider, readout)
    }
}

impl Controller for NumberController {
    fn name(&self) -> &str {
        &self.name
    }

    fn accent(&self) -> Color {
        Color::from_hex(ACCENT)
    }

    fn set_font(&mut self, font: Option<FontId>) {
        self.font = font;
    }

    fn sync(&mut self) {
        self.slider.set_value(self.binding.get());
    }

    fn paint(&self, painter: &mut Painter, control: Rect) {
        let (slider, readout) = Self::split(control);
        self.slider.paint(painter, slider);

        painter.fill_rect(readout, Color::from_hex(0x303030));
        if let Some(font) = self.font {
            let text = self.format(self.slider.get());
            let inner = Rect::new(readout.origin.x + 3.0, readout.origin.y, readout.size.x - 3.0, readout.size.y);
            painter.label(&text, font, 11.0, Color::from_hex(ACCENT), inner);
        }
    }

    fn on_event(&mut self, event: &UiEvent, control: Rect) -> EventResult {
        let (slider, _) = Self::split(control);

        if let Some(raw) = self.slider.pick(event, slider) {
            self.set_value(raw);
            return EventResult::Consumed;
        }

        if let UiEvent::ScrollWheel { pos, delta } = *event {
            if control.contains(pos) {
                let step = self.step.unwrap_or((self.max - self.min) / 100.0);
                self.set_value(self.value() + delta.signum() * step);
                return EventResult::Consumed;
            }
        }

        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn controller(initial: f32) -> (NumberController, Rc<RefCell<f32>>) {
        let shared = Rc::new(RefCell::new(initial));
        let c = NumberController::new("y", Binding::cell(shared.clone()), -3.0, 3.0).step(0.01);
        (c, shared)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn writes_in_range_are_snapped_to_step() {
        let (mut c, shared) = controller(0.0);
        c.set_value(1.234_9);
        assert!(close(*shared.borrow(), 1.23));
    }

    #[test]
    fn writes_out_of_range_are_clamped_not_rejected() {
        let (mut c, shared) = controller(0.0);
        assert!(c.set_value(10.0).is_some_and(|v| close(v, 3.0)));
        assert!(close(*shared.borrow(), 3.0));
        assert!(c.set_value(-7.5).is_some_and(|v| close(v, -3.0)));
        assert!(close(*shared.borrow(), -3.0));
        assert!(c.set_value(f32::INFINITY).is_some_and(|v| close(v, 3.0)));
    }

    #[test]
    fn nan_is_dropped() {
        let (mut c, shared) = controller(0.5);
        assert_eq!(c.set_value(f32::NAN), None);
        assert_eq!(*shared.borrow(), 0.5);
    }

    #[test]
    fn on_change_sees_written_value() {
        let seen = Rc::new(Cell::new(0.0));
        let sink = seen.clone();
        let (c, _) = controller(0.0);
        let mut c = c.on_change(move |v| sink.set(v));
        c.set_value(2.0);
        assert!(close(seen.get(), 2.0));
    }

    #[test]
    fn sync_follows_outside_changes() {
        let (mut c, shared) = controller(0.0);
        *shared.borrow_mut() = -1.5;
        c.sync();
        assert_eq!(c.slider.get(), -1.5);
    }

    #[test]
    fn dragging_the_slider_writes_the_binding() {
        let (mut c, shared) = controller(0.0);
        let control = Rect::new(0.0, 0.0, 100.0, 19.0);
        let (slider, _) = NumberController::split(control);
        let start = Vec2::new(slider.origin.x + 1.0, 5.0);
        let ev = UiEvent::Drag { pos: Vec2::new(slider.right() + 500.0, 5.0), start };
        assert!(c.on_event(&ev, control).is_consumed());
        assert!(close(*shared.borrow(), 3.0));
    }

    #[test]
    fn wheel_nudges_by_one_step() {
        let (mut c, shared) = controller(1.0);
        let control = Rect::new(0.0, 0.0, 100.0, 19.0);
        c.on_event(&UiEvent::ScrollWheel { pos: Vec2::new(90.0, 5.0), delta: 3.0 }, control);
        assert!(close(*shared.borrow(), 1.01));
    }

    #[test]
    fn readout_uses_step_decimals() {
        let (c, _) = controller(0.0);
        assert_eq!(c.format(-1.5), "-1.50");
    }
}
