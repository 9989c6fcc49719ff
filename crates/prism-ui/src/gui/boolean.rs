use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::checkbox::Checkbox;

use super::{Binding, Controller};

const ACCENT: u32 = 0x806787;

/// Checkbox controller for a bound `bool`.
pub struct BooleanController {
    name: String,
    binding: Binding<bool>,
    checkbox: Checkbox,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl BooleanController {
    pub fn new(name: impl Into<String>, binding: Binding<bool>) -> Self {
        let checkbox = Checkbox::new().checked(binding.get());
        Self { name: name.into(), binding, checkbox, on_change: None }
    }

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn value(&self) -> bool {
        self.binding.get()
    }

    /// Writes the binding and fires `on_change`.
    pub fn set_value(&mut self, v: bool) {
        self.binding.set(v);
        self.checkbox.set_checked(v);
        log::debug!("{}: {v}", self.name);
        if let Some(f) = &mut self.on_change {
            f(v);
        }
    }
}

impl Controller for BooleanController {
    fn name(&self) -> &str {
        &self.name
    }

    fn accent(&self) -> Color {
        Color::from_hex(ACCENT)
    }

    fn sync(&mut self) {
        self.checkbox.set_checked(self.binding.get());
    }

    fn paint(&self, painter: &mut Painter, control: Rect) {
        self.checkbox.paint(painter, control);
    }

    fn on_event(&mut self, event: &UiEvent, control: Rect) -> EventResult {
        // The whole control area toggles, like clicking a label.
        let Some(v) = self.checkbox.pick(event, control) else {
            return EventResult::Ignored;
        };
        self.set_value(v);
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn click(x: f32, y: f32) -> UiEvent {
        let pos = Vec2::new(x, y);
        UiEvent::Click { pos, start: pos }
    }

    #[test]
    fn click_flips_bound_value() {
        let shared = Rc::new(RefCell::new(true));
        let mut c = BooleanController::new("visible", Binding::cell(shared.clone()));
        let control = Rect::new(100.0, 4.0, 130.0, 19.0);

        c.on_event(&click(150.0, 10.0), control);
        assert!(!*shared.borrow());
        c.on_event(&click(101.0, 10.0), control);
        assert!(*shared.borrow());
    }

    #[test]
    fn toggle_uses_the_bound_value_after_sync() {
        let shared = Rc::new(RefCell::new(true));
        let mut c = BooleanController::new("visible", Binding::cell(shared.clone()));
        *shared.borrow_mut() = false;
        c.sync();

        let control = Rect::new(0.0, 0.0, 50.0, 19.0);
        c.on_event(&click(5.0, 5.0), control);
        assert!(*shared.borrow());
    }

    #[test]
    fn release_after_press_outside_keeps_value() {
        let shared = Rc::new(RefCell::new(true));
        let mut c = BooleanController::new("visible", Binding::cell(shared.clone()));
        let control = Rect::new(100.0, 4.0, 130.0, 19.0);

        let ev = UiEvent::Click { pos: control.center(), start: Vec2::new(10.0, 300.0) };
        assert_eq!(c.on_event(&ev, control), EventResult::Ignored);
        assert!(*shared.borrow());
    }

    #[test]
    fn on_change_reports_new_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut c = BooleanController::new("visible", Binding::new(|| true, |_| {}))
            .on_change(move |v| sink.borrow_mut().push(v));
        c.set_value(false);
        assert_eq!(*seen.borrow(), vec![false]);
    }
}
