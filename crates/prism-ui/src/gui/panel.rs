use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;
use prism_engine::text::FontId;

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::text::{Align, Text};

use super::controller::ROW_PADDING;
use super::Controller;

const WIDTH: f32 = 245.0;
const RIGHT_MARGIN: f32 = 15.0;
const CLOSE_HEIGHT: f32 = 20.0;
const STRIPE: f32 = 3.0;
const LABEL_FRACTION: f32 = 0.4;
const FONT_SIZE: f32 = 11.0;

/// Column of controllers anchored to the top-right corner of the window,
/// with a "Close Controls" / "Open Controls" toggle underneath.
///
/// Used as the root widget of a `UiScene`: it receives the whole viewport
/// and lays itself out inside it.
pub struct ControlPanel {
    controllers: Vec<Box<dyn Controller>>,
    font: Option<FontId>,
    closed: bool,
}

struct PanelLayout {
    bounds: Rect,
    rows: Vec<Rect>,
    close: Rect,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self { controllers: Vec::new(), font: None, closed: false }
    }

    /// Font for names and readouts. Without one, text is omitted.
    pub fn font(mut self, font: Option<FontId>) -> Self {
        self.font = font;
        for c in &mut self.controllers {
            c.set_font(font);
        }
        self
    }

    pub fn with(mut self, controller: impl Controller + 'static) -> Self {
        self.add(controller);
        self
    }

    pub fn add(&mut self, mut controller: impl Controller + 'static) -> &mut Self {
        controller.set_font(self.font);
        log::debug!("control panel: added \"{}\"", controller.name());
        self.controllers.push(Box::new(controller));
        self
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    fn layout(&self, viewport: Rect) -> PanelLayout {
        let x = viewport.right() - WIDTH - RIGHT_MARGIN;
        let mut y = viewport.origin.y;

        let mut rows = Vec::new();
        if !self.closed {
            for c in &self.controllers {
                let h = c.height();
                rows.push(Rect::new(x, y, WIDTH, h));
                y += h;
            }
        }

        let close = Rect::new(x, y, WIDTH, CLOSE_HEIGHT);
        let bounds = Rect::new(x, viewport.origin.y, WIDTH, close.bottom() - viewport.origin.y);
        PanelLayout { bounds, rows, close }
    }

    /// Splits a row into its name area and control area.
    fn split_row(row: Rect) -> (Rect, Rect) {
        let (label, control) = row.split_left((row.size.x * LABEL_FRACTION).floor());
        (
            Edges { left: STRIPE + 5.0, ..Edges::default() }.inset(label),
            Edges { top: ROW_PADDING, bottom: ROW_PADDING, right: 4.0, left: 0.0 }.inset(control),
        )
    }

    fn paint_label(&self, painter: &mut Painter, text: &str, area: Rect, color: Color, centered: bool) {
        let Some(font) = self.font else { return };
        let align = if centered { Align::Center } else { Align::Start };
        Text::new(text, font, FONT_SIZE, color).align(align).paint(painter, area);
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ControlPanel {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.max
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let layout = self.layout(rect);
        painter.capture_region(layout.bounds);

        for (c, &row) in self.controllers.iter().zip(&layout.rows) {
            painter.fill_rect(row, Color::from_hex(0x1a1a1a));
            painter.fill_rect(Rect::new(row.origin.x, row.origin.y, STRIPE, row.size.y), c.accent());
            painter.fill_rect(Rect::new(row.origin.x, row.bottom() - 1.0, row.size.x, 1.0), Color::from_hex(0x2c2c2c));

            let (label, control) = Self::split_row(row);
            let name_area = Rect::new(label.origin.x, row.origin.y, label.size.x, row.size.y.min(super::ROW_HEIGHT));
            self.paint_label(painter, c.name(), name_area, Color::from_hex(0xeeeeee), false);
            c.paint(painter, control);
        }

        let close_bg = if painter.is_hovered(layout.close) { 0x111111 } else { 0x000000 };
        painter.fill_rect(layout.close, Color::from_hex(close_bg));
        let caption = if self.closed { "Open Controls" } else { "Close Controls" };
        self.paint_label(painter, caption, layout.close, Color::from_hex(0xeeeeee), true);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let layout = self.layout(rect);

        if event.is_click_in(layout.close) {
            self.closed = !self.closed;
            log::debug!("control panel {}", if self.closed { "closed" } else { "opened" });
            return EventResult::Consumed;
        }

        for (c, &row) in self.controllers.iter_mut().zip(&layout.rows) {
            let (_, control) = Self::split_row(row);
            if c.on_event(event, control).is_consumed() {
                return EventResult::Consumed;
            }
        }

        match event {
            UiEvent::Hover { .. } => EventResult::Ignored,
            _ if layout.bounds.contains(event.origin()) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn sync(&mut self) {
        for c in &mut self.controllers {
            c.sync();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::{Binding, BooleanController, ColorController, NumberController, ROW_HEIGHT};
    use crate::scene::{UiInput, UiScene};
    use crate::widget::Element;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn click(pos: Vec2) -> UiEvent {
        UiEvent::Click { pos, start: pos }
    }

    struct Bound {
        y: Rc<RefCell<f32>>,
        visible: Rc<RefCell<bool>>,
        color: Rc<RefCell<u32>>,
    }

    fn panel() -> (ControlPanel, Bound) {
        let b = Bound {
            y: Rc::new(RefCell::new(0.0)),
            visible: Rc::new(RefCell::new(true)),
            color: Rc::new(RefCell::new(0x00ffff)),
        };
        let p = ControlPanel::new()
            .with(NumberController::new("y", Binding::cell(b.y.clone()), -3.0, 3.0).step(0.01))
            .with(BooleanController::new("visible", Binding::cell(b.visible.clone())))
            .with(ColorController::new("color", Binding::cell(b.color.clone())));
        (p, b)
    }

    #[test]
    fn anchored_top_right() {
        let (p, _) = panel();
        let l = p.layout(viewport());
        assert_eq!(l.bounds.origin, Vec2::new(800.0 - 245.0 - 15.0, 0.0));
        assert_eq!(l.rows[0], Rect::new(540.0, 0.0, 245.0, ROW_HEIGHT));
        assert_eq!(l.rows[1].origin.y, ROW_HEIGHT);
        assert_eq!(l.close.origin.y, l.rows[2].bottom());
    }

    #[test]
    fn close_button_hides_rows() {
        let (mut p, _) = panel();
        let close = p.layout(viewport()).close;
        p.on_event(&click(close.center()), viewport());
        assert!(p.is_closed());

        let l = p.layout(viewport());
        assert!(l.rows.is_empty());
        assert_eq!(l.close.origin.y, 0.0);
    }

    #[test]
    fn click_on_boolean_row_toggles_binding() {
        let (mut p, b) = panel();
        let row = p.layout(viewport()).rows[1];
        let (_, control) = ControlPanel::split_row(row);
        p.on_event(&click(control.center()), viewport());
        assert!(!*b.visible.borrow());
    }

    #[test]
    fn press_on_slider_row_writes_number() {
        let (mut p, b) = panel();
        let row = p.layout(viewport()).rows[0];
        let (_, control) = ControlPanel::split_row(row);
        p.on_event(&UiEvent::Press { pos: Vec2::new(control.origin.x, control.center().y) }, viewport());
        assert!((*b.y.borrow() + 3.0).abs() < 1e-5);
    }

    #[test]
    fn closed_panel_routes_nothing_to_controllers() {
        let (mut p, b) = panel();
        let row = p.layout(viewport()).rows[1];
        let (_, control) = ControlPanel::split_row(row);
        p.set_closed(true);
        p.on_event(&click(control.center()), viewport());
        assert!(*b.visible.borrow());
    }

    #[test]
    fn ui_scene_captures_panel_region() {
        let (p, _) = panel();
        let mut ui = UiScene::new();
        let mut root = Element::new(p);
        let _ = ui.frame(&mut root, Vec2::new(800.0, 600.0), &UiInput::default());
        assert!(ui.wants_pointer(Vec2::new(600.0, 10.0)));
        assert!(!ui.wants_pointer(Vec2::new(100.0, 300.0)));
    }

    #[test]
    fn frame_syncs_controllers_to_bound_values() {
        let (p, b) = panel();
        let mut ui = UiScene::new();
        let mut root = Element::new(p);
        *b.visible.borrow_mut() = false;
        let _ = ui.frame(&mut root, Vec2::new(800.0, 600.0), &UiInput::default());

        // After sync a click shows the checkbox toggling from the new value.
        let row = Rect::new(540.0, ROW_HEIGHT, 245.0, ROW_HEIGHT);
        let (_, control) = ControlPanel::split_row(row);
        let click = UiInput {
            mouse_pos: control.center(),
            mouse_went_down: true,
            mouse_clicked: true,
            ..UiInput::default()
        };
        let _ = ui.frame(&mut root, Vec2::new(800.0, 600.0), &click);
        assert!(*b.visible.borrow());
    }

    #[test]
    fn viewport_drag_released_over_panel_changes_nothing() {
        let (p, b) = panel();
        let layout = p.layout(viewport());
        let (_, checkbox) = ControlPanel::split_row(layout.rows[1]);
        let close = layout.close;
        let mut ui = UiScene::new();
        let mut root = Element::new(p);
        let vp = Vec2::new(800.0, 600.0);

        for target in [checkbox.center(), close.center()] {
            let press = UiInput {
                mouse_pos: Vec2::new(100.0, 300.0),
                mouse_pressed: true,
                mouse_went_down: true,
                ..UiInput::default()
            };
            let drag = UiInput { mouse_pos: target, mouse_pressed: true, ..UiInput::default() };
            let release = UiInput { mouse_pos: target, mouse_clicked: true, ..UiInput::default() };
            let _ = ui.frame(&mut root, vp, &press);
            let _ = ui.frame(&mut root, vp, &drag);
            let _ = ui.frame(&mut root, vp, &release);
        }

        assert!(*b.visible.borrow());
        assert!(ui.wants_pointer(checkbox.center()), "panel should still be open");
    }
}
