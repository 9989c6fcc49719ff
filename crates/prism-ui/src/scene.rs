use prism_engine::coords::{Rect, Vec2};
use prism_engine::draw::DrawList;
use prism_engine::input::{InputFrame, InputState, MouseButton};
use prism_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button goes down.
    pub mouse_went_down: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
    /// Accumulated scroll wheel delta this frame, in lines.
    pub scroll_delta: f32,
}

impl UiInput {
    /// Builds the snapshot from the engine's per-window input.
    pub fn from_engine(input: &InputState, frame: &InputFrame) -> Self {
        let (mx, my) = input.pointer_pos.unwrap_or((-1.0, -1.0));
        Self {
            mouse_pos: Vec2::new(mx, my),
            mouse_pressed: input.button_down(MouseButton::Left),
            mouse_went_down: frame.buttons_pressed.contains(&MouseButton::Left),
            mouse_clicked: frame.buttons_released.contains(&MouseButton::Left),
            scroll_delta: frame.scroll_delta,
        }
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared UI resources across frames.
///
/// Owns the `FontSystem`, the `DrawList` populated by [`UiScene::frame`], the
/// drag in progress and the screen regions the last frame's widgets covered.
/// The GPU renderers live elsewhere (see `OverlayRenderer`) and consume
/// `draw_list` + `font_system`.
pub struct UiScene {
    pub font_system: FontSystem,
    pub draw_list: DrawList,
    drag_start: Option<Vec2>,
    regions: Vec<Rect>,
}

impl UiScene {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            draw_list: DrawList::new(),
            drag_start: None,
            regions: Vec::new(),
        }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// `true` when pointer input at `pos` belongs to the UI: the cursor is over
    /// a captured region, or a drag that started over one is in progress.
    pub fn wants_pointer(&self, pos: Vec2) -> bool {
        let over = |p: Vec2| self.regions.iter().any(|r| r.contains(p));
        over(pos) || self.drag_start.is_some_and(over)
    }

    /// Runs one UI frame on the retained `root`: sync, events, then paint.
    ///
    /// Events are hit-tested against the same layout that is painted, and
    /// `wants_pointer` answers from the regions captured by this paint.
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput) -> &mut DrawList {
        self.draw_list.clear();

        root.sync();

        let ctx = LayoutCtx { fonts: &self.font_system };
        let _ = root.measure(Constraints::loose(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        for event in self.route_input(input) {
            root.on_event(&event, rect);
        }

        self.regions.clear();
        {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                &mut self.regions,
                input.mouse_pos,
                input.mouse_pressed,
            );
            root.paint(&mut painter, rect);
        }

        &mut self.draw_list
    }

    /// Turns a frame's raw input into the ordered event sequence and
    /// advances the drag state.
    fn route_input(&mut self, input: &UiInput) -> Vec<UiEvent> {
        let pos = input.mouse_pos;
        let mut events = vec![UiEvent::Hover { pos }];

        if input.mouse_went_down {
            self.drag_start = Some(pos);
            events.push(UiEvent::Press { pos });
        } else if input.mouse_pressed {
            if let Some(start) = self.drag_start {
                events.push(UiEvent::Drag { pos, start });
            }
        }

        if input.mouse_clicked {
            if let Some(start) = self.drag_start.take() {
                events.push(UiEvent::DragEnd { pos, start });
                events.push(UiEvent::Click { pos, start });
            }
        }

        if input.scroll_delta != 0.0 {
            events.push(UiEvent::ScrollWheel { pos, delta: input.scroll_delta });
        }

        events
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventResult;
    use crate::widget::Widget;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records routed events and captures a fixed region when painted.
    struct Probe {
        log: Rc<RefCell<Vec<UiEvent>>>,
        region: Rect,
    }

    impl Widget for Probe {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.max
        }

        fn paint(&self, painter: &mut Painter, _rect: Rect) {
            painter.capture_region(self.region);
        }

        fn on_event(&mut self, event: &UiEvent, _rect: Rect) -> EventResult {
            self.log.borrow_mut().push(event.clone());
            EventResult::Consumed
        }
    }

    fn probe() -> (Element, Rc<RefCell<Vec<UiEvent>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let el = Element::new(Probe { log: log.clone(), region: Rect::new(0.0, 0.0, 100.0, 100.0) });
        (el, log)
    }

    fn input(x: f32, y: f32) -> UiInput {
        UiInput { mouse_pos: Vec2::new(x, y), ..Default::default() }
    }

    #[test]
    fn press_drag_release_sequence() {
        let mut ui = UiScene::new();
        let (mut root, log) = probe();
        let vp = Vec2::new(800.0, 600.0);

        let _ = ui.frame(&mut root, vp, &UiInput { mouse_pressed: true, mouse_went_down: true, ..input(10.0, 10.0) });
        let _ = ui.frame(&mut root, vp, &UiInput { mouse_pressed: true, ..input(40.0, 10.0) });
        let _ = ui.frame(&mut root, vp, &UiInput { mouse_clicked: true, ..input(50.0, 12.0) });

        let start = Vec2::new(10.0, 10.0);
        let events: Vec<UiEvent> = log
            .borrow()
            .iter()
            .filter(|e| !matches!(e, UiEvent::Hover { .. }))
            .cloned()
            .collect();
        assert_eq!(
            events,
            vec![
                UiEvent::Press { pos: start },
                UiEvent::Drag { pos: Vec2::new(40.0, 10.0), start },
                UiEvent::DragEnd { pos: Vec2::new(50.0, 12.0), start },
                UiEvent::Click { pos: Vec2::new(50.0, 12.0), start },
            ]
        );
    }

    #[test]
    fn press_and_release_in_one_frame() {
        let mut ui = UiScene::new();
        let (mut root, log) = probe();
        let _ = ui.frame(
            &mut root,
            Vec2::new(800.0, 600.0),
            &UiInput { mouse_went_down: true, mouse_clicked: true, ..input(5.0, 5.0) },
        );
        let kinds: Vec<_> = log.borrow().iter().map(std::mem::discriminant).collect();
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(
            kinds,
            vec![
                std::mem::discriminant(&UiEvent::Hover { pos: p }),
                std::mem::discriminant(&UiEvent::Press { pos: p }),
                std::mem::discriminant(&UiEvent::DragEnd { pos: p, start: p }),
                std::mem::discriminant(&UiEvent::Click { pos: p, start: p }),
            ]
        );
    }

    #[test]
    fn wants_pointer_follows_captured_regions_and_drags() {
        let mut ui = UiScene::new();
        let (mut root, _) = probe();
        let vp = Vec2::new(800.0, 600.0);

        let _ = ui.frame(&mut root, vp, &input(0.0, 0.0));
        assert!(ui.wants_pointer(Vec2::new(50.0, 50.0)));
        assert!(!ui.wants_pointer(Vec2::new(400.0, 300.0)));

        // A drag that starts over the UI keeps it even after leaving the region.
        let _ = ui.frame(&mut root, vp, &UiInput { mouse_pressed: true, mouse_went_down: true, ..input(50.0, 50.0) });
        assert!(ui.wants_pointer(Vec2::new(400.0, 300.0)));

        let _ = ui.frame(&mut root, vp, &UiInput { mouse_clicked: true, ..input(400.0, 300.0) });
        assert!(!ui.wants_pointer(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn scroll_is_routed_with_position() {
        let mut ui = UiScene::new();
        let (mut root, log) = probe();
        let _ = ui.frame(&mut root, Vec2::new(800.0, 600.0), &UiInput { scroll_delta: -2.0, ..input(7.0, 8.0) });
        assert!(log
            .borrow()
            .contains(&UiEvent::ScrollWheel { pos: Vec2::new(7.0, 8.0), delta: -2.0 }));
    }
}
