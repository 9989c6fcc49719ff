use prism_engine::coords::{Rect, Vec2};

/// Input events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Mouse moved to `pos` (fired every frame).
    Hover { pos: Vec2 },
    /// Primary button went down at `pos`. Starts a drag.
    Press { pos: Vec2 },
    /// Primary button held on a frame after the press.
    /// `pos` is the current cursor position; `start` is where the drag began.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released.
    ///
    /// Fires even when `pos` is outside the widget; use `rect.contains(start)`
    /// to check ownership of the drag.
    DragEnd { pos: Vec2, start: Vec2 },
    /// Primary button released at `pos`, after `DragEnd`. `start` is where the
    /// press went down; a click only belongs to a widget holding both.
    Click { pos: Vec2, start: Vec2 },
    /// Wheel motion in lines (positive = away from the user).
    ScrollWheel { pos: Vec2, delta: f32 },
}

impl UiEvent {
    /// Position where the gesture carrying this event started.
    ///
    /// Drags report their start; every other event reports its own position.
    pub fn origin(&self) -> Vec2 {
        match *self {
            UiEvent::Drag { start, .. } | UiEvent::DragEnd { start, .. } | UiEvent::Click { start, .. } => {
                start
            }
            UiEvent::Hover { pos } | UiEvent::Press { pos } | UiEvent::ScrollWheel { pos, .. } => pos,
        }
    }

    /// Current pointer position carried by this event.
    pub fn pos(&self) -> Vec2 {
        match *self {
            UiEvent::Hover { pos }
            | UiEvent::Press { pos }
            | UiEvent::Drag { pos, .. }
            | UiEvent::DragEnd { pos, .. }
            | UiEvent::Click { pos, .. }
            | UiEvent::ScrollWheel { pos, .. } => pos,
        }
    }

    /// `true` for a click that was both pressed and released inside `rect`.
    pub fn is_click_in(&self, rect: Rect) -> bool {
        matches!(*self, UiEvent::Click { pos, start } if rect.contains(pos) && rect.contains(start))
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings / parents.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_origin_is_start() {
        let ev = UiEvent::Drag { pos: Vec2::new(50.0, 5.0), start: Vec2::new(10.0, 5.0) };
        assert_eq!(ev.origin(), Vec2::new(10.0, 5.0));
        assert_eq!(ev.pos(), Vec2::new(50.0, 5.0));
    }

    #[test]
    fn click_origin_is_where_the_press_went_down() {
        let ev = UiEvent::Click { pos: Vec2::new(3.0, 4.0), start: Vec2::new(300.0, 4.0) };
        assert_eq!(ev.origin(), Vec2::new(300.0, 4.0));
        assert_eq!(ev.pos(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn click_in_needs_press_and_release_inside() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inside = Vec2::new(5.0, 5.0);
        let outside = Vec2::new(50.0, 5.0);
        assert!(UiEvent::Click { pos: inside, start: inside }.is_click_in(rect));
        assert!(!UiEvent::Click { pos: inside, start: outside }.is_click_in(rect));
        assert!(!UiEvent::Click { pos: outside, start: inside }.is_click_in(rect));
        assert!(!UiEvent::Press { pos: inside }.is_click_in(rect));
    }
}
