use std::collections::HashSet;

use super::{InputEvent, MouseButton};

/// Held buttons and pointer position of one window.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,
    /// `None` while the pointer is outside the window.
    pub pointer_pos: Option<(f32, f32)>,
    pub buttons_down: HashSet<MouseButton>,
}

/// What changed since the last frame. Cleared by the runtime after each
/// `on_frame`.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
    /// Pointer motion in logical pixels.
    pub pointer_delta: (f32, f32),
    /// Wheel motion in lines.
    pub scroll_delta: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.pointer_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }
}

impl InputState {
    /// Folds `ev` into the held state and records the transition in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::PointerMoved { x, y } => {
                if let Some((px, py)) = self.pointer_pos {
                    frame.pointer_delta.0 += x - px;
                    frame.pointer_delta.1 += y - py;
                }
                self.pointer_pos = Some((x, y));
            }
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::PointerButton { button, pressed: true } => {
                if self.buttons_down.insert(button) {
                    frame.buttons_pressed.insert(button);
                }
            }
            InputEvent::PointerButton { button, pressed: false } => {
                if self.buttons_down.remove(&button) {
                    frame.buttons_released.insert(button);
                }
            }
            InputEvent::Wheel { lines } => frame.scroll_delta += lines,
            InputEvent::Focused(focused) => {
                self.focused = focused;
                // no release event arrives for a press that lost focus
                if !focused {
                    self.buttons_down.clear();
                }
            }
        }
        frame.events.push(ev);
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(pressed: bool) -> InputEvent {
        InputEvent::PointerButton { button: MouseButton::Left, pressed }
    }

    #[test]
    fn motion_accumulates_after_the_first_sample() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 100.0, y: 50.0 });
        assert_eq!(frame.pointer_delta, (0.0, 0.0));

        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 103.0, y: 54.0 });
        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 105.0, y: 51.0 });
        assert_eq!(frame.pointer_delta, (5.0, 1.0));
        assert_eq!(state.pointer_pos, Some((105.0, 51.0)));

        frame.clear();
        assert_eq!(frame.pointer_delta, (0.0, 0.0));
        assert!(frame.events.is_empty());
    }

    #[test]
    fn repeated_press_is_one_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, left(true));
        state.apply_event(&mut frame, left(true));
        assert!(state.button_down(MouseButton::Left));
        assert_eq!(frame.buttons_pressed.len(), 1);

        state.apply_event(&mut frame, left(false));
        assert!(!state.button_down(MouseButton::Left));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, left(false));
        assert!(frame.buttons_released.is_empty());
    }

    #[test]
    fn losing_focus_drops_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, left(true));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.buttons_down.is_empty());
        assert!(!state.focused);
    }

    #[test]
    fn pointer_leaving_clears_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 1.0, y: 2.0 });
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn wheel_lines_add_up() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::Wheel { lines: 1.0 });
        state.apply_event(&mut frame, InputEvent::Wheel { lines: -0.25 });
        assert!((frame.scroll_delta - 0.75).abs() < 1e-6);
    }
}
