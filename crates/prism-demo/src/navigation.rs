use glam::Vec3;
use prism_engine::coords::Vec2;
use prism_engine::input::{InputFrame, InputState, MouseButton};
use prism_engine::world::{OrbitControls, PerspectiveCamera};

/// Routes pointer input that the control panel did not claim to the orbit
/// controls.
pub struct Navigation {
    orbit: OrbitControls,
    dragging: bool,
}

impl Navigation {
    pub fn new(target: Vec3) -> Self {
        Self { orbit: OrbitControls::new(target), dragging: false }
    }

    /// `over_ui` tells whether the panel wants the pointer this frame.
    pub fn update(
        &mut self,
        camera: &mut PerspectiveCamera,
        input: &InputState,
        frame: &InputFrame,
        viewport_height: f32,
        over_ui: impl Fn(Vec2) -> bool,
    ) {
        let pointer = input.pointer_pos.map(|(x, y)| Vec2::new(x, y));
        let pointer_over_ui = pointer.is_some_and(&over_ui);

        if frame.buttons_pressed.contains(&MouseButton::Left) {
            self.dragging = !pointer_over_ui;
        }
        if !input.button_down(MouseButton::Left) {
            self.dragging = false;
        }

        if self.dragging {
            let (dx, dy) = frame.pointer_delta;
            if dx != 0.0 || dy != 0.0 {
                self.orbit.rotate(camera, dx, dy, viewport_height);
            }
        }

        if frame.scroll_delta != 0.0 && !pointer_over_ui {
            self.orbit.dolly(camera, frame.scroll_delta);
        }
    }

    #[cfg(test)]
    fn is_dragging(&self) -> bool {
        self.dragging
    }
}
