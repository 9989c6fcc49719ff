use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::window::Window;

use super::{InputEvent, MouseButton};

/// Logical pixels per wheel line, for touchpads reporting pixel deltas.
pub(crate) const WHEEL_LINE_HEIGHT: f32 = 40.0;

/// Maps the pointer-related subset of winit's window events.
pub(crate) fn translate_window_event(window: &Window, event: &WindowEvent) -> Option<InputEvent> {
    let scale = window.scale_factor();
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let p = position.to_logical::<f64>(scale);
            Some(InputEvent::PointerMoved { x: p.x as f32, y: p.y as f32 })
        }
        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),
        WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::PointerButton {
            button: map_button(*button),
            pressed: *state == ElementState::Pressed,
        }),
        WindowEvent::MouseWheel { delta, .. } => {
            let lines = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(p) => p.to_logical::<f64>(scale).y as f32 / WHEEL_LINE_HEIGHT,
            };
            Some(InputEvent::Wheel { lines })
        }
        WindowEvent::Focused(focused) => Some(InputEvent::Focused(*focused)),
        _ => None,
    }
}

fn map_button(button: winit::event::MouseButton) -> MouseButton {
    use winit::event::MouseButton as W;
    match button {
        W::Left => MouseButton::Left,
        W::Right => MouseButton::Right,
        W::Middle => MouseButton::Middle,
        W::Back => MouseButton::Other(3),
        W::Forward => MouseButton::Other(4),
        W::Other(n) => MouseButton::Other(n),
    }
}
