//! Pointer input, independent of the windowing backend.
//!
//! The runtime feeds [`InputEvent`]s (translated by `translate`) into the
//! window's [`InputState`], which records per-frame transitions in an
//! [`InputFrame`].

mod state;
pub(crate) mod translate;

pub use state::{InputFrame, InputState};

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Backend-neutral input event. Positions are logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    /// The pointer left the window surface.
    PointerLeft,
    PointerButton { button: MouseButton, pressed: bool },
    /// Vertical wheel motion in lines; positive scrolls away from the user.
    Wheel { lines: f32 },
    Focused(bool),
}
