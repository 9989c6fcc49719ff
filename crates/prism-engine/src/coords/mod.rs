//! 2D coordinate types for the overlay layer.
//!
//! Overlay space is logical pixels, origin top-left, +X right, +Y down.
//! Points and sizes are `glam::Vec2`, the same math type the 3D world uses.

mod rect;
mod viewport;

pub use glam::Vec2;
pub use rect::Rect;
pub use viewport::Viewport;
