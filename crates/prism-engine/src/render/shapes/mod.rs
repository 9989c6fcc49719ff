//! Overlay shape renderers. Each consumes its own command kind from a
//! `draw::DrawList` and owns its GPU resources.

mod common;

pub mod circle;
pub mod rect;
pub mod text;

pub use circle::CircleRenderer;
pub use rect::RectRenderer;
pub use text::TextRenderer;
