//! Leaf widgets used by the control panel.

pub mod checkbox;
pub mod color_picker;
pub mod slider;
pub mod text;

pub use checkbox::Checkbox;
pub use color_picker::ColorPicker;
pub use slider::Slider;
pub use text::{Align, Text};
