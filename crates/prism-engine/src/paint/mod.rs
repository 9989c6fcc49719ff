//! Color model shared between the overlay, materials and renderers.

pub mod color;

pub use color::Color;
