//! Control panel: named controllers bound to application values.
//!
//! A [`ControlPanel`] is a column of [`Controller`] rows anchored to the top
//! right of the window. Each controller mirrors one value through a
//! [`Binding`]: it shows the bound value every frame and writes user edits
//! back, then notifies its `on_change` callback.

mod binding;
mod boolean;
mod color;
mod controller;
mod number;
mod panel;

pub use binding::Binding;
pub use boolean::BooleanController;
pub use color::ColorController;
pub use controller::{Controller, ROW_HEIGHT};
pub use number::NumberController;
pub use panel::ControlPanel;
