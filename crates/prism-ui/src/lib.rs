//! Prism UI: retained widgets and a control panel on top of `prism-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use prism_ui::prelude::*;
//!
//! let y = Rc::new(RefCell::new(0.0_f32));
//! let mut root = Element::new(
//!     ControlPanel::new()
//!         .font(font)
//!         .with(NumberController::new("y", Binding::cell(y.clone()), -3.0, 3.0).step(0.01)),
//! );
//!
//! // In your frame callback:
//! let input = UiInput::from_engine(ctx.input, ctx.input_frame);
//! let _ = ui.frame(&mut root, viewport, &input);
//! // Then draw `ui` with an `OverlayRenderer` inside the frame's render pass.
//! ```

pub mod constraints;
pub mod event;
pub mod gui;
pub mod overlay;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::gui::{
        Binding, BooleanController, ColorController, ControlPanel, Controller, NumberController,
    };
    pub use crate::overlay::OverlayRenderer;
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{Checkbox, ColorPicker, Slider, Text};

    pub use prism_engine::coords::{Rect, Vec2};
    pub use prism_engine::paint::Color;
    pub use prism_engine::text::FontId;
}
