use prism_engine::coords::Rect;
use prism_engine::paint::Color;
use prism_engine::text::FontId;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// Height of a single-line controller row in logical pixels.
pub const ROW_HEIGHT: f32 = 27.0;

/// Vertical padding between a row's edge and its control rect.
pub(crate) const ROW_PADDING: f32 = 4.0;

/// One row of a [`ControlPanel`](super::ControlPanel).
///
/// The panel draws the row background and the name; the controller draws
/// and handles input only inside its `control` rect.
pub trait Controller {
    fn name(&self) -> &str;

    /// Stripe color at the left edge of the row.
    fn accent(&self) -> Color;

    /// Row height, including padding.
    fn height(&self) -> f32 {
        ROW_HEIGHT
    }

    fn set_font(&mut self, _font: Option<FontId>) {}

    /// Re-reads the bound value so the display follows outside changes.
    fn sync(&mut self);

    fn paint(&self, painter: &mut Painter, control: Rect);

    fn on_event(&mut self, event: &UiEvent, control: Rect) -> EventResult;
}

/// Decimal places needed to show multiples of `step` exactly.
pub(crate) fn decimals_for_step(step: f32) -> usize {
    let mut s = step.abs() as f64;
    let mut d = 0;
    while d < 6 && (s - s.round()).abs() > 1e-6 {
        s *= 10.0;
        d += 1;
    }
    d
}
