use prism_engine::coords::Rect;
use prism_engine::paint::Color;
use prism_engine::text::FontId;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::color_picker::ColorPicker;

use super::controller::ROW_PADDING;
use super::{Binding, Controller};

/// Color controller for a bound `0xRRGGBB` value.
///
/// `on_change` runs synchronously for every pick, after the binding holds
/// the new color.
pub struct ColorController {
    name: String,
    binding: Binding<u32>,
    picker: ColorPicker,
    on_change: Option<Box<dyn FnMut(u32)>>,
}

impl ColorController {
    pub fn new(name: impl Into<String>, binding: Binding<u32>) -> Self {
        let picker = ColorPicker::new(binding.get());
        Self { name: name.into(), binding, picker, on_change: None }
    }

    pub fn on_change(mut self, f: impl FnMut(u32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn value(&self) -> u32 {
        self.binding.get()
    }

    /// Writes the binding (masked to 24 bits) and fires `on_change`.
    pub fn set_value(&mut self, hex: u32) {
        let hex = hex & 0xff_ffff;
        self.binding.set(hex);
        self.picker.set_hex(hex);
        log::debug!("{}: #{hex:06x}", self.name);
        if let Some(f) = &mut self.on_change {
            f(hex);
        }
    }
}

impl Controller for ColorController {
    fn name(&self) -> &str {
        &self.name
    }

    fn accent(&self) -> Color {
        Color::from_hex(self.picker.hex())
    }

    fn height(&self) -> f32 {
        ColorPicker::HEIGHT + 2.0 * ROW_PADDING
    }

    fn set_font(&mut self, font: Option<FontId>) {
        self.picker.set_font(font);
    }

    fn sync(&mut self) {
        self.picker.set_hex(self.binding.get());
    }

    fn paint(&self, painter: &mut Painter, control: Rect) {
        self.picker.paint(painter, control);
    }

    fn on_event(&mut self, event: &UiEvent, control: Rect) -> EventResult {
        let Some(hex) = self.picker.pick(event, control) else {
            return EventResult::Ignored;
        };
        self.set_value(hex);
        EventResult::Consumed
    }
}
