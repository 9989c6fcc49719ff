use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::text::FontId;

/// Layer of a draw item. Higher values paint on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

/// Paint-order key: layer first, then insertion order.
///
/// Field order matters for the derived `Ord`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

/// Ring drawn along the inside of a circle's edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    pub border: Option<Border>,
}

/// A run of text laid out by `FontSystem`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Pixel size.
    pub size: f32,
    pub color: Color,
    /// Top-left of the first line.
    pub origin: Vec2,
    /// Wrap width; `None` lays out a single unbounded line.
    pub max_width: Option<f32>,
}

/// One recorded overlay primitive. Each variant has a matching renderer
/// under `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}

impl From<RectCmd> for DrawCmd {
    fn from(cmd: RectCmd) -> Self {
        DrawCmd::Rect(cmd)
    }
}

impl From<CircleCmd> for DrawCmd {
    fn from(cmd: CircleCmd) -> Self {
        DrawCmd::Circle(cmd)
    }
}

impl From<TextCmd> for DrawCmd {
    fn from(cmd: TextCmd) -> Self {
        DrawCmd::Text(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_orders_by_layer_before_insertion() {
        let low_late = SortKey { z: ZIndex(0), order: 9 };
        let high_early = SortKey { z: ZIndex(1), order: 0 };
        let low_early = SortKey { z: ZIndex(0), order: 1 };
        assert!(low_late < high_early);
        assert!(low_early < low_late);
    }
}
