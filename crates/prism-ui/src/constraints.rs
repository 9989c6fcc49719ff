use prism_engine::coords::{Rect, Vec2};
use prism_engine::text::FontSystem;

/// Per-side insets in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    /// `rect` shrunk by these insets. Sizes never go negative.
    #[must_use]
    pub fn inset(self, rect: Rect) -> Rect {
        Rect::new(
            rect.origin.x + self.left,
            rect.origin.y + self.top,
            (rect.size.x - self.left - self.right).max(0.0),
            (rect.size.y - self.top - self.bottom).max(0.0),
        )
    }
}

/// Size range a parent offers a child in `Widget::measure`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Anything from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::default(), max }
    }

    /// Exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(size.x.max(self.min.x).min(self.max.x), size.y.max(self.min.y).min(self.max.y))
    }
}

/// What `measure` may consult.
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_keeps_sizes_under_the_cap() {
        let c = Constraints::loose(Vec2::new(245.0, 27.0));
        assert_eq!(c.constrain(Vec2::new(100.0, 11.0)), Vec2::new(100.0, 11.0));
        assert_eq!(c.constrain(Vec2::new(900.0, 90.0)), Vec2::new(245.0, 27.0));
    }

    #[test]
    fn tight_ignores_the_request() {
        let c = Constraints::tight(Vec2::new(19.0, 19.0));
        assert_eq!(c.constrain(Vec2::new(4.0, 400.0)), Vec2::new(19.0, 19.0));
    }

    #[test]
    fn unbounded_width_passes_through() {
        let c = Constraints::loose(Vec2::new(f32::INFINITY, 27.0));
        assert_eq!(c.constrain(Vec2::new(1234.0, 11.0)).x, 1234.0);
    }

    #[test]
    fn inset_moves_origin_and_shrinks() {
        let e = Edges { top: 4.0, right: 4.0, bottom: 4.0, left: 0.0 };
        assert_eq!(e.inset(Rect::new(98.0, 10.0, 147.0, 27.0)), Rect::new(98.0, 14.0, 143.0, 19.0));
    }

    #[test]
    fn inset_larger_than_rect_collapses_to_zero() {
        let e = Edges { left: 8.0, ..Edges::default() };
        let r = e.inset(Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(r.size, Vec2::new(0.0, 5.0));
    }
}
