use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (x, w) = if self.size.x < 0.0 {
            (self.origin.x + self.size.x, -self.size.x)
        } else {
            (self.origin.x, self.size.x)
        };
        let (y, h) = if self.size.y < 0.0 {
            (self.origin.y + self.size.y, -self.size.y)
        } else {
            (self.origin.y, self.size.y)
        };
        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < r.right() && p.y < r.bottom()
    }

    /// Splits at `width` from the left edge, returning `(left, right)`.
    ///
    /// `width` is clamped to the rect, so both halves are always valid.
    #[inline]
    pub fn split_left(self, width: f32) -> (Rect, Rect) {
        let w = width.clamp(0.0, self.size.x.max(0.0));
        (
            Rect::new(self.origin.x, self.origin.y, w, self.size.y),
            Rect::new(self.origin.x + w, self.origin.y, self.size.x - w, self.size.y),
        )
    }

    /// Position of `p` inside the rect as fractions in `[0, 1]` on both axes.
    #[inline]
    pub fn fraction_of(self, p: Vec2) -> Vec2 {
        let fx = if self.size.x > 0.0 { (p.x - self.origin.x) / self.size.x } else { 0.0 };
        let fy = if self.size.y > 0.0 { (p.y - self.origin.y) / self.size.y } else { 0.0 };
        Vec2::new(fx.clamp(0.0, 1.0), fy.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = a.right().min(b.right());
        let y1 = a.bottom().min(b.bottom());

        (x1 > x0 && y1 > y0).then(|| Rect::new(x0, y0, x1 - x0, y1 - y0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(-1.0, 5.0)));
    }

    #[test]
    fn split_left_clamps_to_width() {
        let (left, right) = r(0.0, 0.0, 100.0, 20.0).split_left(40.0);
        assert_eq!(left, r(0.0, 0.0, 40.0, 20.0));
        assert_eq!(right, r(40.0, 0.0, 60.0, 20.0));

        let (left, right) = r(0.0, 0.0, 100.0, 20.0).split_left(500.0);
        assert_eq!(left.size.x, 100.0);
        assert_eq!(right.size.x, 0.0);
    }

    #[test]
    fn fraction_of_clamps_outside_points() {
        let rect = r(10.0, 10.0, 100.0, 50.0);
        assert_eq!(rect.fraction_of(Vec2::new(60.0, 35.0)), Vec2::new(0.5, 0.5));
        assert_eq!(rect.fraction_of(Vec2::new(-20.0, 500.0)), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0)).unwrap();
        assert_eq!(i, r(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
    }
}
