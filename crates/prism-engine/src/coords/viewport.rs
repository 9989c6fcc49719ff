/// Drawable size in logical pixels.
///
/// Overlay shaders use it to map logical px to NDC; the 3D camera derives its
/// aspect ratio from it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height, or `None` for a degenerate (e.g. minimised) viewport.
    #[inline]
    pub fn aspect(self) -> Option<f32> {
        self.is_valid().then(|| self.width / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_800_by_600() {
        let a = Viewport::new(800.0, 600.0).aspect().unwrap();
        assert!((a - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_has_no_aspect() {
        assert_eq!(Viewport::new(800.0, 0.0).aspect(), None);
        assert_eq!(Viewport::new(0.0, 0.0).aspect(), None);
    }
}
