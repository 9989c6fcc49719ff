/// Premultiplied RGBA color used by the overlay renderers and materials.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Hex colors (`0xRRGGBB`) are the interchange format with the control panel
/// and with scene materials; [`Color::from_hex`] / [`Color::to_hex`] convert
/// between the two without gamma conversion. The mesh renderer linearizes
/// material colors itself (see [`Color::to_linear`]).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Opaque color from a 24-bit `0xRRGGBB` value. Bits above 24 are ignored.
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self::from_premul(r, g, b, 1.0)
    }

    /// Packs the straight-alpha RGB channels back into `0xRRGGBB`.
    pub fn to_hex(self) -> u32 {
        let (r, g, b, _) = self.to_straight();
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(r) << 16) | (q(g) << 8) | q(b)
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Same color with alpha scaled by `opacity`, kept premultiplied.
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        Self::from_premul(self.r * o, self.g * o, self.b * o, self.a * o)
    }

    /// Converts sRGB-encoded channels to linear light, keeping alpha.
    pub fn to_linear(self) -> [f32; 4] {
        let (r, g, b, a) = self.to_straight();
        [srgb_to_linear(r) * a, srgb_to_linear(g) * a, srgb_to_linear(b) * a, a]
    }

    /// Opaque color from hue (`[0, 360)` degrees), saturation and value (`[0, 1]`).
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(360.0) / 60.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        Self::from_premul(r + m, g + m, b + m, 1.0)
    }

    /// Hue (degrees), saturation and value of the straight-alpha channels.
    ///
    /// Achromatic colors report a hue of 0.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let (r, g, b, _) = self.to_straight();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let h = if d <= f32::EPSILON {
            0.0
        } else if max == r {
            60.0 * ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / d + 2.0)
        } else {
            60.0 * ((r - g) / d + 4.0)
        };
        let s = if max <= 0.0 { 0.0 } else { d / max };
        (h, s, max)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_color() {
        for hex in [0x00ffff, 0xaaaaaa, 0x111111, 0x123456, 0xffffff, 0x000000] {
            assert_eq!(Color::from_hex(hex).to_hex(), hex, "{hex:06x}");
        }
    }

    #[test]
    fn from_hex_ignores_high_bits() {
        assert_eq!(Color::from_hex(0xff00_ff00), Color::from_hex(0x00ff00));
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0).to_hex(), 0xff0000);
        assert_eq!(Color::from_hsv(120.0, 1.0, 1.0).to_hex(), 0x00ff00);
        assert_eq!(Color::from_hsv(180.0, 1.0, 1.0).to_hex(), 0x00ffff);
        assert_eq!(Color::from_hsv(240.0, 1.0, 1.0).to_hex(), 0x0000ff);
        assert_eq!(Color::from_hsv(360.0, 1.0, 1.0).to_hex(), 0xff0000);
    }

    #[test]
    fn to_hsv_of_cyan() {
        let (h, s, v) = Color::from_hex(0x00ffff).to_hsv();
        assert!((h - 180.0).abs() < 1e-3);
        assert!((s - 1.0).abs() < 1e-6);
        assert!((v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn grey_has_zero_saturation() {
        let (h, s, v) = Color::from_hex(0xaaaaaa).to_hsv();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((v - 170.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn opacity_keeps_premultiplication() {
        let c = Color::from_hex(0xaaaaaa).with_opacity(0.1);
        assert!((c.a - 0.1).abs() < 1e-6);
        assert!(c.r <= c.a + f32::EPSILON);
        assert_eq!(c.to_hex(), 0xaaaaaa);
    }

    #[test]
    fn linear_conversion_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let w = Color::WHITE.to_linear();
        assert!((w[0] - 1.0).abs() < 1e-6);
    }
}
