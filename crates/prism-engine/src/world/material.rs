/// Diffuse material lit by the scene's directional light.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LambertMaterial {
    /// Diffuse color, `0xRRGGBB`.
    pub color: u32,
    /// Self-illumination added after lighting, `0xRRGGBB`.
    pub emissive: u32,
}

impl Default for LambertMaterial {
    fn default() -> Self {
        Self { color: 0xffffff, emissive: 0x000000 }
    }
}

/// Unlit material.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BasicMaterial {
    pub color: u32,
    /// Draw triangle edges instead of faces.
    pub wireframe: bool,
    /// Blend with what is behind using `opacity`.
    pub transparent: bool,
    /// Only honored when `transparent` is set.
    pub opacity: f32,
}

impl Default for BasicMaterial {
    fn default() -> Self {
        Self { color: 0xffffff, wireframe: false, transparent: false, opacity: 1.0 }
    }
}

impl BasicMaterial {
    /// Opacity the renderer should use.
    #[inline]
    pub fn effective_opacity(&self) -> f32 {
        if self.transparent { self.opacity.clamp(0.0, 1.0) } else { 1.0 }
    }
}

/// Surface description of a mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Material {
    Lambert(LambertMaterial),
    Basic(BasicMaterial),
}

impl Material {
    /// Base color as `0xRRGGBB`.
    pub fn color(&self) -> u32 {
        match self {
            Material::Lambert(m) => m.color,
            Material::Basic(m) => m.color,
        }
    }

    /// Replaces the base color; bits above 24 are dropped.
    pub fn set_color(&mut self, hex: u32) {
        let hex = hex & 0x00ff_ffff;
        match self {
            Material::Lambert(m) => m.color = hex,
            Material::Basic(m) => m.color = hex,
        }
    }
}

impl From<LambertMaterial> for Material {
    fn from(m: LambertMaterial) -> Self {
        Material::Lambert(m)
    }
}

impl From<BasicMaterial> for Material {
    fn from(m: BasicMaterial) -> Self {
        Material::Basic(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_color_masks_to_24_bits() {
        let mut m: Material = LambertMaterial::default().into();
        m.set_color(0xff12_3456);
        assert_eq!(m.color(), 0x123456);
    }

    #[test]
    fn opaque_basic_ignores_opacity() {
        let m = BasicMaterial { opacity: 0.1, ..Default::default() };
        assert_eq!(m.effective_opacity(), 1.0);
        let t = BasicMaterial { transparent: true, opacity: 0.1, ..Default::default() };
        assert!((t.effective_opacity() - 0.1).abs() < 1e-6);
    }
}
