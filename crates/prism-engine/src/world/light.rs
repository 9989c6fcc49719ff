use glam::Vec3;

/// Light arriving from `position` toward `target` with parallel rays.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectionalLight {
    pub color: u32,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl DirectionalLight {
    pub fn new(color: u32, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            position: Vec3::Y,
            target: Vec3::ZERO,
        }
    }

    /// Unit vector pointing from the lit surface toward the light.
    pub fn direction_to_light(&self) -> Vec3 {
        (self.position - self.target).try_normalize().unwrap_or(Vec3::Y)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(0xffffff, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_shines_down_from_above() {
        assert_eq!(DirectionalLight::default().direction_to_light(), Vec3::Y);
    }

    #[test]
    fn coincident_position_and_target_fall_back() {
        let mut light = DirectionalLight::default();
        light.position = Vec3::ZERO;
        assert_eq!(light.direction_to_light(), Vec3::Y);
    }
}
