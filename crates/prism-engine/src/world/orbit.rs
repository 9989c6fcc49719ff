use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::PerspectiveCamera;

const POLAR_EPS: f32 = 1.0e-6;

/// Orbits a camera around a target point.
///
/// Rotation is expressed on a sphere centered on `target`: dragging across
/// the full viewport height turns the camera by one revolution. Wheel input
/// dollies along the view ray. Distance and polar angle are clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub enabled: bool,
    pub target: Vec3,

    pub min_distance: f32,
    pub max_distance: f32,

    /// Polar angle limits in radians, measured from +Y.
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,

    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            min_distance: 0.5,
            max_distance: 100.0,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
        }
    }
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self { target, ..Self::default() }
    }

    /// Applies a pointer drag of `(dx, dy)` logical pixels.
    ///
    /// `viewport_height` scales the drag so behavior is resolution independent.
    pub fn rotate(&self, camera: &mut PerspectiveCamera, dx: f32, dy: f32, viewport_height: f32) {
        if !self.enabled || viewport_height <= 0.0 {
            return;
        }
        let left = TAU * dx / viewport_height * self.rotate_speed;
        let up = TAU * dy / viewport_height * self.rotate_speed;

        let (radius, theta, phi) = self.spherical(camera);
        self.apply(camera, radius, theta - left, phi - up);
    }

    /// Dollies by wheel `lines`; positive moves toward the target.
    pub fn dolly(&self, camera: &mut PerspectiveCamera, lines: f32) {
        if !self.enabled || lines == 0.0 {
            return;
        }
        let scale = 0.95_f32.powf(self.zoom_speed * lines);
        let (radius, theta, phi) = self.spherical(camera);
        self.apply(camera, radius * scale, theta, phi);
    }

    fn spherical(&self, camera: &PerspectiveCamera) -> (f32, f32, f32) {
        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return (0.0, 0.0, PI / 2.0);
        }
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        (radius, theta, phi)
    }

    fn apply(&self, camera: &mut PerspectiveCamera, radius: f32, theta: f32, phi: f32) {
        let min_phi = self.min_polar_angle.max(POLAR_EPS);
        let max_phi = self.max_polar_angle.min(PI - POLAR_EPS).max(min_phi);
        let phi = phi.clamp(min_phi, max_phi);
        let radius = radius.clamp(self.min_distance, self.max_distance.max(self.min_distance));

        let sin_phi = phi.sin();
        let offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );

        camera.position = self.target + offset;
        camera.look_at(self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(z: f32) -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 1.0, 500.0);
        camera.position = Vec3::new(0.0, 0.0, z);
        camera
    }

    #[test]
    fn full_height_drag_is_one_revolution() {
        let controls = OrbitControls::default();
        let mut camera = camera_at(5.0);
        controls.rotate(&mut camera, 600.0, 0.0, 600.0);
        assert!((camera.position - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-4, "{}", camera.position);
    }

    #[test]
    fn quarter_drag_moves_camera_around_y() {
        let controls = OrbitControls::default();
        let mut camera = camera_at(5.0);
        controls.rotate(&mut camera, -150.0, 0.0, 600.0);
        assert!((camera.position - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4, "{}", camera.position);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn rotation_preserves_distance() {
        let controls = OrbitControls::default();
        let mut camera = camera_at(5.0);
        controls.rotate(&mut camera, 37.0, -81.0, 600.0);
        assert!((camera.position.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn polar_angle_never_flips_over_the_pole() {
        let controls = OrbitControls::default();
        let mut camera = camera_at(5.0);
        controls.rotate(&mut camera, 0.0, 10_000.0, 600.0);
        assert!(camera.position.y > 0.0);
        assert!(camera.position.y <= 5.0);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn dolly_in_and_clamp() {
        let controls = OrbitControls { min_distance: 2.0, max_distance: 10.0, ..Default::default() };
        let mut camera = camera_at(5.0);

        controls.dolly(&mut camera, 1.0);
        assert!((camera.position.z - 4.75).abs() < 1e-4);

        controls.dolly(&mut camera, 100.0);
        assert!((camera.position.length() - 2.0).abs() < 1e-4);

        controls.dolly(&mut camera, -1000.0);
        assert!((camera.position.length() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn disabled_controls_do_nothing() {
        let controls = OrbitControls { enabled: false, ..Default::default() };
        let mut camera = camera_at(5.0);
        controls.rotate(&mut camera, 100.0, 100.0, 600.0);
        controls.dolly(&mut camera, 3.0);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
    }
}
