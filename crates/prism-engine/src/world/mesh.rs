use std::rc::Rc;

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

use super::{Geometry, Material};

/// Position, XYZ Euler rotation (radians) and scale of a node.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Rotation applied as X, then Y, then Z about the local axes.
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local-to-world matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }

    /// Inverse-transpose of the upper 3x3, for transforming normals.
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.matrix()).inverse().transpose()
    }
}

/// Drawable node: shared geometry, its own material and transform.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub geometry: Rc<Geometry>,
    pub material: Material,
    pub transform: Transform,
    pub visible: bool,
}

impl Mesh {
    pub fn new(name: impl Into<String>, geometry: Rc<Geometry>, material: impl Into<Material>) -> Self {
        Self {
            name: name.into(),
            geometry,
            material: material.into(),
            transform: Transform::default(),
            visible: true,
        }
    }
}
