//! 3D scene model: meshes, materials, camera, light and orbit navigation.
//!
//! Everything here is plain CPU data built on `glam`; `render::mesh` turns a
//! [`Scene`] plus a [`PerspectiveCamera`] into GPU work.

mod camera;
mod geometry;
mod light;
mod material;
mod mesh;
mod orbit;
mod scene;

pub use camera::PerspectiveCamera;
pub use geometry::{Geometry, Vertex};
pub use light::DirectionalLight;
pub use material::{BasicMaterial, LambertMaterial, Material};
pub use mesh::{Mesh, Transform};
pub use orbit::OrbitControls;
pub use scene::{NodeId, Scene};
