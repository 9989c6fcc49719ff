//! Prism engine crate.
//!
//! Platform and GPU runtime, 2D overlay drawing and the small 3D world
//! (scene, camera, materials, mesh renderer) used by higher layers.

pub mod core;
pub mod coords;
pub mod device;
pub mod draw;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod text;
pub mod time;
pub mod window;
pub mod world;
