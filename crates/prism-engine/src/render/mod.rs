//! GPU rendering subsystem.
//!
//! - `shapes`: overlay renderers consuming `draw` streams (logical pixels,
//!   top-left origin, +Y down; NDC conversion happens in the vertex shader)
//! - `mesh`: depth-tested renderer for `world::Scene`
//! - [`SceneRenderer`]: the narrow interface application code renders through
//!
//! Each renderer owns its GPU resources and builds them lazily.

mod ctx;
mod frame;
pub mod mesh;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use frame::FrameRenderer;
pub use mesh::MeshRenderer;

use crate::world::{PerspectiveCamera, Scene};

/// Output surface for a scene: knows its size and draws a scene through a
/// camera, synchronously, when asked.
///
/// Sizes are logical pixels.
pub trait SceneRenderer {
    fn set_size(&mut self, width: f32, height: f32);
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera);
}
