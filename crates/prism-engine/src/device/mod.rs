//! wgpu device, surface and size-dependent attachments.
//!
//! [`Gpu`] owns everything; the render layer only borrows the device, queue
//! and per-frame views from it.

mod attachments;
mod gpu;
mod surface;

pub use attachments::{FrameAttachments, DEPTH_FORMAT};
pub use gpu::{Gpu, GpuFrame};
pub use surface::SurfaceErrorAction;

/// Device and swapchain requests, applied once when a window's GPU context is
/// created. Unsupported requests degrade to what the adapter offers.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format when one exists.
    pub prefer_srgb: bool,
    pub present_mode: wgpu::PresentMode,
    /// `None` takes the surface's first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
    pub desired_maximum_frame_latency: u32,
    /// MSAA samples for color and depth; lowered to the highest supported
    /// power of two.
    pub sample_count: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            sample_count: 4,
        }
    }
}
