use winit::dpi::PhysicalSize;

/// Depth format shared by the attachment and every depth-tested pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Size-dependent render attachments owned alongside the surface.
///
/// - `depth`: depth buffer matching the surface size and sample count
/// - `msaa`: multisampled color target resolved into the swapchain image;
///   `None` when the sample count is 1
pub struct FrameAttachments {
    pub depth: wgpu::TextureView,
    pub msaa: Option<wgpu::TextureView>,
    sample_count: u32,
}

impl FrameAttachments {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        size: PhysicalSize<u32>,
        sample_count: u32,
    ) -> Self {
        let extent = wgpu::Extent3d {
            width: size.width.max(1),
            height: size.height.max(1),
            depth_or_array_layers: 1,
        };

        let depth = device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("prism depth"),
                size: extent,
                mip_level_count: 1,
                sample_count,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&wgpu::TextureViewDescriptor::default());

        let msaa = (sample_count > 1).then(|| {
            device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some("prism msaa color"),
                    size: extent,
                    mip_level_count: 1,
                    sample_count,
                    dimension: wgpu::TextureDimension::D2,
                    format: color_format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        });

        Self { depth, msaa, sample_count }
    }

    #[inline]
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }
}
