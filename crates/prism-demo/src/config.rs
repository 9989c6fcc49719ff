use prism_engine::device::GpuInit;
use prism_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Every tunable of the demo in one place.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    /// Initial logical window size.
    pub width: f32,
    pub height: f32,
    /// Requested MSAA sample count; lowered to what the adapter supports.
    pub sample_count: u32,

    pub background: u32,

    pub camera_fov: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_distance: f32,

    pub light_color: u32,
    pub light_intensity: f32,

    pub solid_radius: f32,
    pub solid_color: u32,
    pub solid_emissive: u32,

    pub shell_radius: f32,
    pub shell_color: u32,
    pub shell_opacity: f32,
    /// Shell rotation relative to the solid's.
    pub shell_ratio: f32,

    pub y_range: (f32, f32),
    pub y_step: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "prism".to_string(),
            width: 1280.0,
            height: 720.0,
            sample_count: 4,

            background: 0x000000,

            camera_fov: 75.0,
            camera_near: 1.0,
            camera_far: 500.0,
            camera_distance: 5.0,

            light_color: 0xffffff,
            light_intensity: 1.0,

            solid_radius: 1.0,
            solid_color: 0x00ffff,
            solid_emissive: 0x111111,

            shell_radius: 2.0,
            shell_color: 0xaaaaaa,
            shell_opacity: 0.1,
            shell_ratio: 1.5,

            y_range: (-3.0, 3.0),
            y_step: 0.01,
        }
    }
}

impl DemoConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width as f64, self.height as f64),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit { sample_count: self.sample_count, ..GpuInit::default() }
    }
}
