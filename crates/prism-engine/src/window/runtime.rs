use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::translate::translate_window_event;
use crate::input::{InputFrame, InputState};

/// Title and initial logical size of the window.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { title: "prism".to_string(), initial_size: LogicalSize::new(1280.0, 720.0) }
    }
}

/// Drives one window and one [`App`] on the winit event loop until the window
/// closes or the app asks to exit.
pub struct Runtime;

impl Runtime {
    pub fn run<A: App + 'static>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut host = Host { config, gpu_init, app, window: None, exiting: false };
        event_loop.run_app(&mut host).context("winit event loop terminated with error")?;
        Ok(())
    }
}

/// The window and everything borrowing from it.
#[self_referencing]
struct WindowEntry {
    input: InputState,
    input_frame: InputFrame,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, gpu_init: GpuInit) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);
        let window = event_loop.create_window(attrs).context("failed to create window")?;

        // The builder closure cannot return an error.
        let entry = WindowEntryBuilder {
            input: InputState::default(),
            input_frame: InputFrame::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).expect("GPU initialization failed for window")
            },
        }
        .build();

        log::info!("created window \"{}\"", config.title);
        Ok(entry)
    }

    fn logical_size(&self, physical: PhysicalSize<u32>) -> (f32, f32) {
        let logical: LogicalSize<f64> = physical.to_logical(self.with_window(|w| w.scale_factor()));
        (logical.width as f32, logical.height as f32)
    }
}

/// App callback a frame context is built for.
#[derive(Debug, Copy, Clone)]
enum Callback {
    Resize(f32, f32),
    Frame,
}

struct Host<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    window: Option<WindowEntry>,
    exiting: bool,
}

impl<A: App + 'static> Host<A> {
    /// Runs one app callback against the window.
    ///
    /// Only frames consume the input gathered since the previous frame.
    fn call(&mut self, id: WindowId, callback: Callback) {
        let Some(entry) = self.window.as_mut() else { return };
        let app = &mut self.app;

        let control = entry.with_mut(|f| {
            let mut ctx = FrameCtx {
                window: WindowCtx { id, window: f.window },
                gpu: f.gpu,
                input: f.input,
                input_frame: f.input_frame,
            };
            let control = match callback {
                Callback::Frame => app.on_frame(&mut ctx),
                Callback::Resize(w, h) => app.on_resize(&mut ctx, w, h),
            };
            if let Callback::Frame = callback {
                f.input_frame.clear();
            }
            control
        });

        if control == AppControl::Exit {
            self.exiting = true;
        }
    }
}

impl<A: App + 'static> ApplicationHandler for Host<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match WindowEntry::open(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(entry) => {
                // The first frame; later ones are requested by the app.
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.exiting = true;
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(entry) = self.window.as_mut() else { return };

        let app = &mut self.app;
        let control = entry.with_mut(|f| {
            if let Some(ev) = translate_window_event(f.window, &event) {
                f.input.apply_event(f.input_frame, ev);
            }
            app.on_window_event(id, &event)
        });
        if control == AppControl::Exit {
            self.exiting = true;
        }

        let resized = match event {
            WindowEvent::Resized(physical) => Some(physical),
            WindowEvent::ScaleFactorChanged { .. } => Some(entry.with_window(|w| w.inner_size())),
            _ => None,
        };
        let resized = resized.map(|physical| entry.logical_size(physical));

        match event {
            WindowEvent::CloseRequested => {
                self.window = None;
                self.exiting = true;
            }
            WindowEvent::RedrawRequested => self.call(id, Callback::Frame),
            _ => {}
        }
        if let Some((w, h)) = resized {
            log::debug!("window resized to {w}x{h}");
            self.call(id, Callback::Resize(w, h));
        }

        if self.exiting {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exiting {
            event_loop.exit();
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}
