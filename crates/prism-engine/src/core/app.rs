use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The runtime does not redraw on its own: an app that animates requests the
/// next frame from `on_frame` via `WindowCtx::request_redraw`.
pub trait App {
    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called when the window's logical size changed (including scale factor
    /// changes). The default only resizes the surface.
    fn on_resize(&mut self, ctx: &mut FrameCtx<'_, '_>, width: f32, height: f32) -> AppControl {
        ctx.resize_surface(width, height);
        AppControl::Continue
    }

    /// Called for each redraw of a window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
