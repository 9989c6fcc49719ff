use std::cell::RefCell;
use std::rc::Rc;

use prism_engine::coords::Vec2;
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::render::{FrameRenderer, MeshRenderer, RenderCtx, RenderTarget};
use prism_engine::time::ElapsedClock;
use prism_engine::world::{PerspectiveCamera, Scene};
use prism_ui::overlay::OverlayRenderer;
use prism_ui::scene::{UiInput, UiScene};
use prism_ui::widget::Element;

use crate::assembly::World;
use crate::config::DemoConfig;
use crate::controls::{build_panel, ColorOptions};
use crate::navigation::Navigation;
use crate::render_loop::RenderLoop;
use crate::resize::handle_resize;

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// The demo wired into the engine runtime.
pub struct DemoApp {
    scene: Rc<RefCell<Scene>>,
    camera: PerspectiveCamera,
    render_loop: RenderLoop,
    navigation: Navigation,

    meshes: MeshRenderer,
    overlay: OverlayRenderer,
    ui: UiScene,
    panel: Element,
}

impl DemoApp {
    pub fn new(config: &DemoConfig, world: World) -> Self {
        let mut ui = UiScene::new();
        let font = match ui.font_system.load_first_available(FONT_PATHS) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("no system font found, panel labels disabled: {e}");
                None
            }
        };

        let options = Rc::new(RefCell::new(ColorOptions { color: config.solid_color }));
        let panel = build_panel(&world.scene, world.solid, &options, config, font);

        let render_loop = RenderLoop::new(ElapsedClock::new(), world.solid, world.shell, config.shell_ratio);
        let navigation = Navigation::new(world.camera.target);

        Self {
            scene: world.scene,
            camera: world.camera,
            render_loop,
            navigation,
            meshes: MeshRenderer::new(),
            overlay: OverlayRenderer::new(),
            ui,
            panel: Element::new(panel),
        }
    }
}

impl App for DemoApp {
    fn on_resize(&mut self, ctx: &mut FrameCtx<'_, '_>, width: f32, height: f32) -> AppControl {
        log::debug!("resize to {width}x{height}");
        let window = ctx.window.window;
        let Self { scene, camera, render_loop, meshes, overlay, ui, .. } = self;

        let mut draw_overlay =
            |rctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>| overlay.render(rctx, target, ui);
        let mut renderer = FrameRenderer::new(ctx, meshes).with_overlay(&mut draw_overlay);
        let applied = handle_resize(&mut renderer, &scene.borrow(), camera, width, height);
        if render_loop.set_suspended(!applied) {
            window.request_redraw();
        }
        renderer.control()
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.viewport();
        let input = UiInput::from_engine(ctx.input, ctx.input_frame);
        self.ui.frame(&mut self.panel, Vec2::new(viewport.width, viewport.height), &input);

        let ui = &self.ui;
        self.navigation.update(&mut self.camera, ctx.input, ctx.input_frame, viewport.height, |p| {
            ui.wants_pointer(p)
        });

        let window = ctx.window.window;
        let Self { scene, camera, render_loop, meshes, overlay, ui, .. } = self;

        let mut draw_overlay =
            |rctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>| overlay.render(rctx, target, ui);
        let mut renderer = FrameRenderer::new(ctx, meshes).with_overlay(&mut draw_overlay);
        render_loop.frame(&mut renderer, &mut scene.borrow_mut(), camera, || window.request_redraw());
        renderer.control()
    }
}
