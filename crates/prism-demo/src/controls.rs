use std::cell::RefCell;
use std::rc::Rc;

use prism_engine::text::FontId;
use prism_engine::world::{NodeId, Scene};
use prism_ui::gui::{Binding, BooleanController, ColorController, ControlPanel, NumberController};

use crate::config::DemoConfig;

/// Panel-owned color state. Not read by the renderer: changes reach the
/// solid only through the color controller's change handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorOptions {
    pub color: u32,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self { color: 0x00ffff }
    }
}

/// Slider bound to the solid's vertical position.
pub fn position_y(scene: &Rc<RefCell<Scene>>, solid: NodeId, config: &DemoConfig) -> NumberController {
    let reader = scene.clone();
    let writer = scene.clone();
    let binding = Binding::new(
        move || reader.borrow().mesh(solid).map_or(0.0, |m| m.transform.position.y),
        move |y| {
            if let Some(mesh) = writer.borrow_mut().mesh_mut(solid) {
                mesh.transform.position.y = y;
            }
        },
    );
    let (min, max) = config.y_range;
    NumberController::new("y", binding, min, max).step(config.y_step)
}

/// Checkbox bound to the solid's visibility.
pub fn visibility(scene: &Rc<RefCell<Scene>>, solid: NodeId) -> BooleanController {
    let reader = scene.clone();
    let writer = scene.clone();
    let binding = Binding::new(
        move || reader.borrow().mesh(solid).is_some_and(|m| m.visible),
        move |visible| {
            if let Some(mesh) = writer.borrow_mut().mesh_mut(solid) {
                mesh.visible = visible;
            }
        },
    );
    BooleanController::new("visible", binding)
}

/// Color picker bound to `options`; every change is pushed into the solid's
/// material right away.
pub fn color(
    scene: &Rc<RefCell<Scene>>,
    solid: NodeId,
    options: &Rc<RefCell<ColorOptions>>,
) -> ColorController {
    let reader = options.clone();
    let writer = options.clone();
    let binding = Binding::new(move || reader.borrow().color, move |c| writer.borrow_mut().color = c);

    let scene = scene.clone();
    ColorController::new("color", binding).on_change(move |c| {
        if let Some(mesh) = scene.borrow_mut().mesh_mut(solid) {
            mesh.material.set_color(c);
        }
    })
}

/// The three-row panel: `y`, `visible`, `color`.
pub fn build_panel(
    scene: &Rc<RefCell<Scene>>,
    solid: NodeId,
    options: &Rc<RefCell<ColorOptions>>,
    config: &DemoConfig,
    font: Option<FontId>,
) -> ControlPanel {
    ControlPanel::new()
        .font(font)
        .with(position_y(scene, solid, config))
        .with(visibility(scene, solid))
        .with(color(scene, solid, options))
}
