use prism_engine::render::SceneRenderer;
use prism_engine::time::ElapsedClock;
use prism_engine::world::{NodeId, PerspectiveCamera, Scene};

/// Per-frame animation step: spins the solid and its shell, draws, and
/// schedules the next frame.
///
/// While suspended (nothing to draw into) frames do nothing and the loop
/// stops rescheduling itself.
pub struct RenderLoop {
    clock: ElapsedClock,
    solid: NodeId,
    shell: NodeId,
    shell_ratio: f32,
    suspended: bool,
}

impl RenderLoop {
    pub fn new(clock: ElapsedClock, solid: NodeId, shell: NodeId, shell_ratio: f32) -> Self {
        Self { clock, solid, shell, shell_ratio, suspended: false }
    }

    /// Returns `true` when this resumes a suspended loop; the caller must
    /// then request the next frame itself.
    pub fn set_suspended(&mut self, suspended: bool) -> bool {
        let resumed = self.suspended && !suspended;
        if suspended != self.suspended {
            log::debug!("render loop {}", if suspended { "suspended" } else { "resumed" });
        }
        self.suspended = suspended;
        resumed
    }

    /// Sets both rotations from one elapsed-time reading `t` (seconds).
    pub fn animate(&self, scene: &mut Scene, t: f32) {
        if let Some(solid) = scene.mesh_mut(self.solid) {
            solid.transform.rotation.x = t;
            solid.transform.rotation.y = t;
        }
        let shell_angle = t * self.shell_ratio;
        if let Some(shell) = scene.mesh_mut(self.shell) {
            shell.transform.rotation.x = shell_angle;
            shell.transform.rotation.y = shell_angle;
        }
    }

    /// Reads the clock once, animates, renders, then calls `request_next`.
    ///
    /// Returns the time the frame was animated at, or `None` while suspended.
    pub fn frame<R: SceneRenderer>(
        &self,
        renderer: &mut R,
        scene: &mut Scene,
        camera: &PerspectiveCamera,
        request_next: impl FnOnce(),
    ) -> Option<f32> {
        if self.suspended {
            return None;
        }
        let t = self.clock.elapsed_secs();
        self.animate(scene, t);
        renderer.render(scene, camera);
        request_next();
        Some(t)
    }
}
