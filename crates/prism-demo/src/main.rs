mod app;
mod assembly;
mod config;
mod controls;
mod navigation;
mod render_loop;
mod resize;
#[cfg(test)]
mod testing;

use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::window::Runtime;

use crate::app::DemoApp;
use crate::assembly::assemble;
use crate::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    let world = assemble(&config, config.width, config.height);
    let app = DemoApp::new(&config, world);

    log::info!("starting {} at {}x{}", config.title, config.width, config.height);
    Runtime::run(config.runtime_config(), config.gpu_init(), app)
}
