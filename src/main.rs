use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use scene_playground::app::App;
use scene_playground::cli::Cli;
use scene_playground::logging::{init_logging, LoggingConfig};
use scene_playground::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());
    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..Default::default()
    });
    log::info!("Starting with preset '{}'", config.preset.name);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
