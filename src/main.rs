use clap::Parser;
use log::info;

use firstray::camera::Camera;
use firstray::config::RenderConfig;
use firstray::error::RenderError;
use firstray::output::save_image_as_jpeg;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn run(args: &Args) -> Result<(), RenderError> {
    let config = RenderConfig {
        image_width: args.width,
        ..RenderConfig::default()
    };

    let camera = Camera::new(config);
    info!(
        "Image resolution: {}x{}",
        config.image_width, camera.image_height
    );

    let buffer = camera.render()?;
    save_image_as_jpeg(&buffer, config.image_width, camera.image_height, &args.output)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("FirstRay - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        log::error!("Render failed: {}", e);
        std::process::exit(1);
    }
}
