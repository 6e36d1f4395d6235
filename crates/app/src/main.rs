//! brushgen - radial gradient brush texture generator

use std::process::ExitCode;

use brushgen_config::BrushTextureConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // INFO unless RUST_LOG says otherwise; logs go to stderr so stdout
    // carries only the confirmation line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BrushTextureConfig::default();

    info!("Generating {}x{} brush texture", config.size, config.size);

    match brushgen_texture::generate(&config) {
        Ok(path) => {
            println!("Brush texture created at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Brush texture generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
