//! brushgen texture rendering
//!
//! This crate produces the soft round brush texture:
//! - [`gradient::RadialGradient`] - Per-pixel alpha from distance to center
//! - [`canvas::BrushCanvas`] - RGBA8 canvas the gradient is painted into
//! - [`output`] - PNG save and load
//! - [`render`] / [`generate`] - Entry points driven by a [`BrushTextureConfig`]

pub mod canvas;
pub mod constants;
pub mod error;
pub mod gradient;
pub mod output;

pub use canvas::*;
pub use constants::*;
pub use error::*;
pub use gradient::*;
pub use output::*;

pub use brushgen_config::BrushTextureConfig;

use std::path::PathBuf;

use image::RgbaImage;
use tracing::debug;

/// Render the brush texture described by `config` into memory
pub fn render(config: &BrushTextureConfig) -> Result<RgbaImage, TextureError> {
    let gradient = RadialGradient::new(config.size)?;
    let mut canvas = BrushCanvas::new(config.size)?;

    debug!(
        "render: size={}, center={}, color={:?}",
        config.size,
        gradient.center(),
        config.color
    );
    canvas.paint_gradient(&gradient, config.color)?;

    Ok(canvas.into_image())
}

/// Render the brush texture and write it to `config.output_path`
///
/// Returns the path that was written.
pub fn generate(config: &BrushTextureConfig) -> Result<PathBuf, TextureError> {
    let image = render(config)?;
    save_png(&image, config.output_path())?;
    Ok(config.output_path.clone())
}
