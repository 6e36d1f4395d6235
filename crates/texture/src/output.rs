//! PNG persistence for rendered textures
//!
//! Parent directories are never created here. A missing directory is an
//! error the caller must see.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::{debug, info};

use crate::error::TextureError;

/// Encode `image` as an RGBA8 PNG at `path`, overwriting any existing file
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), TextureError> {
    debug!(
        "save_png: encoding {}x{} to {}",
        image.width(),
        image.height(),
        path.display()
    );

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| TextureError::Save {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Saved brush texture to {}", path.display());
    Ok(())
}

/// Decode the PNG at `path` into an RGBA8 image
pub fn load_png(path: &Path) -> Result<RgbaImage, TextureError> {
    let image = image::open(path).map_err(|source| TextureError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.into_rgba8())
}
