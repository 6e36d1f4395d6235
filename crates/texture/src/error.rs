use std::path::PathBuf;

use thiserror::Error;

use crate::constants::MIN_SIZE;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("Invalid texture size: {0} (must be at least {min})", min = MIN_SIZE)]
    InvalidSize(u32),

    #[error("Gradient size {gradient} does not match canvas size {canvas}")]
    SizeMismatch { canvas: u32, gradient: u32 },

    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
