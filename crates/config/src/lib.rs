//! Shared configuration for brushgen
//!
//! Single source of truth for the brush texture parameters. All values are
//! fixed for now; they are gathered here so the generator never hardcodes
//! literals of its own.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default texture edge length in pixels (the texture is square)
pub const DEFAULT_SIZE: u32 = 256;

/// Default brush color, RGB
pub const DEFAULT_COLOR: [u8; 3] = [255, 255, 255];

/// Default output location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "public/brush.png";

/// Brush texture configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushTextureConfig {
    /// Width and height in pixels
    pub size: u32,
    /// Color written to every pixel; only alpha varies
    pub color: [u8; 3],
    /// Where the PNG is written. The parent directory must already exist.
    pub output_path: PathBuf,
}

impl Default for BrushTextureConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: DEFAULT_COLOR,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl BrushTextureConfig {
    /// Create a config with the given size and output path, default color
    pub fn new(size: u32, output_path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            color: DEFAULT_COLOR,
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
