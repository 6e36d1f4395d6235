//! RGBA canvas that the brush texture is painted into

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::constants::{CLEAR_PIXEL, MIN_SIZE};
use crate::error::TextureError;
use crate::gradient::RadialGradient;

/// A square 8-bit RGBA canvas, initialized to transparent black
pub struct BrushCanvas {
    image: RgbaImage,
}

impl BrushCanvas {
    /// Create a `size` x `size` transparent canvas
    pub fn new(size: u32) -> Result<Self, TextureError> {
        if size < MIN_SIZE {
            return Err(TextureError::InvalidSize(size));
        }
        Ok(Self {
            image: RgbaImage::from_pixel(size, size, Rgba(CLEAR_PIXEL)),
        })
    }

    /// Edge length in pixels
    #[inline]
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Write `(r, g, b, alpha(x, y))` to every pixel, row by row
    ///
    /// The gradient must have been built for the canvas size.
    pub fn paint_gradient(
        &mut self,
        gradient: &RadialGradient,
        color: [u8; 3],
    ) -> Result<(), TextureError> {
        let size = self.size();
        if gradient.size() != size {
            return Err(TextureError::SizeMismatch {
                canvas: size,
                gradient: gradient.size(),
            });
        }
        let [r, g, b] = color;

        for y in 0..size {
            for x in 0..size {
                let alpha = gradient.alpha(x, y);
                self.image.put_pixel(x, y, Rgba([r, g, b, alpha]));
            }
        }

        debug!(
            "BrushCanvas::paint_gradient: painted {}x{} pixels, center={}",
            size,
            size,
            gradient.center()
        );
        Ok(())
    }

    /// Get a pixel as `[r, g, b, a]`
    /// Returns None if coordinates are out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Raw pixel data, row-major RGBA8
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
