/// Smallest texture size with a nonzero center (and so a nonzero radius).
pub const MIN_SIZE: u32 = 2;

/// Fully opaque alpha.
pub const ALPHA_OPAQUE: u8 = 255;

/// Fully transparent alpha.
pub const ALPHA_TRANSPARENT: u8 = 0;

/// Channels per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// Fill for a freshly allocated canvas: transparent black.
pub const CLEAR_PIXEL: [u8; 4] = [0, 0, 0, 0];
