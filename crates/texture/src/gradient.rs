//! Radial alpha falloff for the brush texture
//!
//! Alpha is 255 at the center pixel and falls off linearly to 0 at a
//! distance equal to the center coordinate. Anything further out (the
//! corners of the square) is clamped to fully transparent, so the visible
//! shape is a disc.
//!
//! The center is `size / 2` with integer truncation. For even sizes this is
//! one half pixel right of and below the geometric center, so the texture is
//! mirror symmetric about `size / 2` rather than about `(size - 1) / 2`.

use crate::constants::{ALPHA_OPAQUE, MIN_SIZE};
use crate::error::TextureError;

/// Distance based alpha for a square texture of a given size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadialGradient {
    size: u32,
    center: u32,
}

impl RadialGradient {
    /// Create a gradient for a `size` x `size` texture
    ///
    /// Sizes below [`MIN_SIZE`] are rejected since their center (and radius)
    /// would be zero.
    pub fn new(size: u32) -> Result<Self, TextureError> {
        if size < MIN_SIZE {
            return Err(TextureError::InvalidSize(size));
        }
        Ok(Self {
            size,
            center: size / 2,
        })
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Center coordinate, shared by both axes
    #[inline]
    pub fn center(&self) -> u32 {
        self.center
    }

    /// Distance at which alpha reaches zero. Equal to the center coordinate.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.center as f64
    }

    /// Euclidean distance from `(x, y)` to the center
    pub fn distance(&self, x: u32, y: u32) -> f64 {
        let dx = x as f64 - self.center as f64;
        let dy = y as f64 - self.center as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance over radius, clamped to 1.0
    pub fn normalized_distance(&self, x: u32, y: u32) -> f64 {
        (self.distance(x, y) / self.radius()).min(1.0)
    }

    /// Alpha for the pixel at `(x, y)`, truncated toward zero
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        let normalized = self.normalized_distance(x, y);
        (ALPHA_OPAQUE as f64 * (1.0 - normalized)).floor() as u8
    }
}

/// Alpha for `(x, y)` in a `size` x `size` texture
///
/// Convenience over [`RadialGradient::alpha`] for one-off lookups.
pub fn gradient_alpha(x: u32, y: u32, size: u32) -> Result<u8, TextureError> {
    Ok(RadialGradient::new(size)?.alpha(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ALPHA_TRANSPARENT;

    fn default_gradient() -> RadialGradient {
        RadialGradient::new(256).unwrap()
    }

    #[test]
    fn test_center_is_opaque() {
        let gradient = default_gradient();
        assert_eq!(gradient.center(), 128);
        assert_eq!(gradient.alpha(128, 128), ALPHA_OPAQUE);
    }

    #[test]
    fn test_corners_are_transparent() {
        let gradient = default_gradient();
        for (x, y) in [(0, 0), (255, 0), (0, 255), (255, 255)] {
            assert_eq!(gradient.alpha(x, y), ALPHA_TRANSPARENT, "corner ({x}, {y})");
        }
    }

    #[test]
    fn test_radius_distance_is_transparent() {
        let gradient = default_gradient();
        // Exactly one radius away along each axis
        assert_eq!(gradient.alpha(128, 0), ALPHA_TRANSPARENT);
        assert_eq!(gradient.alpha(0, 128), ALPHA_TRANSPARENT);
        assert!((gradient.normalized_distance(128, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_truncated_center_asymmetry() {
        let gradient = default_gradient();
        // 127 px from center on the far side: 255 * (1 - 127/128) = 1.99
        assert_eq!(gradient.alpha(255, 128), 1);
        assert_eq!(gradient.alpha(128, 255), 1);
        assert_eq!(gradient.alpha(0, 128), 0);
    }

    #[test]
    fn test_linear_falloff_values() {
        let gradient = default_gradient();
        // 255 * (1 - 1/128) = 253.007
        assert_eq!(gradient.alpha(129, 128), 253);
        // 255 * (1 - 64/128) = 127.5
        assert_eq!(gradient.alpha(192, 128), 127);
        assert_eq!(gradient.alpha(64, 128), 127);
        // 3-4-5 triangle scaled by 16: distance 80, 255 * 48/128 = 95.625
        assert_eq!(gradient.alpha(128 + 48, 128 + 64), 95);
    }

    #[test]
    fn test_alpha_monotonic_along_axis() {
        let gradient = default_gradient();
        let mut last = ALPHA_OPAQUE;
        for x in 128..256 {
            let alpha = gradient.alpha(x, 128);
            assert!(alpha <= last, "alpha increased at x={x}");
            last = alpha;
        }
    }

    #[test]
    fn test_mirror_symmetry_about_center() {
        let gradient = default_gradient();
        let c = gradient.center();
        for y in 0..256 {
            for x in 1..256 {
                let mirrored = 2 * c - x;
                assert_eq!(gradient.alpha(x, y), gradient.alpha(mirrored, y));
                assert_eq!(gradient.alpha(y, x), gradient.alpha(y, mirrored));
            }
        }
    }

    #[test]
    fn test_diagonal_symmetry() {
        let gradient = default_gradient();
        for y in 0..256 {
            for x in 0..256 {
                assert_eq!(gradient.alpha(x, y), gradient.alpha(y, x));
            }
        }
    }

    #[test]
    fn test_odd_size() {
        let gradient = RadialGradient::new(5).unwrap();
        assert_eq!(gradient.center(), 2);
        assert_eq!(gradient.alpha(2, 2), ALPHA_OPAQUE);
        assert_eq!(gradient.alpha(0, 2), ALPHA_TRANSPARENT);
        assert_eq!(gradient.alpha(4, 2), ALPHA_TRANSPARENT);
        // 255 * (1 - 1/2)
        assert_eq!(gradient.alpha(3, 2), 127);
    }

    #[test]
    fn test_minimum_size() {
        let gradient = RadialGradient::new(2).unwrap();
        assert_eq!(gradient.alpha(1, 1), ALPHA_OPAQUE);
        assert_eq!(gradient.alpha(0, 0), ALPHA_TRANSPARENT);
        assert_eq!(gradient.alpha(0, 1), ALPHA_TRANSPARENT);
    }

    #[test]
    fn test_out_of_range_coordinates_are_transparent() {
        let gradient = RadialGradient::new(2).unwrap();
        assert_eq!(gradient.alpha(u32::MAX, u32::MAX), ALPHA_TRANSPARENT);
        assert_eq!(gradient.alpha(u32::MAX, 0), ALPHA_TRANSPARENT);
        assert!(gradient.distance(u32::MAX, u32::MAX).is_finite());
    }

    #[test]
    fn test_invalid_size() {
        assert!(matches!(RadialGradient::new(0), Err(TextureError::InvalidSize(0))));
        assert!(matches!(RadialGradient::new(1), Err(TextureError::InvalidSize(1))));
        assert_eq!(
            RadialGradient::new(1).unwrap_err().to_string(),
            "Invalid texture size: 1 (must be at least 2)"
        );
    }

    #[test]
    fn test_gradient_alpha_matches_struct() {
        let gradient = default_gradient();
        for (x, y) in [(0, 0), (100, 140), (128, 128), (200, 30)] {
            assert_eq!(gradient_alpha(x, y, 256).unwrap(), gradient.alpha(x, y));
        }
        assert!(gradient_alpha(0, 0, 1).is_err());
    }
}
