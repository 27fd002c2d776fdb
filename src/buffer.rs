//! RGBA pixel buffer type shared by all enhancement operations.
//!
//! A [`PixelBuffer`] is a rectangular raster of interleaved R,G,B,A bytes
//! in row-major order, the same layout a browser canvas hands over.
//! Every enhancement allocates a fresh output buffer of identical
//! dimensions; inputs are never mutated.

use ndarray::{Array3, ArrayView3};

use crate::error::EnhanceError;

/// Interleaved channels per pixel: R, G, B, A.
pub const CHANNELS: usize = 4;

/// An owned RGBA raster with shape (height, width, 4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array3<u8>,
}

impl PixelBuffer {
    /// Build a buffer from a flat RGBA byte vector.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `data` - Interleaved RGBA bytes, length = width * height * 4
    ///
    /// # Errors
    /// Returns [`EnhanceError::InvalidBufferLength`] when the data length
    /// does not match the declared dimensions.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, EnhanceError> {
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(EnhanceError::InvalidBufferLength {
                len: data.len(),
                expected,
            });
        }
        let pixels = Array3::from_shape_vec((height, width, CHANNELS), data)?;
        Ok(Self { pixels })
    }

    /// Wrap an existing (height, width, 4) array.
    pub(crate) fn from_pixels(pixels: Array3<u8>) -> Self {
        debug_assert_eq!(pixels.shape()[2], CHANNELS);
        Self { pixels }
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.pixels.shape()[1]
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.pixels.shape()[0]
    }

    /// Read-only view of the (height, width, 4) pixel array.
    pub fn pixels(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    /// Consume the buffer, returning the flat RGBA byte vector
    /// (row-major, the canvas `ImageData` layout).
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_raw_vec_and_offset().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_round_trip() {
        let data = vec![
            255, 0, 0, 255, //
            0, 255, 0, 128, //
            0, 0, 255, 64, //
            255, 255, 255, 0,
        ];
        let buffer = PixelBuffer::from_raw(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.pixels()[[0, 1, 1]], 255);
        assert_eq!(buffer.pixels()[[1, 0, 3]], 64);
        assert_eq!(buffer.into_raw(), data);
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let result = PixelBuffer::from_raw(2, 2, vec![0u8; 15]);
        assert!(matches!(
            result,
            Err(EnhanceError::InvalidBufferLength {
                len: 15,
                expected: 16
            })
        ));
    }

    #[test]
    fn test_empty_buffer_is_valid() {
        let buffer = PixelBuffer::from_raw(0, 0, Vec::new()).unwrap();
        assert_eq!(buffer.width(), 0);
        assert_eq!(buffer.height(), 0);
    }
}
