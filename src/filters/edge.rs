//! Edge detection filters: Laplacian and Sobel.
//!
//! Both run through the shared convolution engine with fixed 3x3
//! kernels. Sobel additionally combines its two gradient images into a
//! grayscale magnitude image.

use ndarray::{arr2, Array3};

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::error::EnhanceError;
use crate::filters::convolve::convolve;
use crate::filters::kernel::Kernel;

/// Discrete Laplacian, edge-enhancing.
const LAPLACIAN: [[f32; 3]; 3] = [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]];

/// Sobel horizontal gradient.
const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Sobel vertical gradient.
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Apply the 3x3 Laplacian kernel.
pub fn laplacian(buffer: &PixelBuffer) -> Result<PixelBuffer, EnhanceError> {
    convolve(buffer, &Kernel::from_weights(arr2(&LAPLACIAN)))
}

/// Apply the Sobel operator.
///
/// Convolves the buffer independently with the horizontal and vertical
/// gradient kernels, then writes the per-pixel gradient magnitude
/// `sqrt(gx^2 + gy^2)` into all three color channels. The magnitude is
/// computed from the red channel of each gradient image only; alpha is
/// copied from the original input.
pub fn sobel(buffer: &PixelBuffer) -> Result<PixelBuffer, EnhanceError> {
    let gradient_x = convolve(buffer, &Kernel::from_weights(arr2(&SOBEL_X)))?;
    let gradient_y = convolve(buffer, &Kernel::from_weights(arr2(&SOBEL_Y)))?;

    let (height, width) = (buffer.height(), buffer.width());
    let src = buffer.pixels();
    let gx = gradient_x.pixels();
    let gy = gradient_y.pixels();
    let mut output = Array3::<u8>::zeros((height, width, CHANNELS));

    for y in 0..height {
        for x in 0..width {
            let hx = gx[[y, x, 0]] as f32;
            let hy = gy[[y, x, 0]] as f32;
            let magnitude = (hx * hx + hy * hy).sqrt().round().clamp(0.0, 255.0) as u8;

            output[[y, x, 0]] = magnitude;
            output[[y, x, 1]] = magnitude;
            output[[y, x, 2]] = magnitude;
            output[[y, x, 3]] = src[[y, x, 3]];
        }
    }

    Ok(PixelBuffer::from_pixels(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, rgba: [u8; 4]) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        PixelBuffer::from_raw(width, height, data).unwrap()
    }

    fn vertical_split(width: usize, height: usize, left: u8, right: u8) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for _ in 0..height {
            for x in 0..width {
                let v = if x < width / 2 { left } else { right };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn test_laplacian_flat_image_is_zero() {
        let output = laplacian(&solid(5, 5, [128, 128, 128, 255])).unwrap();
        assert_eq!(output.pixels()[[2, 2, 0]], 0);
        assert_eq!(output.pixels()[[0, 0, 1]], 0);
        assert_eq!(output.pixels()[[2, 2, 3]], 255);
    }

    #[test]
    fn test_laplacian_responds_to_edge() {
        let output = laplacian(&vertical_split(6, 5, 0, 200)).unwrap();
        // Bright side of the boundary column gets a positive response.
        assert!(output.pixels()[[2, 3, 0]] > 0);
    }

    #[test]
    fn test_sobel_uniform_image_has_no_gradient() {
        let output = sobel(&solid(5, 5, [90, 120, 40, 200])).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(output.pixels()[[y, x, 0]], 0);
                assert_eq!(output.pixels()[[y, x, 1]], 0);
                assert_eq!(output.pixels()[[y, x, 2]], 0);
                assert_eq!(output.pixels()[[y, x, 3]], 200);
            }
        }
    }

    #[test]
    fn test_sobel_detects_vertical_edge() {
        let output = sobel(&vertical_split(6, 5, 0, 255)).unwrap();
        let p = output.pixels();
        assert!(p[[2, 3, 0]] > 0);
        // Magnitude image is grayscale.
        assert_eq!(p[[2, 3, 0]], p[[2, 3, 1]]);
        assert_eq!(p[[2, 3, 1]], p[[2, 3, 2]]);
    }

    #[test]
    fn test_sobel_preserves_dimensions() {
        let output = sobel(&solid(7, 3, [10, 10, 10, 255])).unwrap();
        assert_eq!(output.width(), 7);
        assert_eq!(output.height(), 3);
    }
}
