//! Shared spatial convolution engine.
//!
//! Every kernel-based enhancement funnels through [`convolve`]: Laplacian,
//! Sobel gradients, and all four lowpass/highpass filters. Boundary
//! handling is clamp-to-edge (replicate), accumulation is f32 per color
//! channel, and the result is saturated into the 0-255 range. Alpha is
//! copied straight through from the source pixel at the output position.

use ndarray::Array3;
use rayon::prelude::*;

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::error::EnhanceError;
use crate::filters::kernel::Kernel;

/// Convolve an RGBA buffer with a kernel.
///
/// Output rows are computed in parallel; each row depends only on the
/// immutable source, so the result is identical to a sequential pass.
///
/// # Arguments
/// * `buffer` - Source image; never mutated
/// * `kernel` - Weight matrix; anchored at `(rows / 2, cols / 2)`
///
/// # Returns
/// A new buffer of identical dimensions.
///
/// # Errors
/// Returns [`EnhanceError::InvalidKernel`] when the kernel has no rows
/// or no columns.
pub fn convolve(buffer: &PixelBuffer, kernel: &Kernel) -> Result<PixelBuffer, EnhanceError> {
    if kernel.is_empty() {
        return Err(EnhanceError::InvalidKernel(
            "kernel must have at least one row and one column",
        ));
    }

    let (height, width) = (buffer.height(), buffer.width());
    if height == 0 || width == 0 {
        // Nothing to sample.
        return Ok(buffer.clone());
    }

    let src = buffer.pixels();
    let weights = kernel.weights();
    let (k_rows, k_cols) = (kernel.rows(), kernel.cols());
    // For odd sizes this anchors the kernel on the output pixel, giving
    // the usual [-half, half] window; even sizes get a defined,
    // asymmetric window instead of reading past the kernel.
    let half_y = (k_rows / 2) as isize;
    let half_x = (k_cols / 2) as isize;

    let mut out = vec![0u8; height * width * CHANNELS];
    out.par_chunks_mut(width * CHANNELS)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let mut acc = [0.0f32; 3];

                for ky in 0..k_rows {
                    let sy = (y as isize + ky as isize - half_y)
                        .clamp(0, height as isize - 1) as usize;
                    for kx in 0..k_cols {
                        let sx = (x as isize + kx as isize - half_x)
                            .clamp(0, width as isize - 1) as usize;
                        let weight = weights[[ky, kx]];

                        acc[0] += src[[sy, sx, 0]] as f32 * weight;
                        acc[1] += src[[sy, sx, 1]] as f32 * weight;
                        acc[2] += src[[sy, sx, 2]] as f32 * weight;
                    }
                }

                let base = x * CHANNELS;
                row[base] = acc[0].round().clamp(0.0, 255.0) as u8;
                row[base + 1] = acc[1].round().clamp(0.0, 255.0) as u8;
                row[base + 2] = acc[2].round().clamp(0.0, 255.0) as u8;
                row[base + 3] = src[[y, x, 3]];
            }
        });

    let pixels = Array3::from_shape_vec((height, width, CHANNELS), out)?;
    Ok(PixelBuffer::from_pixels(pixels))
}
