//! Per-pixel enhancements: gamma correction and histogram equalization.
//!
//! These need no spatial context and never fail for well-formed buffers.
//! Alpha channel is always preserved unchanged.

use ndarray::Array3;

use crate::buffer::{PixelBuffer, CHANNELS};

// Perceptual luminance weights used by histogram equalization.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Apply gamma correction.
///
/// Per RGB channel: `out = 255 * (in / 255)^(1 / gamma)`.
///
/// # Arguments
/// * `buffer` - Source image; never mutated
/// * `gamma` - Gamma value: > 1.0 brightens, < 1.0 darkens, 1.0 = no
///   change. Zero or negative gamma is caller responsibility and yields
///   undefined numerics bounded by the saturating cast
///
/// # Returns
/// Gamma-corrected image with alpha copied through.
pub fn gamma_correct(buffer: &PixelBuffer, gamma: f32) -> PixelBuffer {
    let (height, width) = (buffer.height(), buffer.width());
    let src = buffer.pixels();
    let mut output = Array3::<u8>::zeros((height, width, CHANNELS));

    let inv_gamma = 1.0 / gamma;

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let v = src[[y, x, c]] as f32 / 255.0;
                output[[y, x, c]] = (255.0 * v.powf(inv_gamma)).round().clamp(0.0, 255.0) as u8;
            }
            output[[y, x, 3]] = src[[y, x, 3]];
        }
    }

    PixelBuffer::from_pixels(output)
}

/// Equalize the luminance histogram.
///
/// Builds a 256-bucket histogram of rounded luminance over the whole
/// image, accumulates it into a CDF, then remaps every pixel to
/// `round(cdf[L] / total * 255)`. The result is written into all three
/// color channels, so the output is always grayscale.
///
/// Two full passes over the buffer: histogram build, then remap.
pub fn equalize_histogram(buffer: &PixelBuffer) -> PixelBuffer {
    let (height, width) = (buffer.height(), buffer.width());
    let src = buffer.pixels();
    let mut output = Array3::<u8>::zeros((height, width, CHANNELS));

    let total = (width * height) as f32;

    let mut histogram = [0u32; 256];
    for y in 0..height {
        for x in 0..width {
            let l = luminance(src[[y, x, 0]], src[[y, x, 1]], src[[y, x, 2]]);
            histogram[l] += 1;
        }
    }

    let mut cdf = [0u32; 256];
    cdf[0] = histogram[0];
    for i in 1..256 {
        cdf[i] = cdf[i - 1] + histogram[i];
    }

    for y in 0..height {
        for x in 0..width {
            let l = luminance(src[[y, x, 0]], src[[y, x, 1]], src[[y, x, 2]]);
            let equalized = (cdf[l] as f32 / total * 255.0).round() as u8;

            output[[y, x, 0]] = equalized;
            output[[y, x, 1]] = equalized;
            output[[y, x, 2]] = equalized;
            output[[y, x, 3]] = src[[y, x, 3]];
        }
    }

    PixelBuffer::from_pixels(output)
}

/// Rounded perceptual luminance as a histogram bucket index.
#[inline]
fn luminance(r: u8, g: u8, b: u8) -> usize {
    let l = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    // f32 rounding can land a hair above 255 for pure white.
    (l.round() as usize).min(255)
}
