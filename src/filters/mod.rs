//! The enhancement operations.
//!
//! ## Operation Catalog
//!
//! | Operation | Kind | Parameter |
//! |-----------|------|-----------|
//! | `gamma` | point transform | gamma (positive real) |
//! | `histogram` | point transform | — |
//! | `laplacian` | 3x3 convolution | — |
//! | `sobel` | two 3x3 convolutions + magnitude | — |
//! | `lowpassIdeal` | Gaussian convolution, odd-forced size | sigma |
//! | `lowpassGaussian` | Gaussian convolution | sigma |
//! | `highpassIdeal` | `1 - w` Gaussian convolution | cutoff |
//! | `highpassGaussian` | fixed 5x5 Gaussian convolution | sigma |
//!
//! This set is closed: the eight variants of [`Enhancement`] are the
//! complete selection surface. Every kernel-based operation funnels
//! through [`convolve::convolve`], the single shared numerical
//! primitive.
//!
//! ## Architecture
//!
//! - **Pure functions** - every operation is a synchronous function of
//!   its inputs; a new output buffer is allocated, inputs are never
//!   mutated, and no ambient state exists.
//! - **Alpha preservation** - the alpha channel is always copied through
//!   unmodified.
//! - **Saturating output** - accumulated values are rounded and clamped
//!   to 0-255; out-of-range intermediates never raise.
//! - **No parameter validation** - non-positive gamma/sigma/cutoff are
//!   caller responsibility and produce undefined numeric results.

pub mod convolve;
pub mod edge;
pub mod frequency;
pub mod kernel;
pub mod point;

use crate::buffer::PixelBuffer;
use crate::error::EnhanceError;

/// One of the eight named enhancement operations, with its parameters.
///
/// The variant set is closed and matches the frontend's operation ids
/// one-to-one; see [`Enhancement::name`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Enhancement {
    /// Power-law gamma correction.
    Gamma {
        /// Gamma value; the exponent applied per channel is `1 / gamma`.
        gamma: f32,
    },
    /// Luminance histogram equalization (output is grayscale).
    Histogram,
    /// 3x3 discrete Laplacian.
    Laplacian,
    /// Sobel gradient magnitude.
    Sobel,
    /// Gaussian blur with odd-forced kernel size.
    LowpassIdeal {
        /// Gaussian spread; kernel size is `ceil(sigma * 6)` forced odd.
        sigma: f32,
    },
    /// Gaussian blur without odd-forcing.
    LowpassGaussian {
        /// Gaussian spread; kernel size is `ceil(sigma * 6)` as-is.
        sigma: f32,
    },
    /// Un-normalized `1 - w` Gaussian-derived kernel.
    HighpassIdeal {
        /// Cutoff; used both for kernel sizing and in place of sigma.
        cutoff: f32,
    },
    /// Fixed 5x5 Gaussian kernel applied without inversion.
    HighpassGaussian {
        /// Gaussian spread of the fixed-size kernel.
        sigma: f32,
    },
}

impl Enhancement {
    /// The frontend's id string for this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gamma { .. } => "gamma",
            Self::Histogram => "histogram",
            Self::Laplacian => "laplacian",
            Self::Sobel => "sobel",
            Self::LowpassIdeal { .. } => "lowpassIdeal",
            Self::LowpassGaussian { .. } => "lowpassGaussian",
            Self::HighpassIdeal { .. } => "highpassIdeal",
            Self::HighpassGaussian { .. } => "highpassGaussian",
        }
    }

    /// Run this enhancement, producing a new buffer of identical
    /// dimensions.
    ///
    /// # Errors
    /// Returns [`EnhanceError::InvalidKernel`] from the kernel-based
    /// operations when a degenerate kernel is produced.
    pub fn apply(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, EnhanceError> {
        match *self {
            Self::Gamma { gamma } => Ok(point::gamma_correct(buffer, gamma)),
            Self::Histogram => Ok(point::equalize_histogram(buffer)),
            Self::Laplacian => edge::laplacian(buffer),
            Self::Sobel => edge::sobel(buffer),
            Self::LowpassIdeal { sigma } => frequency::lowpass_ideal(buffer, sigma),
            Self::LowpassGaussian { sigma } => frequency::lowpass_gaussian(buffer, sigma),
            Self::HighpassIdeal { cutoff } => frequency::highpass_ideal(buffer, cutoff),
            Self::HighpassGaussian { sigma } => frequency::highpass_gaussian(buffer, sigma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::CHANNELS;

    fn gradient_image(width: usize, height: usize) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[
                    (x * 40) as u8,
                    (y * 40) as u8,
                    ((x + y) * 20) as u8,
                    (200 + x) as u8,
                ]);
            }
        }
        PixelBuffer::from_raw(width, height, data).unwrap()
    }

    fn all_eight() -> [Enhancement; 8] {
        [
            Enhancement::Gamma { gamma: 2.2 },
            Enhancement::Histogram,
            Enhancement::Laplacian,
            Enhancement::Sobel,
            Enhancement::LowpassIdeal { sigma: 0.8 },
            Enhancement::LowpassGaussian { sigma: 0.8 },
            Enhancement::HighpassIdeal { cutoff: 1.2 },
            Enhancement::HighpassGaussian { sigma: 1.0 },
        ]
    }

    #[test]
    fn test_names_match_frontend_ids() {
        let names: Vec<&str> = all_eight().iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "gamma",
                "histogram",
                "laplacian",
                "sobel",
                "lowpassIdeal",
                "lowpassGaussian",
                "highpassIdeal",
                "highpassGaussian",
            ]
        );
    }

    #[test]
    fn test_every_operation_preserves_dimensions_and_alpha() {
        let input = gradient_image(5, 4);

        for enhancement in all_eight() {
            let output = enhancement.apply(&input).unwrap();
            assert_eq!(output.width(), 5, "{}", enhancement.name());
            assert_eq!(output.height(), 4, "{}", enhancement.name());

            for y in 0..4 {
                for x in 0..5 {
                    assert_eq!(
                        output.pixels()[[y, x, 3]],
                        input.pixels()[[y, x, 3]],
                        "{} modified alpha at ({}, {})",
                        enhancement.name(),
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_operation_leaves_input_untouched() {
        let input = gradient_image(4, 4);
        let snapshot = input.clone();

        for enhancement in all_eight() {
            let _ = enhancement.apply(&input).unwrap();
            assert_eq!(input, snapshot, "{}", enhancement.name());
        }
    }
}
