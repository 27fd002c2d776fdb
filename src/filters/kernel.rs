//! Convolution kernel type and Gaussian kernel construction.

use ndarray::{Array2, ArrayView2};

/// A square matrix of convolution weights.
///
/// Kernels are expected to be odd-sized so they center on the output
/// pixel; the builder does not enforce this, some callers do.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Array2<f32>,
}

impl Kernel {
    /// Wrap an explicit weight matrix.
    pub fn from_weights(weights: Array2<f32>) -> Self {
        Self { weights }
    }

    /// Build a normalized 2D Gaussian kernel.
    ///
    /// Each weight is `exp(-0.5 * (((x-m)/sigma)^2 + ((y-m)/sigma)^2))
    /// / (2*pi*sigma^2)` with `m = size / 2`, then the whole matrix is
    /// divided by its sum so the kernel integrates to 1 and convolution
    /// preserves overall brightness.
    ///
    /// # Arguments
    /// * `size` - Side length of the kernel
    /// * `sigma` - Standard deviation of the Gaussian; zero or negative
    ///   sigma is caller responsibility and yields undefined numerics
    pub fn gaussian(size: usize, sigma: f32) -> Self {
        let mean = (size / 2) as f32;
        let norm = 2.0 * std::f32::consts::PI * sigma * sigma;

        let mut weights = Array2::<f32>::zeros((size, size));
        let mut sum = 0.0f32;
        for y in 0..size {
            for x in 0..size {
                let dx = (x as f32 - mean) / sigma;
                let dy = (y as f32 - mean) / sigma;
                let value = (-0.5 * (dx * dx + dy * dy)).exp() / norm;
                weights[[y, x]] = value;
                sum += value;
            }
        }

        for w in weights.iter_mut() {
            *w /= sum;
        }

        Self { weights }
    }

    /// Map every weight `w` to `1 - w`.
    ///
    /// Used to derive the highpass-ideal kernel from a lowpass Gaussian.
    /// The result is deliberately not re-normalized.
    pub fn complement(&self) -> Self {
        Self {
            weights: self.weights.mapv(|w| 1.0 - w),
        }
    }

    /// Number of kernel rows.
    pub fn rows(&self) -> usize {
        self.weights.shape()[0]
    }

    /// Number of kernel columns.
    pub fn cols(&self) -> usize {
        self.weights.shape()[1]
    }

    /// True when the kernel has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Read-only view of the weight matrix.
    pub fn weights(&self) -> ArrayView2<'_, f32> {
        self.weights.view()
    }
}
