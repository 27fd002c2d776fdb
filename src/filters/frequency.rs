//! Lowpass and highpass filters built from Gaussian kernels.
//!
//! Despite their names, all four are spatial-domain convolutions with
//! Gaussian-derived kernels rather than true frequency-domain filters:
//! both "lowpass" variants convolve with a plain Gaussian, the
//! "highpass Gaussian" convolves directly with a lowpass kernel (no
//! inversion, so it smooths), and the "highpass ideal" derives its
//! kernel as `1 - w` from a Gaussian without re-normalizing. Callers
//! depend on these exact output semantics; do not "correct" them.

use crate::buffer::PixelBuffer;
use crate::error::EnhanceError;
use crate::filters::convolve::convolve;
use crate::filters::kernel::Kernel;

/// The highpass-Gaussian kernel is always 5x5, independent of sigma.
const HIGHPASS_GAUSSIAN_SIZE: usize = 5;

/// Bump even sizes to the next odd value.
fn next_odd(size: usize) -> usize {
    if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}

/// Lowpass "ideal" filter: a Gaussian blur with an odd-forced kernel.
///
/// Kernel size is `ceil(sigma * 6)` (covering ~99.7% of the
/// distribution), bumped to the next odd value.
pub fn lowpass_ideal(buffer: &PixelBuffer, sigma: f32) -> Result<PixelBuffer, EnhanceError> {
    let size = next_odd((sigma * 6.0).ceil() as usize);
    convolve(buffer, &Kernel::gaussian(size, sigma))
}

/// Lowpass Gaussian filter.
///
/// Same `ceil(sigma * 6)` sizing as [`lowpass_ideal`] but without the
/// odd-forcing, so kernel parity depends on sigma. Kept distinct from
/// the "ideal" variant on purpose.
pub fn lowpass_gaussian(buffer: &PixelBuffer, sigma: f32) -> Result<PixelBuffer, EnhanceError> {
    let size = (sigma * 6.0).ceil() as usize;
    convolve(buffer, &Kernel::gaussian(size, sigma))
}

/// Highpass Gaussian filter.
///
/// Convolves with a fixed-size 5x5 Gaussian kernel, without inverting
/// it, so the observable effect is another smoothing pass.
pub fn highpass_gaussian(buffer: &PixelBuffer, sigma: f32) -> Result<PixelBuffer, EnhanceError> {
    convolve(buffer, &Kernel::gaussian(HIGHPASS_GAUSSIAN_SIZE, sigma))
}

/// Highpass "ideal" filter.
///
/// Builds a Gaussian kernel of size `floor(cutoff * 2)` (odd-forced)
/// using `cutoff` as sigma, then maps every weight to `1 - w`. The
/// derived kernel is not re-normalized, so output gain is not unity.
///
/// # Errors
/// Returns [`EnhanceError::InvalidKernel`] if the derived kernel is
/// empty.
pub fn highpass_ideal(buffer: &PixelBuffer, cutoff: f32) -> Result<PixelBuffer, EnhanceError> {
    let size = next_odd((cutoff * 2.0).floor() as usize);
    let kernel = Kernel::gaussian(size, cutoff).complement();

    if kernel.is_empty() {
        return Err(EnhanceError::InvalidKernel("derived highpass kernel is empty"));
    }

    convolve(buffer, &kernel)
}
