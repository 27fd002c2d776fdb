//! WebAssembly exports for the enhancement operations.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Each
//! takes the flat RGBA byte array of a canvas `ImageData` plus its
//! dimensions and returns the transformed bytes; malformed input and
//! degenerate kernels surface as thrown `JsError`s.

use wasm_bindgen::prelude::*;

use crate::buffer::PixelBuffer;
use crate::filters::{edge, frequency, point, Enhancement};

fn ingest(data: &[u8], width: usize, height: usize) -> Result<PixelBuffer, JsError> {
    Ok(PixelBuffer::from_raw(width, height, data.to_vec())?)
}

// ============================================================================
// Point Transforms
// ============================================================================

/// Apply gamma correction to flat RGBA bytes.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `gamma` - Gamma value (positive)
#[wasm_bindgen]
pub fn gamma_correct_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    gamma: f32,
) -> Result<Vec<u8>, JsError> {
    let buffer = ingest(data, width, height)?;
    Ok(point::gamma_correct(&buffer, gamma).into_raw())
}

/// Equalize the luminance histogram of flat RGBA bytes.
#[wasm_bindgen]
pub fn equalize_histogram_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsError> {
    let buffer = ingest(data, width, height)?;
    Ok(point::equalize_histogram(&buffer).into_raw())
}

// ============================================================================
// Edge Detection
// ============================================================================

/// Apply the 3x3 Laplacian filter to flat RGBA bytes.
#[wasm_bindgen]
pub fn laplacian_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let buffer = ingest(data, width, height)?;
    Ok(edge::laplacian(&buffer)?.into_raw())
}

/// Apply the Sobel operator to flat RGBA bytes.
#[wasm_bindgen]
pub fn sobel_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let buffer = ingest(data, width, height)?;
    Ok(edge::sobel(&buffer)?.into_raw())
}

// ============================================================================
// Lowpass / Highpass Filters
// ============================================================================

/// Apply the lowpass "ideal" filter to flat RGBA bytes.
#[wasm_bindgen]
pub fn lowpass_ideal_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    sigma: f32,
) -> Result<Vec<u8>, JsError> {
    let buffer = ingest(data, width, height)?;
    Ok(frequency::lowpass_ideal(&buffer, sigma)?.into_raw())
}

/// Apply the lowpass Gaussian filter to flat RGBA bytes.
#[wasm_bindgen]
pub fn lowpass_gaussian_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    sigma: f32,
) -> Result<Vec<u8>, JsError> {
    let buffer = ingest(data, width, height)?;
    Ok(frequency::lowpass_gaussian(&buffer, sigma)?.into_raw())
}

/// Apply the highpass "ideal" filter to flat RGBA bytes.
#[wasm_bindgen]
pub fn highpass_ideal_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    cutoff: f32,
) -> Result<Vec<u8>, JsError> {
    let buffer = ingest(data, width, height)?;
    Ok(frequency::highpass_ideal(&buffer, cutoff)?.into_raw())
}

/// Apply the highpass Gaussian filter to flat RGBA bytes.
#[wasm_bindgen]
pub fn highpass_gaussian_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    sigma: f32,
) -> Result<Vec<u8>, JsError> {
    let buffer = ingest(data, width, height)?;
    Ok(frequency::highpass_gaussian(&buffer, sigma)?.into_raw())
}

// ============================================================================
// Name-Dispatched Entry Point
// ============================================================================

/// Apply an enhancement selected by its frontend id.
///
/// `param` carries the operation's numeric parameter (gamma, sigma or
/// cutoff); it is ignored by `histogram`, `laplacian` and `sobel`.
/// Unrecognized names are a user-input error, reported here at the
/// selection boundary rather than inside the core.
#[wasm_bindgen]
pub fn apply_enhancement_wasm(
    name: &str,
    data: &[u8],
    width: usize,
    height: usize,
    param: f32,
) -> Result<Vec<u8>, JsError> {
    let enhancement = match name {
        "gamma" => Enhancement::Gamma { gamma: param },
        "histogram" => Enhancement::Histogram,
        "laplacian" => Enhancement::Laplacian,
        "sobel" => Enhancement::Sobel,
        "lowpassIdeal" => Enhancement::LowpassIdeal { sigma: param },
        "lowpassGaussian" => Enhancement::LowpassGaussian { sigma: param },
        "highpassIdeal" => Enhancement::HighpassIdeal { cutoff: param },
        "highpassGaussian" => Enhancement::HighpassGaussian { sigma: param },
        _ => return Err(JsError::new("unknown enhancement")),
    };

    let buffer = ingest(data, width, height)?;
    Ok(enhancement.apply(&buffer)?.into_raw())
}
