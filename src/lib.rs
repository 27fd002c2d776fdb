//! Image enhancement core.
//!
//! A small library of raster enhancement transforms for RGBA pixel
//! buffers: gamma correction, histogram equalization, Laplacian and
//! Sobel edge detection, and Gaussian-kernel lowpass/highpass filters.
//! The image-loading and canvas-rendering layer lives outside this
//! crate; it hands over a decoded [`PixelBuffer`] and gets a new one
//! back.
//!
//! ## Image Format
//!
//! Pixels are interleaved R,G,B,A bytes in row-major order, the layout
//! of a canvas `ImageData`. Every transform:
//! - allocates a new output buffer of identical dimensions,
//! - never mutates its input,
//! - copies the alpha channel through unmodified.
//!
//! ## Usage
//!
//! ```
//! use enhancekit::{Enhancement, PixelBuffer};
//!
//! let buffer = PixelBuffer::from_raw(2, 2, vec![128; 16])?;
//! let blurred = Enhancement::LowpassIdeal { sigma: 0.8 }.apply(&buffer)?;
//! assert_eq!(blurred.width(), 2);
//! # Ok::<(), enhancekit::EnhanceError>(())
//! ```

pub mod buffer;
pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::PixelBuffer;
pub use error::EnhanceError;
pub use filters::Enhancement;
