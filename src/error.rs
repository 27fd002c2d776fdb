//! Error types for the enhancement core.

/// Errors produced by the enhancement operations.
#[derive(thiserror::Error, Debug)]
pub enum EnhanceError {
    /// A convolution kernel with no rows or no columns was supplied
    /// (or derived, for the highpass-ideal kernel).
    #[error("invalid kernel: {0}")]
    InvalidKernel(&'static str),

    /// Raw pixel data does not match the declared dimensions.
    #[error("pixel data length ({len}) does not match width * height * 4 ({expected})")]
    InvalidBufferLength {
        /// Length of the supplied byte slice.
        len: usize,
        /// Expected length for the declared width and height.
        expected: usize,
    },

    /// Error when shape is not valid.
    #[error("invalid shape")]
    InvalidShape(#[from] ndarray::ShapeError),
}
