//! Error types for tone-curve operations.

use thiserror::Error;

/// Error type for tone-curve operations.
#[derive(Error, Debug)]
pub enum ToneError {
    /// Control points out of order: the linear segment needs `in_a < in_b`.
    ///
    /// The engine never silently swaps the inputs; the caller must supply
    /// them in order.
    #[error("invalid control points: in_a ({in_a}) must be < in_b ({in_b})")]
    InvalidControlPoints {
        /// Low input control point
        in_a: u8,
        /// High input control point
        in_b: u8,
    },

    /// Buffer length does not match the declared dimensions.
    #[error("invalid buffer: expected {expected} bytes, got {got}")]
    InvalidBuffer {
        /// Expected byte count (`width * height * 4`)
        expected: usize,
        /// Actual byte count supplied
        got: usize,
    },

    /// Error bubbled up from buffer construction.
    #[error(transparent)]
    Core(#[from] raster_core::CoreError),
}

/// Result type for tone-curve operations.
pub type ToneResult<T> = Result<T, ToneError>;

/// Expected byte count for the given dimensions, with overflow-checked math.
pub(crate) fn expected_len(width: u32, height: u32) -> ToneResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| {
            raster_core::CoreError::invalid_dimensions(width, height, "byte size overflows").into()
        })
}
