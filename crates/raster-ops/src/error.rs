//! Error types for resampling operations.

use thiserror::Error;

/// Error type for resampling operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// A source or destination dimension is zero, or the size math overflows.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Source buffer length does not match the declared dimensions.
    #[error("invalid buffer: expected {expected} bytes, got {got}")]
    InvalidBuffer {
        /// Expected byte count (`src_w * src_h * 4`)
        expected: usize,
        /// Actual byte count supplied
        got: usize,
    },

    /// Error bubbled up from buffer construction.
    #[error(transparent)]
    Core(#[from] raster_core::CoreError),
}

/// Result type for resampling operations.
pub type OpsResult<T> = Result<T, OpsError>;
