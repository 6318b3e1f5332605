//! Error types for raster-core operations.
//!
//! All errors here are local, recoverable conditions returned to the caller;
//! the engine never terminates the process on bad input. Only a true
//! out-of-memory condition (surfaced by the allocator itself) is fatal.

use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur when constructing or accessing pixel buffers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Width or height is zero, or the byte size overflows.
    ///
    /// A valid buffer needs both dimensions >= 1 and
    /// `width * height * 4` representable as `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Raw data length does not match the declared dimensions.
    ///
    /// Returned by [`PixelBuffer::from_raw`](crate::PixelBuffer::from_raw)
    /// when `data.len() != width * height * 4`.
    #[error("buffer size mismatch for {width}x{height}: expected {expected} bytes, got {got}")]
    BufferSizeMismatch {
        /// Expected byte count (`width * height * 4`)
        expected: usize,
        /// Actual byte count supplied
        got: usize,
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },

    /// Pixel coordinates are outside buffer bounds.
    #[error("pixel ({x}, {y}) out of bounds for buffer {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },
}

impl CoreError {
    /// Creates a [`CoreError::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates a [`CoreError::BufferSizeMismatch`] error.
    #[inline]
    pub fn size_mismatch(expected: usize, got: usize, width: u32, height: u32) -> Self {
        Self::BufferSizeMismatch {
            expected,
            got,
            width,
            height,
        }
    }

    /// Creates a [`CoreError::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }
}
