//! Error types for color parsing.

use thiserror::Error;

/// Errors from parsing textual color samples.
#[derive(Error, Debug)]
pub enum ColorError {
    /// Input text does not have the `rgb(r, g, b)` shape.
    #[error("malformed color text: {0:?}")]
    Malformed(String),

    /// A parsed channel value exceeds 255.
    #[error("channel value {value} out of range 0..=255")]
    ChannelOutOfRange {
        /// The offending channel value
        value: u32,
    },
}
