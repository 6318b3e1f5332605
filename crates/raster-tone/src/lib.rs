//! # raster-tone
//!
//! Tone-curve ("levels") engine for RGBA8 buffers.
//!
//! The levels adjustment is driven by two control points on a transfer curve:
//! everything at or below `in_a` maps to `out_a`, everything at or above
//! `in_b` maps to `out_b`, and the span between them is linear. The curve is
//! precomputed into a 256-entry lookup table and applied identically to the
//! R, G, B channels; alpha passes through unchanged.
//!
//! A per-channel [`Histogram`] feeds the host UI that the control points are
//! dragged on.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_tone::{apply_lut, Histogram, Levels};
//!
//! let buf = PixelBuffer::new(32, 32).unwrap();
//!
//! let hist = Histogram::build(&buf);
//! assert_eq!(hist.r.iter().sum::<u32>(), 32 * 32);
//!
//! // Stretch mid-tones: flat below 50, flat above 200, linear between.
//! let levels = Levels::new(50, 0, 200, 255).unwrap();
//! let adjusted = apply_lut(&buf, &levels.to_lut()).unwrap();
//! assert_eq!(adjusted.width(), 32);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod histogram;
pub mod levels;

pub use error::{ToneError, ToneResult};
pub use histogram::{histogram_rgba8, Histogram};
pub use levels::{apply_lut, apply_lut_rgba8, Levels, Lut256};
