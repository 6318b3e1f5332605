//! # raster-ops
//!
//! Spatial resampling for the raster editing engine.
//!
//! This crate scales RGBA8 pixel buffers between arbitrary sizes using a
//! selectable interpolation filter.
//!
//! # Filters
//!
//! - [`Filter::Nearest`] - Fastest, no blending (blocky under magnification)
//! - [`Filter::Bilinear`] - Blends the 4 surrounding samples (smooth)
//! - [`Filter::Bicubic`] - Catmull-Rom weighting over a 4x4 neighborhood
//!   (sharper than bilinear)
//!
//! # Example
//!
//! ```rust
//! use raster_ops::{resample_rgba8, Filter};
//!
//! let src = vec![0u8; 64 * 64 * 4]; // 64x64 RGBA
//! let dst = resample_rgba8(&src, 64, 64, 128, 128, Filter::Bicubic).unwrap();
//! assert_eq!(dst.len(), 128 * 128 * 4);
//! ```
//!
//! # Coordinate Mapping
//!
//! Destination pixel (x, y) maps to the continuous source coordinate
//! `(x / dst_w * src_w, y / dst_h * src_h)` - proportional against the full
//! source extent. Integer upscales therefore tile exactly: a 2x2 source
//! resized to 4x4 with [`Filter::Nearest`] replicates each source pixel into
//! a 2x2 block.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod resample;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use resample::{resample, resample_rgba8, Filter};
