//! # raster-core
//!
//! Core types for the raster editing engine.
//!
//! This crate provides the foundational types used by the other raster-rs
//! crates:
//!
//! - [`PixelBuffer`] - Owned RGBA8 image buffer with checked construction
//! - [`CoreError`] - Error type for buffer operations
//! - [`pad`] - Clamp-to-edge border padding
//!
//! ## Memory Layout
//!
//! Buffers store pixels in **row-major** order, top-to-bottom, 4 bytes per
//! pixel in R, G, B, A channel order, with no padding between rows:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! ## Ownership Model
//!
//! Operations in the raster-rs crates take buffers by reference and return a
//! fresh buffer; no operation mutates its input in place. This keeps callers
//! free to hold the original (e.g. for undo) without aliasing concerns.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of raster-rs and has no internal dependencies:
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (resampling)
//!    +-- raster-tone (histogram, levels)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pad;

pub use buffer::PixelBuffer;
pub use error::{CoreError, Result};
pub use pad::{pad, pad_rgba8};
