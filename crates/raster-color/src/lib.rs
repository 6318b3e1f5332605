//! # raster-color
//!
//! Colorimetric conversions for single picked samples.
//!
//! The host's pipette tool hands this crate an 8-bit RGB sample (or the
//! `rgb(r, g, b)` text form a canvas reports) and gets back CIE XYZ, CIE Lab,
//! or a WCAG contrast ratio for pixel inspection. Everything operates on one
//! sample at a time; whole-buffer transforms live in the other raster-rs
//! crates.
//!
//! # Example
//!
//! ```rust
//! use raster_color::{contrast_ratio, parse_rgb, rgb_to_lab, Rgb8};
//!
//! let picked = parse_rgb("rgb(255, 255, 255)").unwrap();
//! let [l, a, b] = rgb_to_lab(picked);
//! assert!((l - 100.0).abs() < 0.01);
//!
//! let ratio = contrast_ratio(picked, Rgb8::new(0, 0, 0));
//! assert!((ratio - 21.0).abs() < 0.1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod contrast;
pub mod convert;
mod error;
pub mod parse;
pub mod sample;
pub mod srgb;

pub use contrast::{contrast_ratio, relative_luminance};
pub use convert::{rgb_to_lab, rgb_to_xyz, D65_WHITE};
pub use error::ColorError;
pub use parse::parse_rgb;
pub use sample::Rgb8;
