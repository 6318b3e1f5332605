//! WCAG contrast ratio between two samples.
//!
//! Relative luminance weighs the linearized channels by the Rec. 709 luma
//! coefficients; the ratio offsets both luminances by 0.05 (ambient flare
//! term) and divides lighter by darker, yielding a value in [1, 21].

use crate::{srgb, Rgb8};

/// WCAG relative luminance of a sample, in [0, 1].
///
/// # Example
///
/// ```rust
/// use raster_color::{relative_luminance, Rgb8};
///
/// assert_eq!(relative_luminance(Rgb8::new(0, 0, 0)), 0.0);
/// assert!((relative_luminance(Rgb8::new(255, 255, 255)) - 1.0).abs() < 1e-5);
/// ```
pub fn relative_luminance(sample: Rgb8) -> f32 {
    let [r, g, b] = srgb::eotf_rgb(sample.to_normalized());
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two samples, always >= 1.0.
///
/// The lighter of the two goes in the numerator, so argument order does not
/// matter.
///
/// # Example
///
/// ```rust
/// use raster_color::{contrast_ratio, Rgb8};
///
/// let ratio = contrast_ratio(Rgb8::new(255, 255, 255), Rgb8::new(0, 0, 0));
/// assert!((ratio - 21.0).abs() < 0.1);
/// ```
pub fn contrast_ratio(a: Rgb8, b: Rgb8) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
