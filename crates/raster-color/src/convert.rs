//! RGB to CIE XYZ and CIE Lab conversions.
//!
//! Samples are linearized through the sRGB EOTF, pushed through the sRGB
//! D65 matrix into XYZ on the 0-100 scale, and optionally on into Lab
//! relative to the D65 reference white.

use crate::{srgb, Rgb8};

/// D65 reference white on the 0-100 XYZ scale.
pub const D65_WHITE: [f32; 3] = [95.047, 100.0, 108.883];

/// Linear sRGB to XYZ matrix (D65), row-major.
const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

/// Threshold between the cube-root and linear segments of the Lab curve.
const LAB_EPSILON: f32 = 0.008856;

/// Converts a sample to CIE XYZ (D65), scaled to the 0-100 range.
///
/// # Example
///
/// ```rust
/// use raster_color::{rgb_to_xyz, Rgb8};
///
/// let [x, y, z] = rgb_to_xyz(Rgb8::new(255, 255, 255));
/// assert!((x - 95.047).abs() < 0.01);
/// assert!((y - 100.0).abs() < 0.01);
/// assert!((z - 108.883).abs() < 0.01);
/// ```
pub fn rgb_to_xyz(sample: Rgb8) -> [f32; 3] {
    let [r, g, b] = srgb::eotf_rgb(sample.to_normalized());
    let mut xyz = [0.0f32; 3];
    for (out, row) in xyz.iter_mut().zip(SRGB_TO_XYZ.iter()) {
        *out = (row[0] * r + row[1] * g + row[2] * b) * 100.0;
    }
    xyz
}

/// Converts a sample to CIE Lab (D65).
///
/// # Example
///
/// ```rust
/// use raster_color::{rgb_to_lab, Rgb8};
///
/// let [l, a, b] = rgb_to_lab(Rgb8::new(255, 255, 255));
/// assert!((l - 100.0).abs() < 0.01);
/// assert!(a.abs() < 0.01);
/// assert!(b.abs() < 0.01);
/// ```
pub fn rgb_to_lab(sample: Rgb8) -> [f32; 3] {
    let xyz = rgb_to_xyz(sample);
    let fx = lab_f(xyz[0] / D65_WHITE[0]);
    let fy = lab_f(xyz[1] / D65_WHITE[1]);
    let fz = lab_f(xyz[2] / D65_WHITE[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Lab nonlinearity: cube root above [`LAB_EPSILON`], linear below.
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_black_is_origin() {
        let xyz = rgb_to_xyz(Rgb8::new(0, 0, 0));
        assert_eq!(xyz, [0.0, 0.0, 0.0]);
        let lab = rgb_to_lab(Rgb8::new(0, 0, 0));
        assert_relative_eq!(lab[0], 0.0, epsilon = 0.01);
        assert_relative_eq!(lab[1], 0.0, epsilon = 0.01);
        assert_relative_eq!(lab[2], 0.0, epsilon = 0.01);
    }

    #[test]
    fn test_white_maps_to_reference_white() {
        let xyz = rgb_to_xyz(Rgb8::new(255, 255, 255));
        assert_relative_eq!(xyz[0], D65_WHITE[0], epsilon = 0.01);
        assert_relative_eq!(xyz[1], D65_WHITE[1], epsilon = 0.01);
        assert_relative_eq!(xyz[2], D65_WHITE[2], epsilon = 0.01);
    }

    #[test]
    fn test_grays_have_zero_chroma() {
        for v in [32, 96, 160, 224] {
            let [_, a, b] = rgb_to_lab(Rgb8::new(v, v, v));
            assert!(a.abs() < 0.01, "a* for gray {v}: {a}");
            assert!(b.abs() < 0.01, "b* for gray {v}: {b}");
        }
    }

    #[test]
    fn test_lightness_is_monotonic_in_gray_level() {
        let mut last = -1.0f32;
        for v in (0..=255).step_by(15) {
            let [l, _, _] = rgb_to_lab(Rgb8::new(v as u8, v as u8, v as u8));
            assert!(l > last, "L* not increasing at {v}");
            last = l;
        }
    }
}
