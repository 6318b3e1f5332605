//! sRGB gamma linearization.
//!
//! Stored 8-bit values are gamma-encoded; every colorimetric formula in this
//! crate (XYZ, Lab, WCAG luminance) wants linear light. [`eotf`] undoes the
//! encoding: a short linear ramp below the 0.04045 knee, a 2.4-exponent power
//! curve above it (IEC 61966-2-1). The pipette path only ever decodes, but
//! the encoding direction [`oetf`] is kept alongside it so the pair stays
//! together and invertibility is testable.

/// Decodes a gamma-encoded sRGB value in [0, 1] to linear light.
///
/// Below the knee the encoding is a plain division by 12.92; above it,
/// `((v + 0.055) / 1.055)^2.4`.
///
/// # Example
///
/// ```rust
/// use raster_color::srgb::eotf;
///
/// // Mid-gray 0.5 sits near 21% linear, not 50%
/// assert!((eotf(0.5) - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light in [0, 1] back to gamma-encoded sRGB.
///
/// Inverse of [`eotf`]: `l * 12.92` below 0.0031308, else
/// `1.055 * l^(1/2.4) - 0.055`.
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes all three channels of a gamma-encoded triplet.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_continuous_at_the_knee() {
        // The two segments meet at the breakpoints without a jump.
        let below = eotf(0.04045);
        let above = eotf(0.040451);
        assert!((below - above).abs() < 1e-5);
    }

    #[test]
    fn test_oetf_inverts_eotf_for_every_8bit_value() {
        for code in 0..=255u8 {
            let v = code as f32 / 255.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-5, "code {code}: {v} vs {back}");
        }
    }

    #[test]
    fn test_decoding_is_monotonic() {
        let mut last = -1.0f32;
        for code in 0..=255u8 {
            let linear = eotf(code as f32 / 255.0);
            assert!(linear > last, "not increasing at code {code}");
            last = linear;
        }
    }

    #[test]
    fn test_rgb_variant_maps_per_channel() {
        let [r, g, b] = eotf_rgb([0.0, 0.5, 1.0]);
        assert_eq!(r, eotf(0.0));
        assert_eq!(g, eotf(0.5));
        assert_eq!(b, eotf(1.0));
    }
}
