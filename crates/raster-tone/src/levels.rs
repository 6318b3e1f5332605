//! Two-point levels curve and its lookup table.
//!
//! The transfer function is flat-linear-flat: inputs at or below `in_a` map
//! to `out_a`, inputs at or above `in_b` map to `out_b`, and the span between
//! the two control points is linearly interpolated. Inverted output pairs
//! (`out_a > out_b`) are allowed and produce a negative-slope diagonal.
//!
//! The curve is evaluated once per possible byte into a [`Lut256`], then
//! applied per pixel with three table lookups.

use crate::{ToneError, ToneResult};
use raster_core::PixelBuffer;

/// Validated levels control points.
///
/// # Example
///
/// ```rust
/// use raster_tone::Levels;
///
/// let levels = Levels::new(50, 0, 200, 255).unwrap();
/// let lut = levels.to_lut();
/// assert_eq!(lut.map(125), 128); // 0 + (125-50)/(200-50) * 255, rounded
///
/// // in_a must stay strictly below in_b
/// assert!(Levels::new(200, 0, 50, 255).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels {
    in_a: u8,
    out_a: u8,
    in_b: u8,
    out_b: u8,
}

impl Levels {
    /// Creates control points, rejecting `in_a >= in_b`.
    ///
    /// The inputs are never swapped on the caller's behalf: an out-of-order
    /// pair is a [`ToneError::InvalidControlPoints`] error.
    pub fn new(in_a: u8, out_a: u8, in_b: u8, out_b: u8) -> ToneResult<Self> {
        if in_a >= in_b {
            return Err(ToneError::InvalidControlPoints { in_a, in_b });
        }
        Ok(Self {
            in_a,
            out_a,
            in_b,
            out_b,
        })
    }

    /// Identity curve: (0, 0) to (255, 255).
    pub fn identity() -> Self {
        Self {
            in_a: 0,
            out_a: 0,
            in_b: 255,
            out_b: 255,
        }
    }

    /// Low input control point.
    #[inline]
    pub fn in_a(&self) -> u8 {
        self.in_a
    }

    /// Output level for the low flat segment.
    #[inline]
    pub fn out_a(&self) -> u8 {
        self.out_a
    }

    /// High input control point.
    #[inline]
    pub fn in_b(&self) -> u8 {
        self.in_b
    }

    /// Output level for the high flat segment.
    #[inline]
    pub fn out_b(&self) -> u8 {
        self.out_b
    }

    /// Evaluates the transfer curve into a 256-entry lookup table.
    ///
    /// The diagonal is rounded half away from zero (equivalent to half-up on
    /// this non-negative domain) and clamped to [0, 255].
    pub fn to_lut(&self) -> Lut256 {
        let slope = (self.out_b as f32 - self.out_a as f32)
            / (self.in_b as f32 - self.in_a as f32);
        let mut table = [0u8; 256];
        for (x, entry) in table.iter_mut().enumerate() {
            let x = x as u8;
            *entry = if x <= self.in_a {
                self.out_a
            } else if x >= self.in_b {
                self.out_b
            } else {
                let y = self.out_a as f32 + (x - self.in_a) as f32 * slope;
                y.round().clamp(0.0, 255.0) as u8
            };
        }
        Lut256 { table }
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::identity()
    }
}

/// Precomputed byte-to-byte lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut256 {
    table: [u8; 256],
}

impl Lut256 {
    /// Wraps a raw 256-entry table.
    pub fn from_table(table: [u8; 256]) -> Self {
        Self { table }
    }

    /// Maps one input byte through the table.
    #[inline]
    pub fn map(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    /// Returns the raw table.
    #[inline]
    pub fn table(&self) -> &[u8; 256] {
        &self.table
    }
}

/// Maps the R, G, B channels of a buffer through a LUT; alpha passes through.
///
/// Returns a fresh buffer; the input is left untouched.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelBuffer;
/// use raster_tone::{apply_lut, Levels};
///
/// let mut buf = PixelBuffer::new(1, 1).unwrap();
/// buf.set_pixel(0, 0, [0, 128, 255, 77]).unwrap();
///
/// // Inverted diagonal: output = 255 - input
/// let lut = Levels::new(0, 255, 255, 0).unwrap().to_lut();
/// let out = apply_lut(&buf, &lut).unwrap();
/// assert_eq!(out.pixel(0, 0).unwrap(), [255, 127, 0, 77]);
/// ```
pub fn apply_lut(buffer: &PixelBuffer, lut: &Lut256) -> ToneResult<PixelBuffer> {
    let data = map_channels(buffer.data(), lut);
    Ok(PixelBuffer::from_raw(buffer.width(), buffer.height(), data)?)
}

/// Slice-level LUT application: raw RGBA8 bytes in, raw bytes out.
///
/// # Errors
///
/// Returns [`ToneError::InvalidBuffer`] if `src.len() != width * height * 4`.
pub fn apply_lut_rgba8(src: &[u8], width: u32, height: u32, lut: &Lut256) -> ToneResult<Vec<u8>> {
    let expected = crate::error::expected_len(width, height)?;
    if src.len() != expected {
        return Err(ToneError::InvalidBuffer {
            expected,
            got: src.len(),
        });
    }
    Ok(map_channels(src, lut))
}

fn map_channels(src: &[u8], lut: &Lut256) -> Vec<u8> {
    let mut dst = src.to_vec();
    for px in dst.chunks_exact_mut(4) {
        px[0] = lut.map(px[0]);
        px[1] = lut.map(px[1]);
        px[2] = lut.map(px[2]);
        // px[3] untouched
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_lut() {
        let lut = Levels::new(0, 0, 255, 255).unwrap().to_lut();
        for x in 0..=255u8 {
            assert_eq!(lut.map(x), x);
        }
    }

    #[test]
    fn test_inverted_lut() {
        let lut = Levels::new(0, 255, 255, 0).unwrap().to_lut();
        for x in 0..=255u8 {
            assert_eq!(lut.map(x), 255 - x);
        }
    }

    #[test]
    fn test_flat_segments() {
        let lut = Levels::new(50, 10, 200, 240).unwrap().to_lut();
        for x in 0..=50u8 {
            assert_eq!(lut.map(x), 10);
        }
        for x in 200..=255u8 {
            assert_eq!(lut.map(x), 240);
        }
    }

    #[test]
    fn test_diagonal_rounding() {
        // 0 + (125-50)/(200-50) * 255 = 127.5, rounds up
        let lut = Levels::new(50, 0, 200, 255).unwrap().to_lut();
        assert_eq!(lut.map(125), 128);
    }

    #[test]
    fn test_monotonic_when_outputs_ordered() {
        let lut = Levels::new(30, 20, 220, 250).unwrap().to_lut();
        for x in 1..=255usize {
            assert!(lut.table()[x] >= lut.table()[x - 1]);
        }
    }

    #[test]
    fn test_control_points_validated() {
        assert!(Levels::new(100, 0, 100, 255).is_err());
        let err = Levels::new(200, 0, 100, 255).unwrap_err();
        assert!(matches!(
            err,
            ToneError::InvalidControlPoints { in_a: 200, in_b: 100 }
        ));
    }

    #[test]
    fn test_apply_preserves_alpha_and_input() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.fill([100, 150, 200, 42]);
        let before = buf.clone();

        let lut = Levels::new(0, 255, 255, 0).unwrap().to_lut();
        let out = apply_lut(&buf, &lut).unwrap();

        assert_eq!(out.pixel(1, 1).unwrap(), [155, 105, 55, 42]);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_slice_level_validation() {
        let lut = Levels::identity().to_lut();
        let err = apply_lut_rgba8(&[0u8; 10], 2, 2, &lut).unwrap_err();
        assert!(matches!(err, ToneError::InvalidBuffer { .. }));
    }

    #[test]
    fn test_oversized_dimensions_are_an_error_not_a_panic() {
        let lut = Levels::identity().to_lut();
        let err = apply_lut_rgba8(&[0u8; 16], u32::MAX, u32::MAX, &lut).unwrap_err();
        assert!(matches!(err, ToneError::Core(_)));
    }
}
