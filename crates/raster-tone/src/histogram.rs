//! Per-channel intensity histograms.
//!
//! One full pass over the buffer counts how many pixels hold each of the 256
//! possible values in the R, G and B channels. Alpha is ignored.
//!
//! Each channel's bins sum to `width * height`.

use crate::{ToneError, ToneResult};
use raster_core::PixelBuffer;

/// Number of bins per channel (one per 8-bit value).
pub const BINS: usize = 256;

/// Per-channel histogram of an RGBA8 buffer.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelBuffer;
/// use raster_tone::Histogram;
///
/// let mut buf = PixelBuffer::new(2, 2).unwrap();
/// buf.fill([10, 20, 30, 255]);
///
/// let hist = Histogram::build(&buf);
/// assert_eq!(hist.r[10], 4);
/// assert_eq!(hist.g[20], 4);
/// assert_eq!(hist.b[30], 4);
/// ```
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Red channel bins
    pub r: [u32; BINS],
    /// Green channel bins
    pub g: [u32; BINS],
    /// Blue channel bins
    pub b: [u32; BINS],
}

impl Histogram {
    /// Builds the histogram of a buffer in a single pass.
    ///
    /// The buffer invariant already guarantees the length; the slice-level
    /// [`histogram_rgba8`] re-validates for raw callers.
    pub fn build(buffer: &PixelBuffer) -> Self {
        Self::count(buffer.data())
    }

    fn count(src: &[u8]) -> Self {
        let mut hist = Self {
            r: [0; BINS],
            g: [0; BINS],
            b: [0; BINS],
        };
        for px in src.chunks_exact(4) {
            hist.r[px[0] as usize] += 1;
            hist.g[px[1] as usize] += 1;
            hist.b[px[2] as usize] += 1;
        }
        hist
    }

    /// Total count per channel (`width * height` for a valid buffer).
    pub fn pixel_count(&self) -> u32 {
        self.r.iter().sum()
    }

    /// Scales all three channels into `[0, scale]` by the global peak bin.
    ///
    /// This is the display normalization the host plots the curves with: one
    /// shared maximum across R, G and B so the channels stay comparable.
    /// Returns `[r, g, b]` as floats; an all-zero histogram yields zeros.
    pub fn normalized(&self, scale: f32) -> [Vec<f32>; 3] {
        let max = self
            .r
            .iter()
            .chain(self.g.iter())
            .chain(self.b.iter())
            .copied()
            .max()
            .unwrap_or(0);
        let factor = if max == 0 { 0.0 } else { scale / max as f32 };
        let scaled = |bins: &[u32; BINS]| bins.iter().map(|&v| v as f32 * factor).collect();
        [scaled(&self.r), scaled(&self.g), scaled(&self.b)]
    }
}

/// Slice-level histogram: raw RGBA8 bytes in.
///
/// # Errors
///
/// Returns [`ToneError::InvalidBuffer`] if `src.len() != width * height * 4`.
///
/// # Example
///
/// ```rust
/// use raster_tone::histogram_rgba8;
///
/// let src = vec![0u8; 3 * 3 * 4];
/// let hist = histogram_rgba8(&src, 3, 3).unwrap();
/// assert_eq!(hist.r[0], 9);
/// ```
pub fn histogram_rgba8(src: &[u8], width: u32, height: u32) -> ToneResult<Histogram> {
    let expected = crate::error::expected_len(width, height)?;
    if src.len() != expected {
        return Err(ToneError::InvalidBuffer {
            expected,
            got: src.len(),
        });
    }
    Ok(Histogram::count(src))
}
