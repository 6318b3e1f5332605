//! RGBA8 resampling with selectable interpolation filters.
//!
//! # Filters
//!
//! - [`Filter::Nearest`] - copies the nearest source pixel verbatim
//! - [`Filter::Bilinear`] - blends the 4 surrounding samples
//! - [`Filter::Bicubic`] - Catmull-Rom weighted 4x4 neighborhood
//!
//! All four channels, alpha included, are resampled identically. Out-of-range
//! neighborhood coordinates are clamped to the nearest valid sample
//! (clamp-to-edge), and the bicubic weighted sum is divided by the weight sum
//! so that kernel mass lost to clamping near borders does not darken the
//! result.
//!
//! # Example
//!
//! ```rust
//! use raster_ops::{resample_rgba8, Filter};
//!
//! let src: Vec<u8> = vec![255; 8 * 8 * 4];
//! let dst = resample_rgba8(&src, 8, 8, 16, 16, Filter::Bilinear).unwrap();
//! assert_eq!(dst.len(), 16 * 16 * 4);
//! ```

use crate::{OpsError, OpsResult};
use raster_core::PixelBuffer;

/// Number of channels per pixel.
const CHANNELS: usize = 4;

/// Interpolation filter for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, no blending).
    Nearest,
    /// Bilinear interpolation over the 4 surrounding samples.
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation over a 4x4 neighborhood.
    #[default]
    Bicubic,
}

/// Catmull-Rom cubic convolution kernel.
///
/// ```text
/// 1.5|t|^3 - 2.5|t|^2 + 1           for 0 <= |t| < 1
/// -0.5|t|^3 + 2.5|t|^2 - 4|t| + 2   for 1 <= |t| < 2
/// 0                                 otherwise
/// ```
#[inline]
fn cubic_weight(t: f32) -> f32 {
    let at = t.abs();
    if at < 1.0 {
        1.5 * at * at * at - 2.5 * at * at + 1.0
    } else if at < 2.0 {
        -0.5 * at * at * at + 2.5 * at * at - 4.0 * at + 2.0
    } else {
        0.0
    }
}

/// Resamples a pixel buffer to the given destination size.
///
/// Returns a fresh buffer; the source is left untouched.
///
/// # Errors
///
/// - [`OpsError::InvalidDimension`] if `dst_w` or `dst_h` is zero.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelBuffer;
/// use raster_ops::{resample, Filter};
///
/// let src = PixelBuffer::new(4, 4).unwrap();
/// let dst = resample(&src, 2, 2, Filter::Nearest).unwrap();
/// assert_eq!((dst.width(), dst.height()), (2, 2));
/// ```
pub fn resample(
    src: &PixelBuffer,
    dst_w: u32,
    dst_h: u32,
    filter: Filter,
) -> OpsResult<PixelBuffer> {
    let data = resample_rgba8(src.data(), src.width(), src.height(), dst_w, dst_h, filter)?;
    Ok(PixelBuffer::from_raw(dst_w, dst_h, data)?)
}

/// Resamples raw RGBA8 data to the given destination size.
///
/// # Arguments
///
/// * `src` - Source pixel data, `src_w * src_h * 4` bytes
/// * `src_w` - Source width
/// * `src_h` - Source height
/// * `dst_w` - Destination width
/// * `dst_h` - Destination height
/// * `filter` - Interpolation filter
///
/// # Errors
///
/// - [`OpsError::InvalidDimension`] if any dimension is zero.
/// - [`OpsError::InvalidBuffer`] if `src.len() != src_w * src_h * 4`.
///
/// # Example
///
/// ```rust
/// use raster_ops::{resample_rgba8, Filter};
///
/// let src = vec![128u8; 16 * 16 * 4];
/// let dst = resample_rgba8(&src, 16, 16, 8, 8, Filter::Bicubic).unwrap();
/// assert_eq!(dst.len(), 8 * 8 * 4);
/// ```
pub fn resample_rgba8(
    src: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
    filter: Filter,
) -> OpsResult<Vec<u8>> {
    let dst_len = validate(src, src_w, src_h, dst_w, dst_h)?;
    tracing::debug!(src_w, src_h, dst_w, dst_h, ?filter, "resample");

    let mut dst = vec![0u8; dst_len];
    let dw = dst_w as usize;
    for (y, row) in dst.chunks_exact_mut(dw * CHANNELS).enumerate() {
        resample_row(src, src_w, src_h, dst_w, dst_h, filter, y, row);
    }
    Ok(dst)
}

/// Validates dimensions and buffer length, returning the destination byte
/// count. Shared by the scalar and parallel entry points.
pub(crate) fn validate(
    src: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
) -> OpsResult<usize> {
    if src_w == 0 || src_h == 0 {
        return Err(OpsError::InvalidDimension(format!(
            "source size {src_w}x{src_h} must be > 0"
        )));
    }
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidDimension(format!(
            "destination size {dst_w}x{dst_h} must be > 0"
        )));
    }
    let expected = (src_w as usize)
        .checked_mul(src_h as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| OpsError::InvalidDimension("source byte size overflows".into()))?;
    if src.len() != expected {
        return Err(OpsError::InvalidBuffer {
            expected,
            got: src.len(),
        });
    }
    (dst_w as usize)
        .checked_mul(dst_h as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| OpsError::InvalidDimension("destination byte size overflows".into()))
}

/// Fills one destination row. Inputs are assumed validated.
///
/// Both the scalar and the rayon entry points funnel through this, so the two
/// paths are bit-identical by construction.
pub(crate) fn resample_row(
    src: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
    filter: Filter,
    y: usize,
    row: &mut [u8],
) {
    let sw = src_w as usize;
    let sh = src_h as usize;
    // Proportional mapping against the full source extent.
    let gy = y as f32 / dst_h as f32 * src_h as f32;

    for x in 0..dst_w as usize {
        let gx = x as f32 / dst_w as f32 * src_w as f32;
        let out = &mut row[x * CHANNELS..(x + 1) * CHANNELS];
        match filter {
            Filter::Nearest => sample_nearest(src, sw, sh, gx, gy, out),
            Filter::Bilinear => sample_bilinear(src, sw, sh, gx, gy, out),
            Filter::Bicubic => sample_bicubic(src, sw, sh, gx, gy, out),
        }
    }
}

#[inline]
fn clamp_coord(v: isize, max: usize) -> usize {
    v.clamp(0, max as isize - 1) as usize
}

#[inline]
fn sample_nearest(src: &[u8], sw: usize, sh: usize, gx: f32, gy: f32, out: &mut [u8]) {
    let xi = clamp_coord(gx.floor() as isize, sw);
    let yi = clamp_coord(gy.floor() as isize, sh);
    let idx = (yi * sw + xi) * CHANNELS;
    out.copy_from_slice(&src[idx..idx + CHANNELS]);
}

#[inline]
fn sample_bilinear(src: &[u8], sw: usize, sh: usize, gx: f32, gy: f32, out: &mut [u8]) {
    let gxi = gx.floor();
    let gyi = gy.floor();
    let fx = gx - gxi;
    let fy = gy - gyi;

    let x0 = clamp_coord(gxi as isize, sw);
    let x1 = clamp_coord(gxi as isize + 1, sw);
    let y0 = clamp_coord(gyi as isize, sh);
    let y1 = clamp_coord(gyi as isize + 1, sh);

    let a = (y0 * sw + x0) * CHANNELS;
    let b = (y0 * sw + x1) * CHANNELS;
    let c = (y1 * sw + x0) * CHANNELS;
    let d = (y1 * sw + x1) * CHANNELS;

    for ch in 0..CHANNELS {
        let value = src[a + ch] as f32 * (1.0 - fx) * (1.0 - fy)
            + src[b + ch] as f32 * fx * (1.0 - fy)
            + src[c + ch] as f32 * (1.0 - fx) * fy
            + src[d + ch] as f32 * fx * fy;
        out[ch] = value.round().clamp(0.0, 255.0) as u8;
    }
}

#[inline]
fn sample_bicubic(src: &[u8], sw: usize, sh: usize, gx: f32, gy: f32, out: &mut [u8]) {
    let gxi = gx.floor() as isize;
    let gyi = gy.floor() as isize;

    let mut sum = [0.0f32; CHANNELS];
    let mut weight_sum = 0.0f32;

    for j in -1..=2isize {
        let yi = clamp_coord(gyi + j, sh);
        let wy = cubic_weight(gy - yi as f32);
        if wy == 0.0 {
            continue;
        }
        for i in -1..=2isize {
            let xi = clamp_coord(gxi + i, sw);
            let w = cubic_weight(gx - xi as f32) * wy;
            if w == 0.0 {
                continue;
            }
            weight_sum += w;
            let idx = (yi * sw + xi) * CHANNELS;
            for ch in 0..CHANNELS {
                sum[ch] += src[idx + ch] as f32 * w;
            }
        }
    }

    // Normalizing by the weight sum compensates for kernel mass lost to
    // clamping near the borders.
    if weight_sum != 0.0 {
        for ch in 0..CHANNELS {
            out[ch] = (sum[ch] / weight_sum).round().clamp(0.0, 255.0) as u8;
        }
    }
}
