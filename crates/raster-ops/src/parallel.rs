//! Parallel resampling using Rayon.
//!
//! Every destination pixel depends only on a read-only neighborhood of the
//! source, so the destination can be partitioned by rows with no ordering
//! dependency. The row kernel is shared with the scalar path in
//! [`crate::resample`], so results are bit-identical.
//!
//! # Example
//!
//! ```rust
//! use raster_ops::{parallel, Filter};
//!
//! let src = vec![0u8; 256 * 256 * 4];
//! let dst = parallel::resample_rgba8(&src, 256, 256, 512, 512, Filter::Bilinear).unwrap();
//! assert_eq!(dst.len(), 512 * 512 * 4);
//! ```

use crate::resample::{self, Filter};
use crate::OpsResult;
use raster_core::PixelBuffer;
use rayon::prelude::*;

/// Number of channels per pixel.
const CHANNELS: usize = 4;

/// Parallel variant of [`crate::resample`].
pub fn resample(
    src: &PixelBuffer,
    dst_w: u32,
    dst_h: u32,
    filter: Filter,
) -> OpsResult<PixelBuffer> {
    let data = resample_rgba8(src.data(), src.width(), src.height(), dst_w, dst_h, filter)?;
    Ok(PixelBuffer::from_raw(dst_w, dst_h, data)?)
}

/// Parallel variant of [`crate::resample_rgba8`].
///
/// Produces exactly the same bytes as the scalar version.
///
/// # Example
///
/// ```rust
/// use raster_ops::{parallel, resample_rgba8, Filter};
///
/// let src = vec![33u8; 16 * 16 * 4];
/// let par = parallel::resample_rgba8(&src, 16, 16, 40, 40, Filter::Bicubic).unwrap();
/// let seq = resample_rgba8(&src, 16, 16, 40, 40, Filter::Bicubic).unwrap();
/// assert_eq!(par, seq);
/// ```
pub fn resample_rgba8(
    src: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
    filter: Filter,
) -> OpsResult<Vec<u8>> {
    let dst_len = resample::validate(src, src_w, src_h, dst_w, dst_h)?;
    tracing::debug!(src_w, src_h, dst_w, dst_h, ?filter, "resample (parallel)");

    let mut dst = vec![0u8; dst_len];
    let dw = dst_w as usize;
    dst.par_chunks_mut(dw * CHANNELS)
        .enumerate()
        .for_each(|(y, row)| {
            resample::resample_row(src, src_w, src_h, dst_w, dst_h, filter, y, row);
        });
    Ok(dst)
}
