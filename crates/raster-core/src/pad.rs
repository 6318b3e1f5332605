//! Clamp-to-edge border padding.
//!
//! Neighborhood-based sampling (convolution, interpolation) needs to read
//! pixels just outside the image. [`pad`] produces a copy of the input with a
//! 1-pixel border on every side, each border cell holding the value of the
//! nearest interior pixel (corners replicate the corresponding corner pixel).
//!
//! # Example
//!
//! ```rust
//! use raster_core::{pad, PixelBuffer};
//!
//! let src = PixelBuffer::from_raw(1, 1, vec![10, 20, 30, 255]).unwrap();
//! let padded = pad(&src).unwrap();
//! assert_eq!(padded.width(), 3);
//! assert_eq!(padded.height(), 3);
//! // Every cell replicates the single source pixel.
//! assert_eq!(padded.pixel(0, 0).unwrap(), [10, 20, 30, 255]);
//! assert_eq!(padded.pixel(2, 2).unwrap(), [10, 20, 30, 255]);
//! ```

use crate::buffer::CHANNELS;
use crate::{CoreError, PixelBuffer, Result};

/// Pads a buffer with a replicated 1-pixel border.
///
/// Returns a fresh `(width + 2) x (height + 2)` buffer; the input is left
/// untouched.
pub fn pad(src: &PixelBuffer) -> Result<PixelBuffer> {
    let data = pad_rgba8(src.data(), src.width(), src.height())?;
    PixelBuffer::from_raw(src.width() + 2, src.height() + 2, data)
}

/// Slice-level padding: RGBA8 bytes in, RGBA8 bytes out.
///
/// # Errors
///
/// - [`CoreError::InvalidDimensions`] if either dimension is zero.
/// - [`CoreError::BufferSizeMismatch`] if `src.len() != width * height * 4`.
///
/// # Example
///
/// ```rust
/// use raster_core::pad_rgba8;
///
/// let src = vec![0u8; 4 * 4 * 4];
/// let padded = pad_rgba8(&src, 4, 4).unwrap();
/// assert_eq!(padded.len(), 6 * 6 * 4);
/// ```
pub fn pad_rgba8(src: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(CoreError::invalid_dimensions(
            width,
            height,
            "width and height must be > 0",
        ));
    }
    let w = width as usize;
    let h = height as usize;
    let expected = w * h * CHANNELS;
    if src.len() != expected {
        return Err(CoreError::size_mismatch(expected, src.len(), width, height));
    }

    let pw = w + 2;
    let ph = h + 2;
    let mut dst = vec![0u8; pw * ph * CHANNELS];

    // Interior copy, one row at a time.
    for y in 0..h {
        let src_row = y * w * CHANNELS;
        let dst_row = ((y + 1) * pw + 1) * CHANNELS;
        dst[dst_row..dst_row + w * CHANNELS]
            .copy_from_slice(&src[src_row..src_row + w * CHANNELS]);
    }

    // Border cells take the nearest interior pixel.
    for y in 0..ph {
        for x in 0..pw {
            if x != 0 && x != pw - 1 && y != 0 && y != ph - 1 {
                continue;
            }
            let near_x = x.clamp(1, pw - 2);
            let near_y = y.clamp(1, ph - 2);
            let near = (near_y * pw + near_x) * CHANNELS;
            let out = (y * pw + x) * CHANNELS;
            dst.copy_within(near..near + CHANNELS, out);
        }
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_2x2() -> PixelBuffer {
        // Four distinct pixels: A B / C D
        #[rustfmt::skip]
        let data = vec![
            10, 11, 12, 255,  20, 21, 22, 255,
            30, 31, 32, 255,  40, 41, 42, 255,
        ];
        PixelBuffer::from_raw(2, 2, data).unwrap()
    }

    #[test]
    fn test_padded_size() {
        let src = buffer_2x2();
        let padded = pad(&src).unwrap();
        assert_eq!(padded.width(), 4);
        assert_eq!(padded.height(), 4);
        assert_eq!(padded.data().len(), 4 * 4 * 4);
    }

    #[test]
    fn test_interior_preserved() {
        let src = buffer_2x2();
        let padded = pad(&src).unwrap();
        assert_eq!(padded.pixel(1, 1).unwrap(), [10, 11, 12, 255]);
        assert_eq!(padded.pixel(2, 1).unwrap(), [20, 21, 22, 255]);
        assert_eq!(padded.pixel(1, 2).unwrap(), [30, 31, 32, 255]);
        assert_eq!(padded.pixel(2, 2).unwrap(), [40, 41, 42, 255]);
    }

    #[test]
    fn test_edges_replicate_nearest() {
        let src = buffer_2x2();
        let padded = pad(&src).unwrap();
        // Top edge above A and B
        assert_eq!(padded.pixel(1, 0).unwrap(), [10, 11, 12, 255]);
        assert_eq!(padded.pixel(2, 0).unwrap(), [20, 21, 22, 255]);
        // Left edge beside A and C
        assert_eq!(padded.pixel(0, 1).unwrap(), [10, 11, 12, 255]);
        assert_eq!(padded.pixel(0, 2).unwrap(), [30, 31, 32, 255]);
        // Bottom edge below C and D
        assert_eq!(padded.pixel(1, 3).unwrap(), [30, 31, 32, 255]);
        assert_eq!(padded.pixel(2, 3).unwrap(), [40, 41, 42, 255]);
    }

    #[test]
    fn test_corners_replicate_corner_pixels() {
        let src = buffer_2x2();
        let padded = pad(&src).unwrap();
        assert_eq!(padded.pixel(0, 0).unwrap(), [10, 11, 12, 255]); // A
        assert_eq!(padded.pixel(3, 0).unwrap(), [20, 21, 22, 255]); // B
        assert_eq!(padded.pixel(0, 3).unwrap(), [30, 31, 32, 255]); // C
        assert_eq!(padded.pixel(3, 3).unwrap(), [40, 41, 42, 255]); // D
    }

    #[test]
    fn test_input_untouched() {
        let src = buffer_2x2();
        let before = src.clone();
        let _ = pad(&src).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_slice_level_errors() {
        assert!(pad_rgba8(&[0; 16], 0, 2).is_err());
        assert!(pad_rgba8(&[0; 15], 2, 2).is_err());
    }
}
