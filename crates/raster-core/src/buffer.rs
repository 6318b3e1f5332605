//! Owned RGBA8 pixel buffer.
//!
//! [`PixelBuffer`] is the value object the host hands to the engine: a
//! width, a height, and a flat row-major byte vector with 4 bytes per pixel.
//!
//! # Invariant
//!
//! `data.len() == width * height * 4`, with `width >= 1` and `height >= 1`.
//! [`PixelBuffer::from_raw`] enforces this at the boundary; everything built
//! on top may rely on it.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//!
//! let mut buf = PixelBuffer::new(16, 16).unwrap();
//! buf.set_pixel(3, 4, [255, 128, 0, 255]).unwrap();
//! assert_eq!(buf.pixel(3, 4).unwrap(), [255, 128, 0, 255]);
//! ```

use crate::{CoreError, Result};

/// Number of channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Owned RGBA8 image buffer.
///
/// Pixels are stored row-major, top-to-bottom, interleaved
/// `[R G B A R G B A ...]` with no padding between rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Buffer width in pixels
    width: u32,
    /// Buffer height in pixels
    height: u32,
    /// Pixel data, `width * height * 4` bytes
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a new buffer filled with zeros (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if either dimension is zero
    /// or the byte size overflows `usize`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::new(640, 480).unwrap();
    /// assert_eq!(buf.data().len(), 640 * 480 * 4);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wraps raw RGBA8 bytes as a buffer, validating the size invariant.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidDimensions`] if either dimension is zero.
    /// - [`CoreError::BufferSizeMismatch`] if `data.len() != width * height * 4`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::from_raw(2, 1, vec![0; 8]).unwrap();
    /// assert!(PixelBuffer::from_raw(2, 1, vec![0; 7]).is_err());
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(CoreError::size_mismatch(
                expected,
                data.len(),
                width,
                height,
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw pixel bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning the raw pixel bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reads the RGBA sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfBounds`] if (x, y) lies outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; 4]> {
        let idx = self.offset(x, y)?;
        Ok([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Writes the RGBA sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfBounds`] if (x, y) lies outside the buffer.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> Result<()> {
        let idx = self.offset(x, y)?;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
        Ok(())
    }

    /// Fills the whole buffer with one RGBA value.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(CoreError::out_of_bounds(x, y, self.width, self.height));
        }
        Ok((y as usize * self.width as usize + x as usize) * CHANNELS)
    }

    /// Validated byte length for the given dimensions.
    fn byte_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(CoreError::invalid_dimensions(
                width,
                height,
                "width and height must be > 0",
            ));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| CoreError::invalid_dimensions(width, height, "byte size overflows"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.data().len(), 4 * 3 * 4);
        assert!(buf.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(PixelBuffer::new(0, 10).is_err());
        assert!(PixelBuffer::new(10, 0).is_err());
    }

    #[test]
    fn test_from_raw_validates_length() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_ok());
        let err = PixelBuffer::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, CoreError::BufferSizeMismatch { .. }));
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut buf = PixelBuffer::new(3, 3).unwrap();
        buf.set_pixel(2, 1, [1, 2, 3, 4]).unwrap();
        assert_eq!(buf.pixel(2, 1).unwrap(), [1, 2, 3, 4]);
        assert_eq!(buf.pixel(0, 0).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let buf = PixelBuffer::new(3, 3).unwrap();
        assert!(buf.pixel(3, 0).is_err());
        assert!(buf.pixel(0, 3).is_err());
    }

    #[test]
    fn test_fill() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.fill([9, 8, 7, 255]);
        for px in buf.data().chunks_exact(4) {
            assert_eq!(px, [9, 8, 7, 255]);
        }
    }
}
