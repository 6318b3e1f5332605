//! Picked color sample type.

/// An 8-bit RGB color sample.
///
/// The value a pipette tool reads from a single pixel; alpha is not part of
/// the colorimetric conversions and is omitted.
///
/// # Example
///
/// ```rust
/// use raster_color::Rgb8;
///
/// let c = Rgb8::new(255, 128, 0);
/// assert_eq!(c.to_array(), [255, 128, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Creates a sample from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to `[0, 1]` floats, still gamma-encoded.
    #[inline]
    pub fn to_normalized(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}
