//! Parsing of `rgb(r, g, b)` color text.
//!
//! Canvas pixel readouts arrive as the literal `rgb(r, g, b)` form. The
//! parser accepts exactly that shape, tolerating whitespace around the
//! components, and rejects everything else.

use crate::{ColorError, Rgb8};
use regex::Regex;
use std::sync::OnceLock;

fn rgb_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
            .expect("rgb pattern is valid")
    })
}

/// Parses `rgb(r, g, b)` text into a sample.
///
/// # Errors
///
/// - [`ColorError::Malformed`] for any other shape (missing prefix, wrong
///   component count, negative or non-numeric components).
/// - [`ColorError::ChannelOutOfRange`] for components above 255.
///
/// # Example
///
/// ```rust
/// use raster_color::{parse_rgb, Rgb8};
///
/// assert_eq!(parse_rgb("rgb(10, 20, 30)").unwrap(), Rgb8::new(10, 20, 30));
/// assert_eq!(parse_rgb("rgb(0,0,0)").unwrap(), Rgb8::new(0, 0, 0));
/// assert!(parse_rgb("not-a-color").is_err());
/// assert!(parse_rgb("rgb(300, 0, 0)").is_err());
/// ```
pub fn parse_rgb(text: &str) -> Result<Rgb8, ColorError> {
    let captures = rgb_pattern()
        .captures(text)
        .ok_or_else(|| ColorError::Malformed(text.to_string()))?;

    let mut channels = [0u8; 3];
    for (slot, group) in channels.iter_mut().zip(1..=3) {
        // The pattern guarantees 1-3 digits, so u32 parsing cannot fail.
        let value: u32 = captures[group]
            .parse()
            .map_err(|_| ColorError::Malformed(text.to_string()))?;
        if value > 255 {
            return Err(ColorError::ChannelOutOfRange { value });
        }
        *slot = value as u8;
    }
    Ok(Rgb8::new(channels[0], channels[1], channels[2]))
}
