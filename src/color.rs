//! 8-bit RGB color type and its text encodings.
//!
//! Colors carry no invariants beyond the channel range enforced by `u8`.
//! Two text encodings are accepted by [`Rgb8::from_str`]: `#rrggbb`
//! hexadecimal, or three whitespace-separated decimal channels 0–255.

use std::str::FromStr;

use thiserror::Error;

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The input matched neither `#rrggbb` nor `r g b` decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}: expected `#rrggbb` or three decimal channels 0-255")]
pub struct ParseColorError(String);

impl FromStr for Rgb8 {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                if let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(2), channel(4)) {
                    return Ok(Rgb8::new(r, g, b));
                }
            }
            return Err(ParseColorError(s.to_string()));
        }

        let mut channels = trimmed.split_whitespace();
        match (
            channels.next(),
            channels.next(),
            channels.next(),
            channels.next(),
        ) {
            (Some(r), Some(g), Some(b), None) => {
                match (r.parse(), g.parse(), b.parse()) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Rgb8::new(r, g, b)),
                    _ => Err(ParseColorError(s.to_string())),
                }
            }
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
