//! 8-bit sRGB color type
//!
//! The byte-valued color found in pixel buffers, palette files and hex
//! strings. Clustering distances are computed directly on these values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::palette::ParseColorError;

/// A color in 8-bit sRGB.
///
/// Serializes as a `[r, g, b]` array, which is the layout palette files use
/// for their optional precomputed `rgb` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Smallest channel value.
    #[inline]
    pub fn min_channel(self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// Largest channel value.
    #[inline]
    pub fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Squared Euclidean distance in sRGB byte space.
    ///
    /// # Example
    ///
    /// ```
    /// use lineart::Rgb;
    ///
    /// let a = Rgb::new(10, 20, 30);
    /// let b = Rgb::new(13, 24, 30);
    /// assert_eq!(a.distance_squared(b), 25);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// ```
    /// use lineart::Rgb;
    /// assert_eq!(Rgb::new(0x33, 0x66, 0x99).to_hex(), "#336699");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_bytes()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive, with
    /// surrounding whitespace trimmed.
    ///
    /// ```
    /// use lineart::Rgb;
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.is_ascii() {
            return Err(ParseColorError::InvalidLength(trimmed.to_string()));
        }

        match digits.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&digits[0..1], 16)? * 17;
                let g = u8::from_str_radix(&digits[1..2], 16)? * 17;
                let b = u8::from_str_radix(&digits[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16)?;
                let g = u8::from_str_radix(&digits[2..4], 16)?;
                let b = u8::from_str_radix(&digits[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        assert_eq!("#FFFFFF".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0));
        assert_eq!("336699".parse::<Rgb>().unwrap(), Rgb::new(0x33, 0x66, 0x99));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        assert_eq!("#f00".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!("#ABC".parse::<Rgb>().unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(_))
        ));
        assert!(matches!(
            "".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(_))
        ));
        assert!(matches!(
            "#".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(_))
        ));
        // Multi-byte characters must not panic on slicing
        assert!("#ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let upper: Rgb = "  #ABCDEF  ".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_hex_formatting_is_lowercase() {
        let color = Rgb::new(0xAB, 0x0C, 0xFF);
        assert_eq!(color.to_hex(), "#ab0cff");
        assert_eq!(color.to_string(), "#ab0cff");
        assert_eq!(color.to_hex().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_channel_extremes() {
        let color = Rgb::new(51, 102, 153);
        assert_eq!(color.min_channel(), 51);
        assert_eq!(color.max_channel(), 153);
    }
}
