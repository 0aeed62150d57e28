//! 24-bit RGB color type
//!
//! [`Color`] is the canonical value passed between every engine component.
//! Its string form is always `#RRGGBB` in uppercase.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::ParseColorError;

/// A 24-bit RGB color.
///
/// # Example
/// ```
/// use swatch_engine::Color;
///
/// let coral: Color = "#ff5733".parse().unwrap();
/// assert_eq!(coral.to_string(), "#FF5733");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Canonical `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Draw a uniformly random color from the full 24-bit space.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_bytes(rng.gen())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse `#RRGGBB` or the shorthand `#RGB` (each nibble duplicated).
    ///
    /// Parsing is case-insensitive. Anything else, including a missing `#`
    /// or surrounding whitespace, is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        // Every remaining char is ASCII, so byte offsets are char offsets.
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).unwrap_or(0);

        match digits.len() {
            3 => Ok(Self::new(nibble(0) * 17, nibble(1) * 17, nibble(2) * 17)),
            6 => Ok(Self::new(
                nibble(0) * 16 + nibble(1),
                nibble(2) * 16 + nibble(3),
                nibble(4) * 16 + nibble(5),
            )),
            _ => Err(ParseColorError::InvalidLength(s.chars().count())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_six_digit() {
        let color: Color = "#FF5733".parse().unwrap();
        assert_eq!(color, Color::new(255, 87, 51));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower: Color = "#abcdef".parse().unwrap();
        let upper: Color = "#ABCDEF".parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_parse_shorthand_duplicates_nibbles() {
        let color: Color = "#F0A".parse().unwrap();
        assert_eq!(color, Color::new(0xFF, 0x00, 0xAA));
    }

    #[test]
    fn test_display_is_uppercase_and_padded() {
        assert_eq!(Color::new(1, 2, 171).to_string(), "#0102AB");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_hex().len(), 7);
    }

    #[test]
    fn test_rejects_missing_hash() {
        assert_eq!(
            "FF5733".parse::<Color>(),
            Err(ParseColorError::MissingHash)
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            "#FF57".parse::<Color>(),
            Err(ParseColorError::InvalidLength(5))
        );
        assert_eq!("#".parse::<Color>(), Err(ParseColorError::InvalidLength(1)));
        assert_eq!(
            "#FF573300".parse::<Color>(),
            Err(ParseColorError::InvalidLength(9))
        );
    }

    #[test]
    fn test_rejects_non_hex_characters() {
        assert_eq!(
            "#GG0000".parse::<Color>(),
            Err(ParseColorError::InvalidDigit('G'))
        );
        // from_str_radix would accept a sign; the parser must not
        assert_eq!(
            "#+FFFFF".parse::<Color>(),
            Err(ParseColorError::InvalidDigit('+'))
        );
        assert_eq!(
            " #FFFFFF".parse::<Color>(),
            Err(ParseColorError::MissingHash)
        );
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = Color::random(&mut StdRng::seed_from_u64(7));
        let b = Color::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
