//! HSL color type and conversions to and from [`Color`].
//!
//! Hue is in degrees, saturation and lightness are percentages. Values
//! produced from a [`Color`] have the hue rounded to a whole degree and
//! saturation and lightness to one decimal; the round trip back to RGB
//! stays within three units per channel.

use super::rgb::Color;
use crate::error::ParseColorError;

/// A color in hue/saturation/lightness form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
    /// Saturation percentage, 0.0..=100.0
    pub s: f64,
    /// Lightness percentage, 0.0..=100.0
    pub l: f64,
}

impl Hsl {
    /// Create an HSL value, wrapping the hue into [0, 360) and clamping
    /// saturation and lightness into [0, 100].
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Same saturation and lightness, hue rotated by `degrees` (may be negative).
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: wrap_hue(self.h + degrees),
            ..self
        }
    }
}

/// Wrap any hue into [0, 360). Negative zero is normalized to zero.
pub(crate) fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(360.0) % 360.0 + 0.0
}

/// Round half up, matching the usual "nearest integer" rule for
/// percentages and channel values.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[inline]
fn round_one_decimal(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}

impl From<Color> for Hsl {
    /// Min/max/delta conversion. Achromatic colors get hue 0.
    fn from(color: Color) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);
        let delta = cmax - cmin;

        let sector = if delta == 0.0 {
            0.0
        } else if cmax == r {
            // Remainder keeps the dividend's sign; wrap_hue fixes negatives.
            ((g - b) / delta) % 6.0
        } else if cmax == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let l = (cmax + cmin) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Self {
            h: wrap_hue(round_half_up(sector * 60.0)),
            s: round_one_decimal(s * 100.0).min(100.0),
            l: round_one_decimal(l * 100.0),
        }
    }
}

impl From<Hsl> for Color {
    /// Chroma/intermediate/match conversion, each channel rounded to the
    /// nearest integer in [0, 255].
    fn from(hsl: Hsl) -> Self {
        let h = wrap_hue(hsl.h);
        let s = hsl.s.clamp(0.0, 100.0) / 100.0;
        let l = hsl.l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| round_half_up((v + m) * 255.0).clamp(0.0, 255.0) as u8;
        Color::new(channel(r), channel(g), channel(b))
    }
}

/// Parse a hex string and convert it to HSL.
///
/// # Example
/// ```
/// use swatch_engine::hex_to_hsl;
///
/// let hsl = hex_to_hsl("#FF5733").unwrap();
/// assert_eq!((hsl.h, hsl.s, hsl.l), (11.0, 100.0, 60.0));
/// ```
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ParseColorError> {
    let color: Color = hex.parse()?;
    Ok(Hsl::from(color))
}

/// Convert HSL to the canonical uppercase `#RRGGBB` string.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    Color::from(hsl).to_hex()
}
