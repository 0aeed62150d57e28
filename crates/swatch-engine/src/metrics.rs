//! Perceptual metrics: brightness proxy, readable text tone and RGB distance.

use crate::color::{Color, Hsl};

/// Foreground tone that stays readable on a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTone {
    Black,
    White,
}

impl TextTone {
    /// The tone as a color.
    pub fn color(self) -> Color {
        match self {
            TextTone::Black => Color::BLACK,
            TextTone::White => Color::WHITE,
        }
    }

    /// Lowercase name, as used in JSON payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            TextTone::Black => "black",
            TextTone::White => "white",
        }
    }
}

/// Brightness proxy in 0.0..=100.0.
///
/// This is the HSL lightness percentage, NOT CIE relative luminance. Palette
/// analytics and the Monochromatic ordering are defined in terms of this
/// value, so swapping in a gamma-correct formula is a behavior change.
pub fn luminance(color: Color) -> f64 {
    Hsl::from(color).l
}

/// YIQ-weighted brightness `(299R + 587G + 114B) / 1000`, 0.0..=255.0.
pub fn yiq_brightness(color: Color) -> f64 {
    (299.0 * color.r as f64 + 587.0 * color.g as f64 + 114.0 * color.b as f64) / 1000.0
}

/// Pick black or white text for a background of `color`.
///
/// Black when the YIQ brightness is at least 128, white otherwise.
pub fn contrast_text_color(color: Color) -> TextTone {
    if yiq_brightness(color) >= 128.0 {
        TextTone::Black
    } else {
        TextTone::White
    }
}

/// Euclidean distance in raw RGB space, 0.0..=~441.7.
///
/// Only used as a distinctness threshold, not as a perceptual difference.
pub fn rgb_distance(a: Color, b: Color) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}
