//! Palette summaries for analytics views.

use crate::color::{round_half_up, Color};
use crate::metrics::{contrast_text_color, luminance, TextTone};
use crate::naming::name_for;

/// Perceptual facts about one palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSummary {
    pub color: Color,
    pub name: &'static str,
    /// Brightness proxy rounded to a whole percentage
    pub luminance: u8,
    pub text_tone: TextTone,
}

/// Per-color facts plus aggregate brightness statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSummary {
    pub entries: Vec<ColorSummary>,
    /// Mean of the rounded per-color luminance, itself rounded; 0 when empty
    pub average_luminance: u8,
    pub min_luminance: u8,
    pub max_luminance: u8,
}

impl PaletteSummary {
    /// Difference between the brightest and darkest entry.
    pub fn luminance_spread(&self) -> u8 {
        self.max_luminance - self.min_luminance
    }
}

/// Summarize a palette in order.
pub fn summarize(colors: &[Color]) -> PaletteSummary {
    let entries: Vec<ColorSummary> = colors
        .iter()
        .map(|&color| ColorSummary {
            color,
            name: name_for(color),
            luminance: round_half_up(luminance(color)) as u8,
            text_tone: contrast_text_color(color),
        })
        .collect();

    let lums = entries.iter().map(|e| e.luminance);
    let min_luminance = lums.clone().min().unwrap_or(0);
    let max_luminance = lums.clone().max().unwrap_or(0);
    let average_luminance = if entries.is_empty() {
        0
    } else {
        let total: u32 = lums.map(u32::from).sum();
        round_half_up(total as f64 / entries.len() as f64) as u8
    };

    PaletteSummary {
        entries,
        average_luminance,
        min_luminance,
        max_luminance,
    }
}
