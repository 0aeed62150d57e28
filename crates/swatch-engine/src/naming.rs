//! Deterministic color naming from HSL categories.

use std::fmt;

use crate::color::{Color, Hsl};

/// Human-readable category a color falls into.
///
/// Lightness and saturation gates are checked first, in that order; the
/// remaining colors are bucketed by hue into half-open ranges that
/// partition [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    /// lightness < 10
    VeryDark,
    /// lightness > 90
    VeryLight,
    /// saturation < 10
    Neutral,
    /// hue [0, 15)
    Red,
    /// hue [15, 45)
    Orange,
    /// hue [45, 70)
    Yellow,
    /// hue [70, 150)
    Green,
    /// hue [150, 190)
    Teal,
    /// hue [190, 250)
    Blue,
    /// hue [250, 290)
    Purple,
    /// hue [290, 330)
    Pink,
    /// hue [330, 360)
    Berry,
}

/// Upper (exclusive) hue bound of each chromatic bucket, in order.
const HUE_BUCKETS: [(f64, ColorCategory); 9] = [
    (15.0, ColorCategory::Red),
    (45.0, ColorCategory::Orange),
    (70.0, ColorCategory::Yellow),
    (150.0, ColorCategory::Green),
    (190.0, ColorCategory::Teal),
    (250.0, ColorCategory::Blue),
    (290.0, ColorCategory::Purple),
    (330.0, ColorCategory::Pink),
    (360.0, ColorCategory::Berry),
];

impl ColorCategory {
    /// Classify an HSL value.
    pub fn from_hsl(hsl: Hsl) -> Self {
        if hsl.l < 10.0 {
            return ColorCategory::VeryDark;
        }
        if hsl.l > 90.0 {
            return ColorCategory::VeryLight;
        }
        if hsl.s < 10.0 {
            return ColorCategory::Neutral;
        }

        HUE_BUCKETS
            .iter()
            .find(|(upper, _)| hsl.h < *upper)
            .map(|&(_, category)| category)
            .unwrap_or(ColorCategory::Berry)
    }

    /// The display label for this category.
    pub fn label(self) -> &'static str {
        match self {
            ColorCategory::VeryDark => "Void Black",
            ColorCategory::VeryLight => "Pure White",
            ColorCategory::Neutral => "Neutral Grey",
            ColorCategory::Red => "Crimson Red",
            ColorCategory::Orange => "Sunset Orange",
            ColorCategory::Yellow => "Golden Yellow",
            ColorCategory::Green => "Forest Green",
            ColorCategory::Teal => "Teal Ocean",
            ColorCategory::Blue => "Royal Blue",
            ColorCategory::Purple => "Deep Purple",
            ColorCategory::Pink => "Hot Pink",
            ColorCategory::Berry => "Wild Berry",
        }
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name a color. Total over all colors.
///
/// # Example
/// ```
/// use swatch_engine::{name_for, Color};
///
/// assert_eq!(name_for("#FF0000".parse::<Color>().unwrap()), "Crimson Red");
/// ```
pub fn name_for(color: Color) -> &'static str {
    ColorCategory::from_hsl(Hsl::from(color)).label()
}
