//! Harmony mode enumeration.

use std::fmt;
use std::str::FromStr;

/// Rule set governing how related colors are derived from a base color.
///
/// Adding a variant requires a generation rule in
/// [`generate`](super::generate); the `match` there is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HarmonyMode {
    /// Independent random colors
    #[default]
    Random,
    /// Hue steps of 30 degrees alternating around the base, jittered saturation
    Analogous,
    /// Base hue, random saturation and lightness
    Monochromatic,
    /// Hue steps of 120 degrees
    Triadic,
    /// Base hue and its opposite, random lightness
    Complementary,
}

impl HarmonyMode {
    /// Every mode, in menu order.
    pub const ALL: [HarmonyMode; 5] = [
        HarmonyMode::Random,
        HarmonyMode::Analogous,
        HarmonyMode::Monochromatic,
        HarmonyMode::Triadic,
        HarmonyMode::Complementary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyMode::Random => "Random",
            HarmonyMode::Analogous => "Analogous",
            HarmonyMode::Monochromatic => "Monochromatic",
            HarmonyMode::Triadic => "Triadic",
            HarmonyMode::Complementary => "Complementary",
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no harmony mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeError(pub String);

impl fmt::Display for UnknownModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown harmony mode: {}", self.0)
    }
}

impl std::error::Error for UnknownModeError {}

impl FromStr for HarmonyMode {
    type Err = UnknownModeError;

    /// Case-insensitive match on the mode name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarmonyMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownModeError(s.to_string()))
    }
}
