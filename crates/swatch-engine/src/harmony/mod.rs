//! Harmony generation
//!
//! [`generate`] derives a sequence of related colors from a base color.
//! The first element is always the base itself; every following element
//! `i` (1-indexed) comes from the mode's rule:
//!
//! | Mode          | Hue                              | Saturation            | Lightness         |
//! |---------------|----------------------------------|-----------------------|-------------------|
//! | Random        | random                           | random                | random            |
//! | Analogous     | `h + 30i` (even i), `h - 30i` (odd i) | `s + U[-10,10)` in [10,100] | `l`          |
//! | Monochromatic | `h`                              | `U[0,100)` in [20,100] | `U[0,100)` in [10,90] |
//! | Triadic       | `h + 120i`                       | `s`                   | `l`               |
//! | Complementary | `h + 180` (i = 1), then `h` / `h + 180` by parity | `s` | `U[0,100)` in [20,80] for i > 1 |
//!
//! Afterwards every mode except Monochromatic shuffles the non-base
//! elements. Monochromatic orders them by descending luminance instead.
//!
//! All randomness comes from the caller's [`Rng`], so a seeded generator
//! makes every mode reproducible.

mod mode;

pub use mode::{HarmonyMode, UnknownModeError};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{Color, Hsl};
use crate::metrics::luminance;

/// Generate `count` colors in harmony with `base`.
///
/// The output has exactly `count` elements and `output[0] == base`.
/// A `count` of zero yields an empty vector.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use swatch_engine::{generate, Color, HarmonyMode};
///
/// let red: Color = "#FF0000".parse().unwrap();
/// let colors = generate(red, HarmonyMode::Triadic, 3, &mut StdRng::seed_from_u64(1));
/// assert_eq!(colors[0], red);
/// assert_eq!(colors.len(), 3);
/// ```
pub fn generate<R: Rng + ?Sized>(
    base: Color,
    mode: HarmonyMode,
    count: usize,
    rng: &mut R,
) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }

    let base_hsl = Hsl::from(base);
    let mut colors = Vec::with_capacity(count);
    colors.push(base);
    for i in 1..count {
        colors.push(derive(base_hsl, mode, i, rng));
    }

    match mode {
        HarmonyMode::Monochromatic => {
            colors[1..].sort_by(|a, b| luminance(*b).total_cmp(&luminance(*a)));
        }
        HarmonyMode::Random
        | HarmonyMode::Analogous
        | HarmonyMode::Triadic
        | HarmonyMode::Complementary => {
            colors[1..].shuffle(rng);
        }
    }

    colors
}

/// Apply the mode's rule for element `i` (1-indexed).
fn derive<R: Rng + ?Sized>(base: Hsl, mode: HarmonyMode, i: usize, rng: &mut R) -> Color {
    let step = i as f64;
    let hsl = match mode {
        HarmonyMode::Random => return Color::random(rng),
        HarmonyMode::Analogous => {
            let offset = if i % 2 == 0 { 30.0 * step } else { -30.0 * step };
            let jitter = rng.gen_range(-10.0..10.0);
            Hsl::new(base.h + offset, (base.s + jitter).clamp(10.0, 100.0), base.l)
        }
        HarmonyMode::Monochromatic => {
            let s = (rng.gen::<f64>() * 100.0).clamp(20.0, 100.0);
            let l = (rng.gen::<f64>() * 100.0).clamp(10.0, 90.0);
            Hsl::new(base.h, s, l)
        }
        HarmonyMode::Triadic => base.rotate(120.0 * step),
        HarmonyMode::Complementary => {
            if i == 1 {
                base.rotate(180.0)
            } else {
                let hue = if i % 2 == 0 { base.h } else { base.h + 180.0 };
                let l = (rng.gen::<f64>() * 100.0).clamp(20.0, 80.0);
                Hsl::new(hue, base.s, l)
            }
        }
    };
    Color::from(hsl)
}

/// Produce colors for `slots` unlocked palette positions.
///
/// `Random` draws an independent color per slot. Other modes harmonize
/// around `anchor` (typically the first locked color) or, when there is
/// none, around a freshly drawn random base. `generated` is how many
/// harmony colors to derive before slicing. The slice starts at the base,
/// so the first open slot receives the anchor color itself.
/// Any shortfall is padded with random colors, so the result always has
/// exactly `slots` entries.
pub fn fill_slots<R: Rng + ?Sized>(
    anchor: Option<Color>,
    mode: HarmonyMode,
    slots: usize,
    generated: usize,
    rng: &mut R,
) -> Vec<Color> {
    if mode == HarmonyMode::Random {
        return (0..slots).map(|_| Color::random(rng)).collect();
    }

    let base = match anchor {
        Some(color) => color,
        None => Color::random(rng),
    };
    let mut colors: Vec<Color> = generate(base, mode, generated, rng)
        .into_iter()
        .take(slots)
        .collect();
    while colors.len() < slots {
        colors.push(Color::random(rng));
    }
    colors
}
