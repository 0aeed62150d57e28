//! swatch-engine: color science and palette generation
//!
//! This library provides the numeric core of Swatchbook: colorspace
//! conversion, perceptual metrics, color naming, harmony generation and
//! image palette extraction. Everything here is pure and synchronous; the
//! only fallible operations are hex parsing and image decoding.
//!
//! # Quick Start
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use swatch_engine::{contrast_text_color, generate, name_for, Color, HarmonyMode, TextTone};
//!
//! let base: Color = "#3A7BD5".parse().unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let palette = generate(base, HarmonyMode::Complementary, 5, &mut rng);
//!
//! assert_eq!(palette.len(), 5);
//! assert_eq!(palette[0], base);
//! assert_eq!(name_for(base), "Royal Blue");
//! assert_eq!(contrast_text_color(base), TextTone::White);
//! ```
//!
//! # Color Spaces
//!
//! | Type      | Range                                  | Used For |
//! |-----------|----------------------------------------|----------|
//! | [`Color`] | 8-bit RGB, `#RRGGBB`                    | I/O, distances, quantization buckets |
//! | [`Hsl`]   | h in [0,360), s and l in [0,100]       | Harmony geometry, naming, luminance proxy |
//!
//! HSL values computed from a [`Color`] have a whole-degree hue and one
//! decimal of saturation and lightness, so namer buckets see integer hues.
//! `Color -> Hsl -> Color` stays within three units per channel.
//!
//! # Randomness
//!
//! Random harmony modes and jitter draw from a caller-supplied
//! [`rand::Rng`]. There is no global generator inside the engine; seed a
//! `StdRng` for reproducible output.
//!
//! # Extraction
//!
//! [`extract_palette`] samples an image on a 150×150 grid, buckets opaque
//! pixels and greedily picks up to five distinct dominant colors with a
//! distance threshold of 45 that halves on each of at most three scans.
//! See the [`extract`] module for the full policy.

pub mod analysis;
pub mod color;
pub mod error;
pub mod extract;
pub mod harmony;
pub mod metrics;
pub mod naming;


pub use analysis::{summarize, ColorSummary, PaletteSummary};
pub use color::{hex_to_hsl, hsl_to_hex, Color, Hsl};
pub use error::{EngineError, ParseColorError};
pub use extract::{decode_image, extract_from_bytes, extract_from_pixels, extract_palette};
pub use harmony::{fill_slots, generate, HarmonyMode, UnknownModeError};
pub use metrics::{contrast_text_color, luminance, rgb_distance, yiq_brightness, TextTone};
pub use naming::{name_for, ColorCategory};
