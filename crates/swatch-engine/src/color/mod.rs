//! Color types and colorspace conversion
//!
//! - [`Color`]: 24-bit RGB, canonical `#RRGGBB` string form. Use for I/O.
//! - [`Hsl`]: hue/saturation/lightness. Use for harmony geometry and naming.
//!
//! # Example
//!
//! ```
//! use swatch_engine::{Color, Hsl};
//!
//! let red: Color = "#FF0000".parse().unwrap();
//! let hsl = Hsl::from(red);
//! let back = Color::from(hsl.rotate(120.0));
//! assert_eq!(back.to_string(), "#00FF00");
//! ```

mod hsl;
mod rgb;

pub use hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub(crate) use hsl::round_half_up;
pub use rgb::Color;
