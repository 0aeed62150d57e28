//! Error types for the swatch engine.
//!
//! [`ParseColorError`] describes why a hex string was rejected, and
//! [`EngineError`] is the unified error returned by fallible engine entry
//! points.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// The converter never guesses: anything other than `#RGB` or `#RRGGBB`
/// is rejected with one of these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string does not start with `#`
    MissingHash,
    /// Wrong number of characters (must be 4 or 7 including the `#`)
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingHash => write!(f, "hex color must start with '#'"),
            ParseColorError::InvalidLength(len) => {
                write!(
                    f,
                    "invalid hex color length {} (expected 4 or 7 characters)",
                    len
                )
            }
            ParseColorError::InvalidDigit(c) => write!(f, "invalid hex character: {:?}", c),
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Unified error type for the engine's public API.
///
/// An empty extraction result is not an error; only a raster that could
/// not be decoded produces [`EngineError::ImageLoad`].
#[derive(Debug)]
pub enum EngineError {
    /// A malformed hex string reached the converter
    InvalidColorFormat(ParseColorError),
    /// The raster could not be decoded
    ImageLoad(image::ImageError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidColorFormat(err) => write!(f, "invalid color format: {}", err),
            EngineError::ImageLoad(err) => write!(f, "image load failure: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidColorFormat(err) => Some(err),
            EngineError::ImageLoad(err) => Some(err),
        }
    }
}

impl From<ParseColorError> for EngineError {
    fn from(err: ParseColorError) -> Self {
        EngineError::InvalidColorFormat(err)
    }
}

impl From<image::ImageError> for EngineError {
    fn from(err: image::ImageError) -> Self {
        EngineError::ImageLoad(err)
    }
}
