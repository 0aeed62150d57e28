//! Image palette extraction
//!
//! A heuristic stand-in for k-means or median cut:
//!
//! 1. Resample the image to a fixed 150×150 grid (aspect ratio is not kept;
//!    the grid is only analyzed, never shown).
//! 2. Skip pixels with alpha < 128 and quantize each channel to a multiple of 5.
//! 3. Count pixels per bucket and rank buckets by frequency.
//! 4. Greedily select up to 5 mutually distinct buckets (see [`select`]).
//!
//! Fewer than five colors come back only when the image has fewer than
//! five opaque buckets; a fully transparent image yields an empty palette.
//! Neither case is an error.

mod bucket;
mod select;

pub use bucket::{quantize, BucketTally, OPAQUE_THRESHOLD, QUANTIZATION_STEP};
pub use select::{select_distinct, INITIAL_MIN_DISTANCE, MAX_PASSES, PALETTE_SIZE};

use image::imageops::FilterType;
use image::DynamicImage;

use crate::color::Color;
use crate::error::EngineError;

/// Side length of the analysis grid.
pub const SAMPLE_SIZE: u32 = 150;

/// Decode an encoded raster (PNG, JPEG, GIF, WebP, BMP).
///
/// # Errors
///
/// Returns [`EngineError::ImageLoad`] when the bytes are not a decodable image.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, EngineError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Extract up to five dominant, distinct colors from a decoded image.
pub fn extract_palette(image: &DynamicImage) -> Vec<Color> {
    if image.width() == 0 || image.height() == 0 {
        return Vec::new();
    }

    let sample = if image.width() == SAMPLE_SIZE && image.height() == SAMPLE_SIZE {
        image.to_rgba8()
    } else {
        image
            .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Triangle)
            .to_rgba8()
    };

    extract_from_pixels(sample.pixels().map(|p| p.0))
}

/// Decode and extract in one step.
pub fn extract_from_bytes(bytes: &[u8]) -> Result<Vec<Color>, EngineError> {
    let image = decode_image(bytes)?;
    Ok(extract_palette(&image))
}

/// Run bucketing and selection over already-sampled RGBA pixels.
pub fn extract_from_pixels<I>(pixels: I) -> Vec<Color>
where
    I: IntoIterator<Item = [u8; 4]>,
{
    let mut tally = BucketTally::new();
    for pixel in pixels {
        tally.add_pixel(pixel);
    }

    let ranked: Vec<Color> = tally
        .into_ranked()
        .into_iter()
        .map(|(color, _)| color)
        .collect();
    select_distinct(&ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn checkerboard(size: u32, a: [u8; 4], b: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba(a)
            } else {
                Rgba(b)
            }
        }))
    }

    #[test]
    fn test_checkerboard_yields_two_buckets() {
        let image = checkerboard(SAMPLE_SIZE, [0, 0, 0, 255], [255, 255, 255, 255]);
        let palette = extract_palette(&image);
        assert_eq!(palette.len(), 2);
        assert!(palette.contains(&Color::BLACK));
        assert!(palette.contains(&Color::WHITE));
    }

    #[test]
    fn test_fully_transparent_image_is_empty() {
        let image = checkerboard(SAMPLE_SIZE, [255, 0, 0, 0], [0, 0, 255, 10]);
        assert!(extract_palette(&image).is_empty());
    }

    #[test]
    fn test_transparent_regions_do_not_contribute() {
        let image = checkerboard(SAMPLE_SIZE, [255, 0, 0, 255], [0, 255, 0, 0]);
        assert_eq!(extract_palette(&image), vec![Color::new(255, 0, 0)]);
    }

    #[test]
    fn test_non_square_image_is_resampled() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            400,
            30,
            Rgba([40, 80, 120, 255]),
        ));
        assert_eq!(extract_palette(&image), vec![Color::new(40, 80, 120)]);
    }

    #[test]
    fn test_dominant_color_comes_first() {
        let pixels = std::iter::repeat([10, 10, 10, 255])
            .take(30)
            .chain(std::iter::repeat([250, 250, 250, 255]).take(50));
        let palette = extract_from_pixels(pixels);
        assert_eq!(palette[0], Color::new(250, 250, 250));
        assert_eq!(palette[1], Color::new(10, 10, 10));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, EngineError::ImageLoad(_)));
    }

    #[test]
    fn test_extract_from_png_bytes() {
        let image = checkerboard(20, [200, 30, 30, 255], [30, 30, 200, 255]);
        let mut bytes = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let palette = extract_from_bytes(&bytes).unwrap();
        assert!(!palette.is_empty());
        assert!(palette.len() <= PALETTE_SIZE);
    }
}
