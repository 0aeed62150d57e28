//! Test fixtures and image generators.

use base64::Engine as _;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

/// Known colors with stable names
pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const ROYAL_BLUE: &str = "#3A7BD5";
    pub const TERRACOTTA: &str = "#E07A5F";
}

/// Encode an image as PNG
pub fn encode_png(image: RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

/// Uniform square PNG
pub fn solid_png(size: u32, pixel: [u8; 4]) -> Vec<u8> {
    encode_png(RgbaImage::from_pixel(size, size, Rgba(pixel)))
}

/// Black and white checkerboard at the analysis resolution
pub fn checkerboard_png() -> Vec<u8> {
    encode_png(RgbaImage::from_fn(150, 150, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    }))
}

/// Vertical stripes, one per color, at the analysis resolution
pub fn stripes_png(stripes: &[[u8; 3]]) -> Vec<u8> {
    let width = 150u32;
    let stripe = width / stripes.len() as u32;
    encode_png(RgbaImage::from_fn(width, width, |x, _| {
        let [r, g, b] = stripes[((x / stripe) as usize).min(stripes.len() - 1)];
        Rgba([r, g, b, 255])
    }))
}

/// Base64 without a data URL prefix
pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// JSON body for image endpoints carrying inline data
pub fn data_body(bytes: &[u8]) -> String {
    serde_json::json!({ "data": to_base64(bytes) }).to_string()
}

/// JSON body for image endpoints carrying a URL
pub fn url_body(url: &str) -> String {
    serde_json::json!({ "url": url }).to_string()
}
