use axum::{extract::Path, response::Json};
use serde::Serialize;
use swatch_engine::{contrast_text_color, luminance, name_for, yiq_brightness, Color, Hsl};
use utoipa::ToSchema;

use crate::error::ApiError;

/// HSL components
#[derive(Debug, Serialize, ToSchema)]
pub struct HslValue {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl From<Hsl> for HslValue {
    fn from(hsl: Hsl) -> Self {
        Self {
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
        }
    }
}

/// Everything known about a single color
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorInfo {
    #[schema(example = "#3A7BD5")]
    pub hex: String,
    pub rgb: [u8; 3],
    pub hsl: HslValue,
    #[schema(example = "Royal Blue")]
    pub name: String,
    /// Brightness proxy (HSL lightness)
    pub luminance: f64,
    /// YIQ brightness used for contrast selection
    pub brightness: f64,
    /// Legible text color on this background, `#000000` or `#FFFFFF`
    pub text_color: String,
}

impl ColorInfo {
    pub fn describe(color: Color) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color.to_bytes(),
            hsl: Hsl::from(color).into(),
            name: name_for(color).to_string(),
            luminance: luminance(color),
            brightness: yiq_brightness(color),
            text_color: contrast_text_color(color).color().to_hex(),
        }
    }
}

/// Inspect a color
///
/// The leading `#` is optional in the path since it would otherwise need to
/// be percent-encoded.
#[utoipa::path(
    get,
    path = "/api/colors/{hex}",
    responses(
        (status = 200, description = "Color details", body = ColorInfo),
        (status = 400, description = "Malformed hex color"),
    ),
    params(
        ("hex" = String, Path, description = "Hex color, e.g. '3A7BD5' or '#3A7BD5'"),
    ),
    tag = "Colors"
)]
pub async fn handle_inspect(Path(hex): Path<String>) -> Result<Json<ColorInfo>, ApiError> {
    let color = parse_path_color(&hex)?;
    Ok(Json(ColorInfo::describe(color)))
}

pub(crate) fn parse_path_color(raw: &str) -> Result<Color, ApiError> {
    let color = if raw.starts_with('#') {
        raw.parse()?
    } else {
        format!("#{raw}").parse()?
    };
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let info = ColorInfo::describe("#FF5733".parse().unwrap());
        assert_eq!(info.hex, "#FF5733");
        assert_eq!(info.rgb, [255, 87, 51]);
        assert_eq!(info.hsl.h, 11.0);
        assert_eq!(info.hsl.s, 100.0);
        assert_eq!(info.hsl.l, 60.0);
        assert_eq!(info.name, "Crimson Red");
        assert_eq!(info.text_color, "#000000");
    }

    #[test]
    fn test_parse_path_color() {
        assert_eq!(parse_path_color("fff").unwrap(), Color::WHITE);
        assert_eq!(parse_path_color("#000000").unwrap(), Color::BLACK);
        assert!(parse_path_color("xyz").is_err());
        assert!(parse_path_color("##000000").is_err());
    }
}
