use axum::{extract::State, response::Json, Json as JsonExtractor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::ImageSource;

/// Image to analyze: exactly one of `url` or `data`
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImageRequest {
    /// http(s) URL of the image
    #[serde(default)]
    pub url: Option<String>,
    /// Base64-encoded image, optionally as a `data:` URL
    #[serde(default)]
    pub data: Option<String>,
}

impl ImageRequest {
    pub fn into_source(self) -> Result<ImageSource, ApiError> {
        match (self.url, self.data) {
            (Some(url), None) => Ok(ImageSource::Url(url)),
            (None, Some(data)) => Ok(ImageSource::Data(data)),
            _ => Err(ApiError::BadRequest(
                "provide exactly one of 'url' or 'data'".to_string(),
            )),
        }
    }
}

/// Extracted palette
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractResponse {
    /// Up to five hex colors, most dominant first
    pub colors: Vec<String>,
}

/// Extract dominant colors from an image
///
/// Returns fewer than five colors when the image has fewer distinct
/// buckets, and an empty list when it has no opaque pixels.
#[utoipa::path(
    post,
    path = "/api/extract",
    request_body = ImageRequest,
    responses(
        (status = 200, description = "Palette extracted", body = ExtractResponse),
        (status = 400, description = "Missing or conflicting image source"),
        (status = 413, description = "Image too large"),
        (status = 422, description = "Image could not be decoded"),
        (status = 502, description = "Image URL could not be fetched"),
    ),
    tag = "Colors"
)]
pub async fn handle_extract(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<ImageRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let source = request.into_source()?;
    let colors = state.image_loader.extract(&source).await?;

    tracing::info!(colors = colors.len(), "Palette extracted");

    Ok(Json(ExtractResponse {
        colors: colors.iter().map(|c| c.to_hex()).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_source() {
        let request = ImageRequest {
            url: Some("https://example.com/a.png".to_string()),
            data: None,
        };
        assert_eq!(
            request.into_source().unwrap(),
            ImageSource::Url("https://example.com/a.png".to_string())
        );

        let request = ImageRequest {
            url: None,
            data: Some("aGVsbG8=".to_string()),
        };
        assert_eq!(
            request.into_source().unwrap(),
            ImageSource::Data("aGVsbG8=".to_string())
        );
    }

    #[test]
    fn test_into_source_requires_exactly_one() {
        let neither = ImageRequest {
            url: None,
            data: None,
        };
        assert!(matches!(neither.into_source(), Err(ApiError::BadRequest(_))));

        let both = ImageRequest {
            url: Some("https://example.com".to_string()),
            data: Some("aGVsbG8=".to_string()),
        };
        assert!(matches!(both.into_source(), Err(ApiError::BadRequest(_))));
    }
}
