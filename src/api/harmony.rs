use axum::{response::Json, Json as JsonExtractor};
use serde::{Deserialize, Serialize};
use swatch_engine::{generate, Color, HarmonyMode};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Upper bound on colors per harmony request
pub const MAX_HARMONY_COUNT: usize = 64;

/// Request body for harmony generation
#[derive(Debug, Deserialize, ToSchema)]
pub struct HarmonyRequest {
    /// Base color; a random one is picked when absent
    #[serde(default)]
    #[schema(example = "#3A7BD5")]
    pub base: Option<String>,
    /// random, analogous, monochromatic, triadic or complementary
    #[serde(default = "default_mode")]
    #[schema(example = "triadic")]
    pub mode: String,
    /// Number of colors including the base
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_mode() -> String {
    HarmonyMode::default().as_str().to_ascii_lowercase()
}

fn default_count() -> usize {
    5
}

/// Generated harmony
#[derive(Debug, Serialize, ToSchema)]
pub struct HarmonyResponse {
    pub base: String,
    pub mode: String,
    /// Hex colors, base first
    pub colors: Vec<String>,
}

/// Generate a color harmony
///
/// The first color is always the base.
#[utoipa::path(
    post,
    path = "/api/harmony",
    request_body = HarmonyRequest,
    responses(
        (status = 200, description = "Harmony generated", body = HarmonyResponse),
        (status = 400, description = "Invalid base color, mode or count"),
    ),
    tag = "Colors"
)]
pub async fn handle_harmony(
    JsonExtractor(request): JsonExtractor<HarmonyRequest>,
) -> Result<Json<HarmonyResponse>, ApiError> {
    let mode: HarmonyMode = request.mode.parse()?;
    if request.count == 0 || request.count > MAX_HARMONY_COUNT {
        return Err(ApiError::BadRequest(format!(
            "count must be between 1 and {MAX_HARMONY_COUNT}"
        )));
    }

    let mut rng = rand::thread_rng();
    let base = match request.base.as_deref() {
        Some(hex) => hex.parse()?,
        None => Color::random(&mut rng),
    };
    let colors = generate(base, mode, request.count, &mut rng);

    tracing::debug!(base = %base, mode = %mode, count = colors.len(), "Harmony generated");

    Ok(Json(HarmonyResponse {
        base: base.to_hex(),
        mode: mode.as_str().to_ascii_lowercase(),
        colors: colors.iter().map(|c| c.to_hex()).collect(),
    }))
}
