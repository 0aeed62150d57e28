use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    Json as JsonExtractor,
};
use serde::{Deserialize, Serialize};
use swatch_engine::{Color, HarmonyMode};
use utoipa::ToSchema;

use super::extract::ImageRequest;
use crate::error::ApiError;
use crate::models::{AiPalette, ColorState, HistoryEntry, SessionId};
use crate::server::AppState;
use crate::services::{css_variables, PaletteLimits, PaletteSession, SessionStore};

/// Session state returned by every session endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_name: Option<String>,
    pub colors: Vec<ColorState>,
    pub can_undo: bool,
    pub history_len: usize,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&PaletteSession> for SessionResponse {
    fn from(session: &PaletteSession) -> Self {
        Self {
            id: session.id.to_string(),
            palette_name: session.palette_name().map(str::to_string),
            colors: session.colors().to_vec(),
            can_undo: session.can_undo(),
            history_len: session.history_len(),
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    /// Palette size; the configured default when absent
    #[serde(default)]
    pub size: Option<usize>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    #[serde(default = "default_mode")]
    #[schema(example = "analogous")]
    pub mode: String,
}

fn default_mode() -> String {
    HarmonyMode::default().as_str().to_ascii_lowercase()
}

/// Either a replacement hex or HSL overrides
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateColorRequest {
    #[serde(default)]
    #[schema(example = "#E07A5F")]
    pub hex: Option<String>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(default)]
    pub s: Option<f64>,
    #[serde(default)]
    pub l: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResizeRequest {
    pub size: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    /// Snapshots, oldest first
    pub entries: Vec<HistoryEntry>,
    pub can_undo: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColorAnalytics {
    pub hex: String,
    pub name: String,
    /// Rounded brightness proxy, 0-100
    pub luminance: u8,
    pub text_color: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyticsResponse {
    pub colors: Vec<ColorAnalytics>,
    pub average_luminance: u8,
    pub min_luminance: u8,
    pub max_luminance: u8,
    pub luminance_spread: u8,
}

/// Create a palette session
#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 200, description = "Session created with random colors", body = SessionResponse),
        (status = 400, description = "Size out of range"),
    ),
    tag = "Sessions"
)]
pub async fn handle_create(
    State(state): State<AppState>,
    body: Option<JsonExtractor<CreateSessionRequest>>,
) -> Result<Json<SessionResponse>, ApiError> {
    let request = body.map(|JsonExtractor(r)| r).unwrap_or_default();
    let size = request.size.unwrap_or(state.config.default_size);

    let session = PaletteSession::new(
        SessionId::generate(),
        size,
        PaletteLimits::from(state.config.as_ref()),
        &mut rand::thread_rng(),
    )?;
    let response = SessionResponse::from(&session);
    state.sessions.insert(session).await?;

    tracing::info!(session = %response.id, size = size, "Session created");
    Ok(Json(response))
}

/// Get a palette session
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    responses(
        (status = 200, description = "Session state", body = SessionResponse),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = find_session(&state, &id).await?;
    Ok(Json(SessionResponse::from(&session)))
}

/// Delete a palette session
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = SessionId::new(id);
    if !state.sessions.remove(&id).await? {
        return Err(ApiError::SessionNotFound(id.to_string()));
    }

    tracing::info!(session = %id, "Session deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Regenerate unlocked colors
///
/// The first locked color anchors harmony modes. When every color is
/// locked nothing changes and no history entry is recorded.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Palette regenerated", body = SessionResponse),
        (status = 400, description = "Unknown harmony mode"),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonExtractor(request): JsonExtractor<GenerateRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mode: HarmonyMode = request.mode.parse()?;
    let id = SessionId::new(id);

    let (changed, response) = state
        .sessions
        .update(&id, |session| {
            let changed = session.generate(mode, &mut rand::thread_rng());
            Ok((changed, SessionResponse::from(&*session)))
        })
        .await?;

    tracing::info!(session = %id, mode = %mode, changed = changed, "Palette regenerated");
    Ok(Json(response))
}

/// Toggle the lock on one color
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/colors/{index}/lock",
    responses(
        (status = 200, description = "Lock toggled", body = SessionResponse),
        (status = 400, description = "Index out of range"),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session ID"),
        ("index" = usize, Path, description = "Zero-based color index"),
    ),
    tag = "Sessions"
)]
pub async fn handle_toggle_lock(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .update(&SessionId::new(id), |session| {
            session.toggle_lock(index)?;
            Ok(SessionResponse::from(&*session))
        })
        .await?;
    Ok(Json(response))
}

/// Replace or fine-tune one color
///
/// Send `hex` to replace the color, or any of `h`, `s`, `l` to override
/// those components. Does not record history.
#[utoipa::path(
    put,
    path = "/api/sessions/{id}/colors/{index}",
    request_body = UpdateColorRequest,
    responses(
        (status = 200, description = "Color updated", body = SessionResponse),
        (status = 400, description = "Invalid color or index"),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session ID"),
        ("index" = usize, Path, description = "Zero-based color index"),
    ),
    tag = "Sessions"
)]
pub async fn handle_update_color(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
    JsonExtractor(request): JsonExtractor<UpdateColorRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let has_hsl = request.h.is_some() || request.s.is_some() || request.l.is_some();
    let hex: Option<Color> = match (request.hex.as_deref(), has_hsl) {
        (Some(hex), false) => Some(hex.parse()?),
        (None, true) => None,
        _ => {
            return Err(ApiError::BadRequest(
                "provide either 'hex' or HSL components".to_string(),
            ))
        }
    };

    let response = state
        .sessions
        .update(&SessionId::new(id), |session| {
            match hex {
                Some(color) => session.set_color(index, color)?,
                None => {
                    session.adjust_hsl(index, request.h, request.s, request.l)?;
                }
            }
            Ok(SessionResponse::from(&*session))
        })
        .await?;
    Ok(Json(response))
}

/// Move a color to a new position
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/reorder",
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Color moved", body = SessionResponse),
        (status = 400, description = "Index out of range or source locked"),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_reorder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonExtractor(request): JsonExtractor<ReorderRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .update(&SessionId::new(id), |session| {
            session.reorder(request.from, request.to)?;
            Ok(SessionResponse::from(&*session))
        })
        .await?;
    Ok(Json(response))
}

/// Grow or shrink the palette
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/resize",
    request_body = ResizeRequest,
    responses(
        (status = 200, description = "Palette resized", body = SessionResponse),
        (status = 400, description = "Size out of range"),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_resize(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonExtractor(request): JsonExtractor<ResizeRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .update(&SessionId::new(id), |session| {
            session.resize(request.size, &mut rand::thread_rng())?;
            Ok(SessionResponse::from(&*session))
        })
        .await?;
    Ok(Json(response))
}

/// Undo the last structural change
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/undo",
    responses(
        (status = 200, description = "Previous palette restored", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Nothing to undo"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_undo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .update(&SessionId::new(id), |session| {
            session.undo()?;
            Ok(SessionResponse::from(&*session))
        })
        .await?;
    Ok(Json(response))
}

/// List history snapshots
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/history",
    responses(
        (status = 200, description = "History, oldest first", body = HistoryResponse),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let session = find_session(&state, &id).await?;
    Ok(Json(HistoryResponse {
        entries: session.history().cloned().collect(),
        can_undo: session.can_undo(),
    }))
}

/// Restore a history snapshot as a new entry
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/history/{n}/restore",
    responses(
        (status = 200, description = "Snapshot restored", body = SessionResponse),
        (status = 404, description = "Session or snapshot not found"),
    ),
    params(
        ("id" = String, Path, description = "Session ID"),
        ("n" = usize, Path, description = "Zero-based snapshot index, oldest first"),
    ),
    tag = "Sessions"
)]
pub async fn handle_restore(
    State(state): State<AppState>,
    Path((id, n)): Path<(String, usize)>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .update(&SessionId::new(id), |session| {
            session.restore(n)?;
            Ok(SessionResponse::from(&*session))
        })
        .await?;
    Ok(Json(response))
}

/// Replace the palette with colors extracted from an image
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/import/image",
    request_body = ImageRequest,
    responses(
        (status = 200, description = "Palette replaced", body = SessionResponse),
        (status = 400, description = "Missing or conflicting image source"),
        (status = 404, description = "Session not found"),
        (status = 422, description = "Image could not be decoded or has no opaque pixels"),
        (status = 502, description = "Image URL could not be fetched"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_import_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonExtractor(request): JsonExtractor<ImageRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let id = SessionId::new(id);
    // Fail fast before doing any network or decode work
    find_session(&state, id.as_str()).await?;

    let source = request.into_source()?;
    let colors = state.image_loader.extract(&source).await?;

    let response = state
        .sessions
        .update(&id, |session| {
            session.import_colors(&colors)?;
            Ok(SessionResponse::from(&*session))
        })
        .await?;

    tracing::info!(session = %id, colors = colors.len(), "Imported palette from image");
    Ok(Json(response))
}

/// Replace the palette with an AI suggestion
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/import/ai",
    request_body = AiPalette,
    responses(
        (status = 200, description = "Palette replaced", body = SessionResponse),
        (status = 400, description = "Invalid hex value in palette"),
        (status = 404, description = "Session not found"),
        (status = 422, description = "Palette has no colors"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_import_ai(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonExtractor(palette): JsonExtractor<AiPalette>,
) -> Result<Json<SessionResponse>, ApiError> {
    let id = SessionId::new(id);
    let response = state
        .sessions
        .update(&id, |session| {
            session.import_ai(palette)?;
            Ok(SessionResponse::from(&*session))
        })
        .await?;

    tracing::info!(session = %id, name = ?response.palette_name, "Imported AI palette");
    Ok(Json(response))
}

/// Perceptual summary of the palette
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/analytics",
    responses(
        (status = 200, description = "Palette analytics", body = AnalyticsResponse),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_analytics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let session = find_session(&state, &id).await?;
    let summary = session.summary();

    let colors = session
        .colors()
        .iter()
        .zip(&summary.entries)
        .map(|(slot, entry)| ColorAnalytics {
            hex: entry.color.to_hex(),
            name: slot.name.clone(),
            luminance: entry.luminance,
            text_color: entry.text_tone.color().to_hex(),
        })
        .collect();

    Ok(Json(AnalyticsResponse {
        colors,
        average_luminance: summary.average_luminance,
        min_luminance: summary.min_luminance,
        max_luminance: summary.max_luminance,
        luminance_spread: summary.luminance_spread(),
    }))
}

/// Export the palette as CSS custom properties
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/export/css",
    responses(
        (status = 200, description = "CSS stylesheet", body = String, content_type = "text/css"),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session ID")),
    tag = "Sessions"
)]
pub async fn handle_export_css(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = find_session(&state, &id).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        css_variables(session.colors()),
    ))
}

async fn find_session(state: &AppState, id: &str) -> Result<PaletteSession, ApiError> {
    state
        .sessions
        .find_by_id(&SessionId::new(id))
        .await?
        .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))
}
