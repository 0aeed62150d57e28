//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api;
use crate::models::{AiColor, AiPalette, AppConfig, ColorState, HistoryEntry};
use crate::services::{ImageLoader, InMemorySessions};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<InMemorySessions>,
    pub image_loader: Arc<ImageLoader>,
}

/// Create application state from configuration.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let image_loader = ImageLoader::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to create image loader: {e}"))?;

    let sessions = InMemorySessions::with_max_sessions(config.max_sessions);

    Ok(AppState {
        config: Arc::new(config),
        sessions: Arc::new(sessions),
        image_loader: Arc::new(image_loader),
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Stateless color endpoints
        .route("/api/colors/:hex", get(api::handle_inspect))
        .route("/api/harmony", post(api::handle_harmony))
        .route("/api/extract", post(api::handle_extract))
        // Palette sessions
        .route("/api/sessions", post(api::handle_create))
        .route(
            "/api/sessions/:id",
            get(api::handle_get).delete(api::handle_delete),
        )
        .route("/api/sessions/:id/generate", post(api::handle_generate))
        .route("/api/sessions/:id/colors/:index", put(api::handle_update_color))
        .route(
            "/api/sessions/:id/colors/:index/lock",
            post(api::handle_toggle_lock),
        )
        .route("/api/sessions/:id/reorder", post(api::handle_reorder))
        .route("/api/sessions/:id/resize", post(api::handle_resize))
        .route("/api/sessions/:id/undo", post(api::handle_undo))
        .route("/api/sessions/:id/history", get(api::handle_history))
        .route(
            "/api/sessions/:id/history/:n/restore",
            post(api::handle_restore),
        )
        .route(
            "/api/sessions/:id/import/image",
            post(api::handle_import_image),
        )
        .route("/api/sessions/:id/import/ai", post(api::handle_import_ai))
        .route("/api/sessions/:id/analytics", get(api::handle_analytics))
        .route("/api/sessions/:id/export/css", get(api::handle_export_css))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swatchbook API",
        description = "Color palette generation, extraction and editing",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_inspect,
        api::handle_harmony,
        api::handle_extract,
        api::handle_create,
        api::handle_get,
        api::handle_delete,
        api::handle_generate,
        api::handle_toggle_lock,
        api::handle_update_color,
        api::handle_reorder,
        api::handle_resize,
        api::handle_undo,
        api::handle_history,
        api::handle_restore,
        api::handle_import_image,
        api::handle_import_ai,
        api::handle_analytics,
        api::handle_export_css,
    ),
    components(schemas(
        api::ColorInfo,
        api::HslValue,
        api::HarmonyRequest,
        api::HarmonyResponse,
        api::ImageRequest,
        api::ExtractResponse,
        api::SessionResponse,
        api::CreateSessionRequest,
        api::GenerateRequest,
        api::UpdateColorRequest,
        api::ReorderRequest,
        api::ResizeRequest,
        api::HistoryResponse,
        api::AnalyticsResponse,
        api::ColorAnalytics,
        ColorState,
        HistoryEntry,
        AiPalette,
        AiColor,
    )),
    tags(
        (name = "Colors", description = "Stateless color inspection, harmony and extraction"),
        (name = "Sessions", description = "Editable palettes with locks and history")
    )
)]
pub struct ApiDoc;
