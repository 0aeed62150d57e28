use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use swatch_engine::{ParseColorError, UnknownModeError};
use thiserror::Error;

use crate::services::{LoadError, SessionError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color format: {0}")]
    InvalidColor(#[from] ParseColorError),

    #[error("{0}")]
    UnknownMode(#[from] UnknownModeError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Load(#[from] LoadError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidColor(_) | ApiError::UnknownMode(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Session(e) => match e {
                SessionError::NothingToUndo => StatusCode::CONFLICT,
                SessionError::HistoryNotFound { .. } => StatusCode::NOT_FOUND,
                SessionError::EmptyImport => StatusCode::UNPROCESSABLE_ENTITY,
                SessionError::IndexOutOfRange { .. }
                | SessionError::SizeOutOfRange { .. }
                | SessionError::Locked(_)
                | SessionError::InvalidColor(_) => StatusCode::BAD_REQUEST,
            },
            ApiError::Load(e) => match e {
                LoadError::InvalidUrl(_) | LoadError::PrivateHost(_) | LoadError::Base64(_) => {
                    StatusCode::BAD_REQUEST
                }
                LoadError::Fetch(_) | LoadError::UpstreamStatus(_) | LoadError::Resolve(_) => {
                    StatusCode::BAD_GATEWAY
                }
                LoadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                LoadError::Io(_) | LoadError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
                LoadError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
