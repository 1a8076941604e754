use aniworld::AniworldError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Boundary errors the bridge reports to its callers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    /// A required configuration value is missing on the server.
    #[error("{0}")]
    Misconfigured(String),

    /// The downloader rejected our credentials or session.
    #[error("{0}")]
    UpstreamAuth(String),

    /// The downloader is unreachable or misbehaving.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self::Misconfigured(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<AniworldError> for AppError {
    fn from(error: AniworldError) -> Self {
        if error.is_auth() {
            Self::UpstreamAuth(error.to_string())
        } else {
            Self::Upstream(error.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Self::Misconfigured(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server_misconfigured"),
            Self::UpstreamAuth(_) => (StatusCode::BAD_GATEWAY, "downloader_auth_failed"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "downloader_unreachable"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        match &self {
            Self::Internal(detail) => tracing::error!("Internal error: {}", detail),
            Self::Misconfigured(detail) => tracing::error!("Misconfiguration: {}", detail),
            Self::UpstreamAuth(detail) | Self::Upstream(detail) => {
                tracing::error!("Downloader communication failed: {}", detail)
            }
            _ => {}
        }

        let body = Json(json!({"error": code, "detail": self.to_string()}));
        (status, body).into_response()
    }
}
