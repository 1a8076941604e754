use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Verify the shared secret before any protected handler runs.
///
/// A missing key on the server side is a misconfiguration, reported
/// distinctly from a caller sending a wrong key.
pub async fn verify_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.config.api_key.as_deref() else {
        tracing::error!("BRIDGE_API_KEY is not configured");
        return Err(AppError::misconfigured(
            "API key is not configured on the server.",
        ));
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if key == expected => Ok(next.run(request).await),
        _ => Err(AppError::unauthorized("Invalid or missing API key.")),
    }
}
