use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::services::downloads::{start_season_download, DownloadOutcome};
use crate::state::AppState;

/// Media block of a Jellyseerr notification.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookMedia {
    pub name: String,
}

/// Request block carrying the seasons the user asked for.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookRequest {
    #[serde(default)]
    pub seasons: Vec<u32>,
}

/// Jellyseerr webhook notification payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct JellyseerrWebhook {
    pub notification_type: String,
    pub media: WebhookMedia,
    pub media_type: String,
    #[serde(default)]
    pub request: Option<WebhookRequest>,
}

impl JellyseerrWebhook {
    /// Whether this notification is an approved anime request.
    fn is_approved_anime(&self) -> bool {
        self.notification_type == "MEDIA_APPROVED" && self.media_type == "anime"
    }
}

/// Webhook receiver for Jellyseerr notifications.
///
/// Only approved anime requests with at least one season are acted on;
/// everything else is acknowledged as ignored without touching the
/// downloader.
#[utoipa::path(
    post,
    path = "/webhook/jellyseerr",
    tag = "webhook",
    request_body = JellyseerrWebhook,
    responses(
        (status = 200, description = "Notification processed or ignored"),
        (status = 401, description = "Invalid or missing API key"),
        (status = 404, description = "Anime not found on the downloader"),
        (status = 502, description = "Downloader unavailable")
    )
)]
pub async fn jellyseerr_webhook(
    State(state): State<AppState>,
    Json(payload): Json<JellyseerrWebhook>,
) -> AppResult<Json<Value>> {
    tracing::info!(
        "Received webhook notification: {} for media type: {}",
        payload.notification_type,
        payload.media_type
    );

    if !payload.is_approved_anime() {
        return Ok(Json(json!({
            "status": "ignored",
            "reason": "Notification is not for an approved anime request.",
        })));
    }

    let seasons = match payload.request.as_ref().map(|r| r.seasons.as_slice()) {
        Some(seasons) if !seasons.is_empty() => seasons,
        _ => {
            return Ok(Json(json!({
                "status": "ignored",
                "reason": "No seasons requested in the payload.",
            })))
        }
    };

    let client = state.downloader_client()?;
    let title = &payload.media.name;

    match start_season_download(&client, title, seasons).await? {
        DownloadOutcome::NoEpisodesFound => Ok(Json(json!({
            "status": "no_episodes_found",
            "detail": format!("No episodes found for the requested seasons of '{}'.", title),
        }))),
        DownloadOutcome::Started(result) => Ok(Json(json!({
            "status": "download_started",
            "result": result,
        }))),
    }
}
