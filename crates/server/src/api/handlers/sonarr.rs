use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::services::downloads::{start_season_download, DownloadOutcome};
use crate::state::AppState;

/// Canned root folder. Jellyseerr probes this to accept the connection.
#[utoipa::path(
    get,
    path = "/api/v3/rootfolder",
    tag = "sonarr",
    responses((status = 200, description = "Mock root folder list"))
)]
pub async fn root_folder() -> Json<Value> {
    Json(json!([{"path": "/downloads", "id": 1}]))
}

/// Canned quality profile. Jellyseerr probes this to accept the connection.
#[utoipa::path(
    get,
    path = "/api/v3/qualityprofile",
    tag = "sonarr",
    responses((status = 200, description = "Mock quality profile list"))
)]
pub async fn quality_profile() -> Json<Value> {
    Json(json!([{"name": "Any", "id": 1}]))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SonarrSeason {
    pub season_number: u32,
    pub monitored: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SonarrAddOptions {
    pub search_for_missing_episodes: bool,
}

/// "Add series" payload in Sonarr's shape.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SonarrSeries {
    pub title: String,
    pub seasons: Vec<SonarrSeason>,
    pub add_options: SonarrAddOptions,
}

impl SonarrSeries {
    /// Season numbers flagged for download.
    fn monitored_seasons(&self) -> Vec<u32> {
        self.seasons
            .iter()
            .filter(|season| season.monitored)
            .map(|season| season.season_number)
            .collect()
    }
}

/// Sonarr-compatible "add series" endpoint, the path Jellyseerr uses to
/// hand over an approved request.
///
/// Jellyseerr also sends probe requests for series it does not want
/// downloaded yet; those arrive with `searchForMissingEpisodes` unset
/// and are acknowledged as ignored.
#[utoipa::path(
    post,
    path = "/api/v3/series",
    tag = "sonarr",
    request_body = SonarrSeries,
    responses(
        (status = 200, description = "Request processed or ignored"),
        (status = 401, description = "Invalid or missing API key"),
        (status = 404, description = "Anime not found on the downloader"),
        (status = 502, description = "Downloader unavailable")
    )
)]
pub async fn add_series(
    State(state): State<AppState>,
    Json(payload): Json<SonarrSeries>,
) -> AppResult<Json<Value>> {
    if !payload.add_options.search_for_missing_episodes {
        tracing::info!(
            "Ignoring request for '{}' because searchForMissingEpisodes is false",
            payload.title
        );
        return Ok(Json(json!({
            "status": "ignored",
            "reason": "Not a monitored request.",
        })));
    }

    let seasons = payload.monitored_seasons();
    if seasons.is_empty() {
        return Ok(Json(json!({
            "status": "ignored",
            "reason": "No seasons are monitored for download.",
        })));
    }

    let client = state.downloader_client()?;
    let title = &payload.title;

    match start_season_download(&client, title, &seasons).await? {
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
