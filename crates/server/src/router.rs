use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::api::auth::verify_api_key;
use crate::api::handlers;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/webhook/jellyseerr", post(handlers::jellyseerr_webhook))
        .route("/api/v3/rootfolder", get(handlers::root_folder))
        .route("/api/v3/qualityprofile", get(handlers::quality_profile))
        .route("/api/v3/series", post(handlers::add_series))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            verify_api_key,
        ));

    Router::new()
        .route("/", get(root))
        .route("/api-docs/openapi.json", get(openapi_spec))
        .merge(protected)
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Jellyseerr to AniWorld-Downloader Bridge is running!"
    }))
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
