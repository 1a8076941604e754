use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{create_router, AppState, Config};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "secret";

fn app(downloader_url: Option<String>) -> Router {
    let config = Config {
        downloader_url,
        downloader_user: Some("user".into()),
        downloader_pass: Some("pass".into()),
        api_key: Some(API_KEY.into()),
    };
    create_router(AppState::new(config))
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-api-key", API_KEY)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Backend stub that accepts a login and serves the happy path for one
/// series with episodes across two seasons.
async fn mock_backend() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session_token=tok; Path=/")
                .set_body_json(json!({"message": "ok"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"anime_title": "One-Punch Man", "series_url": "/anime/stream/one-punch-man"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/episodes"))
        .and(body_json(
            json!({"series_url": "/anime/stream/one-punch-man"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"season": 1, "episode_url": "/ep/s1e1"},
            {"season": 1, "episode_url": "/ep/s1e2"},
            {"season": 2, "episode_url": "/ep/s2e1"},
        ])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/download"))
        .and(body_json(json!({
            "episode_urls": ["/ep/s1e1", "/ep/s1e2"],
            "anime_title": "One-Punch Man",
            "language": "German Dub",
            "provider": "VOE",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"queued": 2})))
        .mount(&server)
        .await;

    server
}

fn approved_webhook() -> Value {
    json!({
        "notification_type": "MEDIA_APPROVED",
        "media": {"name": "One-Punch Man"},
        "media_type": "anime",
        "request": {"seasons": [1]},
    })
}

#[tokio::test]
async fn root_is_public() {
    let response = app(None)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn missing_api_key_is_rejected() {
    let response = app(None)
        .oneshot(
            Request::builder()
                .uri("/api/v3/rootfolder")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn wrong_api_key_is_rejected() {
    let response = app(None)
        .oneshot(
            Request::builder()
                .uri("/api/v3/rootfolder")
                .header("x-api-key", "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unconfigured_api_key_is_a_server_error() {
    let config = Config {
        api_key: None,
        ..Config::default()
    };
    let app = create_router(AppState::new(config));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v3/rootfolder")
                .header("x-api-key", "anything")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "server_misconfigured");
}

#[tokio::test]
async fn rootfolder_and_qualityprofile_are_canned() {
    for (uri, expected) in [
        ("/api/v3/rootfolder", json!([{"path": "/downloads", "id": 1}])),
        ("/api/v3/qualityprofile", json!([{"name": "Any", "id": 1}])),
    ] {
        let response = app(None)
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("x-api-key", API_KEY)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, expected);
    }
}

#[tokio::test]
async fn webhook_ignores_other_notification_types() {
    // No downloader configured: reaching for it would fail loudly.
    let payload = json!({
        "notification_type": "MEDIA_PENDING",
        "media": {"name": "One-Punch Man"},
        "media_type": "anime",
        "request": {"seasons": [1]},
    });

    let response = app(None)
        .oneshot(post_json("/webhook/jellyseerr", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ignored");
}

#[tokio::test]
async fn webhook_ignores_payload_without_seasons() {
    let payload = json!({
        "notification_type": "MEDIA_APPROVED",
        "media": {"name": "One-Punch Man"},
        "media_type": "anime",
    });

    let response = app(None)
        .oneshot(post_json("/webhook/jellyseerr", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["reason"], "No seasons requested in the payload.");
}

#[tokio::test]
async fn webhook_happy_path_starts_download() {
    let backend = mock_backend().await;

    let response = app(Some(backend.uri()))
        .oneshot(post_json("/webhook/jellyseerr", &approved_webhook()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "download_started");
    assert_eq!(body["result"], json!({"queued": 2}));
}

#[tokio::test]
async fn webhook_unknown_title_is_not_found() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "session_token=tok; Path=/"),
        )
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&backend)
        .await;

    let response = app(Some(backend.uri()))
        .oneshot(post_json("/webhook/jellyseerr", &approved_webhook()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn webhook_reports_no_episodes_for_unmatched_season() {
    let backend = mock_backend().await;

    let payload = json!({
        "notification_type": "MEDIA_APPROVED",
        "media": {"name": "One-Punch Man"},
        "media_type": "anime",
        "request": {"seasons": [9]},
    });

    let response = app(Some(backend.uri()))
        .oneshot(post_json("/webhook/jellyseerr", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "no_episodes_found");
}

#[tokio::test]
async fn missing_downloader_config_is_a_server_error() {
    let response = app(None)
        .oneshot(post_json("/webhook/jellyseerr", &approved_webhook()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "server_misconfigured");
}

#[tokio::test]
async fn backend_http_error_maps_to_bad_gateway() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "session_token=tok; Path=/"),
        )
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;

    let response = app(Some(backend.uri()))
        .oneshot(post_json("/webhook/jellyseerr", &approved_webhook()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    assert_eq!(body["error"], "downloader_unreachable");
}

#[tokio::test]
async fn backend_auth_failure_maps_to_distinct_bad_gateway() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&backend)
        .await;

    let response = app(Some(backend.uri()))
        .oneshot(post_json("/webhook/jellyseerr", &approved_webhook()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    assert_eq!(body["error"], "downloader_auth_failed");
}

#[tokio::test]
async fn series_probe_without_search_flag_is_ignored() {
    let payload = json!({
        "title": "One-Punch Man",
        "seasons": [{"seasonNumber": 1, "monitored": true}],
        "addOptions": {"searchForMissingEpisodes": false},
    });

    let response = app(None)
        .oneshot(post_json("/api/v3/series", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["reason"], "Not a monitored request.");
}

#[tokio::test]
async fn series_without_monitored_seasons_is_ignored() {
    let payload = json!({
        "title": "One-Punch Man",
        "seasons": [{"seasonNumber": 1, "monitored": false}],
        "addOptions": {"searchForMissingEpisodes": true},
    });

    let response = app(None)
        .oneshot(post_json("/api/v3/series", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ignored");
}

#[tokio::test]
async fn series_happy_path_downloads_monitored_seasons() {
    let backend = mock_backend().await;

    let payload = json!({
        "title": "One-Punch Man",
        "seasons": [
            {"seasonNumber": 1, "monitored": true},
            {"seasonNumber": 2, "monitored": false},
        ],
        "addOptions": {"searchForMissingEpisodes": true},
    });

    let response = app(Some(backend.uri()))
        .oneshot(post_json("/api/v3/series", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "download_started");
    assert_eq!(body["result"], json!({"queued": 2}));
}

#[tokio::test]
async fn openapi_spec_is_served() {
    let response = app(None)
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["info"]["version"], "1.0.0");
}
