use reqwest::Method;
use serde_json::Value;

use crate::client::AniworldClient;
use crate::models::DownloadRequest;

/// Language variant requested for every download.
pub const DOWNLOAD_LANGUAGE: &str = "German Dub";
/// Hosting provider requested for every download.
pub const DOWNLOAD_PROVIDER: &str = "VOE";

impl AniworldClient {
    /// Start a download for a list of episode locators.
    /// POST /api/download
    ///
    /// The confirmation payload is downloader-specific and passed
    /// through untouched.
    pub async fn start_download(
        &self,
        episode_urls: &[String],
        anime_title: &str,
    ) -> crate::Result<Value> {
        tracing::info!(
            "Starting download for {} episodes of '{}'",
            episode_urls.len(),
            anime_title
        );
        let request = DownloadRequest {
            episode_urls,
            anime_title,
            language: DOWNLOAD_LANGUAGE,
            provider: DOWNLOAD_PROVIDER,
        };
        self.request(Method::POST, "/api/download", &request).await
    }
}
