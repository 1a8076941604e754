use reqwest::Method;

use crate::client::AniworldClient;
use crate::models::{Episode, EpisodesRequest};

impl AniworldClient {
    /// List all episodes of a series.
    /// POST /api/episodes
    pub async fn get_episodes(&self, series_url: &str) -> crate::Result<Vec<Episode>> {
        tracing::info!("Fetching episodes for series: {}", series_url);
        let request = EpisodesRequest { series_url };
        self.request(Method::POST, "/api/episodes", &request).await
    }
}
