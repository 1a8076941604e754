use reqwest::Method;

use crate::client::AniworldClient;
use crate::models::{SearchRequest, SearchResult};

impl AniworldClient {
    /// Search for an anime by title.
    /// POST /api/search
    pub async fn search_anime(&self, title: &str) -> crate::Result<Vec<SearchResult>> {
        tracing::info!("Searching for anime: '{}'", title);
        let request = SearchRequest { anime_title: title };
        self.request(Method::POST, "/api/search", &request).await
    }
}
