use serde::{Deserialize, Serialize};

/// One candidate match from the downloader's search endpoint.
///
/// The downloader returns matches in relevance order; callers treat the
/// first entry as authoritative.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Locator of the matched series within the downloader.
    #[serde(default)]
    pub series_url: Option<String>,
    /// Title as known to the downloader.
    #[serde(default)]
    pub anime_title: Option<String>,
}

/// One episode of a series as listed by the downloader.
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    /// Season the episode belongs to.
    #[serde(default)]
    pub season: Option<u32>,
    /// Locator used to start a download of this episode.
    #[serde(default)]
    pub episode_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub anime_title: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct EpisodesRequest<'a> {
    pub series_url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct DownloadRequest<'a> {
    pub episode_urls: &'a [String],
    pub anime_title: &'a str,
    pub language: &'static str,
    pub provider: &'static str,
}
