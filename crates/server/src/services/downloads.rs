use aniworld::{AniworldClient, Episode};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Outcome of a season download request against the downloader.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// No episodes matched the requested seasons.
    NoEpisodesFound,
    /// Download accepted; the downloader's confirmation payload is
    /// passed through untouched.
    Started(Value),
}

/// Resolve a title to episode locators and start the download.
///
/// The first search result is treated as the best match; the downloader
/// offers no disambiguation signal beyond result order.
pub async fn start_season_download(
    client: &AniworldClient,
    title: &str,
    seasons: &[u32],
) -> AppResult<DownloadOutcome> {
    tracing::info!("Processing request for '{}', seasons: {:?}", title, seasons);

    let results = client.search_anime(title).await?;
    let Some(best_match) = results.first() else {
        tracing::warn!("Anime '{}' not found on the downloader", title);
        return Err(AppError::not_found(format!("Anime '{}' not found.", title)));
    };

    let series_url = best_match
        .series_url
        .as_deref()
        .ok_or_else(|| AppError::upstream("Search result did not contain a series URL."))?;

    let episodes = client.get_episodes(series_url).await?;
    let episode_urls = filter_episode_urls(episodes, seasons);

    if episode_urls.is_empty() {
        tracing::warn!("No episodes found for seasons {:?} of '{}'", seasons, title);
        return Ok(DownloadOutcome::NoEpisodesFound);
    }

    tracing::info!(
        "Found {} episodes to download for '{}'",
        episode_urls.len(),
        title
    );
    let result = client.start_download(&episode_urls, title).await?;

    Ok(DownloadOutcome::Started(result))
}

/// Keep episodes in a requested season that actually carry a locator.
fn filter_episode_urls(episodes: Vec<Episode>, seasons: &[u32]) -> Vec<String> {
    episodes
        .into_iter()
        .filter(|episode| episode.season.is_some_and(|season| seasons.contains(&season)))
        .filter_map(|episode| episode.episode_url)
        .collect()
}
