use std::sync::Arc;

use aniworld::AniworldClient;
use reqwest::Client;

use crate::config::Config;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http_client: Client::new(),
        }
    }

    /// Build a downloader client for one inbound request.
    ///
    /// Each request gets its own session so concurrent requests never
    /// race on session state; the reqwest client (and its connection
    /// pool) is shared.
    pub fn downloader_client(&self) -> Result<AniworldClient, AppError> {
        let (Some(url), Some(user), Some(pass)) = (
            self.config.downloader_url.as_deref(),
            self.config.downloader_user.as_deref(),
            self.config.downloader_pass.as_deref(),
        ) else {
            tracing::error!("Downloader environment variables are not set");
            return Err(AppError::misconfigured(
                "Server is not configured. Missing downloader credentials.",
            ));
        };

        Ok(AniworldClient::with_client(
            self.http_client.clone(),
            url,
            user,
            pass,
        ))
    }
}
