use thiserror::Error;

/// Errors produced by the AniWorld-Downloader client.
///
/// `Auth` is a credential or session failure; repeating the same call
/// without new credentials will not help. Everything else is a problem
/// between the bridge and the downloader (unexpected status, transport
/// failure, undecodable body).
#[derive(Debug, Error)]
pub enum AniworldError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("downloader API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    #[error("failed to communicate with the downloader at {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode downloader response: {0}")]
    Json(#[from] serde_json::Error),
}

impl AniworldError {
    /// Terminal failure of the re-login cycle.
    pub(crate) fn check_credentials() -> Self {
        Self::Auth("authentication failed, please check credentials".into())
    }

    /// Whether this is a credential/session failure rather than a
    /// transport or protocol one.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
