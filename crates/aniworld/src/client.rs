use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::AniworldError;

/// Cookie the downloader issues on login and expects on every API call.
pub(crate) const SESSION_COOKIE: &str = "session_token";

pub(crate) const LOGIN_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One re-login plus one retry of the original request, never more.
const MAX_LOGIN_ATTEMPTS: u8 = 2;

/// Client for the AniWorld-Downloader API.
///
/// Owns one session: absent until `login()` succeeds, discarded the
/// moment the downloader rejects it, recreated by a single re-login.
pub struct AniworldClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
    session: Mutex<Option<String>>,
}

impl AniworldClient {
    /// Create a client with its own HTTP connection pool.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_client(Client::new(), base_url, username, password)
    }

    /// Create a client sharing an existing reqwest Client.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            username: username.into(),
            password: password.into(),
            session: Mutex::new(None),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn credentials(&self) -> (&str, &str) {
        (&self.username, &self.password)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn token(&self) -> Option<String> {
        self.session.lock().await.clone()
    }

    pub(crate) async fn set_token(&self, token: String) {
        *self.session.lock().await = Some(token);
    }

    async fn clear_token(&self) {
        *self.session.lock().await = None;
    }

    /// Authenticated request primitive shared by all API operations.
    ///
    /// Logs in first when no session is held, attaches the session
    /// cookie, and on a 401 discards the stale session, re-logs-in and
    /// retries the original request exactly once. The attempt counter
    /// is local to the call chain, so the loop is bounded structurally.
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> crate::Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        let mut login_attempts: u8 = 0;

        if self.token().await.is_none() {
            self.login().await?;
        }

        loop {
            let mut request = self
                .client
                .request(method.clone(), &url)
                .timeout(REQUEST_TIMEOUT)
                .json(body);

            if let Some(token) = self.token().await {
                request = request.header(
                    reqwest::header::COOKIE,
                    format!("{}={}", SESSION_COOKIE, token),
                );
            }

            tracing::debug!("Sending {} request to {}", method, url);

            let response =
                request
                    .send()
                    .await
                    .map_err(|source| AniworldError::Transport {
                        url: url.clone(),
                        source,
                    })?;

            let status = response.status();

            if status == StatusCode::UNAUTHORIZED {
                // The stored token is known stale; drop it before anything else.
                self.clear_token().await;

                login_attempts += 1;
                if login_attempts >= MAX_LOGIN_ATTEMPTS {
                    tracing::error!("Re-login did not restore access, aborting");
                    return Err(AniworldError::check_credentials());
                }

                tracing::warn!("Received 401 from {}, attempting re-login", url);
                if let Err(e) = self.login().await {
                    tracing::error!("Re-login attempt failed: {}", e);
                    return Err(AniworldError::check_credentials());
                }

                // Retry the original request once with the fresh session.
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(AniworldError::Api {
                    status_code: status.as_u16(),
                    message,
                });
            }

            let text = response
                .text()
                .await
                .map_err(|source| AniworldError::Transport {
                    url: url.clone(),
                    source,
                })?;
            return Ok(serde_json::from_str(&text)?);
        }
    }
}
