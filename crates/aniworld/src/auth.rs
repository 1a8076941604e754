use reqwest::header::{HeaderMap, SET_COOKIE};

use crate::client::{AniworldClient, LOGIN_TIMEOUT, SESSION_COOKIE};
use crate::error::AniworldError;

impl AniworldClient {
    /// Log in to the downloader and store the session token.
    /// POST /login
    ///
    /// Succeeds only when the response status is 2xx and the response
    /// carries a `session_token` cookie.
    pub async fn login(&self) -> crate::Result<()> {
        let url = self.url("/login");
        let (username, password) = self.credentials();
        let params = [("username", username), ("password", password)];

        tracing::info!("Attempting to log in to {}", self.base_url());

        let response = self
            .client()
            .post(&url)
            .timeout(LOGIN_TIMEOUT)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AniworldError::Auth(format!("could not connect to the downloader at {}: {}", url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Login failed with status code {}", status.as_u16());
            return Err(AniworldError::Auth(format!(
                "login failed with status {}",
                status.as_u16()
            )));
        }

        let token = extract_session_token(response.headers()).ok_or_else(|| {
            AniworldError::Auth("login response did not contain a session_token cookie".into())
        })?;

        self.set_token(token).await;
        tracing::info!("Login successful, session token acquired");
        Ok(())
    }
}

/// Pull the session token out of the Set-Cookie headers.
/// Cookies arrive as `session_token=xxx; Path=/; ...`.
fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            cookie
                .split(';')
                .next()
                .map(str::trim)
                .and_then(|pair| pair.strip_prefix(&format!("{}=", SESSION_COOKIE)))
                .map(str::to_owned)
        })
}
