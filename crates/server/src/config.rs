use std::env;

/// Runtime configuration, read from the environment at startup.
///
/// All fields stay optional at load time. Handlers report a server
/// misconfiguration for the request that needed the missing value,
/// instead of refusing to boot.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of the AniWorld-Downloader instance.
    pub downloader_url: Option<String>,
    pub downloader_user: Option<String>,
    pub downloader_pass: Option<String>,
    /// Shared secret expected in the X-Api-Key header.
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            downloader_url: read("DOWNLOADER_URL"),
            downloader_user: read("DOWNLOADER_USER"),
            downloader_pass: read("DOWNLOADER_PASS"),
            api_key: read("BRIDGE_API_KEY"),
        }
    }
}

fn read(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
