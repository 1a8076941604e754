mod auth;
mod client;
mod download;
mod episodes;
mod error;
pub mod models;
mod search;

pub use client::AniworldClient;
pub use download::{DOWNLOAD_LANGUAGE, DOWNLOAD_PROVIDER};
pub use error::AniworldError;
pub use models::{Episode, SearchResult};

pub type Result<T> = std::result::Result<T, AniworldError>;
