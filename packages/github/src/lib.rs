#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

mod client;
mod provider;

pub use client::{ACCEPT_V3, DEFAULT_BASE_URL, GitHubClient};
pub use provider::ProfileSource;

#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    #[error("GitHub API error: {0}")]
    Remote(reqwest::StatusCode),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}
