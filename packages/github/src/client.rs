use std::time::Duration;

use profilesite_github_models::{GitHubEvent, GitHubRepo, GitHubUser};
use serde::de::DeserializeOwned;

use crate::{GitHubError, ProfileSource};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

#[derive(Clone)]
pub struct GitHubClient {
    http_client: reqwest::Client,
    auth_token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    /// Create a new client without authentication.
    ///
    /// # Errors
    ///
    /// * If the `reqwest::Client` fails to build
    pub fn new() -> Result<Self, GitHubError> {
        Self::with_timeout(None)
    }

    /// Create a new client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// * If the `reqwest::Client` fails to build
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, GitHubError> {
        let mut builder = reqwest::Client::builder().user_agent("profilesite");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            auth_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// The token is sent verbatim; an empty token means no authentication.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token.filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.http_client.get(url);

        match &self.auth_token {
            Some(token) => request.header("Authorization", format!("token {token}")),
            None => request.header("Accept", ACCEPT_V3),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GitHubError> {
        log::debug!("GET {url} {query:?}");
        let response = self.request(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            log::error!("GitHub API error: {}", response.text().await?);
            return Err(GitHubError::Remote(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl ProfileSource for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser, GitHubError> {
        let url = format!("{}/users/{}", self.base_url, username);
        self.get_json(&url, &[]).await
    }

    async fn list_events(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<GitHubEvent>, GitHubError> {
        let url = format!("{}/users/{}/events", self.base_url, username);
        let per_page = per_page.to_string();

        let events: Option<Vec<GitHubEvent>> =
            self.get_json(&url, &[("per_page", per_page.as_str())]).await?;

        Ok(events.unwrap_or_default())
    }

    async fn list_repos(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<GitHubRepo>, GitHubError> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        let per_page = per_page.to_string();

        let repos: Option<Vec<GitHubRepo>> = self
            .get_json(
                &url,
                &[("sort", "updated"), ("per_page", per_page.as_str())],
            )
            .await?;

        Ok(repos.unwrap_or_default())
    }

    fn source_name(&self) -> &'static str {
        "github"
    }
}
