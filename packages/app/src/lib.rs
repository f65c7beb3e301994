#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Page load orchestration: read the template, fetch everything, patch it.

pub mod operations;
pub mod server;

use std::fmt::Display;

use chrono::TimeZone;
use profilesite_config::Config;
use profilesite_github::{GitHubClient, ProfileSource};
use profilesite_page::{ContainerUpdate, Document};
use profilesite_site::{INDEX_FILE, LoadError, Site};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to load page template: {0}")]
    Template(#[from] LoadError),
}

/// Everything a page load needs besides the template itself.
pub struct ProfileApp {
    site: Site,
    client: GitHubClient,
    fallback_token: Option<String>,
}

impl ProfileApp {
    #[must_use]
    pub const fn new(site: Site, client: GitHubClient) -> Self {
        Self {
            site,
            client,
            fallback_token: None,
        }
    }

    /// Token used when the page carries no `gh-token` meta tag.
    #[must_use]
    pub fn with_fallback_token(mut self, token: Option<String>) -> Self {
        self.fallback_token = token.filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub const fn site(&self) -> &Site {
        &self.site
    }

    /// Perform one page load and return the patched document.
    ///
    /// # Errors
    ///
    /// * `Template` if `index.html` cannot be read. Every other failure is
    ///   absorbed into the affected container.
    pub async fn render(&self) -> Result<Document, RenderError> {
        let mut document = Document::new(self.site.read_text(INDEX_FILE).await?);

        let config =
            Config::from_document(&document).with_fallback_token(self.fallback_token.clone());
        log::debug!("Rendering profile with {config:?}");

        let client = self.client.clone().with_token(config.token.clone());
        let updates = collect_updates(&self.site, &client, &config, &chrono::Local).await;

        let applied = document.apply_all(updates);
        log::debug!("Applied {applied} container updates");

        Ok(document)
    }
}

/// Run the five page operations concurrently and gather their updates.
///
/// Updates come back in a fixed order, but the operations themselves finish
/// in whatever order the network allows. Each one owns disjoint containers.
pub async fn collect_updates<Tz>(
    site: &Site,
    source: &dyn ProfileSource,
    config: &Config,
    tz: &Tz,
) -> Vec<ContainerUpdate>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (projects, previous, profile, activity, repos) = tokio::join!(
        operations::load_projects(site),
        operations::load_previous(site),
        operations::fetch_profile(source, config),
        operations::fetch_activity(source, config, tz),
        operations::fetch_repos(source, config),
    );

    let mut updates = vec![projects, previous];
    updates.extend(profile);
    updates.push(activity);
    updates.push(repos);
    updates
}
