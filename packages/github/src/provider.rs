use profilesite_github_models::{GitHubEvent, GitHubRepo, GitHubUser};

use crate::GitHubError;

/// Read-only view of a hosting platform account.
#[async_trait::async_trait]
pub trait ProfileSource: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<GitHubUser, GitHubError>;

    /// Most recent public events, newest first.
    async fn list_events(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<GitHubEvent>, GitHubError>;

    /// Public repositories, most recently updated first.
    async fn list_repos(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<GitHubRepo>, GitHubError>;

    fn source_name(&self) -> &'static str;
}
