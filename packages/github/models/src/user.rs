use serde::{Deserialize, Serialize};

/// The subset of `GET /users/{username}` the profile header uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub login: String,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
}

impl GitHubUser {
    /// The profile's name, or `fallback` when the account has none set.
    #[must_use]
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_empty(self.name.as_deref()).unwrap_or(fallback)
    }

    #[must_use]
    pub fn bio_text(&self) -> &str {
        self.bio.as_deref().unwrap_or_default()
    }

    /// The API reports an unset blog as `""`.
    #[must_use]
    pub fn blog_url(&self) -> Option<&str> {
        non_empty(self.blog.as_deref())
    }

    #[must_use]
    pub fn twitter_handle(&self) -> Option<&str> {
        non_empty(self.twitter_username.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
