use serde::{Deserialize, Serialize};

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepo {
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub stargazers_count: u64,
    pub language: Option<String>,
}
