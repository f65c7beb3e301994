#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Same-origin access to the files that sit next to the profile page.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::de::DeserializeOwned;

pub const INDEX_FILE: &str = "index.html";
pub const PROJECTS_FILE: &str = "projects.json";
pub const PREVIOUS_FILE: &str = "previous.json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid site path: {0}")]
    InvalidPath(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Where the page and its sibling files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteRoot {
    Dir(PathBuf),
    Url(reqwest::Url),
}

impl FromStr for SiteRoot {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            // Without the trailing slash `join` would replace the last segment.
            let base = if s.ends_with('/') {
                s.to_string()
            } else {
                format!("{s}/")
            };
            let url =
                reqwest::Url::parse(&base).map_err(|_| LoadError::InvalidPath(s.to_string()))?;
            Ok(Self::Url(url))
        } else {
            Ok(Self::Dir(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for SiteRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dir(dir) => write!(f, "{}", dir.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

pub struct Site {
    root: SiteRoot,
    http_client: reqwest::Client,
}

impl Site {
    /// # Errors
    ///
    /// * If the `reqwest::Client` fails to build
    pub fn new(root: SiteRoot) -> Result<Self, LoadError> {
        let http_client = reqwest::Client::builder()
            .user_agent("profilesite")
            .build()?;
        Ok(Self { root, http_client })
    }

    #[must_use]
    pub const fn root(&self) -> &SiteRoot {
        &self.root
    }

    /// Fetch a file relative to the site root.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the file is missing or the server answers with a non-2xx status
    /// * `InvalidPath` if `path` is absolute or climbs out of the root
    /// * `Io`/`Http` for any other read failure
    pub async fn read_text(&self, path: &str) -> Result<String, LoadError> {
        let relative = relative_path(path)?;

        match &self.root {
            SiteRoot::Dir(dir) => {
                let full = dir.join(relative);
                log::debug!("Reading {}", full.display());
                tokio::fs::read_to_string(&full).await.map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        LoadError::NotFound(path.to_string())
                    } else {
                        LoadError::Io {
                            path: path.to_string(),
                            source: e,
                        }
                    }
                })
            }
            SiteRoot::Url(base) => {
                let url = base
                    .join(path)
                    .map_err(|_| LoadError::InvalidPath(path.to_string()))?;
                log::debug!("GET {url}");
                let response = self.http_client.get(url).send().await?;

                if !response.status().is_success() {
                    log::debug!("{path}: {}", response.status());
                    return Err(LoadError::NotFound(path.to_string()));
                }

                Ok(response.text().await?)
            }
        }
    }

    /// Load a JSON list relative to the site root. A `null` document is `None`.
    ///
    /// The entries are not validated beyond their serde shape.
    ///
    /// # Errors
    ///
    /// * Any error of [`Site::read_text`]
    /// * `Parse` if the body is not the expected JSON
    pub async fn load_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<Vec<T>>, LoadError> {
        let body = self.read_text(path).await?;
        serde_json::from_str(&body).map_err(|source| LoadError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

fn relative_path(path: &str) -> Result<&Path, LoadError> {
    let relative = Path::new(path);
    if relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
    {
        Ok(relative)
    } else {
        Err(LoadError::InvalidPath(path.to_string()))
    }
}
