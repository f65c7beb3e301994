#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use std::fmt;

use profilesite_page::Document;

/// Username used when the page does not name one.
pub const DEFAULT_USERNAME: &str = "LunaTWolf";

pub const USERNAME_META: &str = "gh-username";
pub const TOKEN_META: &str = "gh-token";

/// Who the page is about, and how to authenticate against the API.
///
/// Built once at startup and handed to every fetch by reference.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub username: String,
    pub token: Option<String>,
}

impl Config {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: None,
        }
    }

    /// An empty token is the same as no token.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Use `token` only if no token is configured yet.
    #[must_use]
    pub fn with_fallback_token(self, token: Option<String>) -> Self {
        if self.token.is_some() {
            return self;
        }
        self.with_token(token)
    }

    /// Read `gh-username` and `gh-token` from the page's meta tags.
    ///
    /// Values are taken verbatim; nothing about the username or token format
    /// is checked.
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        let username = document
            .meta_content(USERNAME_META)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| {
                log::debug!("No {USERNAME_META} meta tag, using {DEFAULT_USERNAME}");
                DEFAULT_USERNAME.to_string()
            });

        Self::new(username).with_token(document.meta_content(TOKEN_META))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
