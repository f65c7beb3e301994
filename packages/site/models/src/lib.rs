#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use serde::{Deserialize, Serialize};

/// An entry of `projects.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub title: String,
    pub link: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// An entry of `previous.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousWorkEntry {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub when: Option<String>,
}
