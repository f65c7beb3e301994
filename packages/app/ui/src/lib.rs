#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pure renderers from fetched data to HTML fragments.
//!
//! Every function here is side-effect free. Text is escaped by `maud`; the
//! literal fallbacks are what a container shows when there is nothing to list.

pub mod activity;
pub mod profile;
pub mod projects;
pub mod repos;

pub use activity::{ACTIVITY_ERROR, NO_ACTIVITY, render_activity};
pub use profile::{SocialLink, render_social_links, social_links};
pub use projects::{render_list_unavailable, render_previous, render_projects};
pub use repos::{render_repos, render_repos_error};
