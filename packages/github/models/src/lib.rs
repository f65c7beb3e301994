#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod event;
mod nullable;
pub mod repo;
pub mod user;

pub use event::{EventDetail, EventKind, GitHubEvent};
pub use repo::GitHubRepo;
pub use user::GitHubUser;
