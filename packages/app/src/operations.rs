//! The five independent page operations.
//!
//! None of them returns an error: a failure is logged and turned into the
//! affected container's fallback.

use std::fmt::Display;

use chrono::TimeZone;
use profilesite_app_ui::{
    ACTIVITY_ERROR, render_activity, render_list_unavailable, render_previous, render_projects,
    render_repos, render_repos_error, render_social_links, social_links,
};
use profilesite_config::Config;
use profilesite_github::ProfileSource;
use profilesite_page::{ContainerUpdate, ids};
use profilesite_site::{PREVIOUS_FILE, PROJECTS_FILE, Site};
use profilesite_site_models::{PreviousWorkEntry, ProjectEntry};

pub const EVENTS_PER_PAGE: u32 = 20;
pub const REPOS_PER_PAGE: u32 = 8;

pub async fn load_projects(site: &Site) -> ContainerUpdate {
    let html = match site.load_list::<ProjectEntry>(PROJECTS_FILE).await {
        Ok(projects) => render_projects(projects.as_deref()),
        Err(e) => {
            log::warn!("Failed to load {PROJECTS_FILE}: {e}");
            render_list_unavailable("current projects", PROJECTS_FILE)
        }
    };

    ContainerUpdate::inner_html(ids::CURRENT_PROJECTS, html.into_string())
}

pub async fn load_previous(site: &Site) -> ContainerUpdate {
    let html = match site.load_list::<PreviousWorkEntry>(PREVIOUS_FILE).await {
        Ok(previous) => render_previous(previous.as_deref()),
        Err(e) => {
            log::warn!("Failed to load {PREVIOUS_FILE}: {e}");
            render_list_unavailable("previous work", PREVIOUS_FILE)
        }
    };

    ContainerUpdate::inner_html(ids::PREVIOUS_WORK, html.into_string())
}

/// Avatar, name, bio and social links. Nothing is updated if the user
/// lookup fails, so the template's placeholders stay in place.
pub async fn fetch_profile(source: &dyn ProfileSource, config: &Config) -> Vec<ContainerUpdate> {
    let user = match source.get_user(&config.username).await {
        Ok(user) => user,
        Err(e) => {
            log::warn!(
                "Failed to load {} profile for {}: {e}",
                source.source_name(),
                config.username
            );
            return vec![];
        }
    };

    let links = social_links(&config.username, &user);

    vec![
        ContainerUpdate::attribute(ids::AVATAR, "src", user.avatar_url.as_str()),
        ContainerUpdate::text(ids::NAME, user.display_name(&config.username)),
        ContainerUpdate::text(ids::BIO, user.bio_text()),
        ContainerUpdate::inner_html(ids::SOCIAL, render_social_links(&links).into_string()),
    ]
}

pub async fn fetch_activity<Tz>(
    source: &dyn ProfileSource,
    config: &Config,
    tz: &Tz,
) -> ContainerUpdate
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match source.list_events(&config.username, EVENTS_PER_PAGE).await {
        Ok(events) => {
            ContainerUpdate::inner_html(ids::ACTIVITY_LIST, render_activity(&events, tz).into_string())
        }
        Err(e) => {
            log::warn!("Failed to load activity for {}: {e}", config.username);
            ContainerUpdate::text(ids::ACTIVITY_LIST, ACTIVITY_ERROR)
        }
    }
}

pub async fn fetch_repos(source: &dyn ProfileSource, config: &Config) -> ContainerUpdate {
    let html = match source.list_repos(&config.username, REPOS_PER_PAGE).await {
        Ok(repos) => render_repos(&repos),
        Err(e) => {
            log::warn!("Failed to load repos for {}: {e}", config.username);
            render_repos_error()
        }
    };

    ContainerUpdate::inner_html(ids::REPO_LIST, html.into_string())
}
