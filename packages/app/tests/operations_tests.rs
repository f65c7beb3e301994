use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use profilesite_app::collect_updates;
use profilesite_app::operations::{
    EVENTS_PER_PAGE, REPOS_PER_PAGE, fetch_activity, fetch_profile, fetch_repos,
};
use profilesite_config::Config;
use profilesite_github::{GitHubError, ProfileSource};
use profilesite_github_models::{
    EventDetail, EventKind, GitHubEvent, GitHubRepo, GitHubUser,
};
use profilesite_page::{ContainerUpdate, ids};
use profilesite_site::{Site, SiteRoot};

/// Canned answers; `None` means the call fails.
#[derive(Default)]
struct FixedSource {
    user: Option<GitHubUser>,
    events: Option<Vec<GitHubEvent>>,
    repos: Option<Vec<GitHubRepo>>,
}

fn unavailable() -> GitHubError {
    GitHubError::Remote(reqwest::StatusCode::SERVICE_UNAVAILABLE)
}

#[async_trait::async_trait]
impl ProfileSource for FixedSource {
    async fn get_user(&self, _username: &str) -> Result<GitHubUser, GitHubError> {
        self.user.clone().ok_or_else(unavailable)
    }

    async fn list_events(
        &self,
        _username: &str,
        per_page: u32,
    ) -> Result<Vec<GitHubEvent>, GitHubError> {
        assert_eq!(per_page, EVENTS_PER_PAGE);
        self.events.clone().ok_or_else(unavailable)
    }

    async fn list_repos(
        &self,
        _username: &str,
        per_page: u32,
    ) -> Result<Vec<GitHubRepo>, GitHubError> {
        assert_eq!(per_page, REPOS_PER_PAGE);
        self.repos.clone().ok_or_else(unavailable)
    }

    fn source_name(&self) -> &'static str {
        "fixed"
    }
}

fn issue_event() -> GitHubEvent {
    GitHubEvent {
        type_name: "IssuesEvent".to_string(),
        kind: EventKind::Issues,
        repo_name: "octocat/hello-world".to_string(),
        created_at: Some(Utc.with_ymd_and_hms(2024, 1, 15, 14, 5, 9).unwrap()),
        detail: EventDetail::Issue {
            action: "opened".to_string(),
            number: Some(42),
        },
    }
}

#[tokio::test]
async fn test_profile_failure_is_silent() {
    let updates = fetch_profile(&FixedSource::default(), &Config::new("octocat")).await;

    assert!(updates.is_empty());
}

#[tokio::test]
async fn test_profile_updates() {
    let source = FixedSource {
        user: Some(GitHubUser {
            login: "octocat".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
            twitter_username: Some("octo".to_string()),
            ..GitHubUser::default()
        }),
        ..FixedSource::default()
    };

    let updates = fetch_profile(&source, &Config::new("octocat")).await;

    assert_eq!(
        updates,
        vec![
            ContainerUpdate::attribute(ids::AVATAR, "src", "https://example.com/a.png"),
            ContainerUpdate::text(ids::NAME, "octocat"),
            ContainerUpdate::text(ids::BIO, ""),
            ContainerUpdate::inner_html(
                ids::SOCIAL,
                concat!(
                    r#"<a href="https://github.com/octocat" target="_blank" rel="noopener">GitHub</a> "#,
                    r#"<a href="https://twitter.com/octo" target="_blank" rel="noopener">Twitter</a>"#,
                ),
            ),
        ]
    );
}

#[tokio::test]
async fn test_activity_renders_in_given_time_zone() {
    let source = FixedSource {
        events: Some(vec![issue_event()]),
        ..FixedSource::default()
    };

    let update = fetch_activity(&source, &Config::new("octocat"), &Utc).await;

    assert_eq!(
        update,
        ContainerUpdate::inner_html(
            ids::ACTIVITY_LIST,
            concat!(
                r#"<div class="event">"#,
                "<div>Issues on <strong>octocat/hello-world</strong> — opened issue #42</div>",
                r#"<div class="repo-meta">1/15/2024, 2:05:09 PM</div>"#,
                "</div>",
            ),
        )
    );
}

#[tokio::test]
async fn test_activity_failure_sets_text() {
    let update = fetch_activity(&FixedSource::default(), &Config::new("octocat"), &Utc).await;

    assert_eq!(
        update,
        ContainerUpdate::text(ids::ACTIVITY_LIST, "Unable to load GitHub activity.")
    );
}

#[tokio::test]
async fn test_repos_failure_renders_error_item() {
    let update = fetch_repos(&FixedSource::default(), &Config::new("octocat")).await;

    assert_eq!(
        update,
        ContainerUpdate::inner_html(ids::REPO_LIST, "<li>Unable to load repos.</li>")
    );
}

#[tokio::test]
async fn test_collect_updates_touches_each_container_once() {
    let dir = tempfile::tempdir().unwrap();
    let site = Site::new(SiteRoot::Dir(dir.path().to_path_buf())).unwrap();
    let source = FixedSource {
        user: Some(GitHubUser::default()),
        events: Some(vec![]),
        repos: Some(vec![]),
    };

    let updates = collect_updates(&site, &source, &Config::new("octocat"), &Utc).await;

    let touched: Vec<&str> = updates.iter().map(|update| update.id.as_str()).collect();
    assert_eq!(
        touched,
        vec![
            ids::CURRENT_PROJECTS,
            ids::PREVIOUS_WORK,
            ids::AVATAR,
            ids::NAME,
            ids::BIO,
            ids::SOCIAL,
            ids::ACTIVITY_LIST,
            ids::REPO_LIST,
        ]
    );
}
