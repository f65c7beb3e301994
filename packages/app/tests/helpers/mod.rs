#![allow(dead_code)]

use profilesite_app::ProfileApp;
use profilesite_app::server::{ServerConfig, run_server_with_handle};
use profilesite_github::GitHubClient;
use profilesite_site::{INDEX_FILE, Site, SiteRoot};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="gh-username" content="octocat">
<title>Profile</title>
</head>
<body>
<img id="avatar" src="placeholder.png" alt="avatar">
<h1 id="name">Loading…</h1>
<p id="bio"></p>
<div id="social"></div>
<ul id="current-projects"><li>Loading…</li></ul>
<ul id="previous-work"></ul>
<div id="activity-list">Loading activity…</div>
<ul id="repo-list"></ul>
</body>
</html>
"#;

/// A site directory holding `index.html` plus any extra files.
pub fn site_dir(index: &str, files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(INDEX_FILE), index).unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

pub fn profile_app(root: SiteRoot, api: &MockServer) -> ProfileApp {
    let site = Site::new(root).unwrap();
    let client = GitHubClient::new().unwrap().with_base_url(api.uri());
    ProfileApp::new(site, client)
}

pub fn dir_app(dir: &tempfile::TempDir, api: &MockServer) -> ProfileApp {
    profile_app(SiteRoot::Dir(dir.path().to_path_buf()), api)
}

pub async fn mount_github(api: &MockServer, username: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{username}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": username,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": format!("https://github.com/{username}"),
            "name": "The Octocat",
            "bio": "Mona's friend",
            "blog": "https://github.blog",
            "twitter_username": null
        })))
        .mount(api)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/users/{username}/events")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "type": "PushEvent",
                "repo": { "name": "octocat/hello-world" },
                "payload": {
                    "commits": [
                        { "message": "a" },
                        { "message": "b" },
                        { "message": "c" }
                    ]
                },
                "created_at": "2024-01-15T10:30:00Z"
            }
        ])))
        .mount(api)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/users/{username}/repos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "name": "hello-world",
                "html_url": "https://github.com/octocat/hello-world",
                "description": "My first repository",
                "stargazers_count": 1500,
                "language": "Rust"
            }
        ])))
        .mount(api)
        .await;
}

pub async fn mount_github_failure(api: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(api)
        .await;
}

pub struct TestProfileServer {
    http_url: String,
    handle: actix_web::dev::ServerHandle,
}

impl TestProfileServer {
    pub async fn start(app: ProfileApp) -> anyhow::Result<Self> {
        let config = ServerConfig::new("127.0.0.1".to_string(), 0);

        let response = run_server_with_handle(app, &config)?;
        let port = response
            .addrs
            .first()
            .expect("Expected at least one address")
            .port();
        let http_url = format!("http://127.0.0.1:{port}");

        wait_for_server_ready(&http_url).await?;

        Ok(Self {
            http_url,
            handle: response.handle,
        })
    }

    #[must_use]
    pub fn http_url(&self) -> &str {
        &self.http_url
    }
}

impl Drop for TestProfileServer {
    fn drop(&mut self) {
        let handle = self.handle.clone();
        tokio::spawn(async move {
            handle.stop(true).await;
        });
    }
}

async fn wait_for_server_ready(url: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let health_url = format!("{url}/health");

    for _ in 0..30 {
        if let Ok(response) = client.get(&health_url).send().await
            && response.status().is_success()
        {
            return Ok(());
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    anyhow::bail!("Server failed to start within timeout")
}
