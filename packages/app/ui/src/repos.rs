use maud::{Markup, html};
use profilesite_github_models::GitHubRepo;

const NO_LANGUAGE: &str = "—";

#[must_use]
pub fn render_repos(repos: &[GitHubRepo]) -> Markup {
    if repos.is_empty() {
        return html! { li { "No repos found." } };
    }

    html! {
        @for repo in repos {
            li {
                strong {
                    a href=(repo.html_url) target="_blank" rel="noopener" { (repo.name) }
                }
                div class="repo-meta" { (repo.description.as_deref().unwrap_or_default()) }
                div class="repo-meta" {
                    "⭐ " (repo.stargazers_count) " • "
                    (repo.language.as_deref().filter(|l| !l.is_empty()).unwrap_or(NO_LANGUAGE))
                }
            }
        }
    }
}

#[must_use]
pub fn render_repos_error() -> Markup {
    html! { li { "Unable to load repos." } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_repo_with_language() {
        let repos = vec![GitHubRepo {
            name: "hello-world".to_string(),
            html_url: "https://github.com/octocat/hello-world".to_string(),
            description: Some("My first repository".to_string()),
            stargazers_count: 1500,
            language: Some("Rust".to_string()),
        }];

        assert_eq!(
            render_repos(&repos).into_string(),
            concat!(
                "<li><strong>",
                r#"<a href="https://github.com/octocat/hello-world" target="_blank" rel="noopener">hello-world</a>"#,
                "</strong>",
                r#"<div class="repo-meta">My first repository</div>"#,
                r#"<div class="repo-meta">⭐ 1500 • Rust</div>"#,
                "</li>",
            )
        );
    }

    #[test]
    fn test_repo_without_language_shows_dash() {
        let repos = vec![GitHubRepo {
            name: "dotfiles".to_string(),
            html_url: "https://github.com/octocat/dotfiles".to_string(),
            ..GitHubRepo::default()
        }];

        let html = render_repos(&repos).into_string();

        assert!(html.contains(r#"<div class="repo-meta">⭐ 0 • —</div>"#));
        assert!(html.contains(r#"<div class="repo-meta"></div>"#));
    }

    #[test]
    fn test_no_repos() {
        assert_eq!(render_repos(&[]).into_string(), "<li>No repos found.</li>");
    }

    #[test]
    fn test_error_fragment() {
        assert_eq!(
            render_repos_error().into_string(),
            "<li>Unable to load repos.</li>"
        );
    }
}
