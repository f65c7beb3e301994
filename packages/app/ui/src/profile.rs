use maud::{Markup, html};
use profilesite_github_models::GitHubUser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: String,
}

/// The GitHub profile link always comes first; website and Twitter follow
/// when the profile has them.
#[must_use]
pub fn social_links(username: &str, user: &GitHubUser) -> Vec<SocialLink> {
    let mut links = vec![SocialLink {
        name: "GitHub",
        url: format!("https://github.com/{username}"),
    }];

    if let Some(blog) = user.blog_url() {
        links.push(SocialLink {
            name: "Website",
            url: blog.to_string(),
        });
    }

    if let Some(handle) = user.twitter_handle() {
        links.push(SocialLink {
            name: "Twitter",
            url: format!("https://twitter.com/{handle}"),
        });
    }

    links
}

#[must_use]
pub fn render_social_links(links: &[SocialLink]) -> Markup {
    html! {
        @for (i, link) in links.iter().enumerate() {
            @if i > 0 { " " }
            a href=(link.url) target="_blank" rel="noopener" { (link.name) }
        }
    }
}
