use maud::{Markup, html};
use profilesite_site_models::{PreviousWorkEntry, ProjectEntry};

/// Shown in place of a list whose file could not be loaded.
#[must_use]
pub fn render_list_unavailable(what: &str, file: &str) -> Markup {
    html! { li { "No " (what) " defined (" (file) ")" } }
}

#[must_use]
pub fn render_projects(projects: Option<&[ProjectEntry]>) -> Markup {
    let projects = projects.unwrap_or_default();
    if projects.is_empty() {
        return html! { li { "No projects listed." } };
    }

    html! {
        @for project in projects {
            li {
                strong {
                    a href=(non_empty(project.link.as_deref()).unwrap_or("#")) target="_blank" rel="noopener" {
                        (project.title)
                    }
                }
                div class="repo-meta" { (project.description.as_deref().unwrap_or_default()) }
                @if let Some(tags) = &project.tags {
                    div class="repo-meta" { "Tags: " (tags.join(", ")) }
                }
            }
        }
    }
}

#[must_use]
pub fn render_previous(previous: Option<&[PreviousWorkEntry]>) -> Markup {
    let previous = previous.unwrap_or_default();
    if previous.is_empty() {
        return html! { li { "No previous work listed." } };
    }

    html! {
        @for entry in previous {
            li {
                strong { (entry.title) }
                div class="repo-meta" { (entry.description.as_deref().unwrap_or_default()) }
                @if let Some(when) = non_empty(entry.when.as_deref()) {
                    div class="repo-meta" { "When: " (when) }
                }
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
