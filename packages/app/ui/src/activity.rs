use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use maud::{Markup, html};
use profilesite_github_models::{EventDetail, GitHubEvent};

pub const NO_ACTIVITY: &str = "No recent public activity.";
pub const ACTIVITY_ERROR: &str = "Unable to load GitHub activity.";

/// Month/day/year with a 12-hour clock, e.g. `1/15/2024, 10:30:00 AM`.
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Only the first two commit messages of a push are shown.
const PUSH_COMMITS_SHOWN: usize = 2;

/// Render the activity feed, timestamps shown in `tz`.
#[must_use]
pub fn render_activity<Tz>(events: &[GitHubEvent], tz: &Tz) -> Markup
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if events.is_empty() {
        return html! { (NO_ACTIVITY) };
    }

    html! {
        @for event in events {
            div class="event" {
                div {
                    (event.display_type()) " on " strong { (event.repo_name) }
                    @if let Some(detail) = describe_detail(&event.detail) {
                        " — " (detail)
                    }
                }
                div class="repo-meta" { (format_timestamp(event.created_at.as_ref(), tz)) }
            }
        }
    }
}

fn describe_detail(detail: &EventDetail) -> Option<String> {
    match detail {
        EventDetail::Generic => None,
        EventDetail::Push { commit_messages } => Some(
            commit_messages
                .iter()
                .take(PUSH_COMMITS_SHOWN)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        ),
        EventDetail::Issue { action, number } => Some(numbered(action, "issue", *number)),
        EventDetail::PullRequest { action, number } => Some(numbered(action, "PR", *number)),
    }
}

fn numbered(action: &str, noun: &str, number: Option<u64>) -> String {
    number.map_or_else(
        || format!("{action} {noun}"),
        |number| format!("{action} {noun} #{number}"),
    )
}

fn format_timestamp<Tz>(created_at: Option<&DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    created_at.map_or_else(String::new, |ts| {
        ts.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
    })
}
