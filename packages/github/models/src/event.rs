use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Event types that carry extra detail on the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumString)]
pub enum EventKind {
    #[strum(serialize = "PushEvent")]
    Push,
    #[strum(serialize = "IssuesEvent")]
    Issues,
    #[strum(serialize = "PullRequestEvent")]
    PullRequest,
    #[strum(default)]
    Other(String),
}

/// Type-specific detail extracted from an event's `payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetail {
    Generic,
    Push {
        commit_messages: Vec<String>,
    },
    Issue {
        action: String,
        number: Option<u64>,
    },
    PullRequest {
        action: String,
        number: Option<u64>,
    },
}

/// One entry of `GET /users/{username}/events`.
///
/// The raw `payload` is resolved into an [`EventDetail`] while deserializing,
/// so a malformed payload for a known event type fails the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct GitHubEvent {
    pub type_name: String,
    pub kind: EventKind,
    pub repo_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub detail: EventDetail,
}

impl GitHubEvent {
    /// The event type without its `Event` suffix, e.g. `Push` for `PushEvent`.
    #[must_use]
    pub fn display_type(&self) -> &str {
        self.type_name
            .strip_suffix("Event")
            .unwrap_or(&self.type_name)
    }
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    repo: Option<RawRepo>,
    #[serde(default, deserialize_with = "crate::nullable::lenient_timestamp")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    payload: serde_json::Value,
}

#[derive(Deserialize)]
struct RawRepo {
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    name: String,
}

#[derive(Deserialize)]
struct PushPayload {
    #[serde(default)]
    commits: Option<Vec<RawCommit>>,
}

#[derive(Deserialize)]
struct RawCommit {
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    message: String,
}

#[derive(Deserialize)]
struct IssuesPayload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    issue: Option<Numbered>,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    number: Option<u64>,
    #[serde(default)]
    pull_request: Option<Numbered>,
}

#[derive(Deserialize)]
struct Numbered {
    #[serde(default)]
    number: Option<u64>,
}

impl TryFrom<RawEvent> for GitHubEvent {
    type Error = serde_json::Error;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let kind: EventKind = raw
            .type_name
            .parse()
            .unwrap_or_else(|_| EventKind::Other(raw.type_name.clone()));

        let detail = match kind {
            EventKind::Push => {
                let payload: Option<PushPayload> = serde_json::from_value(raw.payload)?;
                EventDetail::Push {
                    commit_messages: payload
                        .and_then(|p| p.commits)
                        .map(|commits| commits.into_iter().map(|c| c.message).collect())
                        .unwrap_or_default(),
                }
            }
            EventKind::Issues => {
                let payload: Option<IssuesPayload> = serde_json::from_value(raw.payload)?;
                payload.map_or(
                    EventDetail::Issue {
                        action: String::new(),
                        number: None,
                    },
                    |p| EventDetail::Issue {
                        action: p.action.unwrap_or_default(),
                        number: p.issue.and_then(|issue| issue.number),
                    },
                )
            }
            EventKind::PullRequest => {
                let payload: Option<PullRequestPayload> = serde_json::from_value(raw.payload)?;
                payload.map_or(
                    EventDetail::PullRequest {
                        action: String::new(),
                        number: None,
                    },
                    |p| EventDetail::PullRequest {
                        action: p.action.unwrap_or_default(),
                        number: p.pull_request.and_then(|pr| pr.number).or(p.number),
                    },
                )
            }
            EventKind::Other(_) => EventDetail::Generic,
        };

        Ok(Self {
            type_name: raw.type_name,
            kind,
            repo_name: raw.repo.map(|repo| repo.name).unwrap_or_default(),
            created_at: raw.created_at,
            detail,
        })
    }
}
