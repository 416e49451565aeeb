//! Wire types for the GitHub events payload
//!
//! These mirror the subset of the `/users/{login}/events` response the
//! pipeline consumes and convert into domain records during
//! deserialization. Everything unrecognized is preserved as
//! `ActivityKind::Other` so the feed can still display it.

use chrono::{DateTime, Utc};
use commitgrid_domain::{ActivityKind, ActivityRecord};
use serde::Deserialize;

/// One element of the events list as GitHub serves it.
#[derive(Debug, Deserialize)]
pub(crate) struct GithubEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub repo: Option<EventRepo>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventRepo {
    pub name: String,
}

/// Push-relevant slice of the event payload. GitHub reports both the
/// bundled commit list and a `size` counter; the list is authoritative
/// when present because `size` also counts commits outside the push's
/// distinct set.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EventPayload {
    #[serde(default)]
    pub commits: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub size: Option<u32>,
}

fn kind_from_event_type(event_type: &str) -> ActivityKind {
    match event_type {
        "PushEvent" => ActivityKind::Push,
        "CreateEvent" => ActivityKind::Create,
        "DeleteEvent" => ActivityKind::Delete,
        "WatchEvent" => ActivityKind::Watch,
        "ForkEvent" => ActivityKind::Fork,
        "IssuesEvent" => ActivityKind::Issue,
        "IssueCommentEvent" => ActivityKind::IssueComment,
        "PullRequestEvent" => ActivityKind::PullRequest,
        "ReleaseEvent" => ActivityKind::Release,
        other => ActivityKind::Other(other.to_string()),
    }
}

impl From<GithubEvent> for ActivityRecord {
    fn from(event: GithubEvent) -> Self {
        let kind = kind_from_event_type(&event.kind);
        let commit_count = if kind.is_commit_bearing() {
            event
                .payload
                .commits
                .as_ref()
                .map(|commits| commits.len() as u32)
                .or(event.payload.size)
        } else {
            None
        };

        Self {
            kind,
            repository: event.repo.map(|repo| repo.name),
            timestamp: event.created_at,
            commit_count,
        }
    }
}
