//! Raw activity records as produced by the fetcher
//!
//! These are the domain-side shape of upstream events; the wire format of
//! the external API lives in the infra crate and is converted into these
//! records during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of an upstream activity event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Push,
    Create,
    Delete,
    Watch,
    Fork,
    Issue,
    IssueComment,
    PullRequest,
    Release,
    /// A bare commit record (sources that report commits directly rather
    /// than push events)
    Commit,
    /// Anything the pipeline does not recognize; kept so the feed can still
    /// display it
    Other(String),
}

impl ActivityKind {
    /// Whether records of this kind contribute commits to the daily counts.
    pub fn is_commit_bearing(&self) -> bool {
        matches!(self, Self::Push | Self::Commit)
    }
}

/// One external event or commit, immutable once deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub kind: ActivityKind,

    /// Repository identifier (`owner/name`) when the event carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Moment the event occurred upstream
    pub timestamp: DateTime<Utc>,

    /// Number of commits bundled in a push-like record; `None` means the
    /// source did not report a count and one commit is assumed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_count: Option<u32>,
}

impl ActivityRecord {
    /// Commits this record contributes to its day bucket.
    pub fn commits(&self) -> u32 {
        if self.kind.is_commit_bearing() {
            self.commit_count.unwrap_or(1)
        } else {
            0
        }
    }
}
