//! Aggregated contribution types handed to the presenter

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::activity::ActivityKind;

/// One calendar day of the contribution window.
///
/// Exactly one instance exists per date in the window; days without any
/// activity carry `count = 0, level = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyContribution {
    pub date: NaiveDate,

    /// Commits attributed to this date
    pub count: u32,

    /// Ordinal intensity in `0..=4`, derived from `count` via the
    /// configured thresholds
    pub level: u8,
}

/// Summary statistics over one contribution window.
///
/// Recomputed on every aggregation pass; never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActivitySummary {
    pub total_contributions: u32,

    /// Days in the window with at least one contribution
    pub active_days: u32,

    /// `total_contributions × lines_per_contribution` — a display
    /// heuristic, not a measured value
    pub estimated_lines: u64,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub kind: ActivityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Headline counters over the raw event list (not window-bounded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventStats {
    /// Commits across all push-like records
    pub commits: u32,

    /// Distinct repositories touched
    pub repos: u32,

    /// Watch (star) events
    pub stars: u32,
}

/// Everything the presenter needs for one render pass.
///
/// A report always carries a full window of days; total failure (no fetch,
/// no cache) never produces a report, so an all-zero window genuinely means
/// zero activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionReport {
    /// Full contribution window, one entry per day, ascending
    pub days: Vec<DailyContribution>,

    pub summary: ActivitySummary,

    /// Newest-first projection of recent events
    pub feed: Vec<FeedItem>,

    pub event_stats: EventStats,

    /// When the underlying snapshot was fetched
    pub fetched_at: DateTime<Utc>,

    /// True when the snapshot was served past its freshness horizon after
    /// a failed fetch
    pub stale: bool,
}
