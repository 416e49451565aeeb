//! Recent-activity feed projection
//!
//! A simpler view over the same raw records: the newest events for the
//! activity list, plus headline counters. Window membership and commit
//! kinds do not matter here.

use std::collections::HashSet;

use commitgrid_domain::{ActivityKind, ActivityRecord, EventStats, FeedItem};

/// Newest-first projection of the raw record list, capped at `limit`.
pub fn recent_feed(records: &[ActivityRecord], limit: usize) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = records
        .iter()
        .map(|record| FeedItem {
            kind: record.kind.clone(),
            repository: record.repository.clone(),
            timestamp: record.timestamp,
        })
        .collect();

    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items.truncate(limit);
    items
}

/// Headline counters over the raw record list.
pub fn event_stats(records: &[ActivityRecord]) -> EventStats {
    let mut commits = 0u32;
    let mut stars = 0u32;
    let mut repos: HashSet<&str> = HashSet::new();

    for record in records {
        commits = commits.saturating_add(record.commits());
        if record.kind == ActivityKind::Watch {
            stars += 1;
        }
        if let Some(repository) = record.repository.as_deref() {
            repos.insert(repository);
        }
    }

    EventStats { commits, repos: repos.len() as u32, stars }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn record(kind: ActivityKind, repo: &str, hour: u32) -> ActivityRecord {
        ActivityRecord {
            kind,
            repository: Some(repo.to_string()),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0).unwrap(),
            commit_count: None,
        }
    }

    #[test]
    fn feed_is_newest_first_and_capped() {
        let records = [
            record(ActivityKind::Push, "octocat/a", 8),
            record(ActivityKind::Watch, "octocat/b", 12),
            record(ActivityKind::Fork, "octocat/c", 10),
        ];

        let feed = recent_feed(&records, 2);

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].kind, ActivityKind::Watch);
        assert_eq!(feed[1].kind, ActivityKind::Fork);
    }

    #[test]
    fn stats_count_commits_distinct_repos_and_stars() {
        let mut push = record(ActivityKind::Push, "octocat/a", 9);
        push.commit_count = Some(4);
        let records = [
            push,
            record(ActivityKind::Push, "octocat/a", 10),
            record(ActivityKind::Watch, "octocat/b", 11),
            record(ActivityKind::Watch, "octocat/c", 12),
            record(ActivityKind::Issue, "octocat/b", 13),
        ];

        let stats = event_stats(&records);

        assert_eq!(stats.commits, 5);
        assert_eq!(stats.repos, 3);
        assert_eq!(stats.stars, 2);
    }

    #[test]
    fn stats_over_empty_records_are_zero() {
        assert_eq!(event_stats(&[]), EventStats::default());
        assert!(recent_feed(&[], 15).is_empty());
    }
}
