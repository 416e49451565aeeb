//! Window aggregation: raw activity records → per-day contribution counts
//!
//! The window is a contiguous run of calendar days. Aggregation is total:
//! whatever the input looks like, the output covers every day of the
//! window exactly once, in ascending order, with days lacking activity at
//! count 0. The summary is accumulated in the same pass.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use commitgrid_domain::{ActivityRecord, ActivitySummary, DailyContribution};

/// Aggregate records into one [`DailyContribution`] per day of the window
/// `[window_start, window_start + window_days)` plus an [`ActivitySummary`].
///
/// Only commit-bearing records inside the window affect counts; a missing
/// commit count on a push-like record counts as one commit. Levels are
/// left at 0 — applying thresholds is the leveler's job.
pub fn aggregate(
    records: &[ActivityRecord],
    window_start: NaiveDate,
    window_days: u32,
    lines_per_contribution: u32,
) -> (Vec<DailyContribution>, ActivitySummary) {
    if window_days == 0 {
        return (Vec::new(), ActivitySummary::default());
    }

    let mut buckets: BTreeMap<NaiveDate, u32> = (0..window_days)
        .map(|offset| (window_start + Duration::days(i64::from(offset)), 0))
        .collect();
    let window_end = window_start + Duration::days(i64::from(window_days));

    for record in records {
        if !record.kind.is_commit_bearing() {
            continue;
        }
        let date = record.timestamp.date_naive();
        if date < window_start || date >= window_end {
            continue;
        }
        if let Some(count) = buckets.get_mut(&date) {
            *count = count.saturating_add(record.commits());
        }
    }

    let mut summary = ActivitySummary::default();
    let days = buckets
        .into_iter()
        .map(|(date, count)| {
            summary.total_contributions = summary.total_contributions.saturating_add(count);
            if count > 0 {
                summary.active_days += 1;
            }
            DailyContribution { date, count, level: 0 }
        })
        .collect();
    summary.estimated_lines =
        u64::from(summary.total_contributions) * u64::from(lines_per_contribution);

    (days, summary)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use commitgrid_domain::ActivityKind;

    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn push_on(day: u32, commits: Option<u32>) -> ActivityRecord {
        ActivityRecord {
            kind: ActivityKind::Push,
            repository: Some("octocat/hello-world".into()),
            timestamp: Utc.with_ymd_and_hms(2026, 3, day, 15, 30, 0).unwrap(),
            commit_count: commits,
        }
    }

    #[test]
    fn window_is_dense_sorted_and_exact() {
        let (days, _) = aggregate(&[push_on(5, Some(2))], start(), 90, 42);

        assert_eq!(days.len(), 90);
        assert_eq!(days[0].date, start());
        for pair in days.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn empty_input_yields_zero_filled_window() {
        let (days, summary) = aggregate(&[], start(), 7, 42);

        assert_eq!(days.len(), 7);
        assert!(days.iter().all(|d| d.count == 0 && d.level == 0));
        assert_eq!(summary, ActivitySummary::default());
    }

    #[test]
    fn zero_length_window_is_the_only_empty_output() {
        let (days, summary) = aggregate(&[push_on(5, Some(2))], start(), 0, 42);
        assert!(days.is_empty());
        assert_eq!(summary.total_contributions, 0);
    }

    #[test]
    fn worked_example_from_one_push() {
        // One push with five commits on day 3 of a 7-day window.
        let records = [push_on(3, Some(5))];
        let (days, summary) = aggregate(&records, start(), 7, 42);

        assert_eq!(days[2].count, 5);
        assert!(days.iter().enumerate().all(|(i, d)| i == 2 || d.count == 0));
        assert_eq!(summary.total_contributions, 5);
        assert_eq!(summary.active_days, 1);
        assert_eq!(summary.estimated_lines, 5 * 42);
    }

    #[test]
    fn records_outside_window_are_ignored() {
        let before = ActivityRecord {
            timestamp: Utc.with_ymd_and_hms(2026, 2, 28, 23, 59, 59).unwrap(),
            ..push_on(1, Some(9))
        };
        let after = ActivityRecord {
            timestamp: Utc.with_ymd_and_hms(2026, 3, 8, 0, 0, 0).unwrap(),
            ..push_on(1, Some(9))
        };
        let (days, summary) = aggregate(&[before, after], start(), 7, 42);

        assert!(days.iter().all(|d| d.count == 0));
        assert_eq!(summary.total_contributions, 0);
    }

    #[test]
    fn non_commit_kinds_do_not_affect_counts() {
        let star = ActivityRecord { kind: ActivityKind::Watch, ..push_on(2, Some(3)) };
        let fork = ActivityRecord { kind: ActivityKind::Fork, ..push_on(2, None) };
        let (days, summary) = aggregate(&[star, fork], start(), 7, 42);

        assert!(days.iter().all(|d| d.count == 0));
        assert_eq!(summary.active_days, 0);
    }

    #[test]
    fn pushes_without_counts_default_to_one_and_accumulate() {
        let records = [push_on(2, None), push_on(2, None), push_on(2, Some(3))];
        let (days, summary) = aggregate(&records, start(), 7, 42);

        assert_eq!(days[1].count, 5);
        assert_eq!(summary.active_days, 1);
        assert_eq!(summary.total_contributions, 5);
    }

    #[test]
    fn bare_commit_records_count_like_pushes() {
        let commit = ActivityRecord { kind: ActivityKind::Commit, ..push_on(4, None) };
        let (days, _) = aggregate(&[commit], start(), 7, 42);
        assert_eq!(days[3].count, 1);
    }
}
