//! Contribution service - pipeline orchestration
//!
//! Read-through flow per request: a fresh cache entry short-circuits the
//! network entirely; otherwise the source is fetched under a per-key
//! single-flight lock and written through on success. A failed fetch falls
//! back to whatever snapshot the cache still holds, stale included; only
//! when there is nothing at all does the error reach the caller, which is
//! the explicit "no data" signal.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use commitgrid_common::time::{Clock, SystemClock};
use commitgrid_common::SnapshotCache;
use commitgrid_domain::constants::FEED_DISPLAY_LIMIT;
use commitgrid_domain::{
    ActivityRecord, Config, ContributionReport, DailyContribution, FetchError, Grid, HeatmapLayout,
};
use tracing::{debug, warn};

use crate::aggregate::aggregate;
use crate::feed::{event_stats, recent_feed};
use crate::heatmap;
use crate::level::apply_levels;
use crate::ports::ActivitySource;

type KeyedLocks = Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>;

/// Contribution pipeline service
pub struct ContributionService<C = SystemClock>
where
    C: Clock + Clone,
{
    source: Arc<dyn ActivitySource>,
    cache: SnapshotCache<C>,
    config: Config,
    clock: C,
    locks: KeyedLocks,
}

impl ContributionService<SystemClock> {
    /// Create a service using the system clock.
    pub fn new(source: Arc<dyn ActivitySource>, config: Config) -> Self {
        Self::with_clock(source, config, SystemClock)
    }
}

impl<C> ContributionService<C>
where
    C: Clock + Clone,
{
    /// Create a service with a custom clock (useful for testing).
    pub fn with_clock(source: Arc<dyn ActivitySource>, config: Config, clock: C) -> Self {
        let cache = SnapshotCache::with_clock(
            Duration::from_secs(config.cache.ttl_secs),
            config.cache.max_entry_bytes,
            clock.clone(),
        );
        Self { source, cache, config, clock, locks: Mutex::new(HashMap::new()) }
    }

    /// Produce a full report for the configured account.
    ///
    /// # Errors
    /// Returns the underlying [`FetchError`] only on total failure: the
    /// fetch failed and no cached snapshot exists. An all-zero window in
    /// an `Ok` report therefore genuinely means zero activity.
    pub async fn contributions(&self) -> Result<ContributionReport, FetchError> {
        let (records, fetched_at, stale) = self.snapshot().await?;

        let today = self.clock.now().date_naive();
        let length_days = self.config.window.length_days;
        let window_start = today - chrono::Duration::days(i64::from(length_days.saturating_sub(1)));

        let (mut days, summary) = aggregate(
            &records,
            window_start,
            length_days,
            self.config.window.lines_per_contribution,
        );
        apply_levels(&mut days, &self.config.levels);

        Ok(ContributionReport {
            feed: recent_feed(&records, FEED_DISPLAY_LIMIT),
            event_stats: event_stats(&records),
            days,
            summary,
            fetched_at,
            stale,
        })
    }

    /// Arrange a report's window into a heatmap using the configured
    /// first day of the week.
    pub fn heatmap(&self, days: &[DailyContribution], layout: HeatmapLayout) -> Grid {
        heatmap::build(days, layout, self.config.window.week_start)
    }

    /// Drop the cached snapshot so the next call refetches.
    pub fn invalidate(&self) {
        self.cache.invalidate(&self.cache_key());
    }

    fn cache_key(&self) -> String {
        format!("events:{}:{}", self.config.source.login, self.config.window.length_days)
    }

    /// Resolve the raw records to aggregate: fresh cache, live fetch, or
    /// stale fallback, in that order.
    async fn snapshot(&self) -> Result<(Vec<ActivityRecord>, DateTime<Utc>, bool), FetchError> {
        let key = self.cache_key();

        if let Some(entry) = self.cache.read::<Vec<ActivityRecord>>(&key) {
            if self.cache.is_fresh(&entry) {
                debug!(key, "serving fresh cached snapshot");
                return Ok((entry.payload, entry.fetched_at, false));
            }
        }

        // Single-flight per key: simultaneous triggers wait here instead of
        // issuing duplicate upstream requests.
        let lock = {
            let mut locks = self.locks.lock().unwrap();
            Arc::clone(locks.entry(key.clone()).or_default())
        };
        let _guard = lock.lock().await;

        // Another caller may have refreshed the snapshot while we waited.
        if let Some(entry) = self.cache.read::<Vec<ActivityRecord>>(&key) {
            if self.cache.is_fresh(&entry) {
                debug!(key, "snapshot refreshed while waiting on fetch lock");
                return Ok((entry.payload, entry.fetched_at, false));
            }
        }

        let login = &self.config.source.login;
        match self.source.recent_events(login, self.config.source.event_limit).await {
            Ok(records) => {
                self.cache.write(&key, &records);
                Ok((records, self.clock.now(), false))
            }
            Err(err) => match self.cache.read::<Vec<ActivityRecord>>(&key) {
                Some(entry) => {
                    warn!(key, error = %err, "fetch failed, serving cached snapshot");
                    let stale = !self.cache.is_fresh(&entry);
                    Ok((entry.payload, entry.fetched_at, stale))
                }
                None => {
                    warn!(key, error = %err, "fetch failed with no cached snapshot");
                    Err(err)
                }
            },
        }
    }
}
