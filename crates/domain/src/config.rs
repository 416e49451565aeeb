//! Configuration structures
//!
//! All tunables of the pipeline live here as plain serde structs. Defaults
//! mirror the constants in [`crate::constants`]; the infra crate provides a
//! loader that fills these from environment variables or a config file.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COARSE_LEVEL_LOW, COARSE_LEVEL_MEDIUM, DEFAULT_CACHE_TTL_SECS, DEFAULT_EVENT_LIMIT,
    DEFAULT_LINES_PER_CONTRIBUTION, DEFAULT_MAX_CACHE_ENTRY_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_WINDOW_DAYS, FINE_LEVEL_HIGH, FINE_LEVEL_LOW, FINE_LEVEL_MEDIUM,
};
use crate::errors::{CommitGridError, Result};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub levels: LevelThresholds,
}

/// Upstream activity source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Account login whose events are fetched
    pub login: String,

    /// Maximum number of event records requested per fetch
    pub event_limit: usize,

    /// Request deadline in seconds; the in-flight request is aborted when
    /// it elapses
    pub timeout_secs: u64,

    /// Optional API token sent as a bearer credential
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            login: String::new(),
            event_limit: DEFAULT_EVENT_LIMIT,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            token: None,
        }
    }
}

/// Contribution window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Length of the trailing window in calendar days
    pub length_days: u32,

    /// Display heuristic: estimated lines of code per contribution
    pub lines_per_contribution: u32,

    /// First day of the week for heatmap column alignment
    pub week_start: Weekday,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            length_days: DEFAULT_WINDOW_DAYS,
            lines_per_contribution: DEFAULT_LINES_PER_CONTRIBUTION,
            week_start: Weekday::Mon,
        }
    }
}

/// Snapshot cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Freshness horizon in seconds; entries older than this are stale but
    /// remain readable as a degraded fallback
    pub ttl_secs: u64,

    /// Maximum serialized entry size; oversized writes are skipped
    pub max_entry_bytes: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_entry_bytes: DEFAULT_MAX_CACHE_ENTRY_BYTES,
        }
    }
}

/// Step-function thresholds mapping a daily count to an intensity level.
///
/// `0` maps to level 0, `(0, t1]` to 1, `(t1, t2]` to 2, `(t2, t3]` to 3
/// and anything above `t3` to 4. Two named profiles exist because the data
/// sources historically used different scales: [`LevelThresholds::coarse`]
/// for small per-day event counts and [`LevelThresholds::fine`] for
/// calendar-scale counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub t1: u32,
    pub t2: u32,
    pub t3: u32,
}

impl LevelThresholds {
    /// Build a validated threshold set.
    ///
    /// # Errors
    /// Returns `CommitGridError::InvalidInput` unless `t1 < t2 < t3`.
    pub fn new(t1: u32, t2: u32, t3: u32) -> Result<Self> {
        if t1 == 0 || t1 >= t2 || t2 >= t3 {
            return Err(CommitGridError::InvalidInput(format!(
                "level thresholds must satisfy 0 < t1 < t2 < t3, got ({t1}, {t2}, {t3})"
            )));
        }
        Ok(Self { t1, t2, t3 })
    }

    /// Profile for per-day event counts; level 4 is effectively unreachable.
    pub fn coarse() -> Self {
        Self { t1: COARSE_LEVEL_LOW, t2: COARSE_LEVEL_MEDIUM, t3: u32::MAX }
    }

    /// Profile for larger aggregate counts.
    pub fn fine() -> Self {
        Self { t1: FINE_LEVEL_LOW, t2: FINE_LEVEL_MEDIUM, t3: FINE_LEVEL_HIGH }
    }

    /// Resolve a named profile, as used by the config loader.
    ///
    /// # Errors
    /// Returns `CommitGridError::Config` for unknown profile names.
    pub fn from_profile_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "coarse" => Ok(Self::coarse()),
            "fine" => Ok(Self::fine()),
            other => Err(CommitGridError::Config(format!("unknown level profile: {other}"))),
        }
    }
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self::coarse()
    }
}
