//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Contribution window
pub const DEFAULT_WINDOW_DAYS: u32 = 90;
pub const DEFAULT_LINES_PER_CONTRIBUTION: u32 = 42;

// Fetcher configuration
pub const DEFAULT_EVENT_LIMIT: usize = 100;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// Cache configuration
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
pub const DEFAULT_MAX_CACHE_ENTRY_BYTES: usize = 50_000;

// Recent-activity feed
pub const FEED_DISPLAY_LIMIT: usize = 15;

// Leveling thresholds (coarse profile: per-day event counts)
pub const COARSE_LEVEL_LOW: u32 = 3;
pub const COARSE_LEVEL_MEDIUM: u32 = 9;

// Leveling thresholds (fine profile: calendar-scale counts)
pub const FINE_LEVEL_LOW: u32 = 10;
pub const FINE_LEVEL_MEDIUM: u32 = 20;
pub const FINE_LEVEL_HIGH: u32 = 30;
