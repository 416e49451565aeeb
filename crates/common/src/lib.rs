//! # commitgrid Common
//!
//! Foundational utilities shared by the other commitgrid crates:
//! - Clock abstraction for deterministic time-based testing
//! - Snapshot cache with TTL freshness and stale-readable entries
//!
//! ## Architecture
//! - No dependencies on other commitgrid crates
//! - Pure infrastructure-free building blocks

pub mod cache;
pub mod time;

pub use cache::{CacheEntry, SnapshotCache};
pub use time::{Clock, MockClock, SystemClock};
