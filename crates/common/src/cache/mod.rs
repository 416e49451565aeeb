//! Snapshot cache with TTL freshness and stale-readable entries
//!
//! Unlike a conventional TTL cache, expiry here never drops an entry on
//! read: a stale snapshot is the degraded fallback when a live fetch
//! fails, so presence and freshness are separate questions. Entries are
//! stored serialized; a payload that no longer deserializes is treated as
//! a miss and removed.

mod store;

pub use store::{CacheEntry, SnapshotCache};
