//! Core snapshot store implementation

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Entry stored in the cache: the serialized payload plus capture time.
#[derive(Debug, Clone)]
struct StoredEntry {
    payload: String,
    fetched_at: DateTime<Utc>,
}

/// A successfully read cache entry, deserialized for the caller.
///
/// Freshness is not encoded here; callers ask the cache via
/// [`SnapshotCache::is_fresh`] so stale entries stay usable as fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<T> {
    pub payload: T,
    pub fetched_at: DateTime<Utc>,
}

/// Thread-safe key → snapshot store.
///
/// Entries are replaced wholesale on write, so a concurrent read observes
/// either the old or the new entry, never a partial one.
pub struct SnapshotCache<C = crate::time::SystemClock>
where
    C: crate::time::Clock,
{
    entries: Arc<RwLock<HashMap<String, StoredEntry>>>,
    ttl: Duration,
    max_entry_bytes: usize,
    clock: C,
}

impl SnapshotCache<crate::time::SystemClock> {
    /// Create a cache using the system clock.
    pub fn new(ttl: Duration, max_entry_bytes: usize) -> Self {
        Self::with_clock(ttl, max_entry_bytes, crate::time::SystemClock)
    }
}

impl<C> SnapshotCache<C>
where
    C: crate::time::Clock + Clone,
{
    /// Create a cache with a custom clock (useful for testing).
    pub fn with_clock(ttl: Duration, max_entry_bytes: usize, clock: C) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            max_entry_bytes,
            clock,
        }
    }

    /// Read an entry, deserializing its payload.
    ///
    /// Returns `None` when the key is absent or the stored payload fails
    /// to deserialize; a corrupt entry is removed on the spot rather than
    /// surfaced as an error. Staleness does not affect the result.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<CacheEntry<T>> {
        let stored = {
            let entries = self.entries.read().unwrap();
            entries.get(key).cloned()
        }?;

        match serde_json::from_str(&stored.payload) {
            Ok(payload) => Some(CacheEntry { payload, fetched_at: stored.fetched_at }),
            Err(err) => {
                warn!(key, error = %err, "removing corrupt cache entry");
                self.entries.write().unwrap().remove(key);
                None
            }
        }
    }

    /// Write a snapshot, stamping it with the current time.
    ///
    /// Payloads whose serialized form exceeds the configured bound are
    /// logged and skipped; the caller is not failed over a full cache
    /// slot.
    pub fn write<T: Serialize>(&self, key: &str, payload: &T) {
        let serialized = match serde_json::to_string(payload) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(key, error = %err, "failed to serialize cache payload, skipping write");
                return;
            }
        };

        if serialized.len() > self.max_entry_bytes {
            warn!(
                key,
                size = serialized.len(),
                limit = self.max_entry_bytes,
                "cache payload exceeds size bound, skipping write"
            );
            return;
        }

        let entry = StoredEntry { payload: serialized, fetched_at: self.clock.now() };
        self.entries.write().unwrap().insert(key.to_string(), entry);
        debug!(key, "cache entry written");
    }

    /// Remove an entry, if present.
    pub fn invalidate(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
    }

    /// Whether an entry is within its freshness horizon.
    ///
    /// Stale entries remain readable; this is the caller's signal to
    /// refetch before falling back on them.
    pub fn is_fresh<T>(&self, entry: &CacheEntry<T>) -> bool {
        let age = self.clock.now() - entry.fetched_at;
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::MAX);
        age <= ttl
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(crate) fn insert_raw(&self, key: &str, payload: &str) {
        let entry = StoredEntry { payload: payload.to_string(), fetched_at: self.clock.now() };
        self.entries.write().unwrap().insert(key.to_string(), entry);
    }
}

impl<C> Clone for SnapshotCache<C>
where
    C: crate::time::Clock + Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            ttl: self.ttl,
            max_entry_bytes: self.max_entry_bytes,
            clock: self.clock.clone(),
        }
    }
}
