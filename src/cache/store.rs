//! Cache Store Module
//!
//! Main cache engine: a HashMap of response bodies keyed by URL, with
//! time-of-insertion expiry.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Response storage with interval-based expiry.
///
/// The store itself is not synchronized; share it through [`crate::cache::Cache`].
#[derive(Debug)]
pub struct CacheStore {
    /// URL to payload storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum age of an entry before the sweeper may remove it
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore whose entries go stale after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            interval,
        }
    }

    // == Add ==
    /// Stores a payload under `key`, stamped with the current instant.
    ///
    /// An existing entry for the key is replaced and its age restarts.
    pub fn add(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.entries.insert(key.into(), CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a copy of the payload stored under `key`.
    ///
    /// Reading does not refresh the entry's age. A stale entry that the
    /// sweeper has not reached yet is still returned.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap Expired ==
    /// Removes every entry that is stale as observed at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries.retain(|_, entry| !entry.is_stale(interval, now));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Removes every entry that is stale right now.
    pub fn reap_expired(&mut self) -> usize {
        self.reap_expired_at(Instant::now())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
