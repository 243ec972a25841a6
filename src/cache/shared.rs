//! Shared Cache Handle
//!
//! Wraps [`CacheStore`] for use from both the command loop and the sweeper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};

/// Cloneable handle to a cache store guarded by a single mutex.
///
/// Every operation, reads included, takes the same lock, so a lookup never
/// observes an entry that the sweeper is halfway through removing.
#[derive(Debug, Clone)]
pub struct Cache {
    inner: Arc<Mutex<CacheStore>>,
}

impl Cache {
    /// Creates an empty cache whose entries go stale after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheStore::new(interval))),
        }
    }

    /// Inserts or replaces the payload stored under `key`.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        debug!(key = %key, bytes = value.len(), "cache add");
        self.inner.lock().await.add(key, value);
    }

    /// Returns the payload stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.inner.lock().await.get(key);
        debug!(key, hit = value.is_some(), "cache lookup");
        value
    }

    /// Removes stale entries and returns how many were dropped.
    pub async fn reap_expired(&self) -> usize {
        self.inner.lock().await.reap_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Staleness threshold, which is also the sweep period.
    pub async fn interval(&self) -> Duration {
        self.inner.lock().await.interval()
    }
}
