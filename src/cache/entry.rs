//! Cache Entry Module
//!
//! Defines the structure for individual cache entries stamped with their
//! creation instant.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cached response body with its creation instant.
///
/// Entries are never updated in place; a new `add` replaces them wholesale.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry was inserted
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `interval` as observed at `now`.
    ///
    /// Boundary condition: an entry is stale only once `created_at + interval`
    /// is strictly earlier than `now`. At exactly the boundary it is kept.
    pub fn is_stale(&self, interval: Duration, now: Instant) -> bool {
        self.created_at + interval < now
    }

    // == Age ==
    /// Returns how long ago the entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
