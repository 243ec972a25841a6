//! Cache Module
//!
//! Provides an in-memory response cache keyed by request URL, with entries
//! expiring a fixed interval after insertion.

mod entry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;
