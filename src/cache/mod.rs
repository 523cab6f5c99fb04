//! Cache Module
//!
//! Volatile (key, timestamp) → value map that shortcuts repeated lookups.
//!
//! ## Responsibilities
//! - Serve exact (key, timestamp) hits without touching disk
//! - Accept entries from saves and from successful scans only
//! - Count hits and misses
//!
//! ## Data Structure Choice
//! Nested HashMap wrapped in RwLock:
//! - Outer map by key so lookups borrow `&str` without allocating
//! - Inner map by timestamp
//! - Never holds negative results, so later appends cannot be shadowed

mod table;

pub use table::SequenceCache;

/// Point-in-time cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,

    /// Lookups that fell through to a scan
    pub misses: u64,
}
