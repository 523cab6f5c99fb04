//! Cache implementation
//!
//! HashMap-based cache with RwLock for concurrency.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::CacheStats;

/// In-memory cache of resolved sequences
pub struct SequenceCache {
    entries: RwLock<HashMap<String, HashMap<i64, String>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SequenceCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a value (read lock), counting the hit or miss
    pub fn get(&self, key: &str, timestamp: i64) -> Option<String> {
        let found = self
            .entries
            .read()
            .get(key)
            .and_then(|versions| versions.get(&timestamp))
            .cloned();

        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    /// Insert or replace a value (write lock)
    pub fn insert(&self, key: &str, timestamp: i64, value: String) {
        let mut entries = self.entries.write();
        match entries.get_mut(key) {
            Some(versions) => {
                versions.insert(timestamp, value);
            }
            None => {
                entries.insert(key.to_string(), HashMap::from([(timestamp, value)]));
            }
        }
    }

    /// Whether a (key, timestamp) pair is cached, without touching the counters
    pub fn contains(&self, key: &str, timestamp: i64) -> bool {
        self.entries
            .read()
            .get(key)
            .is_some_and(|versions| versions.contains_key(&timestamp))
    }

    /// Number of cached (key, timestamp) pairs
    pub fn len(&self) -> usize {
        self.entries.read().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of the hit/miss counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new()
    }
}
