//! Engine Module
//!
//! The core storage engine that coordinates per-key logs and the cache.
//!
//! ## Responsibilities
//! - Append sequences to their key's log and remember them in the cache
//! - Resolve (key, timestamp) lookups from the cache or by scanning the log
//! - Keep cache contents identical to what a scan would produce

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::cache::{CacheStats, SequenceCache};
use crate::config::Config;
use crate::error::{Result, TempoError};
use crate::log::{validate_key, LogWriter, Record, RecordReader, FIELD_COUNT};
use crate::sequence::Sequence;
use crate::storage::Storer;

/// The main storage engine
///
/// ## Concurrency Model: per-key Single-Writer / Multiple-Reader
///
/// - **Saves** take the key's write lock around the append and the cache
///   insert, so both land as one unit.
/// - **Scans** take the key's read lock around the file read and the single
///   cache insert made after a clean scan. A scan can never cache a value a
///   concurrent save has already superseded.
/// - **Cache hits** take no key lock at all.
/// - Different keys never wait on each other beyond the lock-table lookup.
/// - Only keys with a log on disk get a lock-table entry.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Resolved (key, timestamp) pairs; never holds misses
    cache: SequenceCache,

    /// One lock per key that has been saved or found on disk
    key_locks: Mutex<HashMap<String, Arc<RwLock<()>>>>,
}

impl Engine {
    /// Open or create an engine with the given config
    ///
    /// Nothing is read eagerly: the cache starts empty and fills as
    /// records are saved or found by scans.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        fs::create_dir_all(&config.data_dir)?;

        tracing::debug!(data_dir = %config.data_dir.display(), "engine opened");

        Ok(Self {
            config,
            cache: SequenceCache::new(),
            key_locks: Mutex::new(HashMap::new()),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Append a sequence to its key's log
    ///
    /// Steps:
    /// 1. Validate the key
    /// 2. Acquire the key's write lock
    /// 3. Append one record to `<key>.<ext>`
    /// 4. Insert the pair into the cache
    pub fn save(&self, sequence: &Sequence) -> Result<()> {
        validate_key(&sequence.key)?;

        let lock = self.key_lock(&sequence.key);
        let _write_guard = lock.write();

        let mut writer = LogWriter::open(&self.log_path(&sequence.key), self.config.sync_strategy)?;
        writer.append(sequence)?;

        self.cache
            .insert(&sequence.key, sequence.timestamp, sequence.value.clone());

        tracing::debug!(key = %sequence.key, timestamp = sequence.timestamp, "sequence saved");
        Ok(())
    }

    /// Get the value a key held at an exact timestamp
    ///
    /// Search order:
    /// 1. Cache
    /// 2. Full scan of the key's log (last match wins)
    ///
    /// Returns `Ok(None)` when the key exists but has no record at
    /// `timestamp`, and `KeyNotFound` when the key was never written.
    pub fn get(&self, key: &str, timestamp: i64) -> Result<Option<String>> {
        validate_key(key)?;

        if let Some(value) = self.cache.get(key, timestamp) {
            tracing::trace!(key, timestamp, "cache hit");
            return Ok(Some(value));
        }

        // Open before taking a key lock so lookups of unknown keys never
        // add entries to the lock table.
        let file = match File::open(self.log_path(key)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TempoError::KeyNotFound(key.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let lock = self.key_lock(key);
        let _read_guard = lock.read();
        self.scan(key, timestamp, file)
    }

    /// Scan a key's log front to back (called with the key's read lock held)
    ///
    /// The cache is only touched once the whole file scanned cleanly, so a
    /// failed scan leaves nothing behind that a later lookup could return.
    fn scan(&self, key: &str, timestamp: i64, file: File) -> Result<Option<String>> {
        let mut best = None;
        let mut skipped = 0usize;

        for record in RecordReader::new(BufReader::new(file)) {
            let Record { line, mut fields } = record?;

            if fields.len() < FIELD_COUNT {
                skipped += 1;
                continue;
            }

            // A bad timestamp fails the whole lookup, even if a later
            // record would have matched.
            let ts: i64 = fields[1].parse().map_err(|_| TempoError::InvalidTimestamp {
                key: key.to_string(),
                line,
                value: fields[1].clone(),
            })?;

            if ts == timestamp {
                best = Some(std::mem::take(&mut fields[2]));
            }
        }

        if skipped > 0 {
            tracing::debug!(key, skipped, "skipped short records during scan");
        }
        tracing::debug!(key, timestamp, found = best.is_some(), "log scanned");

        if let Some(value) = &best {
            self.cache.insert(key, timestamp, value.clone());
        }
        Ok(best)
    }

    /// Fetch (or create) the lock guarding a key's log
    fn key_lock(&self, key: &str) -> Arc<RwLock<()>> {
        let mut locks = self.key_locks.lock();
        if let Some(lock) = locks.get(key) {
            return Arc::clone(lock);
        }

        let lock = Arc::new(RwLock::new(()));
        locks.insert(key.to_string(), Arc::clone(&lock));
        lock
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Path of the log file for a key
    pub fn log_path(&self, key: &str) -> PathBuf {
        self.config
            .data_dir
            .join(format!("{}.{}", key, self.config.log_extension))
    }

    /// Number of cached (key, timestamp) pairs
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Cache hit/miss counters
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Number of keys with an entry in the lock table
    pub fn key_lock_count(&self) -> usize {
        self.key_locks.lock().len()
    }

    /// Whether a pair is currently cached
    pub fn is_cached(&self, key: &str, timestamp: i64) -> bool {
        self.cache.contains(key, timestamp)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Storer for Engine {
    fn save(&self, sequence: &Sequence) -> Result<()> {
        Engine::save(self, sequence)
    }

    fn get(&self, key: &str, timestamp: i64) -> Result<Option<String>> {
        Engine::get(self, key, timestamp)
    }
}
