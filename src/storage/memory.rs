//! In-memory Storer
//!
//! Keeps every history in RAM. Nothing survives the process.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{Result, TempoError};
use crate::sequence::Sequence;

use super::Storer;

/// Volatile backend with the same lookup semantics as the file engine
#[derive(Default)]
pub struct MemoryStore {
    /// Per-key history in append order
    histories: RwLock<HashMap<String, Vec<(i64, String)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held for a key (0 if unknown)
    pub fn history_len(&self, key: &str) -> usize {
        self.histories.read().get(key).map_or(0, Vec::len)
    }
}

impl Storer for MemoryStore {
    fn save(&self, sequence: &Sequence) -> Result<()> {
        self.histories
            .write()
            .entry(sequence.key.clone())
            .or_default()
            .push((sequence.timestamp, sequence.value.clone()));
        Ok(())
    }

    fn get(&self, key: &str, timestamp: i64) -> Result<Option<String>> {
        let histories = self.histories.read();
        let history = histories
            .get(key)
            .ok_or_else(|| TempoError::KeyNotFound(key.to_string()))?;

        Ok(history
            .iter()
            .rev()
            .find(|(ts, _)| *ts == timestamp)
            .map(|(_, value)| value.clone()))
    }
}
