//! Storage Module
//!
//! The capability boundary between the request layer and a backend.
//!
//! ## Responsibilities
//! - Define the `Storer` contract: save a sequence, resolve (key, timestamp)
//! - Let the request layer run against any backend (file engine,
//!   in-memory store, test doubles)
//!
//! ## Contract
//! - `save` either appends the record or returns the backend's error
//! - `get` returns `Ok(Some(value))` for a match, `Ok(None)` when the key
//!   exists but has no record at that timestamp, and an error when the
//!   key is unknown or the backend fails
//! - When a (key, timestamp) pair was saved more than once, the last save wins

mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::sequence::Sequence;

/// Time-versioned key-value storage
pub trait Storer: Send + Sync {
    /// Append a sequence to its key's history
    fn save(&self, sequence: &Sequence) -> Result<()>;

    /// Resolve the value a key held at an exact timestamp
    fn get(&self, key: &str, timestamp: i64) -> Result<Option<String>>;
}
