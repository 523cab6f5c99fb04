//! Sequence records
//!
//! A sequence is one version of a key: the value it held at a timestamp.

use serde::{Deserialize, Serialize};

/// A single (key, timestamp, value) record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Groups all versions of a logical value
    pub key: String,

    /// Payload for this version
    pub value: String,

    /// Version marker, neither unique nor monotonic per key
    pub timestamp: i64,
}

impl Sequence {
    pub fn new(key: impl Into<String>, timestamp: i64, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            timestamp,
        }
    }
}
