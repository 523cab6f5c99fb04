//! Error types for TempoKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TempoError
pub type Result<T> = std::result::Result<T, TempoError>;

/// Unified error type for TempoKV operations
#[derive(Debug, Error)]
pub enum TempoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    /// The key has never been written (its log file does not exist)
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// The key cannot be used as a log file name
    #[error("invalid key {0:?}: keys must be non-empty file name components")]
    InvalidKey(String),

    /// A record's timestamp field could not be parsed during a scan
    #[error("invalid timestamp {value:?} in log for key {key:?} at line {line}")]
    InvalidTimestamp {
        key: String,
        line: usize,
        value: String,
    },

    /// A quoted field was still open at end of file
    #[error("unterminated quoted field starting at line {line}")]
    UnterminatedQuote { line: usize },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The server answered with a non-success status
    #[error("{0}")]
    Remote(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for TempoError {
    fn from(err: bincode::Error) -> Self {
        TempoError::Serialization(err.to_string())
    }
}
