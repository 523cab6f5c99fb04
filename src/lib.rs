//! # TempoKV
//!
//! A time-versioned key-value store with:
//! - One append-only log file per key
//! - Exact-timestamp point lookups, last write wins on collisions
//! - A read-through cache that never remembers misses
//! - TCP-based client protocol
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │              (Acceptor + Worker Pool)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Request Layer                               │
//! │        (PUT / GET → Storer, errors verbatim)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ dyn Storer
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Engine                                  │
//! │           (per-key Single Writer / Multi Reader)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Key Logs   │          │    Cache    │
//!   │  (Append)   │          │  (RwLock)   │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod sequence;

pub mod log;
pub mod cache;
pub mod storage;
pub mod network;
pub mod protocol;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, TempoError};
pub use config::Config;
pub use engine::Engine;
pub use sequence::Sequence;
pub use storage::{MemoryStore, Storer};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TempoKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
