//! Per-Key Log Module
//!
//! Every key owns one append-only text file holding its full history.
//!
//! ## Responsibilities
//! - Encode sequences as comma-separated record lines
//! - Append records to a key's log in a single write
//! - Read records back front to back for scans
//! - Decide which keys are safe to use as file names
//!
//! ## File Format
//! ```text
//! {data_dir}/my-key.csv
//! ┌─────────────────────────────────────────┐
//! │ my-key,101,My Value                     │
//! │ my-key,102,"value, with a comma"        │
//! │ my-key,101,"two-line                    │
//! │ value"                                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Fields are `key,timestamp,value`. A field containing a comma, quote or
//! line break is wrapped in double quotes with inner quotes doubled.
//! Unquoted legacy files read back unchanged.

mod record;
mod writer;
mod reader;

pub use record::{encode_record, validate_key, FIELD_COUNT};
pub use writer::LogWriter;
pub use reader::{Record, RecordReader};
