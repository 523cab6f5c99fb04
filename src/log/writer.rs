//! Log Writer
//!
//! Handles appending records to a key's log file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SyncStrategy;
use crate::error::Result;
use crate::sequence::Sequence;

use super::encode_record;

/// Appends records to one key's log file
pub struct LogWriter {
    file: File,
    path: PathBuf,
    sync_strategy: SyncStrategy,
}

impl LogWriter {
    /// Open or create a log file in append mode
    pub fn open(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            sync_strategy,
        })
    }

    /// Append one record
    ///
    /// The whole record goes out in a single write so a line is never
    /// interleaved with another writer's bytes.
    pub fn append(&mut self, sequence: &Sequence) -> Result<()> {
        let line = encode_record(sequence);
        self.file.write_all(line.as_bytes())?;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            self.sync()?;
        }
        Ok(())
    }

    /// Force sync to disk
    pub fn sync(&mut self) -> Result<()> {
        self.file.sync_data()?;
        Ok(())
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
