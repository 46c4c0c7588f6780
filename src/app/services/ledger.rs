//! Append-only ledgers for excluded rows
//!
//! A ledger is one CSV file per concern (`validation_errors.csv`,
//! `removed_duplicates.csv`). Appending reads the existing records, rewrites
//! the whole file through a temporary sibling and renames it into place, so a
//! crash mid-write never truncates the ledger. Records are never altered or
//! deleted once written.
//!
//! The read-rewrite cycle is not safe under concurrent writers: two pipeline
//! runs appending to the same ledger race and one run's records can be lost.
//! Runs against the same output directory must be serialized by the
//! operator.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::{Error, Result};

/// An append-only CSV ledger
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    /// Create a handle for the ledger at `path`; the file may not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record currently in the ledger; an absent file is empty
    pub fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            Error::ledger(self.path.display().to_string(), format!("open failed: {e}"))
        })?;
        reader
            .deserialize()
            .collect::<std::result::Result<Vec<T>, csv::Error>>()
            .map_err(|e| {
                Error::ledger(self.path.display().to_string(), format!("read failed: {e}"))
            })
    }

    /// Append records, preserving everything already in the ledger.
    ///
    /// Returns the number of records appended. An empty batch leaves the
    /// file untouched.
    pub fn append<T: Serialize + DeserializeOwned>(&self, records: &[T]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let existing: Vec<T> = self.read_all()?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::ledger(
                    self.path.display().to_string(),
                    format!("cannot create ledger directory: {e}"),
                )
            })?;
        }

        // Rewrite through a sibling and rename so readers never observe a
        // partially written ledger.
        let temp_path = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_path(&temp_path).map_err(|e| {
                Error::ledger(
                    self.path.display().to_string(),
                    format!("cannot create temp file: {e}"),
                )
            })?;
            for record in existing.iter().chain(records.iter()) {
                writer.serialize(record).map_err(|e| {
                    Error::ledger(self.path.display().to_string(), format!("write failed: {e}"))
                })?;
            }
            writer.flush().map_err(|e| {
                Error::ledger(self.path.display().to_string(), format!("flush failed: {e}"))
            })?;
        }
        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            Error::ledger(self.path.display().to_string(), format!("rename failed: {e}"))
        })?;

        info!(
            "Appended {} records to {} ({} total)",
            records.len(),
            self.path.display(),
            existing.len() + records.len()
        );
        Ok(records.len())
    }
}
