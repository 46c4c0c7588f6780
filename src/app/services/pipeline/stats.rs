//! Run statistics for a per-domain pipeline pass

use crate::app::models::Domain;

/// Row counts for one processed input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOutcome {
    pub rows_read: usize,
    pub rows_dropped_malformed: usize,
    pub rows_invalid: usize,
    pub rows_future_dated: usize,
    pub duplicates_removed: usize,
    pub rows_written: usize,
}

/// Aggregated counts for one domain pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub domain_name: String,
    pub files_discovered: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub rows_read: usize,
    pub rows_dropped_malformed: usize,
    pub rows_invalid: usize,
    pub rows_future_dated: usize,
    pub duplicates_removed: usize,
    pub rows_written: usize,
}

impl BatchStats {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain_name: domain.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Fold one file's counts into the batch
    pub fn absorb(&mut self, outcome: &FileOutcome) {
        self.files_processed += 1;
        self.rows_read += outcome.rows_read;
        self.rows_dropped_malformed += outcome.rows_dropped_malformed;
        self.rows_invalid += outcome.rows_invalid;
        self.rows_future_dated += outcome.rows_future_dated;
        self.duplicates_removed += outcome.duplicates_removed;
        self.rows_written += outcome.rows_written;
    }

    /// One-line summary for log output
    pub fn summary(&self) -> String {
        format!(
            "{}: {}/{} files, {} rows read, {} malformed, {} invalid, {} future-dated, {} duplicates removed, {} written ({} file(s) failed)",
            self.domain_name,
            self.files_processed,
            self.files_discovered,
            self.rows_read,
            self.rows_dropped_malformed,
            self.rows_invalid,
            self.rows_future_dated,
            self.duplicates_removed,
            self.rows_written,
            self.files_failed
        )
    }
}
