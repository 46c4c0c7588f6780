//! Validation report persistence
//!
//! Each validation run writes one timestamped JSON report into the report
//! directory. The status is `ERROR` whenever any check produced a finding;
//! the import gate downgrades date findings to warnings and only blocks on
//! the other three categories.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::loader::ProcessedFiles;
use crate::constants::{REPORT_FILE_PATTERN, REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::{Error, Result};

/// Overall outcome of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Ok => f.write_str("OK"),
            ReportStatus::Error => f.write_str("ERROR"),
        }
    }
}

/// The findings of one validation run over all cleansed outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub status: ReportStatus,
    pub summary: String,
    pub date_issues: Vec<String>,
    pub amount_issues: Vec<String>,
    pub description_issues: Vec<String>,
    pub balance_issues: Vec<String>,
    pub processed_files: ProcessedFiles,
}

impl ValidationReport {
    /// Assemble a report from the per-check findings
    pub fn new(
        date_issues: Vec<String>,
        amount_issues: Vec<String>,
        description_issues: Vec<String>,
        balance_issues: Vec<String>,
        processed_files: ProcessedFiles,
    ) -> Self {
        let total = date_issues.len()
            + amount_issues.len()
            + description_issues.len()
            + balance_issues.len();
        let (status, summary) = if total == 0 {
            (ReportStatus::Ok, "All validation checks passed".to_string())
        } else {
            (
                ReportStatus::Error,
                format!("Validation detected {total} finding(s)"),
            )
        };
        Self {
            status,
            summary,
            date_issues,
            amount_issues,
            description_issues,
            balance_issues,
            processed_files,
        }
    }

    /// Total number of findings across all checks
    pub fn total_findings(&self) -> usize {
        self.date_issues.len()
            + self.amount_issues.len()
            + self.description_issues.len()
            + self.balance_issues.len()
    }

    /// Whether the downstream import may proceed on this report.
    ///
    /// Date findings alone do not block: future-dated rows and gaps are
    /// reviewed by hand after import. Any amount, description or balance
    /// finding blocks.
    pub fn import_allowed(&self) -> bool {
        self.amount_issues.is_empty()
            && self.description_issues.is_empty()
            && self.balance_issues.is_empty()
    }

    /// Write the report as pretty-printed JSON, named by `timestamp`
    pub fn write_to(&self, report_dir: &Path, timestamp: NaiveDateTime) -> Result<PathBuf> {
        std::fs::create_dir_all(report_dir)
            .map_err(|e| Error::io(format!("cannot create {}", report_dir.display()), e))?;

        let file_name = format!(
            "{REPORT_FILE_PREFIX}{}.json",
            timestamp.format(REPORT_TIMESTAMP_FORMAT)
        );
        let path = report_dir.join(file_name);

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::report(format!("serialization failed: {e}")))?;
        std::fs::write(&path, json)
            .map_err(|e| Error::io(format!("cannot write {}", path.display()), e))?;

        info!("Wrote validation report to {}", path.display());
        Ok(path)
    }

    /// Read a report back from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("cannot read {}", path.display()), e))?;
        serde_json::from_str(&json).map_err(|e| {
            Error::report(format!("malformed report {}: {e}", path.display()))
        })
    }

    /// Find and load the most recently written report in `report_dir`.
    ///
    /// Returns `None` when the directory holds no reports.
    pub fn load_latest(report_dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let pattern = report_dir.join(REPORT_FILE_PATTERN);
        let pattern = pattern.to_string_lossy();

        let mut candidates = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path =
                entry.map_err(|e| Error::io(format!("cannot read {pattern}"), e.into_error()))?;
            let modified = std::fs::metadata(&path)
                .and_then(|m| m.modified())
                .map_err(|e| Error::io(format!("cannot stat {}", path.display()), e))?;
            candidates.push((modified, path));
        }

        // report names embed a second-resolution timestamp; the file name
        // breaks mtime ties deterministically
        candidates.sort();
        match candidates.pop() {
            Some((_, path)) => {
                let report = Self::load(&path)?;
                Ok(Some((path, report)))
            }
            None => Ok(None),
        }
    }
}
