//! Configuration for pipeline runs.
//!
//! All tunable behavior lives in an explicit [`PipelineConfig`] value that is
//! passed into each component; there are no process-wide singletons. Defaults
//! mirror the thresholds and directory layout of the production deployment.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    BALANCE_TOLERANCE, DATE_GAP_DAYS, DUPLICATE_ALLOWLIST, ENCODING_PRIORITY,
    LARGE_AMOUNT_THRESHOLD, SMALL_WITHDRAWAL_THRESHOLD,
};

/// Policy applied to rows the card validator excludes.
///
/// The two deployed generations of the card cleanser disagreed on whether an
/// excluded row should be written to the error ledger or silently dropped.
/// The policy is now an explicit configuration choice applied consistently to
/// every excluded row of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationPolicy {
    /// Record every excluded row in the error ledger with its reasons
    StrictLogged,
    /// Drop excluded rows with only a log line
    LenientSilent,
}

/// Global configuration for a transaction processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory containing raw bank exports
    pub bank_input_dir: PathBuf,

    /// Directory containing raw card exports
    pub card_input_dir: PathBuf,

    /// Directory receiving cleansed outputs and ledgers
    pub output_dir: PathBuf,

    /// Directory receiving validation report files
    pub report_dir: PathBuf,

    /// Text encodings attempted in priority order
    pub encodings: Vec<String>,

    /// The date the run is considered to execute on.
    ///
    /// Card rows dated after this day are excluded as future-dated, and the
    /// final date check flags anything beyond it.
    pub processing_date: NaiveDate,

    /// How excluded card rows are recorded
    pub validation_policy: ValidationPolicy,

    /// Description substrings exempting duplicate groups from removal
    pub duplicate_allowlist: Vec<String>,

    /// Threshold at or above which a transaction is flagged as large
    pub large_amount_threshold: f64,

    /// Threshold below which a positive bank withdrawal is flagged as small
    pub small_withdrawal_threshold: f64,

    /// Maximum allowed gap in days between consecutive transactions
    pub date_gap_days: i64,

    /// Tolerance in currency units for the balance continuity check
    pub balance_tolerance: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bank_input_dir: PathBuf::from("data/csv/bank"),
            card_input_dir: PathBuf::from("data/csv/card"),
            output_dir: PathBuf::from("data/processed"),
            report_dir: PathBuf::from("logs"),
            encodings: ENCODING_PRIORITY.iter().map(|e| e.to_string()).collect(),
            processing_date: Local::now().date_naive(),
            validation_policy: ValidationPolicy::StrictLogged,
            duplicate_allowlist: DUPLICATE_ALLOWLIST.iter().map(|p| p.to_string()).collect(),
            large_amount_threshold: LARGE_AMOUNT_THRESHOLD,
            small_withdrawal_threshold: SMALL_WITHDRAWAL_THRESHOLD,
            date_gap_days: DATE_GAP_DAYS,
            balance_tolerance: BALANCE_TOLERANCE,
        }
    }
}

impl PipelineConfig {
    /// Create configuration with a custom bank input directory
    pub fn with_bank_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bank_input_dir = dir.into();
        self
    }

    /// Create configuration with a custom card input directory
    pub fn with_card_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.card_input_dir = dir.into();
        self
    }

    /// Create configuration with a custom output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Create configuration with a custom report directory
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = dir.into();
        self
    }

    /// Create configuration with a fixed processing date
    pub fn with_processing_date(mut self, date: NaiveDate) -> Self {
        self.processing_date = date;
        self
    }

    /// Create configuration with a custom validation policy
    pub fn with_validation_policy(mut self, policy: ValidationPolicy) -> Self {
        self.validation_policy = policy;
        self
    }

    /// Create configuration with a custom duplicate allowlist
    pub fn with_duplicate_allowlist(mut self, patterns: Vec<String>) -> Self {
        self.duplicate_allowlist = patterns;
        self
    }

    /// Path of the row validation error ledger
    pub fn validation_errors_path(&self) -> PathBuf {
        self.output_dir.join(crate::constants::VALIDATION_ERRORS_FILE)
    }

    /// Path of the removed duplicates ledger
    pub fn removed_duplicates_path(&self) -> PathBuf {
        self.output_dir.join(crate::constants::REMOVED_DUPLICATES_FILE)
    }
}
