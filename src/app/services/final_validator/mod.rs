//! Cross-file anomaly validation over cleansed outputs
//!
//! Runs after every file of both domains has been cleansed and written. All
//! cleansed outputs are loaded and concatenated per domain, then four
//! independent, non-blocking checks accumulate findings into the validation
//! report: dates (future dates, duplicate date/description pairs, gaps),
//! amounts (large, small, non-integral), descriptions (mojibake and special
//! glyphs) and bank balance continuity.
//!
//! The report gates nothing by itself; the downstream loader reads its
//! `status` field and treats date findings as warnings and everything else
//! as critical.

pub mod amount_checks;
pub mod balance_checks;
pub mod date_checks;
pub mod description_checks;
pub mod loader;
pub mod report;

#[cfg(test)]
pub mod tests;

pub use loader::{LoadedOutputs, ProcessedBankRow, ProcessedCardRow, ProcessedFiles};
pub use report::{ReportStatus, ValidationReport};

use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::Result;

/// Validator for the full set of cleansed outputs
#[derive(Debug, Clone)]
pub struct FinalValidator {
    config: PipelineConfig,
}

impl FinalValidator {
    /// Create a validator over the configured output directory
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Load all cleansed outputs and run every check.
    ///
    /// Findings never abort the run; the only errors are I/O or parse
    /// failures on the output files themselves.
    pub fn validate(&self) -> Result<ValidationReport> {
        let outputs = loader::load_processed_outputs(&self.config.output_dir)?;
        info!(
            "Loaded {} bank and {} card rows from {} files",
            outputs.bank.len(),
            outputs.card.len(),
            outputs.files.bank.len() + outputs.files.card.len()
        );

        let date_issues = date_checks::check_dates(
            &outputs.bank,
            &outputs.card,
            self.config.processing_date,
            self.config.date_gap_days,
        );
        let amount_issues = amount_checks::check_amounts(
            &outputs.bank,
            &outputs.card,
            self.config.large_amount_threshold,
            self.config.small_withdrawal_threshold,
        );
        let description_issues =
            description_checks::check_descriptions(&outputs.bank, &outputs.card);
        let balance_issues =
            balance_checks::check_balance_continuity(&outputs.bank, self.config.balance_tolerance);

        for finding in date_issues
            .iter()
            .chain(&amount_issues)
            .chain(&description_issues)
            .chain(&balance_issues)
        {
            warn!("{}", finding);
        }

        let report = ValidationReport::new(
            date_issues,
            amount_issues,
            description_issues,
            balance_issues,
            outputs.files,
        );
        info!("Validation complete: {}", report.summary);
        Ok(report)
    }
}
