//! The per-file processing pipeline

use std::path::{Path, PathBuf};

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use super::stats::{BatchStats, FileOutcome};
use crate::app::models::{
    BankTransaction, CardTransaction, Domain, RawCardRow, RemovedDuplicateRecord,
    ValidationErrorRecord,
};
use crate::app::services::column_mapper::{check_card_schema, map_bank_row, map_card_row};
use crate::app::services::duplicate_resolver::DuplicateResolver;
use crate::app::services::encoded_reader::EncodingDetectingReader;
use crate::app::services::row_validator::{
    validate_bank_row, validate_card_row, CardRowOutcome, RowValidity,
};
use crate::app::services::{cleanser, ledger::Ledger, output_writer};
use crate::config::{PipelineConfig, ValidationPolicy};
use crate::constants::{BANK_COLUMN_COUNT, CARD_COLUMN_COUNT, INPUT_FILE_PATTERN, PROCESSED_PREFIX};
use crate::{Error, Result};

/// Runs the cleansing pipeline over the raw exports of a domain
#[derive(Debug, Clone)]
pub struct PipelineRunner {
    config: PipelineConfig,
    reader: EncodingDetectingReader,
}

impl PipelineRunner {
    pub fn new(config: PipelineConfig) -> Self {
        let reader = EncodingDetectingReader::new(config.encodings.clone());
        Self { config, reader }
    }

    /// Process every bank export in the configured bank input directory
    pub fn run_bank(&self) -> Result<BatchStats> {
        let input_dir = self.config.bank_input_dir.clone();
        self.run_domain(Domain::Bank, &input_dir, |runner, path| {
            runner.process_bank_file(path)
        })
    }

    /// Process every card export in the configured card input directory
    pub fn run_card(&self) -> Result<BatchStats> {
        let input_dir = self.config.card_input_dir.clone();
        self.run_domain(Domain::Card, &input_dir, |runner, path| {
            runner.process_card_file(path)
        })
    }

    fn run_domain<F>(&self, domain: Domain, input_dir: &Path, process: F) -> Result<BatchStats>
    where
        F: Fn(&Self, &Path) -> Result<FileOutcome>,
    {
        if !input_dir.is_dir() {
            return Err(Error::configuration(format!(
                "{domain} input directory does not exist: {}",
                input_dir.display()
            )));
        }
        std::fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            Error::io(
                format!("cannot create {}", self.config.output_dir.display()),
                e,
            )
        })?;

        let files = discover_input_files(input_dir)?;
        info!(
            "Processing {} {} file(s) from {}",
            files.len(),
            domain,
            input_dir.display()
        );

        let mut stats = BatchStats::new(domain);
        stats.files_discovered = files.len();

        let progress = file_progress(files.len());
        for path in &files {
            progress.set_message(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
            match process(self, path) {
                Ok(outcome) => stats.absorb(&outcome),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    stats.files_failed += 1;
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!("{}", stats.summary());
        Ok(stats)
    }

    fn process_bank_file(&self, path: &Path) -> Result<FileOutcome> {
        let source_file = file_name(path);
        let row_set = self
            .reader
            .read_positional(path, BANK_COLUMN_COUNT, false)?;

        let mut outcome = FileOutcome {
            rows_read: row_set.rows.len() + row_set.dropped_rows,
            rows_dropped_malformed: row_set.dropped_rows,
            ..FileOutcome::default()
        };

        let mut transactions: Vec<BankTransaction> = Vec::new();
        let mut errors: Vec<ValidationErrorRecord> = Vec::new();
        let processed_at = Local::now().naive_local();

        for row in &row_set.rows {
            let raw = map_bank_row(&row.cells);
            match validate_bank_row(&raw) {
                RowValidity::Valid => transactions.push(cleanser::cleanse_bank_row(&raw)?),
                invalid @ RowValidity::Invalid(_) => {
                    outcome.rows_invalid += 1;
                    if let Some(message) = invalid.message() {
                        errors.push(ValidationErrorRecord {
                            row_index: row.index,
                            error_message: message,
                            source_file: source_file.clone(),
                            processed_at,
                        });
                    }
                }
            }
        }

        // Bank exclusions are always ledgered; the validation policy only
        // governs card rows.
        if !errors.is_empty() {
            warn!("{}: excluding {} invalid row(s)", source_file, errors.len());
            Ledger::new(self.config.validation_errors_path()).append(&errors)?;
        }

        if !transactions.is_empty() {
            let output_path = self.output_path(path);
            output_writer::write_bank_transactions(&output_path, &transactions)?;
            outcome.rows_written = transactions.len();
        }
        Ok(outcome)
    }

    fn process_card_file(&self, path: &Path) -> Result<FileOutcome> {
        let source_file = file_name(path);
        let row_set = self.reader.read_positional(path, CARD_COLUMN_COUNT, true)?;
        check_card_schema(&row_set, &source_file)?;

        let mut outcome = FileOutcome {
            rows_read: row_set.rows.len() + row_set.dropped_rows,
            rows_dropped_malformed: row_set.dropped_rows,
            ..FileOutcome::default()
        };

        let mut accepted: Vec<RawCardRow> = Vec::new();
        let mut errors: Vec<ValidationErrorRecord> = Vec::new();
        let processed_at = Local::now().naive_local();

        for row in &row_set.rows {
            let raw = map_card_row(&row.cells);
            match validate_card_row(&raw, self.config.processing_date) {
                CardRowOutcome::Valid => accepted.push(raw),
                CardRowOutcome::FutureDated(date) => {
                    // expected for pre-authorized charges, excluded without
                    // a ledger entry
                    outcome.rows_future_dated += 1;
                    info!(
                        "Excluding future-dated card row {} in {}: {}",
                        row.index, source_file, date
                    );
                }
                invalid @ CardRowOutcome::Invalid(_) => {
                    outcome.rows_invalid += 1;
                    if let Some(message) = invalid.message() {
                        errors.push(ValidationErrorRecord {
                            row_index: row.index,
                            error_message: message,
                            source_file: source_file.clone(),
                            processed_at,
                        });
                    }
                }
            }
        }

        self.record_card_validation_errors(&source_file, errors)?;

        let resolver = DuplicateResolver::new(&self.config.duplicate_allowlist);
        let resolved = resolver.resolve(accepted);
        outcome.duplicates_removed = resolved.removed.len();

        if !resolved.removed.is_empty() {
            let mut records = Vec::with_capacity(resolved.removed.len());
            for raw in &resolved.removed {
                records.push(RemovedDuplicateRecord::from_transaction(
                    cleanser::cleanse_card_row(raw)?,
                    source_file.clone(),
                    processed_at,
                ));
            }
            Ledger::new(self.config.removed_duplicates_path()).append(&records)?;
        }

        let mut transactions: Vec<CardTransaction> = Vec::with_capacity(resolved.retained.len());
        for raw in &resolved.retained {
            transactions.push(cleanser::cleanse_card_row(raw)?);
        }

        if !transactions.is_empty() {
            let output_path = self.output_path(path);
            output_writer::write_card_transactions(&output_path, &transactions)?;
            outcome.rows_written = transactions.len();
        }
        Ok(outcome)
    }

    /// Record excluded card rows per the configured validation policy
    fn record_card_validation_errors(
        &self,
        source_file: &str,
        errors: Vec<ValidationErrorRecord>,
    ) -> Result<()> {
        if errors.is_empty() {
            return Ok(());
        }
        match self.config.validation_policy {
            ValidationPolicy::StrictLogged => {
                warn!(
                    "{}: excluding {} invalid row(s)",
                    source_file,
                    errors.len()
                );
                Ledger::new(self.config.validation_errors_path()).append(&errors)?;
            }
            ValidationPolicy::LenientSilent => {
                info!(
                    "{}: silently dropping {} invalid row(s)",
                    source_file,
                    errors.len()
                );
            }
        }
        Ok(())
    }

    fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        self.config
            .output_dir
            .join(format!("{PROCESSED_PREFIX}{stem}.csv"))
    }
}

/// List the raw exports of a domain directory in sorted name order
fn discover_input_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = input_dir.join(INPUT_FILE_PATTERN);
    let pattern = pattern.to_string_lossy();

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(|e| Error::io(format!("cannot read {pattern}"), e.into_error()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_progress(total: usize) -> ProgressBar {
    let progress = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template(
        "[{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style.progress_chars("#>-"));
    progress
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
