//! Loading of cleansed outputs for cross-file validation
//!
//! Outputs are discovered by filename pattern inside the output directory
//! and read back with lenient numeric typing: every numeric column is an
//! optional float so the amount checks can observe fractional values a
//! cleanser bug might have let through.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{BANK_PROCESSED_PATTERN, CARD_PROCESSED_PATTERN};
use crate::{Error, Result};

/// A cleansed bank row as read back from a processed output file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessedBankRow {
    pub transaction_date: NaiveDate,
    #[serde(default)]
    pub withdrawal: Option<f64>,
    #[serde(default)]
    pub deposit: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub balance: Option<f64>,
}

/// A cleansed card row as read back from a processed output file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessedCardRow {
    pub transaction_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

/// File names that contributed rows, recorded verbatim in the report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedFiles {
    pub bank: Vec<String>,
    pub card: Vec<String>,
}

/// All cleansed rows of both domains, concatenated in file order
#[derive(Debug, Clone, Default)]
pub struct LoadedOutputs {
    pub bank: Vec<ProcessedBankRow>,
    pub card: Vec<ProcessedCardRow>,
    pub files: ProcessedFiles,
}

/// Discover and read every cleansed output under `output_dir`.
///
/// Bank outputs match `*bank*.csv`, card outputs `*card*.csv`; files are
/// read in sorted name order so repeated runs see identical row order.
pub fn load_processed_outputs(output_dir: &Path) -> Result<LoadedOutputs> {
    let mut outputs = LoadedOutputs::default();

    for path in matching_files(output_dir, BANK_PROCESSED_PATTERN)? {
        let rows: Vec<ProcessedBankRow> = read_rows(&path)?;
        debug!("Loaded {} bank rows from {}", rows.len(), path.display());
        outputs.bank.extend(rows);
        outputs.files.bank.push(file_name(&path));
    }
    for path in matching_files(output_dir, CARD_PROCESSED_PATTERN)? {
        let rows: Vec<ProcessedCardRow> = read_rows(&path)?;
        debug!("Loaded {} card rows from {}", rows.len(), path.display());
        outputs.card.extend(rows);
        outputs.files.card.push(file_name(&path));
    }

    Ok(outputs)
}

fn matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = dir.join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let mut paths = Vec::new();
    for entry in glob::glob(&full_pattern)? {
        let path = entry.map_err(|e| Error::io(format!("cannot read {full_pattern}"), e.into_error()))?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn read_rows<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        Error::csv_parsing(
            path.display().to_string(),
            "failed to open processed output",
            Some(e),
        )
    })?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to parse processed output",
                Some(e),
            )
        })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
