//! Cleansed output writing
//!
//! One UTF-8 CSV per input file, named `processed_<original-name>.csv`, with
//! the semantic field names as header. Serialization goes through the typed
//! transaction models so the written form is exactly what the final
//! validator reads back.

use std::path::Path;

use tracing::info;

use crate::app::models::{BankTransaction, CardTransaction};
use crate::{Error, Result};

/// Write cleansed bank transactions to a processed output file
pub fn write_bank_transactions(path: &Path, transactions: &[BankTransaction]) -> Result<()> {
    write_records(path, transactions)
}

/// Write cleansed card transactions to a processed output file
pub fn write_card_transactions(path: &Path, transactions: &[CardTransaction]) -> Result<()> {
    write_records(path, transactions)
}

fn write_records<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        Error::csv_parsing(
            path.display().to_string(),
            "failed to create output file",
            Some(e),
        )
    })?;
    for record in records {
        writer.serialize(record).map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to write output row",
                Some(e),
            )
        })?;
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush {}", path.display()), e))?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
