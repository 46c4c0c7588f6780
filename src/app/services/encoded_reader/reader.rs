//! Positional row reading with multi-encoding retry

use std::path::Path;
use tracing::{debug, error, warn};

use super::decoder::{decode_strict, resolve_encoding};
use crate::{Error, Result};

/// One data row of a raw export.
///
/// `index` counts accepted data rows from zero; dropped rows do not consume
/// an index, matching the row numbering recorded in the error ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalRow {
    pub index: usize,
    /// Cell contents in physical column order, blank cells collapsed to `None`
    pub cells: Vec<Option<String>>,
}

/// The parsed content of one raw export file
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalRowSet {
    /// Name of the encoding that decoded the file
    pub encoding: String,
    /// Physical column count of the header line
    pub header_columns: usize,
    pub rows: Vec<PositionalRow>,
    /// Number of malformed rows dropped during parsing
    pub dropped_rows: usize,
}

/// CSV reader that detects the text encoding of a raw export.
///
/// Encodings are tried in the configured priority order; the first candidate
/// that decodes the whole file without malformed sequences and yields a
/// parseable CSV wins. The first line of every export is a vendor header and
/// is skipped.
#[derive(Debug, Clone)]
pub struct EncodingDetectingReader {
    encodings: Vec<String>,
}

impl EncodingDetectingReader {
    /// Create a reader with an encoding priority list
    pub fn new(encodings: Vec<String>) -> Self {
        Self { encodings }
    }

    /// Read a raw export into a positional row set.
    ///
    /// `expected_columns` is the fixed column count of the domain layout.
    /// With `allow_extra_columns` set, rows wider than the layout are kept in
    /// full for the mapper to truncate; otherwise any deviating row is
    /// dropped with a warning.
    pub fn read_positional(
        &self,
        path: &Path,
        expected_columns: usize,
        allow_extra_columns: bool,
    ) -> Result<PositionalRowSet> {
        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;

        for name in &self.encodings {
            let Some(encoding) = resolve_encoding(name) else {
                warn!("Unknown encoding '{}' in configuration, skipping", name);
                continue;
            };

            let Some(text) = decode_strict(encoding, &bytes) else {
                debug!("Encoding {} rejected for {}", name, path.display());
                continue;
            };

            match Self::parse_content(&text, expected_columns, allow_extra_columns, name) {
                Ok(row_set) => {
                    debug!(
                        "Decoded {} as {} ({} rows, {} dropped)",
                        path.display(),
                        name,
                        row_set.rows.len(),
                        row_set.dropped_rows
                    );
                    return Ok(row_set);
                }
                Err(e) => {
                    // A structural parse failure under one decode is not
                    // proof of a wrong encoding, but the historical behavior
                    // is to move on to the next candidate.
                    error!(
                        "Parse failed for {} under encoding {}: {}",
                        path.display(),
                        name,
                        e
                    );
                    continue;
                }
            }
        }

        Err(Error::decode(path.display().to_string(), &self.encodings))
    }

    /// Parse decoded CSV text into positional rows.
    ///
    /// Rows with a deviating column count are warnings, not parse failures:
    /// they are dropped and never cause a retry under another encoding.
    fn parse_content(
        text: &str,
        expected_columns: usize,
        allow_extra_columns: bool,
        encoding_name: &str,
    ) -> Result<PositionalRowSet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let header_columns = csv_reader
            .headers()
            .map_err(|e| {
                Error::csv_parsing("input", "failed to read CSV header line", Some(e))
            })?
            .len();

        let mut rows = Vec::new();
        let mut dropped_rows = 0;
        let mut index = 0;

        for record_result in csv_reader.records() {
            let record = match record_result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Dropping malformed CSV line: {}", e);
                    dropped_rows += 1;
                    continue;
                }
            };

            let width = record.len();
            let acceptable = if allow_extra_columns {
                width >= expected_columns
            } else {
                width == expected_columns
            };
            if !acceptable {
                warn!(
                    "Dropping row with {} columns, expected {}",
                    width, expected_columns
                );
                dropped_rows += 1;
                continue;
            }

            let cells = record
                .iter()
                .map(|cell| {
                    let trimmed = cell.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(trimmed.to_string())
                    }
                })
                .collect();

            rows.push(PositionalRow { index, cells });
            index += 1;
        }

        Ok(PositionalRowSet {
            encoding: encoding_name.to_string(),
            header_columns,
            rows,
            dropped_rows,
        })
    }
}
