//! Transaction Processor Library
//!
//! A Rust library for cleansing raw bank and credit-card transaction CSV
//! exports into a normalized, validated form ready for warehouse import.
//!
//! This library provides tools for:
//! - Reading CSV files with unknown Japanese/UTF-8 text encodings
//! - Mapping positional export columns to semantic field names
//! - Validating rows against per-domain structural and business rules
//! - Removing unintended duplicate card charges with an allowlist exception
//! - Type-coercing and normalizing the surviving rows
//! - Recording excluded rows in append-only audit ledgers
//! - Running cross-file anomaly checks that gate the downstream loader

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cleanser;
        pub mod column_mapper;
        pub mod duplicate_resolver;
        pub mod encoded_reader;
        pub mod final_validator;
        pub mod ledger;
        pub mod output_writer;
        pub mod pipeline;
        pub mod row_validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BankTransaction, CardTransaction, Domain};
pub use app::services::final_validator::{FinalValidator, ValidationReport};
pub use app::services::pipeline::PipelineRunner;
pub use config::PipelineConfig;

/// Result type alias for the transaction processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for transaction processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// No configured encoding could decode a file
    #[error("unable to decode file '{file}' with any of the encodings: {encodings:?}")]
    Decode { file: String, encodings: Vec<String> },

    /// A file does not carry the expected positional column layout
    #[error("schema error in file '{file}': expected at least {expected} columns, found {found}")]
    Schema {
        file: String,
        expected: usize,
        found: usize,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error outside the per-row rule set
    #[error("data validation error: {message}")]
    DataValidation { message: String },

    /// Ledger read or rewrite failure
    #[error("ledger error for '{path}': {message}")]
    Ledger { path: String, message: String },

    /// Validation report serialization or lookup failure
    #[error("report error: {message}")]
    Report { message: String },

    /// Glob pattern error while scanning directories
    #[error("glob error: {message}")]
    Glob {
        message: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decode error listing the encodings that were attempted
    pub fn decode(file: impl Into<String>, encodings: &[String]) -> Self {
        Self::Decode {
            file: file.into(),
            encodings: encodings.to_vec(),
        }
    }

    /// Create a schema error for a file with too few columns
    pub fn schema(file: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::Schema {
            file: file.into(),
            expected,
            found,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a ledger error
    pub fn ledger(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Ledger {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Report {
            message: format!("JSON serialization failed: {error}"),
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::Glob {
            message: "invalid glob pattern".to_string(),
            source: error,
        }
    }
}
