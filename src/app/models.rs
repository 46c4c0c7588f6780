//! Core data models for transaction processing
//!
//! Raw rows carry the untyped cell contents exactly as mapped from the
//! positional export columns; cleansed transactions carry the typed,
//! normalized form written to the processed outputs. Ledger records are the
//! append-only audit trail of everything the pipeline excluded.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The two transaction domains handled by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Bank,
    Card,
}

impl Domain {
    /// Lowercase name used in log lines and finding messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Bank => "bank",
            Domain::Card => "card",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bank export row after column mapping, before validation.
///
/// Every field is the raw cell text with blank cells already collapsed to
/// `None`. The three extension fields are absent in current exports and are
/// carried as all-missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawBankRow {
    pub transaction_date: Option<String>,
    pub withdrawal: Option<String>,
    pub deposit: Option<String>,
    pub description: Option<String>,
    pub balance: Option<String>,
    pub memo: Option<String>,
    pub label: Option<String>,
    pub transaction_type: Option<String>,
    pub counter_party: Option<String>,
    pub transaction_code: Option<String>,
}

/// A card export row after column mapping, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCardRow {
    pub transaction_date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub inst_total: Option<String>,
    pub inst_num: Option<String>,
    pub inst_amount: Option<String>,
    pub memo: Option<String>,
}

/// A cleansed bank transaction.
///
/// Invariant: at most one of `withdrawal` and `deposit` is present, both are
/// positive when present, and `balance` is non-negative. Row validation
/// guarantees these before cleansing constructs the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransaction {
    pub transaction_date: NaiveDate,
    pub withdrawal: Option<i64>,
    pub deposit: Option<i64>,
    pub description: String,
    pub balance: i64,
    pub memo: Option<String>,
    pub label: Option<String>,
    pub transaction_type: Option<String>,
    pub counter_party: Option<String>,
    pub transaction_code: Option<String>,
}

/// A cleansed card transaction.
///
/// Invariant: when `inst_total` is positive, `inst_num` is present and
/// positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTransaction {
    pub transaction_date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,
    pub inst_total: Option<f64>,
    pub inst_num: Option<f64>,
    pub inst_amount: Option<f64>,
    pub memo: Option<String>,
}

/// One row excluded by row validation, appended to the error ledger.
///
/// Created once per invalid row per run; never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorRecord {
    /// Index of the row within its source file, counting accepted data rows
    pub row_index: usize,
    /// All violated rule descriptions joined with "; "
    pub error_message: String,
    pub source_file: String,
    pub processed_at: NaiveDateTime,
}

/// One row removed by duplicate resolution, appended to the audit ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedDuplicateRecord {
    pub transaction_date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,
    pub inst_total: Option<f64>,
    pub inst_num: Option<f64>,
    pub inst_amount: Option<f64>,
    pub memo: Option<String>,
    pub source_file: String,
    pub processed_at: NaiveDateTime,
}

impl RemovedDuplicateRecord {
    /// Build an audit record from the cleansed form of a removed row
    pub fn from_transaction(
        transaction: CardTransaction,
        source_file: impl Into<String>,
        processed_at: NaiveDateTime,
    ) -> Self {
        Self {
            transaction_date: transaction.transaction_date,
            description: transaction.description,
            amount: transaction.amount,
            inst_total: transaction.inst_total,
            inst_num: transaction.inst_num,
            inst_amount: transaction.inst_amount,
            memo: transaction.memo,
            source_file: source_file.into(),
            processed_at,
        }
    }
}
