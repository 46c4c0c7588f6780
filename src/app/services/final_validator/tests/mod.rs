//! Shared fixtures for the final validator tests

pub mod amount_checks_tests;
pub mod date_checks_tests;
pub mod description_checks_tests;
pub mod report_tests;

use chrono::NaiveDate;

use super::loader::{ProcessedBankRow, ProcessedCardRow};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn bank_row(
    transaction_date: &str,
    withdrawal: Option<f64>,
    deposit: Option<f64>,
    balance: Option<f64>,
    description: &str,
) -> ProcessedBankRow {
    ProcessedBankRow {
        transaction_date: date(transaction_date),
        withdrawal,
        deposit,
        description: Some(description.to_string()),
        balance,
    }
}

pub fn card_row(transaction_date: &str, amount: f64, description: &str) -> ProcessedCardRow {
    ProcessedCardRow {
        transaction_date: date(transaction_date),
        description: Some(description.to_string()),
        amount: Some(amount),
    }
}
