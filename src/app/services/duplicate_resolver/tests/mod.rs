//! Tests for duplicate resolution


use crate::app::models::RawCardRow;
use crate::constants::DUPLICATE_ALLOWLIST;

/// Allowlist as configured by default
pub fn default_allowlist() -> Vec<String> {
    DUPLICATE_ALLOWLIST.iter().map(|p| p.to_string()).collect()
}

/// Build a minimal valid card row
pub fn card_row(date: &str, amount: &str, description: &str) -> RawCardRow {
    RawCardRow {
        transaction_date: Some(date.to_string()),
        description: Some(description.to_string()),
        amount: Some(amount.to_string()),
        ..RawCardRow::default()
    }
}
