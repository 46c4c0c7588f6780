//! Tests for row validation


use crate::app::models::{RawBankRow, RawCardRow};

fn opt(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Build a bank row from cell texts; empty strings become absent cells
pub fn bank_row(
    date: &str,
    withdrawal: &str,
    deposit: &str,
    description: &str,
    balance: &str,
) -> RawBankRow {
    RawBankRow {
        transaction_date: opt(date),
        withdrawal: opt(withdrawal),
        deposit: opt(deposit),
        description: opt(description),
        balance: opt(balance),
        ..RawBankRow::default()
    }
}

/// Build a card row from cell texts; empty strings become absent cells
pub fn card_row(
    date: &str,
    description: &str,
    amount: &str,
    inst_total: &str,
    inst_num: &str,
) -> RawCardRow {
    RawCardRow {
        transaction_date: opt(date),
        description: opt(description),
        amount: opt(amount),
        inst_total: opt(inst_total),
        inst_num: opt(inst_num),
        ..RawCardRow::default()
    }
}
