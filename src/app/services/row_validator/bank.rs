//! Business rules for bank transaction rows

use super::fields::{parse_flexible_date, parse_separated_integer, parse_signed_amount};
use super::RowValidity;
use crate::app::models::RawBankRow;

/// Validate one bank row against the full rule set.
///
/// Rules are evaluated independently; a row is excluded if any rule fails and
/// every violation is reported. Future-dated rows pass here; the final
/// validator flags them across files instead.
pub fn validate_bank_row(row: &RawBankRow) -> RowValidity {
    let mut errors = Vec::new();

    match row.transaction_date.as_deref() {
        None => errors.push("Transaction date is missing".to_string()),
        Some(value) => {
            if parse_flexible_date(value).is_none() {
                errors.push("Invalid date format".to_string());
            }
        }
    }

    if let Some(value) = row.withdrawal.as_deref() {
        match parse_separated_integer(value) {
            Some(withdrawal) if withdrawal <= 0 => {
                errors.push("Withdrawal amount must be positive".to_string());
            }
            Some(_) => {}
            None => errors.push("Invalid withdrawal amount format".to_string()),
        }
    }

    if let Some(value) = row.deposit.as_deref() {
        match parse_separated_integer(value) {
            Some(deposit) if deposit <= 0 => {
                errors.push("Deposit amount must be positive".to_string());
            }
            Some(_) => {}
            None => errors.push("Invalid deposit amount format".to_string()),
        }
    }

    match row.balance.as_deref() {
        None => errors.push("Balance is missing".to_string()),
        Some(value) => match parse_signed_amount(value) {
            Some(balance) if balance < 0.0 => {
                errors.push("Balance cannot be negative for regular savings account".to_string());
            }
            Some(_) => {}
            None => errors.push("Invalid balance format".to_string()),
        },
    }

    if row
        .description
        .as_deref()
        .map(|description| description.trim().is_empty())
        .unwrap_or(true)
    {
        errors.push("Description is missing".to_string());
    }

    if row.withdrawal.is_some() && row.deposit.is_some() {
        errors.push("Both withdrawal and deposit cannot have values".to_string());
    }

    if errors.is_empty() {
        RowValidity::Valid
    } else {
        RowValidity::Invalid(errors)
    }
}
