//! Business rules for card transaction rows

use chrono::NaiveDate;

use super::fields::{parse_flexible_date, parse_signed_amount};
use super::CardRowOutcome;
use crate::app::models::RawCardRow;

/// Validate one card row against the full rule set.
///
/// A parseable date after `processing_date` is a future-dated exclusion, an
/// expected outcome distinct from a rule violation. Rows that violate any
/// rule are invalid regardless of their date.
pub fn validate_card_row(row: &RawCardRow, processing_date: NaiveDate) -> CardRowOutcome {
    let mut errors = Vec::new();
    let mut future_date = None;

    match row.transaction_date.as_deref() {
        None => errors.push("Transaction date is missing".to_string()),
        Some(value) => match parse_flexible_date(value) {
            None => errors.push("Invalid date format".to_string()),
            Some(date) if date > processing_date => future_date = Some(date),
            Some(_) => {}
        },
    }

    match row.amount.as_deref() {
        None => errors.push("Amount is missing".to_string()),
        Some(value) => {
            if parse_signed_amount(value).is_none() {
                errors.push("Invalid amount format".to_string());
            }
        }
    }

    // Installment totals above zero must carry a positive installment count
    let inst_total = row.inst_total.as_deref().and_then(parse_signed_amount);
    if inst_total.map(|total| total > 0.0).unwrap_or(false) {
        match row.inst_num.as_deref() {
            None => errors.push("Installment count is missing".to_string()),
            Some(value) => match parse_signed_amount(value) {
                Some(count) if count <= 0.0 => {
                    errors.push("Installment count must be positive".to_string());
                }
                Some(_) => {}
                None => errors.push("Invalid installment count format".to_string()),
            },
        }
    } else if let Some(value) = row.inst_num.as_deref() {
        // A present installment count must be positive even without a total
        match parse_signed_amount(value) {
            Some(count) if count <= 0.0 => {
                errors.push("Installment count must be positive".to_string());
            }
            Some(_) => {}
            None => errors.push("Invalid installment count format".to_string()),
        }
    }

    if !errors.is_empty() {
        CardRowOutcome::Invalid(errors)
    } else if let Some(date) = future_date {
        CardRowOutcome::FutureDated(date)
    } else {
        CardRowOutcome::Valid
    }
}
