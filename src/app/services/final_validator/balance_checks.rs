//! Bank balance continuity check
//!
//! Rows are ordered by date, and within a day by descending balance, which
//! reconstructs intra-day chronology for withdrawal-heavy days. The closing
//! balance of each day becomes the anchor for the next day: every row of the
//! new day must satisfy `anchor + deposit - withdrawal == stated balance`
//! within the configured tolerance. Only rows carrying a withdrawal or
//! deposit advance the tracked balance; a movement-less row is checked
//! against the anchor but never becomes one.

use chrono::NaiveDate;

use super::amount_checks::format_amount;
use super::loader::ProcessedBankRow;

/// Verify day-over-day balance continuity across all bank rows
pub fn check_balance_continuity(bank: &[ProcessedBankRow], tolerance: f64) -> Vec<String> {
    let mut rows: Vec<&ProcessedBankRow> = bank.iter().collect();
    rows.sort_by(|a, b| {
        a.transaction_date.cmp(&b.transaction_date).then(
            b.balance
                .unwrap_or(f64::NEG_INFINITY)
                .total_cmp(&a.balance.unwrap_or(f64::NEG_INFINITY)),
        )
    });

    let mut findings = Vec::new();
    let mut current_date: Option<NaiveDate> = None;
    let mut current_balance: Option<f64> = None;
    let mut anchor: Option<f64> = None;

    for row in rows {
        if current_date != Some(row.transaction_date) {
            current_date = Some(row.transaction_date);
            anchor = current_balance;
        }

        let Some(stated) = row.balance else { continue };

        if let Some(anchor) = anchor {
            let expected =
                anchor + row.deposit.unwrap_or(0.0) - row.withdrawal.unwrap_or(0.0);
            if (expected - stated).abs() > tolerance {
                findings.push(format!(
                    "bank balance discontinuity on {}: expected {} but found {} - {}",
                    row.transaction_date,
                    format_amount(expected),
                    format_amount(stated),
                    row.description.as_deref().unwrap_or("")
                ));
            }
        }

        if row.withdrawal.is_some() || row.deposit.is_some() {
            current_balance = Some(stated);
        }
    }

    findings
}
