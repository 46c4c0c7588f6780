//! Amount anomaly checks
//!
//! Large movements in either domain, suspiciously small bank withdrawals,
//! and fractional values in bank columns that should only ever hold whole
//! yen amounts.

use super::loader::{ProcessedBankRow, ProcessedCardRow};

/// Run every amount rule over both domains and collect the findings
pub fn check_amounts(
    bank: &[ProcessedBankRow],
    card: &[ProcessedCardRow],
    large_threshold: f64,
    small_threshold: f64,
) -> Vec<String> {
    let mut findings = Vec::new();

    for row in bank {
        let description = row.description.as_deref().unwrap_or("");
        if let Some(withdrawal) = row.withdrawal {
            if withdrawal >= large_threshold {
                findings.push(format!(
                    "bank data contains a large withdrawal: {} - {} - {description}",
                    row.transaction_date,
                    format_amount(withdrawal)
                ));
            }
            if withdrawal > 0.0 && withdrawal < small_threshold {
                findings.push(format!(
                    "bank data contains a small withdrawal: {} - {} - {description}",
                    row.transaction_date,
                    format_amount(withdrawal)
                ));
            }
        }
        if let Some(deposit) = row.deposit {
            if deposit >= large_threshold {
                findings.push(format!(
                    "bank data contains a large deposit: {} - {} - {description}",
                    row.transaction_date,
                    format_amount(deposit)
                ));
            }
        }
    }

    for row in card {
        if let Some(amount) = row.amount {
            if amount.abs() >= large_threshold {
                findings.push(format!(
                    "card data contains a large charge: {} - {} - {}",
                    row.transaction_date,
                    format_amount(amount),
                    row.description.as_deref().unwrap_or("")
                ));
            }
        }
    }

    for (column, values) in [
        ("withdrawal", bank.iter().map(|r| r.withdrawal).collect::<Vec<_>>()),
        ("deposit", bank.iter().map(|r| r.deposit).collect()),
        ("balance", bank.iter().map(|r| r.balance).collect()),
    ] {
        let fractional = values
            .iter()
            .flatten()
            .filter(|v| v.fract() != 0.0)
            .count();
        if fractional > 0 {
            findings.push(format!(
                "bank data contains {fractional} non-integral values in column {column}"
            ));
        }
    }

    findings
}

/// Render whole amounts without a trailing `.0`
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
