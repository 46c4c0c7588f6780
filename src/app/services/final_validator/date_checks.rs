//! Date anomaly checks
//!
//! Three rules per domain: transactions dated after the processing date,
//! repeated (date, description) pairs, and gaps of more than the configured
//! number of days between consecutive transaction dates.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::loader::{ProcessedBankRow, ProcessedCardRow};
use crate::app::models::Domain;

/// Run every date rule over both domains and collect the findings
pub fn check_dates(
    bank: &[ProcessedBankRow],
    card: &[ProcessedCardRow],
    processing_date: NaiveDate,
    gap_days: i64,
) -> Vec<String> {
    let bank_entries: Vec<(NaiveDate, &str)> = bank
        .iter()
        .map(|r| (r.transaction_date, r.description.as_deref().unwrap_or("")))
        .collect();
    let card_entries: Vec<(NaiveDate, &str)> = card
        .iter()
        .map(|r| (r.transaction_date, r.description.as_deref().unwrap_or("")))
        .collect();

    let mut findings = Vec::new();
    for (domain, entries) in [(Domain::Bank, &bank_entries), (Domain::Card, &card_entries)] {
        check_domain(domain, entries, processing_date, gap_days, &mut findings);
    }
    findings
}

fn check_domain(
    domain: Domain,
    entries: &[(NaiveDate, &str)],
    processing_date: NaiveDate,
    gap_days: i64,
    findings: &mut Vec<String>,
) {
    for (date, description) in entries {
        if *date > processing_date {
            findings.push(format!(
                "{domain} data contains a future-dated transaction: {date} - {description}"
            ));
        }
    }

    // BTreeMap keeps duplicate findings in (date, description) order
    let mut occurrences: BTreeMap<(NaiveDate, &str), usize> = BTreeMap::new();
    for entry in entries {
        *occurrences.entry(*entry).or_insert(0) += 1;
    }
    for ((date, description), count) in &occurrences {
        if *count >= 2 {
            findings.push(format!(
                "{domain} data contains duplicate entries: {date} - {description} ({count} occurrences)"
            ));
        }
    }

    let mut dates: Vec<NaiveDate> = entries.iter().map(|(date, _)| *date).collect();
    dates.sort();
    dates.dedup();
    for window in dates.windows(2) {
        let gap = (window[1] - window[0]).num_days();
        if gap > gap_days {
            findings.push(format!(
                "{domain} data has a gap of {gap} days between transactions: {} -> {}",
                window[0], window[1]
            ));
        }
    }
}
