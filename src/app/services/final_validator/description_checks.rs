//! Description anomaly checks
//!
//! Mojibake detection via the Unicode replacement character, flagged once
//! per affected row, and a fixed set of special glyphs flagged once per
//! glyph per domain.

use super::loader::{ProcessedBankRow, ProcessedCardRow};
use crate::app::models::Domain;
use crate::constants::{REPLACEMENT_CHAR, SPECIAL_CHARS};

/// Run every description rule over both domains and collect the findings
pub fn check_descriptions(bank: &[ProcessedBankRow], card: &[ProcessedCardRow]) -> Vec<String> {
    let bank_descriptions: Vec<&str> =
        bank.iter().filter_map(|r| r.description.as_deref()).collect();
    let card_descriptions: Vec<&str> =
        card.iter().filter_map(|r| r.description.as_deref()).collect();

    let mut findings = Vec::new();
    for (domain, descriptions) in [
        (Domain::Bank, &bank_descriptions),
        (Domain::Card, &card_descriptions),
    ] {
        for description in descriptions.iter() {
            if description.contains(REPLACEMENT_CHAR) {
                findings.push(format!(
                    "{domain} data may contain mojibake: {description}"
                ));
            }
        }
        for glyph in SPECIAL_CHARS {
            if descriptions.iter().any(|d| d.contains(*glyph)) {
                findings.push(format!(
                    "{domain} data contains the special character '{glyph}' in descriptions"
                ));
            }
        }
    }
    findings
}
