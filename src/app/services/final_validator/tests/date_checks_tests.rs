//! Tests for future date, duplicate entry and gap detection

use super::{bank_row, card_row, date};
use crate::app::services::final_validator::date_checks::check_dates;

#[test]
fn test_clean_data_yields_no_findings() {
    let bank = vec![
        bank_row("2024-01-05", None, Some(5000.0), Some(105_000.0), "給与"),
        bank_row("2024-01-20", Some(3000.0), None, Some(102_000.0), "スーパー"),
    ];
    let card = vec![card_row("2024-01-25", 3000.0, "スーパーマーケット")];

    let findings = check_dates(&bank, &card, date("2024-06-01"), 30);
    assert!(findings.is_empty());
}

#[test]
fn test_future_dated_card_row_is_flagged() {
    let card = vec![card_row("2025-06-01", 3000.0, "スーパーマーケット")];

    let findings = check_dates(&[], &card, date("2024-06-01"), 30);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("future-dated"));
    assert!(findings[0].contains("2025-06-01"));
    assert!(findings[0].starts_with("card"));
}

#[test]
fn test_row_dated_on_processing_date_is_not_future() {
    let bank = vec![bank_row("2024-06-01", Some(500.0), None, Some(1000.0), "店")];
    let findings = check_dates(&bank, &[], date("2024-06-01"), 30);
    assert!(findings.is_empty());
}

#[test]
fn test_duplicate_date_description_pair_is_flagged_once() {
    let bank = vec![
        bank_row("2024-01-20", Some(3000.0), None, Some(102_000.0), "スーパー"),
        bank_row("2024-01-20", Some(3000.0), None, Some(99_000.0), "スーパー"),
        bank_row("2024-01-20", Some(3000.0), None, Some(96_000.0), "スーパー"),
    ];

    let findings = check_dates(&bank, &[], date("2024-06-01"), 30);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("duplicate entries"));
    assert!(findings[0].contains("3 occurrences"));
}

#[test]
fn test_same_date_different_description_is_not_duplicate() {
    let bank = vec![
        bank_row("2024-01-20", Some(3000.0), None, Some(102_000.0), "スーパー"),
        bank_row("2024-01-20", Some(4000.0), None, Some(98_000.0), "書店"),
    ];

    let findings = check_dates(&bank, &[], date("2024-06-01"), 30);
    assert!(findings.is_empty());
}

#[test]
fn test_gap_longer_than_threshold_is_flagged() {
    let card = vec![
        card_row("2024-01-01", 1000.0, "店"),
        card_row("2024-03-01", 1000.0, "店舗"),
    ];

    let findings = check_dates(&[], &card, date("2024-06-01"), 30);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("gap of 60 days"));
    assert!(findings[0].contains("2024-01-01 -> 2024-03-01"));
}

#[test]
fn test_gap_of_exactly_threshold_days_passes() {
    let card = vec![
        card_row("2024-01-01", 1000.0, "店"),
        card_row("2024-01-31", 1000.0, "店舗"),
    ];

    let findings = check_dates(&[], &card, date("2024-06-01"), 30);
    assert!(findings.is_empty());
}

#[test]
fn test_domains_are_checked_independently() {
    // same (date, description) across domains is not a duplicate
    let bank = vec![bank_row("2024-01-20", Some(3000.0), None, Some(10_000.0), "スーパー")];
    let card = vec![card_row("2024-01-20", 3000.0, "スーパー")];

    let findings = check_dates(&bank, &card, date("2024-06-01"), 30);
    assert!(findings.is_empty());
}
