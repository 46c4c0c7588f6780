//! Tests for large, small and non-integral amount detection

use super::{bank_row, card_row};
use crate::app::services::final_validator::amount_checks::{check_amounts, format_amount};
use crate::app::services::final_validator::{ProcessedBankRow, ProcessedCardRow};
use crate::constants::{LARGE_AMOUNT_THRESHOLD, SMALL_WITHDRAWAL_THRESHOLD};

fn run(bank: &[ProcessedBankRow], card: &[ProcessedCardRow]) -> Vec<String> {
    check_amounts(bank, card, LARGE_AMOUNT_THRESHOLD, SMALL_WITHDRAWAL_THRESHOLD)
}

#[test]
fn test_ordinary_amounts_pass() {
    let bank = vec![bank_row("2024-01-20", Some(3000.0), None, Some(102_000.0), "スーパー")];
    let card = vec![card_row("2024-01-25", 3000.0, "スーパーマーケット")];
    assert!(run(&bank, &card).is_empty());
}

#[test]
fn test_large_withdrawal_at_threshold_is_flagged() {
    let bank = vec![bank_row(
        "2024-02-01",
        Some(1_000_000.0),
        None,
        Some(500_000.0),
        "振込",
    )];

    let findings = run(&bank, &[]);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("large withdrawal"));
    assert!(findings[0].contains("1000000"));
}

#[test]
fn test_large_deposit_is_flagged() {
    let bank = vec![bank_row(
        "2024-02-01",
        None,
        Some(2_500_000.0),
        Some(3_000_000.0),
        "賞与",
    )];

    let findings = run(&bank, &[]);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("large deposit"));
}

#[test]
fn test_small_withdrawal_is_flagged() {
    let bank = vec![bank_row("2024-02-01", Some(50.0), None, Some(99_950.0), "手数料")];

    let findings = run(&bank, &[]);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("small withdrawal"));
}

#[test]
fn test_withdrawal_at_small_threshold_passes() {
    let bank = vec![bank_row("2024-02-01", Some(100.0), None, Some(99_900.0), "手数料")];
    assert!(run(&bank, &[]).is_empty());
}

#[test]
fn test_negative_card_amount_is_compared_by_magnitude() {
    // refunds are negative; a large refund is still a large movement
    let card = vec![card_row("2024-02-01", -1_200_000.0, "返金")];

    let findings = run(&[], &card);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("large charge"));
    assert!(findings[0].contains("-1200000"));
}

#[test]
fn test_fractional_bank_values_are_flagged_per_column() {
    let bank = vec![
        bank_row("2024-02-01", Some(100.5), None, Some(99_899.5), "店"),
        bank_row("2024-02-02", Some(200.25), None, Some(99_699.25), "店"),
    ];

    let findings = run(&bank, &[]);
    let integral: Vec<_> = findings
        .iter()
        .filter(|f| f.contains("non-integral"))
        .collect();
    assert_eq!(integral.len(), 2);
    assert!(integral[0].contains("2 non-integral values in column withdrawal"));
    assert!(integral[1].contains("2 non-integral values in column balance"));
}

#[test]
fn test_fractional_card_amounts_are_not_flagged() {
    // card amounts are legitimately fractional for foreign currency charges
    let card = vec![card_row("2024-02-01", 1234.56, "海外利用")];
    assert!(run(&[], &card).is_empty());
}

#[test]
fn test_format_amount_drops_trailing_zero() {
    assert_eq!(format_amount(265_764.0), "265764");
    assert_eq!(format_amount(-3000.0), "-3000");
    assert_eq!(format_amount(100.5), "100.5");
}
