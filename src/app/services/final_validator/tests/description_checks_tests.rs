//! Tests for mojibake and special glyph detection

use super::{bank_row, card_row};
use crate::app::services::final_validator::description_checks::check_descriptions;

#[test]
fn test_plain_descriptions_pass() {
    let bank = vec![bank_row("2024-01-20", Some(3000.0), None, Some(102_000.0), "スーパー")];
    let card = vec![card_row("2024-01-25", 3000.0, "Amazon Marketplace")];
    assert!(check_descriptions(&bank, &card).is_empty());
}

#[test]
fn test_replacement_character_is_flagged_per_row() {
    let bank = vec![
        bank_row("2024-01-20", Some(3000.0), None, Some(102_000.0), "ス\u{FFFD}パー"),
        bank_row("2024-01-21", Some(3000.0), None, Some(99_000.0), "\u{FFFD}\u{FFFD}店"),
    ];

    let findings = check_descriptions(&bank, &[]);
    let mojibake: Vec<_> = findings.iter().filter(|f| f.contains("mojibake")).collect();
    assert_eq!(mojibake.len(), 2);
}

#[test]
fn test_special_glyph_is_flagged_once_per_domain() {
    let card = vec![
        card_row("2024-01-25", 3000.0, "※手数料含む"),
        card_row("2024-01-26", 4000.0, "※キャンペーン"),
    ];

    let findings = check_descriptions(&[], &card);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains('※'));
    assert!(findings[0].starts_with("card"));
}

#[test]
fn test_each_glyph_gets_its_own_finding() {
    let bank = vec![bank_row(
        "2024-01-20",
        Some(3000.0),
        None,
        Some(102_000.0),
        "■お知らせ● 店",
    )];

    let findings = check_descriptions(&bank, &[]);
    assert_eq!(findings.len(), 2);
    assert!(findings.iter().any(|f| f.contains('■')));
    assert!(findings.iter().any(|f| f.contains('●')));
}

#[test]
fn test_domains_report_glyphs_independently() {
    let bank = vec![bank_row("2024-01-20", Some(3000.0), None, Some(102_000.0), "※店")];
    let card = vec![card_row("2024-01-25", 3000.0, "※店")];

    let findings = check_descriptions(&bank, &card);
    assert_eq!(findings.len(), 2);
    assert!(findings[0].starts_with("bank"));
    assert!(findings[1].starts_with("card"));
}
