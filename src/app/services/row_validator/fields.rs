//! Shared field parsers for raw cell values
//!
//! Exports format dates inconsistently (`2024/1/5`, `2024-01-05`) and write
//! amounts with thousands separators. These parsers accept what the upstream
//! systems actually emit; anything else is `None` and the caller decides
//! whether that is a rule violation.

use chrono::NaiveDate;

/// Date formats accepted across bank and card exports, tried in order
pub const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d", "%Y.%m.%d"];

/// Parse a calendar date in any of the accepted export formats
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parse a thousands-separated numeric cell into an integer.
///
/// Mirrors the warehouse coercion rule: separators stripped, parsed as a
/// number, fraction truncated toward zero.
pub fn parse_separated_integer(value: &str) -> Option<i64> {
    parse_signed_amount(value).map(|amount| amount.trunc() as i64)
}

/// Parse a thousands-separated numeric cell, allowing a leading minus sign
pub fn parse_signed_amount(value: &str) -> Option<f64> {
    let cleaned = value.replace(',', "");
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Trim a text cell, collapsing blank or missing values to the absent
/// sentinel
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    value.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
