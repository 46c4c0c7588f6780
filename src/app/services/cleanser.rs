//! Type coercion and normalization of validated rows
//!
//! Cleansing runs only on rows that survived validation (and, for card data,
//! duplicate resolution). Dates land as calendar dates serialized
//! `YYYY-MM-DD`, bank numerics as nullable integers, card numerics as
//! nullable floats under a generic parse-or-null rule, and text fields are
//! trimmed with blanks collapsed to absent. Cleansing is idempotent:
//! re-cleansing an already cleansed value yields the same value.

use crate::app::models::{BankTransaction, CardTransaction, RawBankRow, RawCardRow};
use crate::app::services::row_validator::fields::{
    normalize_text, parse_flexible_date, parse_separated_integer, parse_signed_amount,
};
use crate::{Error, Result};

/// Coerce a validated bank row into its typed form.
///
/// Validation guarantees the date, balance and description parse; a failure
/// here means the row bypassed validation and is reported as a data
/// validation error rather than silently dropped.
pub fn cleanse_bank_row(row: &RawBankRow) -> Result<BankTransaction> {
    let transaction_date = row
        .transaction_date
        .as_deref()
        .and_then(parse_flexible_date)
        .ok_or_else(|| Error::data_validation("bank row reached cleansing with invalid date"))?;

    let balance = row
        .balance
        .as_deref()
        .and_then(parse_separated_integer)
        .ok_or_else(|| Error::data_validation("bank row reached cleansing with invalid balance"))?;

    let description = normalize_text(row.description.as_deref()).ok_or_else(|| {
        Error::data_validation("bank row reached cleansing with blank description")
    })?;

    Ok(BankTransaction {
        transaction_date,
        withdrawal: row.withdrawal.as_deref().and_then(parse_separated_integer),
        deposit: row.deposit.as_deref().and_then(parse_separated_integer),
        description,
        balance,
        memo: normalize_text(row.memo.as_deref()),
        label: normalize_text(row.label.as_deref()),
        transaction_type: normalize_text(row.transaction_type.as_deref()),
        counter_party: normalize_text(row.counter_party.as_deref()),
        transaction_code: normalize_text(row.transaction_code.as_deref()),
    })
}

/// Coerce a validated card row into its typed form.
///
/// Card numerics follow a parse-or-null rule: an unparseable installment
/// field becomes absent, never an error at this stage.
pub fn cleanse_card_row(row: &RawCardRow) -> Result<CardTransaction> {
    let transaction_date = row
        .transaction_date
        .as_deref()
        .and_then(parse_flexible_date)
        .ok_or_else(|| Error::data_validation("card row reached cleansing with invalid date"))?;

    let amount = row
        .amount
        .as_deref()
        .and_then(parse_signed_amount)
        .ok_or_else(|| Error::data_validation("card row reached cleansing with invalid amount"))?;

    Ok(CardTransaction {
        transaction_date,
        description: normalize_text(row.description.as_deref()),
        amount,
        inst_total: row.inst_total.as_deref().and_then(parse_signed_amount),
        inst_num: row.inst_num.as_deref().and_then(parse_signed_amount),
        inst_amount: row.inst_amount.as_deref().and_then(parse_signed_amount),
        memo: normalize_text(row.memo.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_bank_cleansing_coerces_types() {
        let row = RawBankRow {
            transaction_date: Some("2024/1/30".to_string()),
            withdrawal: Some("10,000".to_string()),
            deposit: None,
            description: Some("  スーパー  ".to_string()),
            balance: Some("265,764".to_string()),
            memo: Some("   ".to_string()),
            label: Some("食費".to_string()),
            ..RawBankRow::default()
        };

        let transaction = cleanse_bank_row(&row).unwrap();
        assert_eq!(
            transaction.transaction_date,
            NaiveDate::from_ymd_opt(2024, 1, 30).unwrap()
        );
        assert_eq!(transaction.withdrawal, Some(10_000));
        assert_eq!(transaction.deposit, None);
        assert_eq!(transaction.description, "スーパー");
        assert_eq!(transaction.balance, 265_764);
        // blank memo collapses to absent
        assert_eq!(transaction.memo, None);
        assert_eq!(transaction.label.as_deref(), Some("食費"));
        assert_eq!(transaction.transaction_type, None);
    }

    #[test]
    fn test_bank_cleansing_rejects_unvalidated_rows() {
        let row = RawBankRow {
            transaction_date: Some("not a date".to_string()),
            ..RawBankRow::default()
        };
        assert!(cleanse_bank_row(&row).is_err());
    }

    #[test]
    fn test_card_cleansing_parse_or_null() {
        let row = RawCardRow {
            transaction_date: Some("2024/1/25".to_string()),
            description: Some("スーパーマーケット".to_string()),
            amount: Some("-3,000".to_string()),
            inst_total: Some("unparseable".to_string()),
            inst_num: None,
            inst_amount: None,
            memo: None,
        };

        let transaction = cleanse_card_row(&row).unwrap();
        assert_eq!(transaction.amount, -3000.0);
        // unparseable installment fields become absent, not errors
        assert_eq!(transaction.inst_total, None);
        assert_eq!(transaction.inst_num, None);
    }

    #[test]
    fn test_card_cleansing_keeps_installments() {
        let row = RawCardRow {
            transaction_date: Some("2024/3/1".to_string()),
            description: Some("家電量販店".to_string()),
            amount: Some("10,000".to_string()),
            inst_total: Some("120,000".to_string()),
            inst_num: Some("12".to_string()),
            inst_amount: Some("10,000".to_string()),
            memo: None,
        };

        let transaction = cleanse_card_row(&row).unwrap();
        assert_eq!(transaction.inst_total, Some(120_000.0));
        assert_eq!(transaction.inst_num, Some(12.0));
        assert_eq!(transaction.inst_amount, Some(10_000.0));
    }

    #[test]
    fn test_cleansing_is_idempotent() {
        let row = RawBankRow {
            transaction_date: Some("2024/1/30".to_string()),
            withdrawal: Some("10,000".to_string()),
            description: Some("スーパー".to_string()),
            balance: Some("265,764".to_string()),
            ..RawBankRow::default()
        };
        let once = cleanse_bank_row(&row).unwrap();

        // feed the cleansed representation back through the cleanser
        let recycled = RawBankRow {
            transaction_date: Some(once.transaction_date.format("%Y-%m-%d").to_string()),
            withdrawal: once.withdrawal.map(|w| w.to_string()),
            description: Some(once.description.clone()),
            balance: Some(once.balance.to_string()),
            ..RawBankRow::default()
        };
        let twice = cleanse_bank_row(&recycled).unwrap();
        assert_eq!(once, twice);
    }
}
