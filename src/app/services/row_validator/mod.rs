//! Per-row validation for bank and card exports
//!
//! Validation is a pure function of row content and the processing date:
//! identical inputs always yield the identical outcome and message. Each rule
//! is evaluated independently and all violations are joined into a single
//! message, so an operator sees every problem with a row at once.
//!
//! The bank validator never rejects future-dated rows; that check belongs
//! to the final cross-file validation. The card
//! validator excludes future-dated rows as an expected, distinct outcome.

pub mod bank;
pub mod card;
pub mod fields;

#[cfg(test)]
pub mod tests;

pub use bank::validate_bank_row;
pub use card::validate_card_row;

use chrono::NaiveDate;

/// Separator joining violated-rule descriptions into one message
pub const REASON_SEPARATOR: &str = "; ";

/// Outcome of validating one bank row
#[derive(Debug, Clone, PartialEq)]
pub enum RowValidity {
    Valid,
    /// One entry per violated rule, in rule evaluation order
    Invalid(Vec<String>),
}

impl RowValidity {
    /// Join the violation reasons into the ledger message
    pub fn message(&self) -> Option<String> {
        match self {
            RowValidity::Valid => None,
            RowValidity::Invalid(reasons) => Some(reasons.join(REASON_SEPARATOR)),
        }
    }
}

/// Outcome of validating one card row
#[derive(Debug, Clone, PartialEq)]
pub enum CardRowOutcome {
    Valid,
    /// Dated after the processing date; excluded but not an error
    FutureDated(NaiveDate),
    Invalid(Vec<String>),
}

impl CardRowOutcome {
    /// Join the violation reasons into the ledger message
    pub fn message(&self) -> Option<String> {
        match self {
            CardRowOutcome::Invalid(reasons) => Some(reasons.join(REASON_SEPARATOR)),
            _ => None,
        }
    }
}
