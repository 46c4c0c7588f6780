//! Positional to semantic column mapping
//!
//! Pure renames of the fixed export layouts into named raw rows. The bank
//! layout is seven positional columns with three reserved extension fields
//! appended as all-missing; the card layout takes exactly the first seven
//! physical columns and ignores anything beyond them.

use crate::app::models::{RawBankRow, RawCardRow};
use crate::app::services::encoded_reader::PositionalRowSet;
use crate::constants::CARD_COLUMN_COUNT;
use crate::{Error, Result};

/// Map one positional bank row (seven cells) into its semantic fields.
///
/// The extension fields are not present in current exports and default to
/// absent.
pub fn map_bank_row(cells: &[Option<String>]) -> RawBankRow {
    let cell = |i: usize| cells.get(i).cloned().flatten();
    RawBankRow {
        transaction_date: cell(0),
        withdrawal: cell(1),
        deposit: cell(2),
        description: cell(3),
        balance: cell(4),
        memo: cell(5),
        label: cell(6),
        transaction_type: None,
        counter_party: None,
        transaction_code: None,
    }
}

/// Map one positional card row into its semantic fields, keeping only the
/// first seven physical columns.
pub fn map_card_row(cells: &[Option<String>]) -> RawCardRow {
    let cell = |i: usize| cells.get(i).cloned().flatten();
    RawCardRow {
        transaction_date: cell(0),
        description: cell(1),
        amount: cell(2),
        inst_total: cell(3),
        inst_num: cell(4),
        inst_amount: cell(5),
        memo: cell(6),
    }
}

/// Verify that a card export carries at least the seven required columns.
///
/// Extra columns are tolerated and ignored by the mapper; fewer are a fatal
/// schema error for the file.
pub fn check_card_schema(row_set: &PositionalRowSet, file: &str) -> Result<()> {
    if row_set.header_columns < CARD_COLUMN_COUNT {
        return Err(Error::schema(
            file,
            CARD_COLUMN_COUNT,
            row_set.header_columns,
        ));
    }
    Ok(())
}
