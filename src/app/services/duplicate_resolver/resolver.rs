//! Duplicate group detection and retention rules

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::app::models::RawCardRow;
use crate::app::services::row_validator::fields::{parse_flexible_date, parse_signed_amount};

/// Exact grouping key: parsed transaction date and amount in minor units
type GroupKey = (NaiveDate, i64);

/// Outcome of resolving duplicates over one file's valid rows
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDuplicates {
    /// Surviving rows, in original row order
    pub retained: Vec<RawCardRow>,
    /// Removed rows, in original row order
    pub removed: Vec<RawCardRow>,
}

/// Resolver for unintended duplicate card charges.
///
/// Operates on validated, not-yet-cleansed rows. Rows are grouped by exact
/// (transaction_date, amount); in any group of two or more, a description
/// matching the allowlist protects the whole group, otherwise only the
/// earliest row survives.
#[derive(Debug, Clone)]
pub struct DuplicateResolver {
    /// Allowlist patterns, held lowercase for case-insensitive matching
    allowlist: Vec<String>,
}

impl DuplicateResolver {
    /// Create a resolver with the configured allowlist patterns
    pub fn new(allowlist: &[String]) -> Self {
        Self {
            allowlist: allowlist
                .iter()
                .map(|pattern| pattern.to_lowercase())
                .collect(),
        }
    }

    /// Partition rows into retained and removed sets.
    ///
    /// Row validation has already guaranteed parseable dates and amounts; a
    /// row that nevertheless fails to form a group key is retained untouched.
    pub fn resolve(&self, rows: Vec<RawCardRow>) -> ResolvedDuplicates {
        let keys: Vec<Option<GroupKey>> = rows.iter().map(group_key).collect();

        let mut group_sizes: HashMap<GroupKey, usize> = HashMap::new();
        for key in keys.iter().flatten() {
            *group_sizes.entry(*key).or_insert(0) += 1;
        }

        let duplicate_rows = keys
            .iter()
            .flatten()
            .filter(|key| group_sizes[key] > 1)
            .count();
        if duplicate_rows > 0 {
            warn!("Found {} rows in duplicate groups", duplicate_rows);
            for (row, key) in rows.iter().zip(&keys) {
                if key.map(|k| group_sizes[&k] > 1).unwrap_or(false) {
                    warn!(
                        "Duplicate: date={}, amount={}, description={}",
                        row.transaction_date.as_deref().unwrap_or(""),
                        row.amount.as_deref().unwrap_or(""),
                        row.description.as_deref().unwrap_or("")
                    );
                }
            }
        }

        // A single allowlisted description protects its entire group
        let mut protected_groups: HashSet<GroupKey> = HashSet::new();
        for (row, key) in rows.iter().zip(&keys) {
            if let Some(key) = key {
                if group_sizes[key] > 1 && self.is_allowlisted(row.description.as_deref()) {
                    protected_groups.insert(*key);
                }
            }
        }

        let mut seen_groups: HashSet<GroupKey> = HashSet::new();
        let mut retained = Vec::new();
        let mut removed = Vec::new();

        for (row, key) in rows.into_iter().zip(keys) {
            let keep = match key {
                None => true,
                Some(key) => {
                    group_sizes[&key] < 2
                        || protected_groups.contains(&key)
                        || seen_groups.insert(key)
                }
            };
            if keep {
                retained.push(row);
            } else {
                removed.push(row);
            }
        }

        if !removed.is_empty() {
            info!(
                "After duplicate processing: {} rows retained, {} removed",
                retained.len(),
                removed.len()
            );
        }

        ResolvedDuplicates { retained, removed }
    }

    /// Case-insensitive substring match against the allowlist
    fn is_allowlisted(&self, description: Option<&str>) -> bool {
        let Some(description) = description else {
            return false;
        };
        let lowered = description.to_lowercase();
        self.allowlist
            .iter()
            .any(|pattern| lowered.contains(pattern))
    }
}

/// Build the exact grouping key for a row, amounts held in minor units so
/// the key stays hashable
fn group_key(row: &RawCardRow) -> Option<GroupKey> {
    let date = parse_flexible_date(row.transaction_date.as_deref()?)?;
    let amount = parse_signed_amount(row.amount.as_deref()?)?;
    Some((date, (amount * 100.0).round() as i64))
}
