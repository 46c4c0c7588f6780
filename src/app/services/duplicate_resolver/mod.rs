//! Duplicate charge resolution for card exports
//!
//! Card statements legitimately repeat some charges on the same day for the
//! same amount (family memberships billed per member, per-identifier service
//! fees). Everything else repeating on an exact (date, amount) key is an
//! unintended duplicate: only the earliest row by original order survives and
//! each removal is recorded in the audit ledger.

pub mod resolver;

#[cfg(test)]
pub mod tests;

pub use resolver::{DuplicateResolver, ResolvedDuplicates};
