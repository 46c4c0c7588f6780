//! Per-domain pipeline orchestration
//!
//! A pipeline pass discovers every raw export of one domain, runs each file
//! through reading, mapping, validation, duplicate resolution (card only)
//! and cleansing, writes the cleansed output and appends the exclusion
//! ledgers. A failing file is logged and skipped; it never aborts the pass.

pub mod runner;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use runner::PipelineRunner;
pub use stats::{BatchStats, FileOutcome};
