//! Helpers shared across subcommands

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::app::services::final_validator::{ReportStatus, ValidationReport};
use crate::app::services::pipeline::BatchStats;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags when set.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("transaction_processor={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Print a one-line colored summary for one domain pass
pub fn print_stats(stats: &BatchStats) {
    let line = stats.summary();
    if stats.files_failed > 0 {
        println!("{}", line.yellow());
    } else {
        println!("{}", line.green());
    }
}

/// Print the outcome of a validation run with per-category counts
pub fn print_report(report: &ValidationReport) {
    match report.status {
        ReportStatus::Ok => println!("{}", report.summary.green().bold()),
        ReportStatus::Error => {
            println!("{}", report.summary.red().bold());
            println!(
                "  dates: {}  amounts: {}  descriptions: {}  balances: {}",
                report.date_issues.len(),
                report.amount_issues.len(),
                report.description_issues.len(),
                report.balance_issues.len()
            );
        }
    }
}
