//! The `gate` subcommand
//!
//! Reads the most recent validation report and decides whether a database
//! import may proceed. Date findings are warnings only; amount, description
//! and balance findings block the import.

use colored::Colorize;
use tracing::warn;

use crate::app::services::final_validator::ValidationReport;
use crate::cli::args::GateArgs;
use crate::config::PipelineConfig;
use crate::{Error, Result};

pub fn run(args: &GateArgs) -> Result<()> {
    let report_dir = args
        .report_dir
        .clone()
        .unwrap_or_else(|| PipelineConfig::default().report_dir);

    let Some((path, report)) = ValidationReport::load_latest(&report_dir)? else {
        return Err(Error::report(format!(
            "no validation report found in {}",
            report_dir.display()
        )));
    };

    if !report.import_allowed() {
        let critical = report.amount_issues.len()
            + report.description_issues.len()
            + report.balance_issues.len();
        return Err(Error::report(format!(
            "import blocked by {critical} critical finding(s) in {}",
            path.display()
        )));
    }

    for finding in &report.date_issues {
        warn!("date finding carried into import: {}", finding);
    }
    println!(
        "{} ({}, {} date finding(s))",
        "import allowed".green().bold(),
        path.display(),
        report.date_issues.len()
    );
    Ok(())
}
