//! The `process` subcommand

use chrono::Local;
use tracing::info;

use super::shared;
use crate::app::services::final_validator::FinalValidator;
use crate::app::services::pipeline::PipelineRunner;
use crate::cli::args::ProcessArgs;
use crate::Result;

pub fn run(args: &ProcessArgs) -> Result<()> {
    let config = args.to_config();
    let runner = PipelineRunner::new(config.clone());

    if args.domain.includes_bank() {
        let stats = runner.run_bank()?;
        shared::print_stats(&stats);
    }
    if args.domain.includes_card() {
        let stats = runner.run_card()?;
        shared::print_stats(&stats);
    }

    if args.skip_validation {
        info!("Final validation skipped");
        return Ok(());
    }

    let report = FinalValidator::new(config.clone()).validate()?;
    let path = report.write_to(&config.report_dir, Local::now().naive_local())?;
    shared::print_report(&report);
    println!("report: {}", path.display());
    Ok(())
}
