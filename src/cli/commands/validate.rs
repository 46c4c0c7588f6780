//! The `validate` subcommand

use chrono::Local;

use super::shared;
use crate::app::services::final_validator::FinalValidator;
use crate::cli::args::ValidateArgs;
use crate::Result;

pub fn run(args: &ValidateArgs) -> Result<()> {
    let config = args.to_config();

    let report = FinalValidator::new(config.clone()).validate()?;
    let path = report.write_to(&config.report_dir, Local::now().naive_local())?;
    shared::print_report(&report);
    println!("report: {}", path.display());
    Ok(())
}
