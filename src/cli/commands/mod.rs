//! Subcommand implementations

pub mod gate;
pub mod process;
pub mod shared;
pub mod validate;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Initialize logging and dispatch to the selected subcommand
pub fn run(args: Args) -> Result<()> {
    shared::init_logging(args.verbose, args.quiet);

    match &args.command {
        Commands::Process(process_args) => process::run(process_args),
        Commands::Validate(validate_args) => validate::run(validate_args),
        Commands::Gate(gate_args) => gate::run(gate_args),
    }
}
