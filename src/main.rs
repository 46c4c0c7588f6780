//! Command line entry point for the transaction processor

use clap::Parser;
use colored::Colorize;

use transaction_processor::cli::args::Args;
use transaction_processor::cli::commands;

fn main() {
    let args = Args::parse();

    if let Err(e) = commands::run(args) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}
