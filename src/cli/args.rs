//! Command line argument definitions

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{PipelineConfig, ValidationPolicy};

#[derive(Parser)]
#[command(
    name = "transaction-processor",
    about = "Cleansing and validation pipeline for bank and card CSV exports",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug-level logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cleanse raw exports and run the final validation
    Process(ProcessArgs),
    /// Re-run the final validation over existing cleansed outputs
    Validate(ValidateArgs),
    /// Check whether the latest validation report allows a database import
    Gate(GateArgs),
}

/// Which transaction domains a process run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DomainSelection {
    Bank,
    Card,
    All,
}

impl DomainSelection {
    pub fn includes_bank(self) -> bool {
        matches!(self, DomainSelection::Bank | DomainSelection::All)
    }

    pub fn includes_card(self) -> bool {
        matches!(self, DomainSelection::Card | DomainSelection::All)
    }
}

#[derive(Debug, clap::Args)]
pub struct ProcessArgs {
    /// Domains to process
    #[arg(long, value_enum, default_value = "all")]
    pub domain: DomainSelection,

    /// Directory containing raw bank exports
    #[arg(long)]
    pub bank_dir: Option<PathBuf>,

    /// Directory containing raw card exports
    #[arg(long)]
    pub card_dir: Option<PathBuf>,

    /// Directory receiving cleansed outputs and ledgers
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Directory receiving validation reports
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Processing date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Drop invalid card rows silently instead of recording them in the ledger
    #[arg(long)]
    pub lenient: bool,

    /// Skip the final validation after cleansing
    #[arg(long)]
    pub skip_validation: bool,
}

impl ProcessArgs {
    /// Apply the command line overrides onto the default configuration
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();
        if let Some(dir) = &self.bank_dir {
            config = config.with_bank_input_dir(dir);
        }
        if let Some(dir) = &self.card_dir {
            config = config.with_card_input_dir(dir);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(dir) = &self.report_dir {
            config = config.with_report_dir(dir);
        }
        if let Some(date) = self.date {
            config = config.with_processing_date(date);
        }
        if self.lenient {
            config = config.with_validation_policy(ValidationPolicy::LenientSilent);
        }
        config
    }
}

#[derive(Debug, clap::Args)]
pub struct ValidateArgs {
    /// Directory holding cleansed outputs
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Directory receiving validation reports
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Processing date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl ValidateArgs {
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(dir) = &self.report_dir {
            config = config.with_report_dir(dir);
        }
        if let Some(date) = self.date {
            config = config.with_processing_date(date);
        }
        config
    }
}

#[derive(Debug, clap::Args)]
pub struct GateArgs {
    /// Directory holding validation reports
    #[arg(long)]
    pub report_dir: Option<PathBuf>,
}
