use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calendar-aligned change request statistics.
#[derive(Parser)]
#[command(
    name = "cadence",
    version,
    about = "Bucket change request lifecycle events by calendar week or month"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Bucket events over the configured period and write a JSON report.
    Report(ReportArgs),
    /// Print average time to merge and lifecycle totals as JSON.
    Summary(SummaryArgs),
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cadence.toml")]
    pub config: PathBuf,

    /// Override the event JSON path from config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Override the report output path from config. Stdout if neither is set.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `summary` subcommand.
#[derive(clap::Args)]
pub struct SummaryArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cadence.toml")]
    pub config: PathBuf,

    /// Override the event JSON path from config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,
}
