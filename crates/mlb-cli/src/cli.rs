//! CLI argument definitions for the batting trends pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use mlb_cli::pipeline::{DEFAULT_BATTING_PATH, DEFAULT_TEAMS_PATH};
use mlb_model::MODERN_ERA_START;

#[derive(Parser)]
#[command(
    name = "mlb-trends",
    version,
    about = "Historical MLB batting trends from the Lahman database",
    long_about = "Join Lahman batting and team seasons and build the tables behind the\n\
                  home-run/batting-average trend chart and the team efficiency quadrants.\n\n\
                  Writes CSV tables plus JSON quadrant and run manifest files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pipeline and write the summary tables.
    Run(RunArgs),

    /// List the modern-era roster with display names and colors.
    Roster,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Per-player batting CSV.
    #[arg(long = "batting", value_name = "PATH", default_value = DEFAULT_BATTING_PATH)]
    pub batting: PathBuf,

    /// Per-team season CSV.
    #[arg(long = "teams", value_name = "PATH", default_value = DEFAULT_TEAMS_PATH)]
    pub teams: PathBuf,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Run every stage and print the summary without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// First season included in the team efficiency summary.
    #[arg(long = "min-year", value_name = "YEAR", default_value_t = MODERN_ERA_START)]
    pub min_year: i64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
