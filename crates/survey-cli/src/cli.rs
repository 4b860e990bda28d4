//! CLI argument definitions for the survey repair toolkit.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-repair",
    version,
    about = "Repair and normalize survey-response exports",
    long_about = "Repair and normalize rows of a tabular survey-response export.\n\n\
                  Fills missing demographic fields, derives the survey format from\n\
                  each respondent's role, blanks format-inappropriate answers, and\n\
                  mirrors role-equivalent answers across question columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Fill missing demographic fields and derive the format column.
    Fill(FillArgs),

    /// Blank answers outside each respondent's survey format.
    Mask(MaskArgs),

    /// Mirror role-equivalent answers for STAFF and PA rows.
    SameAs(SameAsArgs),

    /// Run all three repair stages on a single load and write.
    Run(RunArgs),
}

#[derive(Args)]
pub struct FileArgs {
    /// Path to the survey-response export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Report counts without writing the file back.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct SynthesisArgs {
    /// Fixed seed for reproducible name synthesis.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Reference date for age-band computation (default: today).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,
}

#[derive(Args)]
pub struct RulesArgs {
    /// JSON rule file replacing the built-in masking and same-as rules.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FillArgs {
    #[command(flatten)]
    pub file: FileArgs,

    #[command(flatten)]
    pub synthesis: SynthesisArgs,
}

#[derive(Parser)]
pub struct MaskArgs {
    #[command(flatten)]
    pub file: FileArgs,

    #[command(flatten)]
    pub rules: RulesArgs,
}

#[derive(Parser)]
pub struct SameAsArgs {
    #[command(flatten)]
    pub file: FileArgs,

    #[command(flatten)]
    pub rules: RulesArgs,
}

#[derive(Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub file: FileArgs,

    #[command(flatten)]
    pub synthesis: SynthesisArgs,

    #[command(flatten)]
    pub rules: RulesArgs,
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
