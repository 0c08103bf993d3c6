//! CLI argument definitions for the one-hot encoder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "onehot",
    version,
    about = "One-hot encode a categorical column of a CSV file",
    long_about = "Replace one categorical CSV column with 0/1 indicator columns.\n\n\
                  `binary` handles two-valued columns with a single one_hot_<COLUMN> indicator;\n\
                  `one-hot` handles columns with three or more values, one indicator per value."
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

    /// Allow category values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replace a two-valued column with a single one_hot_<COLUMN> indicator.
    Binary(EncodeArgs),

    /// Replace a column with one indicator per distinct value (3 or more values).
    #[command(name = "one-hot")]
    OneHot(EncodeArgs),

    /// List the distinct values of a column in first-occurrence order.
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    /// CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Name of the column to encode.
    #[arg(long = "column", short = 'c', value_name = "NAME")]
    pub column: String,

    /// Where to write the encoded CSV.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// How to print the encoding summary.
    #[arg(long = "summary", value_enum, default_value = "table")]
    pub summary: SummaryFormatArg,
}

#[derive(Args)]
pub struct InspectArgs {
    /// CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Name of the column to inspect.
    #[arg(long = "column", short = 'c', value_name = "NAME")]
    pub column: String,
}

/// Summary output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
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
