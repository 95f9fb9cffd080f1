//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use vistoria_map::match_closest;
use vistoria_model::{Status, Vocabulary};

#[derive(Parser)]
#[command(
    name = "vistoria",
    version,
    about = "Validate and convert inspection spreadsheet exports",
    long_about = "Validate inspection spreadsheet exports and convert them to canonical CSV.\n\n\
                  Accepts comma, semicolon or tab separated files in UTF-8 or Windows-1252,\n\
                  maps loosely named headers and repairs near-miss categorical values."
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
    /// Validate an export and report every problem found.
    Check(CheckArgs),

    /// Import an export and write its valid rows as canonical CSV.
    Convert(ConvertArgs),

    /// List the posture and status vocabularies and the header aliases.
    Vocab,
}

/// Options shared by commands that import a file.
#[derive(Args)]
pub struct ImportArgs {
    /// Text encoding label (utf-8, latin1, windows-1252, ...). Default: auto.
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,

    /// TOML file with encoding, preview limits and extra header aliases.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Export file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the full result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub import: ImportArgs,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Export file to convert.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Destination for the canonical CSV.
    #[arg(short = 'o', long = "output", value_name = "OUT")]
    pub output: PathBuf,

    /// Only keep records with this status.
    #[arg(long = "status", value_name = "STATUS", value_parser = parse_status)]
    pub status: Option<Status>,

    /// Only keep records whose demand, SEI, address or SQL contains TERM.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    #[command(flatten)]
    pub import: ImportArgs,
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

fn parse_status(raw: &str) -> Result<Status, String> {
    match_closest::<Status>(raw).ok_or_else(|| {
        format!(
            "unknown status '{raw}', expected one of: {}",
            Status::labels().join(", ")
        )
    })
}
