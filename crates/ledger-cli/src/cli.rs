//! CLI argument definitions for the ledger importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "credit-ledger",
    version,
    about = "Import completed credit-recovery courses into the completed-credits ledger",
    long_about = "Copy checked rows from the credit-recovery intake sheet into the\n\
                  completed-credits ledger, skipping rows already present, re-sorting\n\
                  and renumbering the ledger, and queueing one counselor notification\n\
                  per newly imported row."
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
    /// Import checked intake rows into the ledger and notify counselors.
    Import(ImportArgs),

    /// Show the active counselor routing table.
    Routes(RoutesArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the intake sheet CSV (header on row 1, data from row 2).
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Path to the completed-credits ledger CSV (created when missing).
    #[arg(value_name = "LEDGER")]
    pub ledger: PathBuf,

    /// Counselor routing table TOML (default: LEDGER_ROUTING env var,
    /// then the bundled production table).
    #[arg(long = "routing", value_name = "FILE")]
    pub routing: Option<PathBuf>,

    /// Directory for outgoing notification messages
    /// (default: <LEDGER dir>/outbox).
    #[arg(long = "outbox", value_name = "DIR")]
    pub outbox: Option<PathBuf>,

    /// Plan and report without writing the ledger or sending notifications.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RoutesArgs {
    /// Counselor routing table TOML to display instead of the active one.
    #[arg(long = "routing", value_name = "FILE")]
    pub routing: Option<PathBuf>,
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
