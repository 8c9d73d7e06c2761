//! CLI argument definitions for the cadastro validators.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use crate::types::FieldKind;

#[derive(Parser)]
#[command(
    name = "cadastro",
    version,
    about = "Validate Brazilian registry documents (CPF, CNPJ, RG, IE, CEP)",
    long_about = "Validate and normalize Brazilian registry documents.\n\n\
                  Check digits are recomputed for CPF, CNPJ, RG and IE (São Paulo rules);\n\
                  CEP existence is confirmed against the ViaCEP postal service."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one or more values of a single kind.
    Check(CheckArgs),

    /// Validate a CSV file of kind,value rows.
    Batch(BatchArgs),

    /// List the supported field kinds.
    Kinds,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Field kind to validate against.
    #[arg(value_enum)]
    pub kind: FieldKind,

    /// Values to validate.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Skip the CEP existence lookup (shape check only).
    #[arg(long = "no-lookup")]
    pub no_lookup: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// CSV file with `kind,value` columns.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write a JSON report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Skip CEP existence lookups (shape check only).
    #[arg(long = "no-lookup")]
    pub no_lookup: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
