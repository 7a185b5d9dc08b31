//! CLI argument definitions for the SnP converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use snp_model::{ConversionOptions, LinkDirection};

#[derive(Parser)]
#[command(
    name = "snp-convert",
    version,
    about = "Convert Touchstone SnP measurements to a CSV metrics table",
    long_about = "Convert Touchstone (.s1p..s12p) S-parameter measurements to one CSV table.\n\n\
                  Port, band, CA and LNA gain-state labels come from the filenames;\n\
                  rows are filtered to each band's frequency range."
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

    /// Log output format.
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
    /// Convert SnP files (or directories of them) into one CSV file.
    Convert(ConvertArgs),

    /// Check input files without converting them.
    Validate(ValidateArgs),

    /// List the known bands and their frequency ranges.
    Bands,

    /// Band notation mapping files.
    #[command(subcommand)]
    Mapping(MappingCommand),

    /// Show recent conversions.
    History(HistoryArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// SnP files or directories to convert.
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output CSV file.
    #[arg(short = 'o', long = "output", value_name = "CSV")]
    pub output: PathBuf,

    /// Keep the full frequency sweep instead of the band range.
    #[arg(long = "no-filter")]
    pub no_filter: bool,

    /// Do not resolve bands from filenames (also disables filtering).
    #[arg(long = "no-auto-band")]
    pub no_auto_band: bool,

    /// Band half used for filtering.
    #[arg(long = "direction", value_enum, default_value = "rx")]
    pub direction: DirectionArg,

    /// JSON file mapping CA notation to N-plexer bank labels.
    #[arg(long = "mapping", value_name = "JSON")]
    pub mapping: Option<PathBuf>,

    /// History file (default: ~/.snp-convert/conversion_history.json).
    #[arg(long = "history", value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Do not record this run in the history file.
    #[arg(long = "no-history")]
    pub no_history: bool,
}

impl ConvertArgs {
    pub fn options(&self) -> ConversionOptions {
        ConversionOptions::default()
            .with_freq_filter(!self.no_filter)
            .with_auto_band(!self.no_auto_band)
            .with_direction(self.direction.into())
    }
}

#[derive(Args)]
pub struct ValidateArgs {
    /// SnP files or directories to check.
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum MappingCommand {
    /// Load a mapping file and report its contents.
    Check {
        #[arg(value_name = "JSON")]
        path: PathBuf,
    },
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Number of entries to show.
    #[arg(long = "limit", short = 'n', default_value_t = 10)]
    pub limit: usize,

    /// History file (default: ~/.snp-convert/conversion_history.json).
    #[arg(long = "history", value_name = "PATH")]
    pub history: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Rx,
    Tx,
}

impl From<DirectionArg> for LinkDirection {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Rx => Self::Rx,
            DirectionArg::Tx => Self::Tx,
        }
    }
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
