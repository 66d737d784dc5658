//! CLI parse: clap types for endpointctl. No behavior; definitions only.

use crate::cli::help::{AFTER_HELP, LONG_ABOUT};
use clap::Parser;
use std::path::PathBuf;

/// endpointctl - list audio end-point devices or set the default one
#[derive(Debug, Parser)]
#[command(name = "endpointctl", version)]
#[command(about = "Lists audio end-point devices or sets default audio end-point device")]
#[command(long_about = LONG_ABOUT, after_help = AFTER_HELP)]
pub struct Cli {
    /// Sets the default device with the given index
    #[arg(
        value_name = "DEVICE_INDEX",
        allow_negative_numbers = true,
        conflicts_with = "format"
    )]
    pub device_index: Option<i64>,

    /// Outputs the details of each device using the given format string
    #[arg(short = 'f', long = "format", value_name = "FORMAT_STR")]
    pub format: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
