//! Command-line surface and the run configuration resolved from it.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use slog::Level;

/// Input read when no path is given.
pub const DEFAULT_INPUT: &str = "iscp_pii_dataset_-_Sheet1.csv";

/// Output written to the working directory.
pub const OUTPUT_FILE: &str = "redacted_output.csv";

/// Redact PII in the `data_json` column of a delimited file.
#[derive(Debug, Parser)]
#[command(name = "pii-redact", version, about)]
pub struct Cli {
    /// Delimited file with `record_id` and `data_json` columns
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Log each redacted record
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Settings for one run.
#[derive(Clone, Debug)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_level: Level,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let log_level = match (cli.quiet, cli.verbose) {
            (true, _) => Level::Error,
            (false, 0) => Level::Info,
            (false, _) => Level::Debug,
        };
        Self {
            input: cli.input,
            output: PathBuf::from(OUTPUT_FILE),
            log_level,
        }
    }
}
