use std::process::ExitCode;

use clap::Parser;
use pii_redaction_cli::{logging, run, Cli, Config};
use slog::{error, info};

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());
    let log = logging::build(config.log_level);
    info!(log, "starting"; "input" => %config.input.display());

    let result = run(&config, &log);
    if let Err(err) = &result {
        error!(log, "redaction aborted"; "error" => %err);
    }
    // Flush the async drain so the diagnostic below is printed last.
    drop(log);

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.diagnostic());
            ExitCode::from(err.exit_code())
        }
    }
}
