//! ase-errors CLI entry point.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use ase_errors_cli::{Args, CliError, error_adapter::ErrorAdapter};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match ase_errors_cli::run(&args) {
        Ok(()) => {
            info!(input_path = args.input; "Report complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log_failure(&err);
            ExitCode::FAILURE
        }
    }
}

/// Install `env_logger` at `level`, or at `warn` if `level` is not a filter name.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

fn log_failure(err: &CliError) {
    let mut rendered = String::new();
    match GraphicalReportHandler::new().render_report(&mut rendered, &ErrorAdapter(err)) {
        Ok(()) => error!("{rendered}"),
        Err(_) => error!("{err}"),
    }
}
