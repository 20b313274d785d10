//! CLI logic for the ase-errors batch reporter.
//!
//! This module loads a batch of server error records, builds an
//! [`ErrorCollection`](ase_errors::ErrorCollection) from it and writes a
//! report naming the main error.

pub mod batch;
pub mod config;
pub mod error_adapter;
pub mod report;

mod args;
mod error;

pub use args::Args;
pub use error::CliError;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use crate::report::Report;

/// Run the ase-errors CLI application
///
/// This function reads the input batch, builds the error collection and
/// writes the report to the output file, or to stdout if none was given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Batch parsing errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(input_path = args.input; "Processing error batch");

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let errors = batch::parse_batch(&source)?;
    info!(count = errors.len(), main_index:? = errors.main_error_index(); "Built error collection");

    let report = Report::new(&errors, app_config.report()).to_string();

    match &args.output {
        Some(output) => {
            fs::write(output, report)?;
            info!(output_file = output; "Report written");
        }
        None => io::stdout().write_all(report.as_bytes())?,
    }

    Ok(())
}
