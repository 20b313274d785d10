//! Loading error batches from TOML.
//!
//! A batch file lists server messages as `[[errors]]` tables, in the order
//! the server reported them:
//!
//! ```toml
//! [[errors]]
//! message = "Invalid object name 'orders'."
//! severity = 16
//! message_number = 208
//! state = 1
//! line_number = 4
//! proc_name = "sp_load_orders"
//! server_name = "SYB_PROD"
//! ```
//!
//! Only `message` and `severity` are required. A file with no `errors` key
//! is an empty batch.

use log::trace;
use serde::Deserialize;

use ase_errors::ErrorCollection;

use crate::CliError;

#[derive(Debug, Deserialize)]
struct BatchFile {
    #[serde(default)]
    errors: ErrorCollection,
}

/// Parse a batch file's contents into an [`ErrorCollection`].
///
/// # Errors
///
/// Returns [`CliError::Input`] if the source is not valid TOML or a record
/// is missing a required field.
pub fn parse_batch(source: &str) -> Result<ErrorCollection, CliError> {
    let batch: BatchFile =
        toml::from_str(source).map_err(|err| CliError::new_input_error(&err, source))?;
    let errors = batch.errors;
    trace!(errors:?; "Parsed error batch");

    Ok(errors)
}
