//! Error types for CLI operations.
//!
//! This module provides the main error type [`CliError`] which wraps
//! the error conditions that can occur while producing a report.

use std::{io, ops::Range};

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for CLI operations.
///
/// # Diagnostic Variants
///
/// The `Input` variant keeps the batch source and the byte range the TOML
/// parser rejected, so it can be rendered with a source snippet.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid error batch: {message}")]
    Input {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Create a new `Input` error from a TOML parse failure and its source.
    pub fn new_input_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::Input {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
