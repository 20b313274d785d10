//! Configuration for the CLI and its loading from TOML files.
//!
//! This module defines [`AppConfig`] and handles finding and loading it
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::CliError;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report configuration section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }
}

/// Controls what the rendered report contains.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// List every record of the batch, not just the main error.
    #[serde(default = "default_list_all")]
    list_all: bool,

    /// Print server, procedure and line details under each listed record.
    #[serde(default)]
    show_origin: bool,
}

impl ReportConfig {
    /// Creates a new [`ReportConfig`].
    ///
    /// # Arguments
    ///
    /// * `list_all` - Whether every record is listed.
    /// * `show_origin` - Whether origin details follow each listed record.
    pub fn new(list_all: bool, show_origin: bool) -> Self {
        Self {
            list_all,
            show_origin,
        }
    }

    /// Returns whether every record is listed.
    pub fn list_all(&self) -> bool {
        self.list_all
    }

    /// Returns whether origin details are shown.
    pub fn show_origin(&self) -> bool {
        self.show_origin
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            list_all: default_list_all(),
            show_origin: false,
        }
    }
}

fn default_list_all() -> bool {
    true
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    Explicit,
    Local,
    System,
}

/// Path of the per-project configuration, relative to the working directory.
const LOCAL_CONFIG_PATH: &str = "ase-errors/config.toml";

/// Find and load the report configuration.
///
/// An explicit path always wins and must exist. Otherwise the first existing
/// file among `ase-errors/config.toml` in the working directory and
/// `config.toml` in the platform config directory is used, falling back to
/// [`AppConfig::default`].
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - The chosen config file cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    let found = match explicit_path {
        Some(path) => Some((ConfigSource::Explicit, path.as_ref().to_path_buf())),
        None => discovered_config_paths()
            .into_iter()
            .find(|(_, path)| path.is_file()),
    };

    let Some((source, path)) = found else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };

    info!(source:? = source, path = path.display().to_string(); "Loading configuration");
    load_config_file(&path)
}

/// Candidate configuration files in search order.
fn discovered_config_paths() -> Vec<(ConfigSource, PathBuf)> {
    let mut candidates = vec![(ConfigSource::Local, PathBuf::from(LOCAL_CONFIG_PATH))];

    match ProjectDirs::from("com", "ase-errors", "ase-errors") {
        Some(proj_dirs) => candidates.push((
            ConfigSource::System,
            proj_dirs.config_dir().join("config.toml"),
        )),
        None => debug!("Could not determine platform-specific config directory"),
    }

    candidates
}

/// Read and parse one configuration file.
fn load_config_file(path: &Path) -> Result<AppConfig, CliError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CliError::from(ConfigError::MissingFile(path.to_path_buf())),
        _ => CliError::from(err),
    })?;

    toml::from_str(&content).map_err(|err| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        }
        .into()
    })
}
