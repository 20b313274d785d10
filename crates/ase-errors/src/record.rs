//! A single error or info message reported by the server.
//!
//! An [`ErrorRecord`] carries everything an Adaptive Server error token
//! describes: the message text and number, its severity and state, and where
//! on the server it was raised.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::severity::{HasSeverity, Severity};

/// An error, warning or informational message returned by the server.
///
/// # Example
///
/// ```
/// # use ase_errors::{ErrorRecord, Severity};
/// let record = ErrorRecord::new(Severity::new(16), "Procedure 'sp_foo' not found.")
///     .with_message_number(2812)
///     .with_state(62)
///     .with_server_name("SYB_PROD");
///
/// assert!(record.is_error());
/// assert_eq!(
///     record.to_string(),
///     "Msg 2812, Level 16, State 62: Procedure 'sp_foo' not found."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    message: String,
    severity: Severity,

    #[serde(default)]
    message_number: i32,

    #[serde(default)]
    state: u8,

    #[serde(default)]
    line_number: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    proc_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    server_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    sql_state: Option<String>,

    #[serde(default)]
    status: u8,

    #[serde(default)]
    transaction_state: u8,
}

impl ErrorRecord {
    /// Create a record with the given severity and message.
    ///
    /// Every other attribute starts at zero or absent.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            message_number: 0,
            state: 0,
            line_number: 0,
            proc_name: None,
            server_name: None,
            sql_state: None,
            status: 0,
            transaction_state: 0,
        }
    }

    /// Get the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the server message number.
    pub fn message_number(&self) -> i32 {
        self.message_number
    }

    /// Get the error state, which distinguishes raise sites of one message.
    pub fn state(&self) -> u8 {
        self.state
    }

    /// Get the line of the batch or procedure that raised the message.
    pub fn line_number(&self) -> i32 {
        self.line_number
    }

    /// Get the stored procedure name, if the message came from one.
    pub fn proc_name(&self) -> Option<&str> {
        self.proc_name.as_deref()
    }

    /// Get the name of the server that raised the message, if known.
    pub fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref()
    }

    /// Get the SQLSTATE code, if any.
    pub fn sql_state(&self) -> Option<&str> {
        self.sql_state.as_deref()
    }

    /// Get the raw status byte.
    pub fn status(&self) -> u8 {
        self.status
    }

    /// Get the transaction state at the time of the message.
    pub fn transaction_state(&self) -> u8 {
        self.transaction_state
    }

    /// Returns `true` if the severity is in the error band.
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    /// Returns `true` if the severity is the warning level.
    pub fn is_warning(&self) -> bool {
        self.severity.is_warning()
    }

    /// Returns `true` if the message is informational only.
    pub fn is_information(&self) -> bool {
        self.severity.is_information()
    }

    /// Returns `true` if the server ends the connection on this error.
    pub fn is_fatal(&self) -> bool {
        self.severity.is_fatal()
    }

    /// Set the server message number.
    pub fn with_message_number(mut self, number: i32) -> Self {
        self.message_number = number;
        self
    }

    /// Set the error state.
    pub fn with_state(mut self, state: u8) -> Self {
        self.state = state;
        self
    }

    /// Set the line number.
    pub fn with_line_number(mut self, line: i32) -> Self {
        self.line_number = line;
        self
    }

    /// Set the stored procedure name.
    pub fn with_proc_name(mut self, name: impl Into<String>) -> Self {
        self.proc_name = Some(name.into());
        self
    }

    /// Set the server name.
    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    /// Set the SQLSTATE code.
    pub fn with_sql_state(mut self, sql_state: impl Into<String>) -> Self {
        self.sql_state = Some(sql_state.into());
        self
    }

    /// Set the raw status byte.
    pub fn with_status(mut self, status: u8) -> Self {
        self.status = status;
        self
    }

    /// Set the transaction state.
    pub fn with_transaction_state(mut self, state: u8) -> Self {
        self.transaction_state = state;
        self
    }
}

impl HasSeverity for ErrorRecord {
    fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Msg {}, Level {}, State {}: {}",
            self.message_number, self.severity, self.state, self.message
        )
    }
}
