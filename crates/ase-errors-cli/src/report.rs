//! Plain-text rendering of an error batch.

use std::fmt;

use ase_errors::{ErrorCollection, ErrorRecord};

use crate::config::ReportConfig;

/// A report over an [`ErrorCollection`], rendered through [`fmt::Display`].
///
/// The report opens with the number of messages, lists them in reporting
/// order with the main error marked `*`, and closes with the main error.
///
/// ```text
/// 3 messages reported
///   [0] Msg 5701, Level 0, State 1: Changed database context to 'sales'.
///   [1] Msg 207, Level 16, State 1: Invalid column name 'qty'.
/// * [2] Msg 207, Level 16, State 2: Invalid column name 'price'.
/// main error: Msg 207, Level 16, State 2: Invalid column name 'price'.
/// ```
#[derive(Debug)]
pub struct Report<'a> {
    errors: &'a ErrorCollection,
    config: &'a ReportConfig,
}

impl<'a> Report<'a> {
    /// Create a report over `errors` shaped by `config`.
    pub fn new(errors: &'a ErrorCollection, config: &'a ReportConfig) -> Self {
        Self { errors, config }
    }

    fn write_origin(f: &mut fmt::Formatter<'_>, record: &ErrorRecord) -> fmt::Result {
        let line = (record.line_number() > 0).then_some(record.line_number());
        let parts = [
            ("server", record.server_name().map(Origin::Text)),
            ("procedure", record.proc_name().map(Origin::Text)),
            ("line", line.map(Origin::Line)),
            ("sqlstate", record.sql_state().map(Origin::Text)),
        ];

        let mut written = false;
        for (label, value) in parts {
            let Some(value) = value else { continue };
            let separator = if written { ", " } else { "      " };
            write!(f, "{separator}{label} {value}")?;
            written = true;
        }

        if written { writeln!(f) } else { Ok(()) }
    }
}

/// One origin detail of a record.
enum Origin<'a> {
    Text(&'a str),
    Line(i32),
}

impl fmt::Display for Origin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Text(text) => f.write_str(text),
            Origin::Line(line) => write!(f, "{line}"),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let plural = if count == 1 { "" } else { "s" };
        writeln!(f, "{count} message{plural} reported")?;

        if self.config.list_all() {
            let main_index = self.errors.main_error_index();
            for (index, record) in self.errors.iter().enumerate() {
                let marker = if Some(index) == main_index { '*' } else { ' ' };
                writeln!(f, "{marker} [{index}] {record}")?;
                if self.config.show_origin() {
                    Self::write_origin(f, record)?;
                }
            }
        }

        match self.errors.main_error() {
            Some(main) => writeln!(f, "main error: {main}"),
            None => writeln!(f, "main error: none"),
        }
    }
}
