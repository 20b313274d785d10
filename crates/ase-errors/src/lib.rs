//! Severity-ranked error collections for Adaptive Server clients.
//!
//! A single server round-trip may report several errors, warnings and
//! informational messages at once. This crate provides:
//!
//! - **Records**: [`ErrorRecord`], one server message with its number,
//!   severity, state and origin
//! - **Severity**: [`Severity`], the server's numeric rank, and the
//!   [`HasSeverity`] trait used to read it
//! - **Collections**: [`ErrorCollection`], an immutable, ordered batch of
//!   records with a precomputed main error
//!
//! # Example
//!
//! ```
//! # use ase_errors::{ErrorCollection, ErrorRecord, Severity};
//! let errors: ErrorCollection = [
//!     ErrorRecord::new(Severity::new(16), "Invalid object name 'orders'.").with_message_number(208),
//!     ErrorRecord::new(Severity::new(10), "Warning: null value eliminated."),
//! ]
//! .into_iter()
//! .collect();
//!
//! let main = errors.main_error().expect("batch is not empty");
//! assert_eq!(main.message_number(), 208);
//! ```

pub mod collection;
pub mod error;
pub mod record;
pub mod severity;

pub use collection::ErrorCollection;
pub use error::CollectionError;
pub use record::ErrorRecord;
pub use severity::{HasSeverity, Severity};
