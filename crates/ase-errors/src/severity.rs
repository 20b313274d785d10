//! Severity levels for server error records.
//!
//! Adaptive Server ranks every message it sends with a numeric severity.
//! Higher numbers are more severe, and the number falls into one of a few
//! bands that decide how a client should treat the message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The severity level of a server message.
///
/// Severity is a plain, totally ordered scalar. The bands are:
/// - below [`Severity::WARNING`]: informational messages
/// - exactly [`Severity::WARNING`]: status and warning messages
/// - above [`Severity::WARNING`]: errors
/// - [`Severity::FATAL`] and above: fatal errors that end the connection
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Severity(u8);

impl Severity {
    /// Severity of status and warning messages.
    pub const WARNING: Severity = Severity(10);

    /// Lowest severity at which the server treats an error as fatal.
    pub const FATAL: Severity = Severity(19);

    /// Create a severity from its numeric level.
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    /// Get the numeric level.
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Returns `true` for informational messages.
    pub fn is_information(&self) -> bool {
        *self < Self::WARNING
    }

    /// Returns `true` for status and warning messages.
    pub fn is_warning(&self) -> bool {
        *self == Self::WARNING
    }

    /// Returns `true` for errors, fatal ones included.
    pub fn is_error(&self) -> bool {
        *self > Self::WARNING
    }

    /// Returns `true` if the server closes the connection on this error.
    pub fn is_fatal(&self) -> bool {
        *self >= Self::FATAL
    }
}

impl From<u8> for Severity {
    fn from(level: u8) -> Self {
        Self(level)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that carries a [`Severity`].
///
/// This is the only view of a record that
/// [`ErrorCollection`](crate::ErrorCollection) needs.
pub trait HasSeverity {
    /// Get the severity of this value.
    fn severity(&self) -> Severity;
}

impl HasSeverity for Severity {
    fn severity(&self) -> Severity {
        *self
    }
}

impl<T: HasSeverity + ?Sized> HasSeverity for &T {
    fn severity(&self) -> Severity {
        (**self).severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_bands() {
        let info = Severity::new(0);
        assert!(info.is_information());
        assert!(!info.is_warning());
        assert!(!info.is_error());

        assert!(Severity::WARNING.is_warning());
        assert!(!Severity::WARNING.is_information());
        assert!(!Severity::WARNING.is_error());

        let user_error = Severity::new(16);
        assert!(user_error.is_error());
        assert!(!user_error.is_fatal());

        assert!(Severity::FATAL.is_error());
        assert!(Severity::FATAL.is_fatal());
        assert!(Severity::new(24).is_fatal());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::new(9) < Severity::WARNING);
        assert!(Severity::new(16) > Severity::new(11));
        assert_eq!(Severity::from(14), Severity::new(14));
        assert_eq!(Severity::default().level(), 0);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::new(16).to_string(), "16");
    }
}
