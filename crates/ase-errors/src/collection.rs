//! The [`ErrorCollection`] handed back for a failed server operation.
//!
//! A single round-trip can produce several error and info messages. The
//! collection keeps them in the order the server sent them and picks one of
//! them as the *main* error: the most severe one, and among equally severe
//! ones the one that arrived last.

use std::{fmt, ops::Index, slice};

use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{CollectionError, Result},
    record::ErrorRecord,
    severity::HasSeverity,
};

/// An immutable, ordered batch of server errors.
///
/// The records are fixed at construction and the main error is selected
/// once, up front. Every accessor is read-only, so a collection can be
/// shared between threads and read concurrently without locking.
///
/// # Example
///
/// ```
/// # use ase_errors::{ErrorCollection, ErrorRecord, Severity};
/// let errors = ErrorCollection::new(vec![
///     ErrorRecord::new(Severity::new(10), "starting batch"),
///     ErrorRecord::new(Severity::new(16), "Invalid column name 'qty'."),
///     ErrorRecord::new(Severity::new(16), "Invalid column name 'price'."),
///     ErrorRecord::new(Severity::new(0), "1 row affected"),
/// ]);
///
/// assert_eq!(errors.len(), 4);
/// // The later of the two severity 16 errors wins.
/// assert_eq!(errors.main_error_index(), Some(2));
/// assert_eq!(
///     errors.main_error().map(|e| e.message()),
///     Some("Invalid column name 'price'.")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCollection<E = ErrorRecord> {
    records: Vec<E>,
    main_index: Option<usize>,
}

impl<E: HasSeverity> ErrorCollection<E> {
    /// Create a collection from records in the order they were reported.
    pub fn new(records: Vec<E>) -> Self {
        let main_index = index_of_most_severe(&records);
        trace!(count = records.len(), main_index:?; "Built error collection");

        Self {
            records,
            main_index,
        }
    }
}

impl<E> ErrorCollection<E> {
    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record at `index`, in reporting order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&E> {
        self.records
            .get(index)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                count: self.records.len(),
            })
    }

    /// Iterate over the records in reporting order.
    ///
    /// Every call starts a new, independent traversal.
    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.records.iter()
    }

    /// Get a read-only view of all records.
    pub fn as_slice(&self) -> &[E] {
        &self.records
    }

    /// Get the main error, or `None` if the collection is empty.
    pub fn main_error(&self) -> Option<&E> {
        self.main_index.map(|index| &self.records[index])
    }

    /// Get the position of the main error, or `None` if the collection is empty.
    pub fn main_error_index(&self) -> Option<usize> {
        self.main_index
    }
}

impl<E: Clone> ErrorCollection<E> {
    /// Copy every record, in order, into `destination` starting at `start_offset`.
    ///
    /// The bounds are checked before anything is written, so on failure
    /// `destination` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InsufficientCapacity`] if `destination`
    /// has fewer than `start_offset + len()` slots.
    pub fn copy_into(&self, destination: &mut [E], start_offset: usize) -> Result<()> {
        let required = self.records.len();
        let end = start_offset
            .checked_add(required)
            .filter(|end| *end <= destination.len())
            .ok_or(CollectionError::InsufficientCapacity {
                offset: start_offset,
                required,
                capacity: destination.len(),
            })?;

        destination[start_offset..end].clone_from_slice(&self.records);
        Ok(())
    }
}

/// Find the most severe record, preferring the last one on ties.
fn index_of_most_severe<E: HasSeverity>(records: &[E]) -> Option<usize> {
    let first = records.first()?;

    let mut best = 0;
    let mut best_severity = first.severity();
    for (index, candidate) in records.iter().enumerate().skip(1) {
        let severity = candidate.severity();
        // `>=` rather than `>`: equal severity moves the pick to the later record.
        if severity >= best_severity {
            best = index;
            best_severity = severity;
        }
    }

    Some(best)
}

impl<E> Default for ErrorCollection<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            main_index: None,
        }
    }
}

impl<E: HasSeverity> From<Vec<E>> for ErrorCollection<E> {
    fn from(records: Vec<E>) -> Self {
        Self::new(records)
    }
}

impl<E: HasSeverity> From<Option<Vec<E>>> for ErrorCollection<E> {
    fn from(records: Option<Vec<E>>) -> Self {
        Self::new(records.unwrap_or_default())
    }
}

impl<E: HasSeverity> FromIterator<E> for ErrorCollection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<E> Index<usize> for ErrorCollection<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.records[index]
    }
}

impl<'a, E> IntoIterator for &'a ErrorCollection<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> IntoIterator for ErrorCollection<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<E: fmt::Display> fmt::Display for ErrorCollection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(main) = self.main_error() else {
            return write!(f, "no errors");
        };

        write!(f, "{main}")?;
        if self.records.len() > 1 {
            write!(f, " (+{} more)", self.records.len() - 1)?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for ErrorCollection<E> {}

impl<E: Serialize> Serialize for ErrorCollection<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for ErrorCollection<E>
where
    E: Deserialize<'de> + HasSeverity,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<Vec<E>>::deserialize(deserializer).map(Self::from)
    }
}
