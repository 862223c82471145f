//! The [`CardStore`] trait defining the storage contract for submissions.
//!
//! Every operation takes `&self`: implementations own their synchronization
//! so a single store can be shared across handler tasks behind an `Arc`.
//! The trait is synchronous; no backend performs I/O.

use cashback_core::CardSubmission;

use crate::error::StorageError;

/// The storage contract for submitted bank cards.
///
/// Insertion order is the only relationship between entries. No uniqueness
/// is enforced, and entries are never removed or mutated once stored.
pub trait CardStore: Send + Sync {
    /// Appends a submission, returning the record as stored.
    fn append(&self, card: CardSubmission) -> Result<CardSubmission, StorageError>;

    /// Returns a copy of every stored submission in insertion order.
    fn snapshot(&self) -> Result<Vec<CardSubmission>, StorageError>;

    /// Number of stored submissions.
    fn len(&self) -> Result<usize, StorageError>;

    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
