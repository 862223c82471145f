//! Storage error types for cashback-storage.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A writer panicked while holding the store lock.
    #[error("card store lock poisoned")]
    LockPoisoned,
}
