//! Storage abstraction for submitted bank cards.
//!
//! Provides the [`CardStore`] trait defining the storage contract, plus the
//! [`InMemoryCardStore`] backend the server runs on. Nothing is persisted;
//! submissions live until the process exits.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: CardStore trait definition
//! - [`memory`]: InMemoryCardStore implementation

pub mod error;
pub mod memory;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryCardStore;
pub use traits::CardStore;
