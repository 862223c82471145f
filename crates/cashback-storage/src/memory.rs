//! In-memory implementation of [`CardStore`].
//!
//! [`InMemoryCardStore`] keeps submissions in a `Vec` behind a single
//! `std::sync::Mutex`. The lock is only ever held for a push or a clone,
//! never across an `.await`, so the blocking mutex is safe to use from
//! async handlers.

use std::sync::{Mutex, MutexGuard};

use cashback_core::CardSubmission;

use crate::error::StorageError;
use crate::traits::CardStore;

/// Process-lifetime store of submitted cards.
#[derive(Debug, Default)]
pub struct InMemoryCardStore {
    cards: Mutex<Vec<CardSubmission>>,
}

impl InMemoryCardStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        InMemoryCardStore {
            cards: Mutex::new(Vec::new()),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<CardSubmission>>, StorageError> {
        self.cards.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

impl CardStore for InMemoryCardStore {
    fn append(&self, card: CardSubmission) -> Result<CardSubmission, StorageError> {
        let mut cards = self.guard()?;
        cards.push(card.clone());
        tracing::debug!(total = cards.len(), "stored card submission");
        Ok(card)
    }

    fn snapshot(&self) -> Result<Vec<CardSubmission>, StorageError> {
        Ok(self.guard()?.clone())
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.guard()?.len())
    }
}
