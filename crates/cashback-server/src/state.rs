//! Application state shared by all handlers.
//!
//! [`AppState`] owns the two containers the service works on: the immutable
//! offer catalog and the card store. Both sit behind `Arc`s so cloning the
//! state per request is cheap. The catalog needs no lock; the store does its
//! own locking internally.

use std::sync::Arc;

use cashback_core::OfferCatalog;
use cashback_storage::{CardStore, InMemoryCardStore};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Read-only offers served by `GET /table`.
    pub offers: Arc<OfferCatalog>,
    /// Submissions accepted by `POST /add-bank-card`.
    pub cards: Arc<dyn CardStore>,
}

impl AppState {
    /// Creates state with the seeded catalog and an empty in-memory store.
    pub fn new() -> Self {
        AppState::with_parts(OfferCatalog::seeded(), Arc::new(InMemoryCardStore::new()))
    }

    /// Creates state from an explicit catalog and store.
    pub fn with_parts(offers: OfferCatalog, cards: Arc<dyn CardStore>) -> Self {
        AppState {
            offers: Arc::new(offers),
            cards,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
