//! Domain model for the cashback offers service.
//!
//! Holds the two record types the service deals in ([`Offer`] and
//! [`CardSubmission`]), the immutable [`OfferCatalog`] seeded at startup,
//! and the crate's [`CoreError`].

pub mod card;
pub mod error;
pub mod id;
pub mod offer;

// Re-export commonly used types
pub use card::CardSubmission;
pub use error::CoreError;
pub use id::OfferId;
pub use offer::{Offer, OfferCatalog};
