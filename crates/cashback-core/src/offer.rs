//! Cashback offers and the read-only catalog that serves them.
//!
//! The catalog is built once at startup and never mutated, so it can be
//! shared across handler tasks behind a plain `Arc` without locking.

use serde::{Deserialize, Serialize};

use crate::id::OfferId;

/// A cashback promotion tied to a bank and a spending category.
///
/// Field names on the wire are the compact lowercase forms (`bankname`,
/// `cardname`) the listing endpoint has always returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    /// Cashback percentage.
    pub cashback: u32,
    #[serde(rename = "bankname")]
    pub bank_name: String,
    pub category: String,
    /// Eligibility condition shown to the customer.
    pub condition: String,
    /// Card type the offer applies to (`Credit`, `Debit`).
    #[serde(rename = "cardname")]
    pub card_name: String,
}

impl Offer {
    pub fn new(
        id: u32,
        cashback: u32,
        bank_name: &str,
        category: &str,
        condition: &str,
        card_name: &str,
    ) -> Self {
        Offer {
            id: OfferId(id),
            cashback,
            bank_name: bank_name.to_string(),
            category: category.to_string(),
            condition: condition.to_string(),
            card_name: card_name.to_string(),
        }
    }
}

/// Immutable, insertion-ordered list of offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCatalog {
    offers: Vec<Offer>,
}

impl OfferCatalog {
    /// Creates a catalog over the given offers, keeping their order.
    pub fn new(offers: Vec<Offer>) -> Self {
        OfferCatalog { offers }
    }

    /// The five offers the service ships with.
    pub fn seeded() -> Self {
        OfferCatalog::new(vec![
            Offer::new(1, 5, "Jusan", "Groceries", "Minimum spend of $1000 monthly", "Credit"),
            Offer::new(2, 3, "Kaspi", "Baby products", "Minimum spend of $500 monthly", "Debit"),
            Offer::new(3, 4, "Halyk", "Home goods", "Minimum spend of $1500 monthly", "Credit"),
            Offer::new(4, 7, "Alfa", "Travel Tickets", "Minimum spend of $1500 monthly", "Credit"),
            Offer::new(5, 2, "BCC", "Coffee", "Minimum spend of $1500 monthly", "Credit"),
        ])
    }

    /// All offers in catalog order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Looks up an offer by ID.
    pub fn get(&self, id: OfferId) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.id == id)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl Default for OfferCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
