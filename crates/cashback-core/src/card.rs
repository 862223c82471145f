//! Bank card records submitted by users.
//!
//! Decoding is lenient: keys match field names case-insensitively, absent
//! or `null` fields become empty strings, a `null` body is an empty record,
//! and unknown fields are dropped. Only malformed JSON, a non-object body,
//! or a field of the wrong JSON type is rejected.

use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A user-submitted bank card record, stored transiently in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardSubmission {
    pub card_number: String,
    pub first_name: String,
    pub last_name: String,
    /// Free-form expiry, typically `MM/YY`.
    pub expiration_date: String,
    pub card_type: String,
}

impl CardSubmission {
    /// Decodes a single card record from a raw request body.
    pub fn from_json(body: &[u8]) -> Result<Self, CoreError> {
        let card: Option<CardSubmission> = serde_json::from_slice(body)?;
        Ok(card.unwrap_or_default())
    }

    /// Last four characters of the card number, for log lines.
    pub fn masked_number(&self) -> String {
        let chars: Vec<char> = self.card_number.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("****{}", tail)
    }

    /// Field addressed by a JSON key, ignoring case.
    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key.to_lowercase().as_str() {
            "card_number" => Some(&mut self.card_number),
            "first_name" => Some(&mut self.first_name),
            "last_name" => Some(&mut self.last_name),
            "expiration_date" => Some(&mut self.expiration_date),
            "card_type" => Some(&mut self.card_type),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for CardSubmission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CardVisitor)
    }
}

struct CardVisitor;

impl<'de> Visitor<'de> for CardVisitor {
    type Value = CardSubmission;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a bank card object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut card = CardSubmission::default();
        while let Some(key) = map.next_key::<String>()? {
            match card.field_mut(&key) {
                // null leaves the field as it was
                Some(slot) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *slot = value;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(card)
    }
}
