//! Shopping list item
//!
//! An [`Item`] is one entry on the list: a display name, a quantity and an
//! opaque identifier. The identifier is only ever used for lookups; the
//! case-insensitive name is what keeps two entries from describing the same
//! thing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of an item, stable for the item's whole lifetime.
pub type ItemId = Uuid;

/// One shopping list entry.
///
/// Serialized as `{ "id": "<uuid>", "name": "...", "amount": n }`. Unknown
/// fields in stored records are ignored so older builds can read lists
/// written by newer ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub amount: u32,
}

impl Item {
    /// Create a fresh item with a new id and an amount of one.
    ///
    /// `raw_name` is trimmed and capitalized.
    pub fn new(raw_name: &str) -> Self {
        Self::with_id(Uuid::new_v4(), raw_name, 1)
    }

    /// Create an item with an explicit id and amount.
    pub fn with_id(id: ItemId, raw_name: &str, amount: u32) -> Self {
        Self {
            id,
            name: capitalize_words(raw_name.trim()),
            amount,
        }
    }

    /// Case-insensitive name comparison used for deduplication.
    ///
    /// `raw_name` is normalized the way it would be stored before folding;
    /// capitalization is not reversible for every script (`ß` becomes `SS`).
    pub fn matches_name(&self, raw_name: &str) -> bool {
        fold_name(&self.name) == fold_name(&capitalize_words(raw_name.trim()))
    }
}

/// Normalize a name for comparison: trimmed and lower-cased.
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Upper-case the first letter of every word and lower-case the rest.
///
/// Whitespace between words is preserved as-is.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
