//! # Receipt Identifiers
//!
//! Opaque tokens handed back on submission and used to look receipts up.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored receipt.
///
/// Generated ids are canonical hyphenated UUID v4 strings, but lookups accept
/// any string: an id that was never issued simply isn't found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4().to_string())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        ReceiptId(id)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        ReceiptId(id.to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
