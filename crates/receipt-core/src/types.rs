//! # Domain Types
//!
//! Core domain types used throughout Receipt Points.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │       Receipt        │  1 ── n  │        Item          │            │
//! │  │  ──────────────────  │ ───────► │  ──────────────────  │            │
//! │  │  retailer            │          │  short_description   │            │
//! │  │  purchase_date       │          │  price (decimal str) │            │
//! │  │  purchase_time       │          └──────────────────────┘            │
//! │  │  total (decimal str) │                                              │
//! │  │  items               │                                              │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Strings
//! Every field keeps the exact text the client submitted. Dates, times and
//! amounts are parsed on demand by [`crate::validation`] and
//! [`crate::scoring`], never rewritten.

use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// A purchased line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description as printed on the receipt.
    pub short_description: String,

    /// Price as a decimal string (e.g. `"6.49"`).
    pub price: String,
}

impl Item {
    /// Creates an item from a description and price string.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// Immutable once stored: the store hands out clones, nothing mutates it.
///
/// ## Wire Format
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "total": "35.35",
///   "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Total amount paid as a decimal string.
    pub total: String,

    /// Purchased items, in receipt order. May be empty.
    pub items: Vec<Item>,
}

impl Receipt {
    /// Returns the number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
