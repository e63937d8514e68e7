//! # Receipt Repository
//!
//! The storage abstraction handlers depend on.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                           │
//! │       │                                                                 │
//! │       │  state.store.put(receipt)                                       │
//! │       ▼                                                                 │
//! │  dyn ReceiptStore                                                       │
//! │  ├── put(&self, receipt)  → ReceiptId                                   │
//! │  ├── get(&self, id)       → Option<Receipt>                             │
//! │  └── len(&self)           → usize                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryReceiptStore (today) / persistent backend (later)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use receipt_core::Receipt;

use crate::error::StoreResult;
use crate::id::ReceiptId;

/// Keyed storage for submitted receipts.
///
/// ## Contract
/// - `put` allocates an identifier that is unique among all stored ones and
///   inserts the receipt in one atomic step
/// - Identifiers are never reused; receipts are never mutated or removed
/// - A receipt is visible to every `get` that starts after its `put` returns
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt under a freshly generated identifier.
    async fn put(&self, receipt: Receipt) -> StoreResult<ReceiptId>;

    /// Looks up a receipt. `Ok(None)` when the id was never issued.
    async fn get(&self, id: &ReceiptId) -> StoreResult<Option<Receipt>>;

    /// Number of stored receipts.
    async fn len(&self) -> usize;

    /// Checks if nothing has been stored yet.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
