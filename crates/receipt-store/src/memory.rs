//! # In-Memory Receipt Store
//!
//! Process-lifetime storage. Everything is lost on restart.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 RwLock<HashMap<ReceiptId, Receipt>>                     │
//! │                                                                         │
//! │  put()  ── write lock ──► generate id                                   │
//! │                           ├── vacant?   → insert, release               │
//! │                           └── occupied? → regenerate (bounded)          │
//! │                                                                         │
//! │  get()  ── read lock ───► clone receipt, release                        │
//! │                                                                         │
//! │  Generate-check-insert is ONE critical section: two concurrent puts    │
//! │  can never both claim the same id.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use receipt_core::Receipt;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::id::ReceiptId;
use crate::repository::ReceiptStore;

/// Identifier attempts per `put` before giving up.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Source of candidate identifiers.
pub type IdSource = Box<dyn Fn() -> ReceiptId + Send + Sync>;

/// Receipt store backed by a `HashMap` behind a tokio `RwLock`.
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
    next_id: IdSource,
}

impl InMemoryReceiptStore {
    /// Creates an empty store issuing random UUID v4 identifiers.
    pub fn new() -> Self {
        Self::with_id_source(Box::new(ReceiptId::generate))
    }

    /// Creates an empty store with a custom identifier source.
    ///
    /// ## Usage
    /// Deterministic ids in tests, or a different token scheme.
    pub fn with_id_source(next_id: IdSource) -> Self {
        InMemoryReceiptStore {
            receipts: RwLock::new(HashMap::new()),
            next_id,
        }
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryReceiptStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryReceiptStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, receipt: Receipt) -> StoreResult<ReceiptId> {
        let mut receipts = self.receipts.write().await;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = (self.next_id)();
            match receipts.entry(id) {
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    slot.insert(receipt);
                    debug!(id = %id, attempt, "Receipt stored");
                    return Ok(id);
                }
                Entry::Occupied(taken) => {
                    warn!(id = %taken.key(), attempt, "Receipt id collision, regenerating");
                }
            }
        }

        Err(StoreError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    async fn get(&self, id: &ReceiptId) -> StoreResult<Option<Receipt>> {
        Ok(self.receipts.read().await.get(id).cloned())
    }

    async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
