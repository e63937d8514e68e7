//! # receipt-store: Storage Layer for Receipt Points
//!
//! This crate keeps submitted receipts and issues their identifiers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Data Flow                           │
//! │                                                                         │
//! │  POST /receipts/process           GET /receipts/{id}/points            │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐   ┌──────────────────┐   ┌────────────┐   │   │
//! │  │   │  ReceiptStore  │   │ InMemoryReceipt- │   │ ReceiptId  │   │   │
//! │  │   │ (repository.rs)│◄──│ Store (memory.rs)│──►│  (id.rs)   │   │   │
//! │  │   │  put/get/len   │   │ RwLock<HashMap>  │   │  UUID v4   │   │   │
//! │  │   └────────────────┘   └──────────────────┘   └────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use receipt_store::{InMemoryReceiptStore, ReceiptStore};
//!
//! let store = InMemoryReceiptStore::new();
//! let id = store.put(receipt).await?;
//! let stored = store.get(&id).await?;
//! ```

pub mod error;
pub mod id;
pub mod memory;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use id::ReceiptId;
pub use memory::InMemoryReceiptStore;
pub use repository::ReceiptStore;
