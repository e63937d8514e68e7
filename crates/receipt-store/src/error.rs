//! # Store Error Types
//!
//! Error types for storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ReceiptStore::put / get                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in receipt-api) ← 500 with a generic message                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing receipt is NOT an error here: `get` returns `Ok(None)` and the
//! caller decides how to report it.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Every generated identifier collided with a stored one.
    ///
    /// ## When This Occurs
    /// - Never with random UUIDs in practice
    /// - With an injected identifier source that keeps repeating itself
    #[error("Could not generate a unique receipt id after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },

    /// The backing store rejected the operation.
    #[error("Storage backend failed: {0}")]
    Backend(String),
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
