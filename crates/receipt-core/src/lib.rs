//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It contains the domain
//! types and the scoring engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  scoring  │  │ validation│  │   │
//! │  │   │  Receipt  │  │   Money   │  │   score   │  │   rules   │  │   │
//! │  │   │   Item    │  │  (exact)  │  │ breakdown │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                receipt-store (Storage Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item)
//! - [`money`] - Exact decimal amounts (no floating point!)
//! - [`scoring`] - The points rules
//! - [`validation`] - Submission checks and date/time parsers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{score, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:13".to_string(),
//!     total: "1.25".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//! };
//!
//! // retailer 6 + quarter total 25
//! assert_eq!(score(&receipt).unwrap(), 31);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ScoreError, ValidationError};
pub use money::Money;
pub use scoring::{score, score_breakdown, Points, PointsBreakdown};
pub use types::{Item, Receipt};
pub use validation::validate_receipt;
