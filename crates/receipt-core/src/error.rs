//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ValidationError  - Submitted receipt is malformed                 │
//! │  └── ScoreError       - Stored receipt cannot be scored                │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Storage operation failures                     │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError / ScoreError / StoreError → ApiError → Client   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at submission time, before a receipt is stored. Field names use
/// the wire spelling (`purchaseDate`, `items[2].price`) so the message can be
/// handed straight back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., invalid decimal, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Monetary value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

impl ValidationError {
    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the same error reported against a different field.
    ///
    /// Parsers report against a generic field name; callers rename it to the
    /// wire path they were validating.
    pub fn with_field(self, field: impl Into<String>) -> Self {
        let field = field.into();
        match self {
            ValidationError::Required { .. } => ValidationError::Required { field },
            ValidationError::InvalidFormat { reason, .. } => {
                ValidationError::InvalidFormat { field, reason }
            }
            ValidationError::MustBeNonNegative { .. } => {
                ValidationError::MustBeNonNegative { field }
            }
        }
    }
}

// =============================================================================
// Score Error
// =============================================================================

/// Scoring failures.
///
/// The scoring engine short-circuits on these: no partial points are
/// returned once one occurs.
///
/// ## When This Occurs
/// - Date/time: only for receipts that reached the store without going
///   through [`validate_receipt`](crate::validation::validate_receipt)
/// - Overflow: prices so large the points no longer fit in [`Points`](crate::Points)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// `purchaseDate` is not a `YYYY-MM-DD` calendar date.
    #[error("purchaseDate '{value}' is not a valid YYYY-MM-DD date")]
    InvalidPurchaseDate { value: String },

    /// `purchaseTime` is not a 24-hour `HH:MM` time.
    #[error("purchaseTime '{value}' is not a valid HH:MM time")]
    InvalidPurchaseTime { value: String },

    /// The point total does not fit in a `u64`.
    #[error("points for this receipt exceed {max}", max = u64::MAX)]
    PointsOverflow,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
