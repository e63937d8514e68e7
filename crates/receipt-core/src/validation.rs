//! # Validation Module
//!
//! Input validation for submitted receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON extraction (receipt-api)                                │
//! │  ├── All fields present, correct JSON types                            │
//! │  └── `items` is an array (may be empty)                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (format checks on submit)                        │
//! │  ├── purchaseDate is YYYY-MM-DD, purchaseTime is HH:MM                 │
//! │  └── total and every price are non-negative decimals                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring (receipt-core::scoring)                              │
//! │  └── Re-parses date/time, typed ScoreError if they are bad             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{parse_purchase_date, parse_purchase_time};
//!
//! assert!(parse_purchase_date("2022-01-01").is_ok());
//! assert!(parse_purchase_time("14:33").is_ok());
//! assert!(parse_purchase_time("24:00").is_err());
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::Receipt;

// =============================================================================
// Date / Time Parsers
// =============================================================================

/// Parses a `YYYY-MM-DD` calendar date.
///
/// ## Rules
/// - Four-digit year, two-digit month and day, hyphen separated
/// - Must be a real calendar date (`2022-02-30` is rejected)
pub fn parse_purchase_date(input: &str) -> ValidationResult<NaiveDate> {
    let invalid = || ValidationError::invalid_format("purchaseDate", "expected YYYY-MM-DD");

    let mut parts = input.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    if !is_digits(year, 4) || !is_digits(month, 2) || !is_digits(day, 2) {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ValidationError::invalid_format("purchaseDate", format!("'{input}' is not a calendar date"))
    })
}

/// Parses a 24-hour `HH:MM` time.
///
/// ## Rules
/// - Hour is one or two digits (`9:05` and `09:05` are both accepted)
/// - Minute is exactly two digits
/// - `00:00` through `23:59`
pub fn parse_purchase_time(input: &str) -> ValidationResult<NaiveTime> {
    let invalid = || ValidationError::invalid_format("purchaseTime", "expected HH:MM (24-hour)");

    let (hour, minute) = input.split_once(':').ok_or_else(invalid)?;

    if !(is_digits(hour, 1) || is_digits(hour, 2)) || !is_digits(minute, 2) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a non-negative decimal amount and returns the parsed value.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_amount;
///
/// assert!(validate_amount("total", "35.35").is_ok());
/// assert!(validate_amount("total", "-1.00").is_err());
/// assert!(validate_amount("total", "abc").is_err());
/// ```
pub fn validate_amount(field: &str, input: &str) -> ValidationResult<Money> {
    let money = Money::parse(input).map_err(|e| e.with_field(field))?;

    if money.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(money)
}

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates the formatted fields of a submitted receipt.
///
/// Only dates, times and amounts are checked. Free-text fields are accepted
/// as-is, blank included. Stops at the first problem; the message names the
/// offending field by its wire path (`items[2].price`).
///
/// ## User Workflow
/// ```text
/// POST /receipts/process
///      │
///      ▼
/// JSON extraction OK
///      │
///      ▼
/// validate_receipt() ← THIS FUNCTION
///      │
///      ├── Err → 400 { "message": "items[0].price must not be negative" }
///      │
///      └── Ok  → store.put(receipt) → 201 { "id": ... }
/// ```
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    parse_purchase_date(&receipt.purchase_date)?;
    parse_purchase_time(&receipt.purchase_time)?;
    validate_amount("total", &receipt.total)?;

    for (index, item) in receipt.items.iter().enumerate() {
        validate_amount(&format!("items[{index}].price"), &item.price)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
