//! # Money Module
//!
//! Provides the `Money` type for handling the decimal strings on a receipt.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │    "Is 35.35 a multiple of 0.25?" depends on rounding noise            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer units at a decimal scale                         │
//! │    "35.35" → units = 3535, scale = 2                                    │
//! │    "0.25"  → units = 25,   scale = 2                                    │
//! │    3535 % 25 = 10 → not a multiple, exactly                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total = Money::parse("35.00").unwrap();
//! assert!(total.is_whole());
//! assert!(total.is_multiple_of(Money::QUARTER));
//!
//! let price = Money::parse("1.26").unwrap();
//! assert!(!price.is_whole());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};

/// Most digits accepted after the decimal point.
pub const MAX_FRACTION_DIGITS: u32 = 12;

/// Most digits accepted in total (integer and fraction part together).
///
/// With [`MAX_FRACTION_DIGITS`] this keeps every intermediate product of
/// two parsed values inside `i128`.
pub const MAX_TOTAL_DIGITS: usize = 24;

// =============================================================================
// Money Type
// =============================================================================

/// An exact decimal amount: `units × 10^-scale`.
///
/// ## Design Decisions
/// - **Normalized**: trailing fractional zeros are stripped on parse, so
///   `"1.50"` and `"1.5"` compare equal and `"35.00"` has scale 0
/// - **i128 units**: room for every value the parser accepts, and for the
///   rescaling done by [`Money::is_multiple_of`]
/// - **No float constructor**: values only come from decimal strings or
///   integer parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    units: i128,
    scale: u32,
}

impl Money {
    /// Zero.
    pub const ZERO: Money = Money { units: 0, scale: 0 };

    /// One quarter of a currency unit (0.25).
    pub const QUARTER: Money = Money { units: 25, scale: 2 };

    /// Creates a value from integer units and a decimal scale.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_parts(125, 2), Money::parse("1.25").unwrap());
    /// ```
    pub fn from_parts(units: i128, scale: u32) -> Self {
        Money { units, scale }.normalized()
    }

    /// Parses a plain decimal string: `[+-]digits[.digits]`.
    ///
    /// ## Rules
    /// - At least one digit, on either side of the point
    /// - No exponent, no thousands separators, no surrounding whitespace
    /// - At most [`MAX_FRACTION_DIGITS`] fraction digits and
    ///   [`MAX_TOTAL_DIGITS`] digits overall
    ///
    /// Errors are reported against the field `amount`; callers rename them
    /// with [`ValidationError::with_field`].
    pub fn parse(input: &str) -> ValidationResult<Money> {
        if input.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let (negative, body) = match input.as_bytes()[0] {
            b'-' => (true, &input[1..]),
            b'+' => (false, &input[1..]),
            _ => (false, input),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ValidationError::invalid_format(
                "amount",
                format!("'{input}' has no digits"),
            ));
        }

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(ValidationError::invalid_format(
                "amount",
                format!("'{input}' is not a decimal number"),
            ));
        }

        if frac_part.len() > MAX_FRACTION_DIGITS as usize
            || int_part.len() + frac_part.len() > MAX_TOTAL_DIGITS
        {
            return Err(ValidationError::invalid_format(
                "amount",
                format!("'{input}' has too many digits"),
            ));
        }

        let units = int_part
            .bytes()
            .chain(frac_part.bytes())
            .fold(0i128, |acc, b| acc * 10 + i128::from(b - b'0'));

        Ok(Money::from_parts(
            if negative { -units } else { units },
            frac_part.len() as u32,
        ))
    }

    /// Returns the integer units at [`Money::scale`].
    #[inline]
    pub const fn units(&self) -> i128 {
        self.units
    }

    /// Returns the number of decimal places.
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Checks if the value is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.units < 0
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Checks for a round amount (value mod 1.00 == 0).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::parse("9.00").unwrap().is_whole());
    /// assert!(!Money::parse("9.01").unwrap().is_whole());
    /// ```
    #[inline]
    pub const fn is_whole(&self) -> bool {
        // Normalized: any remaining fraction digit is non-zero.
        self.scale == 0
    }

    /// Checks if the value is an exact multiple of `step`.
    ///
    /// A zero step is never divided by; only zero is a multiple of zero.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::parse("2.00").unwrap().is_multiple_of(Money::QUARTER));
    /// assert!(Money::parse("1.75").unwrap().is_multiple_of(Money::QUARTER));
    /// assert!(!Money::parse("1.80").unwrap().is_multiple_of(Money::QUARTER));
    /// ```
    pub fn is_multiple_of(&self, step: Money) -> bool {
        if step.is_zero() {
            return self.is_zero();
        }
        let scale = self.scale.max(step.scale);
        let value = self.units * pow10(scale - self.scale);
        let step = step.units * pow10(scale - step.scale);
        value % step == 0
    }

    /// Computes `ceil(value / 5)` exactly, i.e. `ceil(value × 0.2)`.
    ///
    /// Rounds toward positive infinity, so small negative values round up
    /// to zero. `None` only when the scale is too large for `i128`, which
    /// never happens for a parsed value.
    pub(crate) fn ceil_fifth(&self) -> Option<i128> {
        let divisor = 10i128.checked_pow(self.scale)?.checked_mul(5)?;
        Some(ceil_div(self.units, divisor))
    }

    /// Strips trailing fractional zeros.
    fn normalized(mut self) -> Self {
        while self.scale > 0 && self.units % 10 == 0 {
            self.units /= 10;
            self.scale -= 1;
        }
        self
    }
}

#[inline]
fn pow10(exp: u32) -> i128 {
    10i128.pow(exp)
}

/// Ceiling division for a positive divisor.
#[inline]
fn ceil_div(n: i128, d: i128) -> i128 {
    let q = n.div_euclid(d);
    if n.rem_euclid(d) == 0 {
        q
    } else {
        q + 1
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

/// Renders the normalized decimal (`"1.50"` displays as `1.5`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units < 0 { "-" } else { "" };
        let abs = self.units.unsigned_abs();
        if self.scale == 0 {
            return write!(f, "{sign}{abs}");
        }
        let divisor = 10u128.pow(self.scale);
        write!(
            f,
            "{sign}{}.{:0width$}",
            abs / divisor,
            abs % divisor,
            width = self.scale as usize
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
