//! # Scoring Engine
//!
//! Computes loyalty points for a receipt. Pure, deterministic, no I/O.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                 Points                                         │
//! │  ─  ───────────────────  ─────────────────────────────────────────────  │
//! │  1  retailer             +1 per ASCII letter or digit                   │
//! │  2  round dollar total   +50 if total mod 1.00 == 0                     │
//! │  3  quarter total        +25 if total mod 0.25 == 0                     │
//! │  4  item pairs           +5 per complete pair of items                  │
//! │  5  description length   ceil(price × 0.2) when trimmed length % 3 == 0 │
//! │  6  odd purchase day     +6                                             │
//! │  7  afternoon            +10 if 14:00 <= time < 16:00                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! ```text
//! total unparseable       → rules 2 and 3 contribute 0
//! item price unparseable  → that item contributes 0 to rule 5
//! date/time unparseable   → ScoreError, no partial points
//! points exceed u64        → ScoreError::PointsOverflow
//! ```
//!
//! Amounts use exact decimal arithmetic ([`Money`]), so `2.00 mod 0.25`
//! is exactly zero.

use chrono::{Datelike, Timelike};

use crate::error::{ScoreError, ScoreResult};
use crate::money::Money;
use crate::types::{Item, Receipt};
use crate::validation::{parse_purchase_date, parse_purchase_time};

/// Loyalty points. Never negative.
pub type Points = u64;

/// Awarded when the total has no cents.
pub const ROUND_DOLLAR_POINTS: Points = 50;

/// Awarded when the total is a multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: Points = 25;

/// Awarded for every two items.
pub const ITEM_PAIR_POINTS: Points = 5;

/// Awarded for an odd day of the month.
pub const ODD_DAY_POINTS: Points = 6;

/// Awarded for a purchase in the afternoon window.
pub const AFTERNOON_POINTS: Points = 10;

/// Afternoon window, `[start, end)` in whole hours.
pub const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

// =============================================================================
// Points Breakdown
// =============================================================================

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, or `PointsOverflow` if it does not
    /// fit in [`Points`].
    pub fn total(&self) -> ScoreResult<Points> {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .try_fold(0, |sum: Points, points| sum.checked_add(points))
        .ok_or(ScoreError::PointsOverflow)
    }
}

// =============================================================================
// Engine Entry Points
// =============================================================================

/// Scores a receipt.
///
/// ## Example
/// ```rust
/// use receipt_core::{scoring::score, Item, Receipt};
///
/// let receipt = Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     total: "9.00".to_string(),
///     items: vec![Item::new("Gatorade", "2.25"); 4],
/// };
///
/// // 14 + 50 + 25 + 10 + 10
/// assert_eq!(score(&receipt).unwrap(), 109);
/// ```
pub fn score(receipt: &Receipt) -> ScoreResult<Points> {
    score_breakdown(receipt)?.total()
}

/// Scores a receipt, keeping each rule's contribution.
pub fn score_breakdown(receipt: &Receipt) -> ScoreResult<PointsBreakdown> {
    // Rules 6 and 7 gate everything else.
    let date = parse_purchase_date(&receipt.purchase_date).map_err(|_| {
        ScoreError::InvalidPurchaseDate {
            value: receipt.purchase_date.clone(),
        }
    })?;
    let time = parse_purchase_time(&receipt.purchase_time).map_err(|_| {
        ScoreError::InvalidPurchaseTime {
            value: receipt.purchase_time.clone(),
        }
    })?;

    let total = Money::parse(&receipt.total).ok();

    let descriptions = receipt.items.iter().try_fold(0, |sum: Points, item| {
        sum.checked_add(description_points(item)?)
            .ok_or(ScoreError::PointsOverflow)
    })?;

    Ok(PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: match total {
            Some(total) if total.is_whole() => ROUND_DOLLAR_POINTS,
            _ => 0,
        },
        quarter_multiple: match total {
            Some(total) if total.is_multiple_of(Money::QUARTER) => QUARTER_MULTIPLE_POINTS,
            _ => 0,
        },
        item_pairs: item_pair_points(receipt.item_count()),
        descriptions,
        odd_day: if date.day() % 2 == 1 { ODD_DAY_POINTS } else { 0 },
        afternoon: if AFTERNOON_HOURS.contains(&time.hour()) {
            AFTERNOON_POINTS
        } else {
            0
        },
    })
}

/// Scores a receipt, collapsing any failure to zero.
///
/// Reproduces the legacy behavior where an unparseable date or time scored
/// 0 points. Kept for regression comparison only: a zero from this function
/// cannot be told apart from a genuine zero.
pub fn score_or_zero(receipt: &Receipt) -> Points {
    score(receipt).unwrap_or(0)
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1: one point per ASCII alphanumeric character.
pub fn retailer_points(retailer: &str) -> Points {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as Points
}

/// Rule 4: five points for every complete pair.
pub fn item_pair_points(item_count: usize) -> Points {
    ((item_count / 2) as Points).saturating_mul(ITEM_PAIR_POINTS)
}

/// Rule 5: `ceil(price × 0.2)` when the trimmed description length is a
/// multiple of three.
///
/// Only ASCII spaces are trimmed and the length is counted in bytes.
/// Unparseable and negative prices contribute nothing. A price whose points
/// do not fit in [`Points`] is a `PointsOverflow` error.
pub fn description_points(item: &Item) -> ScoreResult<Points> {
    let description = item.short_description.trim_matches(' ');
    if description.len() % 3 != 0 {
        return Ok(0);
    }

    let Ok(price) = Money::parse(&item.price) else {
        return Ok(0);
    };

    let points = price.ceil_fifth().ok_or(ScoreError::PointsOverflow)?;
    Points::try_from(points.max(0)).map_err(|_| ScoreError::PointsOverflow)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(date: &str, time: &str, total: &str, items: Vec<Item>) -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            total: total.to_string(),
            items,
        }
    }

    #[test]
    fn test_retailer_points() {
        assert_eq!(retailer_points("Target"), 6);
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("7-Eleven"), 7);
        assert_eq!(retailer_points("Café Ñandú"), 6);
        assert_eq!(retailer_points("   "), 0);
        assert_eq!(retailer_points(""), 0);
    }

    #[test]
    fn test_round_and_quarter_are_independent() {
        let whole = score_breakdown(&receipt("2022-01-02", "10:00", "35.00", vec![])).unwrap();
        assert_eq!(whole.round_dollar, 50);
        assert_eq!(whole.quarter_multiple, 25);

        let quarter = score_breakdown(&receipt("2022-01-02", "10:00", "35.75", vec![])).unwrap();
        assert_eq!(quarter.round_dollar, 0);
        assert_eq!(quarter.quarter_multiple, 25);

        let neither = score_breakdown(&receipt("2022-01-02", "10:00", "35.35", vec![])).unwrap();
        assert_eq!(neither.round_dollar, 0);
        assert_eq!(neither.quarter_multiple, 0);
    }

    #[test]
    fn test_unparseable_total_contributes_nothing() {
        let breakdown =
            score_breakdown(&receipt("2022-01-02", "10:00", "thirty", vec![])).unwrap();
        assert_eq!(breakdown.round_dollar, 0);
        assert_eq!(breakdown.quarter_multiple, 0);
        assert_eq!(breakdown.total(), Ok(6));
    }

    #[test]
    fn test_item_pair_points() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(3), 5);
        assert_eq!(item_pair_points(4), 10);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_description_points() {
        let points = |description: &str, price: &str| {
            description_points(&Item::new(description, price)).unwrap()
        };
        // 18 bytes once trimmed: ceil(12.25 * 0.2) = 3
        assert_eq!(points("Emils Cheese Pizza", "12.25"), 3);
        // 20 bytes: no points
        assert_eq!(points("Knorr Creamy Chicken", "1.26"), 0);
        // 21 bytes: ceil(1.26 * 0.2) = 1
        assert_eq!(points("Knorr Creamy Chickens", "1.26"), 1);
        // Leading/trailing spaces are ignored, interior spaces count
        assert_eq!(points("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"), 3);
        // Empty description has length 0, a multiple of 3
        assert_eq!(points("", "5.00"), 1);
        assert_eq!(points("   ", "5.00"), 1);
    }

    #[test]
    fn test_description_points_bad_price() {
        assert_eq!(description_points(&Item::new("Dasani", "free")), Ok(0));
        assert_eq!(description_points(&Item::new("Dasani", "-10.00")), Ok(0));
    }

    #[test]
    fn test_description_points_at_u64_limit() {
        // 5 * u64::MAX: exactly u64::MAX points
        assert_eq!(
            description_points(&Item::new("abc", "92233720368547758075")),
            Ok(u64::MAX)
        );
        // 5 * 2^64: one past the limit
        assert_eq!(
            description_points(&Item::new("abc", "92233720368547758080")),
            Err(ScoreError::PointsOverflow)
        );
    }

    #[test]
    fn test_description_sum_overflow() {
        // Two items at 2^63 points each
        let r = receipt(
            "2022-01-02",
            "10:00",
            "1.00",
            vec![Item::new("abc", "46116860184273879040"); 2],
        );
        assert_eq!(score_breakdown(&r), Err(ScoreError::PointsOverflow));
        assert_eq!(score(&r), Err(ScoreError::PointsOverflow));
    }

    #[test]
    fn test_total_overflow() {
        // Descriptions alone reach u64::MAX; the retailer pushes it over.
        let r = receipt(
            "2022-01-02",
            "10:00",
            "x",
            vec![Item::new("abc", "92233720368547758075")],
        );
        let breakdown = score_breakdown(&r).unwrap();
        assert_eq!(breakdown.descriptions, u64::MAX);
        assert_eq!(breakdown.total(), Err(ScoreError::PointsOverflow));
        assert_eq!(score(&r), Err(ScoreError::PointsOverflow));

        let mut no_retailer = r.clone();
        no_retailer.retailer = String::new();
        assert_eq!(score(&no_retailer), Ok(u64::MAX));
    }

    #[test]
    fn test_odd_day() {
        let odd = score_breakdown(&receipt("2022-01-01", "10:00", "x", vec![])).unwrap();
        assert_eq!(odd.odd_day, 6);
        let even = score_breakdown(&receipt("2022-01-02", "10:00", "x", vec![])).unwrap();
        assert_eq!(even.odd_day, 0);
    }

    #[test]
    fn test_afternoon_window() {
        let at = |time: &str| {
            score_breakdown(&receipt("2022-01-02", time, "x", vec![]))
                .unwrap()
                .afternoon
        };
        assert_eq!(at("13:01"), 0);
        assert_eq!(at("13:59"), 0);
        assert_eq!(at("14:00"), 10);
        assert_eq!(at("14:33"), 10);
        assert_eq!(at("15:59"), 10);
        assert_eq!(at("16:00"), 0);
    }

    #[test]
    fn test_bad_date_short_circuits() {
        let r = receipt("2022-02-30", "14:33", "35.00", vec![Item::new("abc", "10")]);
        assert_eq!(
            score(&r),
            Err(ScoreError::InvalidPurchaseDate {
                value: "2022-02-30".to_string()
            })
        );
        assert_eq!(score_or_zero(&r), 0);
    }

    #[test]
    fn test_bad_time_short_circuits() {
        let r = receipt("2022-01-01", "2:33pm", "35.00", vec![]);
        assert_eq!(
            score(&r),
            Err(ScoreError::InvalidPurchaseTime {
                value: "2:33pm".to_string()
            })
        );
    }

    /// retailer 6 + quarter 25 + one pair 5 + "Dasani" ceil(0.28) 1 + odd day 6
    #[test]
    fn test_pepsi_dasani_receipt() {
        let r = receipt(
            "2022-01-01",
            "13:01",
            "1.25",
            vec![Item::new("Pepsi - 12-oz", "1.25"), Item::new("Dasani", "1.40")],
        );
        let breakdown = score_breakdown(&r).unwrap();
        assert_eq!(
            breakdown,
            PointsBreakdown {
                retailer: 6,
                round_dollar: 0,
                quarter_multiple: 25,
                item_pairs: 5,
                descriptions: 1,
                odd_day: 6,
                afternoon: 0,
            }
        );
        assert_eq!(breakdown.total(), Ok(43));
    }

    #[test]
    fn test_target_receipt() {
        let r = receipt(
            "2022-01-01",
            "13:01",
            "35.35",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        );
        assert_eq!(score(&r).unwrap(), 28);
    }

    #[test]
    fn test_corner_market_receipt() {
        let r = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            total: "9.00".to_string(),
            items: vec![Item::new("Gatorade", "2.25"); 4],
        };
        assert_eq!(score(&r).unwrap(), 109);
    }

    #[test]
    fn test_score_is_deterministic() {
        let r = receipt("2022-01-01", "15:00", "2.00", vec![Item::new("abc", "0.01"); 3]);
        assert_eq!(score(&r), score(&r));
        // 6 + 50 + 25 + 5 + 3*1 + 6 + 10
        assert_eq!(score(&r).unwrap(), 105);
    }
}
