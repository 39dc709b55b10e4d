//! # Money Module
//!
//! Provides the `Money` type used to round stock-value totals.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Record prices are stored exactly as submitted (f64, no rounding).      │
//! │                                                                         │
//! │  SUM(price × quantity) ──► f64 ──► money::round_to_cents               │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                              integer minor units (cents)                │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                        to_major() ──► 2-decimal JSON value             │
//! │                                                                         │
//! │  Rounding happens exactly once, at the summary boundary.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::{round_to_cents, Money};
//!
//! let total = Money::try_from_major(1234.565).unwrap();
//! assert_eq!(total.cents(), 123457);
//! assert_eq!(total.to_major(), 1234.57);
//! assert_eq!(total.to_string(), "KES 1234.57");
//!
//! // Too large for i64 cents: already whole cents, returned as is.
//! assert_eq!(round_to_cents(1e17), 1e17);
//! ```

use std::fmt;

use crate::CURRENCY_CODE;

/// 2^52: the magnitude where `f64` loses its fractional part.
const WHOLE_CENTS_FROM: f64 = 4_503_599_627_370_496.0;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (cents) of [`CURRENCY_CODE`].
///
/// ## Design Decisions
/// - **i64 (signed)**: the type itself does not forbid negatives; stock
///   totals never produce them because prices and quantities are checked
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a major-unit amount to the nearest cent.
    ///
    /// Halves round away from zero (`f64::round`). Returns `None` for
    /// non-finite amounts and for amounts whose cent count does not fit in
    /// an `i64` (above roughly 9.2e16 major units).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_major(10.005).map(|m| m.cents()), Some(1001));
    /// assert_eq!(Money::try_from_major(0.004).map(|m| m.cents()), Some(0));
    /// assert_eq!(Money::try_from_major(1e17), None);
    /// ```
    pub fn try_from_major(amount: f64) -> Option<Self> {
        let cents = amount * 100.0;

        // Scaling by 100 can land a hair under the half (10.005 * 100 =
        // 1000.4999...), so round the scaled value at 1e-6 first. From 2^52
        // up every f64 is a whole number and there is nothing to nudge.
        let scaled = if cents.abs() < WHOLE_CENTS_FROM {
            ((cents * 1e6).round() / 1e6).round()
        } else {
            cents
        };

        // i64::MAX as f64 is exactly 2^63, which is already out of range.
        if scaled.is_finite() && scaled.abs() < i64::MAX as f64 {
            Some(Money(scaled as i64))
        } else {
            None
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in major units with two decimals of precision.
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Rounds a major-unit amount to two decimals, half away from zero.
///
/// Goes through [`Money`] when the amount fits. Past that range an `f64`
/// is spaced more than a cent apart, so the amount is already a whole
/// number of cents and comes back unchanged instead of being capped.
pub fn round_to_cents(amount: f64) -> f64 {
    Money::try_from_major(amount).map_or(amount, |money| money.to_major())
}

impl fmt::Display for Money {
    /// Formats as `KES 1234.57`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{} {}{}.{:02}", CURRENCY_CODE, sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_major() {
        let cents = |amount: f64| Money::try_from_major(amount).map(|m| m.cents());

        assert_eq!(cents(25.0), Some(2500));
        assert_eq!(cents(19.999), Some(2000));
        assert_eq!(cents(0.1 + 0.2), Some(30));
        assert_eq!(cents(2.675), Some(268));
        assert_eq!(cents(0.0), Some(0));
    }

    #[test]
    fn test_try_from_major_out_of_range() {
        assert_eq!(Money::try_from_major(1e17), None);
        assert_eq!(Money::try_from_major(-1e17), None);
        assert_eq!(Money::try_from_major(f64::INFINITY), None);
        assert_eq!(Money::try_from_major(f64::NAN), None);
    }

    #[test]
    fn test_round_to_cents_never_caps() {
        assert_eq!(round_to_cents(10.005), 10.01);
        assert_eq!(round_to_cents(5e16), 5e16);
        assert_eq!(round_to_cents(1e17), 1e17);
        assert_eq!(round_to_cents(1e20 + 1e5), 1e20 + 1e5);
        assert_eq!(round_to_cents(1.5e300), 1.5e300);
    }

    #[test]
    fn test_to_major() {
        assert_eq!(Money::from_cents(2500).to_major(), 25.0);
        assert_eq!(Money::from_cents(1099).to_major(), 10.99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(5).to_string(), "KES 0.05");
        assert_eq!(Money::from_cents(123456).to_string(), "KES 1234.56");
        assert_eq!(Money::from_cents(-550).to_string(), "KES -5.50");
    }
}
