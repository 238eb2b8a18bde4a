//! # Money Module
//!
//! Provides the `Won` type for handling monetary values safely.
//!
//! Korean won has no minor unit in practice, so a `Won` is a whole-number
//! amount. Keeping it an integer (never a float) means cart totals are exact
//! and the wire format stays a bare JSON number.
//!
//! ## Usage
//! ```rust
//! use matjip_core::money::Won;
//!
//! let price = Won::from_won(8_000);
//! let topping = Won::from_won(1_000);
//!
//! let line_total = (price + topping) * 2;
//! assert_eq!(line_total.won(), 18_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Won Type
// =============================================================================

/// A monetary value in whole Korean won.
///
/// ## Design Decisions
/// - **i64 (signed)**: room for refunds/adjustments even though catalog
///   prices are non-negative
/// - **Single-field tuple struct**: zero-cost wrapper over i64
/// - **Transparent serde**: serializes as a bare integer (`"price": 8000`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Won(i64);

impl Won {
    /// Creates a value from whole won.
    ///
    /// ## Example
    /// ```rust
    /// use matjip_core::money::Won;
    ///
    /// let price = Won::from_won(8000);
    /// assert_eq!(price.won(), 8000);
    /// ```
    #[inline]
    pub const fn from_won(won: i64) -> Self {
        Won(won)
    }

    /// Returns the amount in whole won.
    #[inline]
    pub const fn won(&self) -> i64 {
        self.0
    }

    /// Zero won.
    #[inline]
    pub const fn zero() -> Self {
        Won(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use matjip_core::money::Won;
    ///
    /// let unit_price = Won::from_won(9_000);
    /// assert_eq!(unit_price.multiply_quantity(3).won(), 27_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Won(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with a won sign and thousands grouping.
///
/// For debugging and logs. The page layer owns user-facing formatting.
impl fmt::Display for Won {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₩{}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Groups a digit string with commas every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

impl Add for Won {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Won(self.0 + other.0)
    }
}

impl AddAssign for Won {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Won {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Won(self.0 - other.0)
    }
}

impl SubAssign for Won {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Won {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Won(self.0 * qty)
    }
}

/// Summing an iterator of amounts (topping totals, cart totals).
impl Sum for Won {
    fn sum<I: Iterator<Item = Won>>(iter: I) -> Self {
        iter.fold(Won::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_won() {
        let price = Won::from_won(8000);
        assert_eq!(price.won(), 8000);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format!("{}", Won::from_won(0)), "₩0");
        assert_eq!(format!("{}", Won::from_won(500)), "₩500");
        assert_eq!(format!("{}", Won::from_won(8000)), "₩8,000");
        assert_eq!(format!("{}", Won::from_won(1_234_567)), "₩1,234,567");
        assert_eq!(format!("{}", Won::from_won(-15_000)), "-₩15,000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Won::from_won(8000);
        let b = Won::from_won(1000);

        assert_eq!((a + b).won(), 9000);
        assert_eq!((a - b).won(), 7000);
        assert_eq!((a * 2).won(), 16_000);
        assert_eq!(a.multiply_quantity(3).won(), 24_000);
    }

    #[test]
    fn test_sum() {
        let toppings = [Won::from_won(1000), Won::from_won(1500), Won::from_won(500)];
        let total: Won = toppings.into_iter().sum();
        assert_eq!(total.won(), 3000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Won::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Won::from_won(100).is_positive());
        assert!(Won::from_won(-100).is_negative());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Won::from_won(8000)).unwrap();
        assert_eq!(json, "8000");

        let back: Won = serde_json::from_str("8000").unwrap();
        assert_eq!(back, Won::from_won(8000));
    }
}
