//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A POS that displays a grand total one cent off from what the backend  │
//! │  charges is a refund queue waiting to happen.                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is an i64 in the smallest currency unit. Percentages   │
//! │    are basis points (1 bps = 0.01%) and rounding is explicit.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//! use till_core::types::TaxRate;
//!
//! let price = Money::from_cents(11000); // 110.00, tax-inclusive
//! let rate = TaxRate::from_bps(1000);   // 10%
//!
//! let (base, tax) = price.extract_tax(rate);
//! assert_eq!(base.cents(), 10000);
//! assert_eq!(tax.cents(), 1000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Discount math transiently produces negative values
///   (a fully-discounted base); the aggregator clamps at the end
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ProductSnapshot.unit_price_cents ──► LineItem.gross ──► LineItem.base/tax
///                                                              │
///        TotalsBreakdown ◄── discounts ◄── subtotal_ex_tax ◄──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Takes a percentage of this amount, expressed in basis points,
    /// rounded half-up.
    ///
    /// This is the single rounding point for every percentage discount in
    /// the system: manual discounts and membership discounts both go
    /// through here so they round identically.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(20000); // 200.00
    /// let manual = subtotal.percentage_of(1000); // 10%
    /// assert_eq!(manual.cents(), 2000); // 20.00
    /// ```
    pub fn percentage_of(&self, bps: u32) -> Money {
        // i128 intermediate prevents overflow on large amounts.
        // +5000 gives half-up rounding (5000/10000 = 0.5).
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Calculates additive tax on a tax-exclusive amount, rounded half-up.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    /// use till_core::types::TaxRate;
    ///
    /// let line = Money::from_cents(20000); // 200.00
    /// let tax = line.calculate_tax(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(tax.cents(), 2000); // 20.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Line total: 200.00 (tax exclusive)
    ///      │
    ///      ▼
    /// calculate_tax(10%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: 20.00, shown on its own receipt row
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.percentage_of(rate.bps())
    }

    /// Splits a tax-inclusive amount into its (base, tax) parts.
    ///
    /// The listed amount already embeds tax, so the base is the amount
    /// divided by `1 + rate` and the tax is whatever remains. Computing
    /// tax as the remainder guarantees `base + tax == amount` exactly,
    /// with the rounding landing on the tax side.
    ///
    /// ```text
    /// base = amount × 10000 / (10000 + bps)   (half-up)
    /// tax  = amount - base
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    /// use till_core::types::TaxRate;
    ///
    /// let listed = Money::from_cents(11000); // 110.00 inclusive of 10%
    /// let (base, tax) = listed.extract_tax(TaxRate::from_bps(1000));
    /// assert_eq!(base.cents(), 10000);
    /// assert_eq!(tax.cents(), 1000);
    /// ```
    pub fn extract_tax(&self, rate: TaxRate) -> (Money, Money) {
        // Divisor is at least 10000 because TaxRate is clamped to
        // 0..=10000 bps, so this division is always safe.
        let divisor = 10000i128 + rate.bps() as i128;
        let base = (self.0 as i128 * 10000 + divisor / 2) / divisor;
        let base = Money::from_cents(base as i64);
        (base, *self - base)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // 2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // 8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns the smaller of two amounts.
    ///
    /// Used to cap redemption discounts at what remains payable.
    #[inline]
    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Clamps a negative value to zero.
    ///
    /// The grand total and each redemption cap apply this so that no
    /// discount path can produce a negative payable amount.
    #[inline]
    pub const fn clamp_non_negative(self) -> Money {
        if self.0 < 0 {
            Money(0)
        } else {
            self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
///
/// All plain ops saturate at the i64 bounds instead of overflowing;
/// the bps paths use i128 intermediates and never get near the bounds.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

/// Summation over iterators of Money (line totals, per-line taxes).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_percentage_half_up_rounding() {
        // 10.00 at 8.25% = 0.825 → rounds up to 0.83
        let amount = Money::from_cents(1000);
        assert_eq!(amount.percentage_of(825).cents(), 83);

        // 10.01 at 2.5% = 0.25025 → 0.25
        let amount = Money::from_cents(1001);
        assert_eq!(amount.percentage_of(250).cents(), 25);
    }

    #[test]
    fn test_additive_tax() {
        // 200.00 at 10% = 20.00
        let amount = Money::from_cents(20000);
        let tax = amount.calculate_tax(TaxRate::from_bps(1000));
        assert_eq!(tax.cents(), 2000);
    }

    #[test]
    fn test_extract_tax_exact() {
        // 110.00 inclusive of 10% → base 100.00, tax 10.00
        let listed = Money::from_cents(11000);
        let (base, tax) = listed.extract_tax(TaxRate::from_bps(1000));
        assert_eq!(base.cents(), 10000);
        assert_eq!(tax.cents(), 1000);
    }

    #[test]
    fn test_extract_tax_reconstructs_exactly() {
        // Whatever the rounding does, base + tax must equal the listed
        // amount so receipts add up.
        for cents in [1, 99, 101, 333, 9999, 123457] {
            let listed = Money::from_cents(cents);
            let (base, tax) = listed.extract_tax(TaxRate::from_bps(825));
            assert_eq!((base + tax).cents(), cents);
            assert!(!tax.is_negative());
        }
    }

    #[test]
    fn test_extract_tax_zero_rate() {
        let listed = Money::from_cents(5000);
        let (base, tax) = listed.extract_tax(TaxRate::zero());
        assert_eq!(base.cents(), 5000);
        assert_eq!(tax.cents(), 0);
    }

    #[test]
    fn test_min_and_clamp() {
        let a = Money::from_cents(5000);
        let b = Money::from_cents(2000);
        assert_eq!(a.min(b).cents(), 2000);

        assert_eq!(Money::from_cents(-100).clamp_non_negative().cents(), 0);
        assert_eq!(Money::from_cents(100).clamp_non_negative().cents(), 100);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 897);
    }

    #[test]
    fn test_plain_ops_saturate_instead_of_overflowing() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);

        assert_eq!(max.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!((max * 3).cents(), i64::MAX);
        assert_eq!((max + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!((min - Money::from_cents(1)).cents(), i64::MIN);

        let mut running = max;
        running += Money::from_cents(100);
        assert_eq!(running.cents(), i64::MAX);
        running -= max;
        running -= max;
        assert_eq!(running.cents(), -i64::MAX);
    }
}
