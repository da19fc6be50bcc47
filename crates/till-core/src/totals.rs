//! # Totals Aggregator
//!
//! The pure function at the heart of the POS panel: combine line items
//! and discount inputs into a display-ready totals breakdown.
//!
//! ## Formula
//! ```text
//! subtotal = Σ line base (ex-tax)
//! tax      = Σ line tax
//! manual     = subtotal × manual_bps / 10000
//! membership = subtotal × tier_bps / 10000
//! base       = subtotal + tax - manual - membership
//! points     = min(points_value, max(0, base))
//! after      = base - points
//! balance    = min(balance_value, max(0, after))
//! grand      = max(0, after - balance)
//! ```
//!
//! Both percentage discounts are computed against the same tax-exclusive
//! subtotal - never against a value another discount already reduced.
//! The redemptions each cap at what remains payable at their stage, so no
//! combination of inputs can stack the total below zero.
//!
//! This function is recomputed on every cart mutation; there is no cached
//! intermediate state and no side effect, so calling it twice with the
//! same inputs yields byte-identical output.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::discount::DiscountInputs;
use crate::money::Money;

// =============================================================================
// Totals Breakdown
// =============================================================================

/// Flat breakdown record: suitable for the totals panel and for embedding
/// in the order-submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TotalsBreakdown {
    /// Tax-exclusive subtotal across all lines.
    pub subtotal_ex_tax_cents: i64,

    /// Total tax across all lines.
    pub tax_cents: i64,

    /// Manual percentage discount amount.
    pub manual_discount_cents: i64,

    /// Membership tier discount amount.
    pub membership_discount_cents: i64,

    /// Loyalty points redeemed, as currency (after capping).
    pub points_discount_cents: i64,

    /// Account balance redeemed (after capping).
    pub balance_discount_cents: i64,

    /// Final payable amount. Never negative.
    pub grand_total_cents: i64,
}

// =============================================================================
// Aggregator
// =============================================================================

/// Computes the totals breakdown for the current cart and discounts.
///
/// Pure function of its inputs: no state, no clock, no I/O. The session
/// calls this on every read, which is what makes the Previewed → Draft
/// transition implicit - a stale preview simply recomputes.
///
/// ## Example
/// ```rust
/// use till_core::cart::Cart;
/// use till_core::discount::DiscountInputs;
/// use till_core::totals::compute_totals;
/// use till_core::types::ProductSnapshot;
///
/// let product = ProductSnapshot::new("p1", "TEA", "Tea", 10000, 1000, false, None).unwrap();
/// let cart = Cart::new().add_item(&product, 2).unwrap();
/// let totals = compute_totals(&cart, &DiscountInputs::new());
///
/// assert_eq!(totals.subtotal_ex_tax_cents, 20000);
/// assert_eq!(totals.tax_cents, 2000);
/// assert_eq!(totals.grand_total_cents, 22000);
/// ```
pub fn compute_totals(cart: &Cart, discounts: &DiscountInputs) -> TotalsBreakdown {
    let subtotal = cart.subtotal_ex_tax();
    let tax = cart.tax();

    // Percentage discounts: both against the tax-exclusive subtotal,
    // computed independently of each other.
    let manual = subtotal.percentage_of(discounts.manual_discount_bps);
    let membership = subtotal.percentage_of(discounts.membership_discount_bps());

    // Redemptions: each capped by what remains payable at its stage.
    // `base` can go negative when the percentage discounts exceed the
    // taxed total; the caps clamp against zero so redemptions never add
    // to an already-free order.
    let base = subtotal + tax - manual - membership;
    let points = discounts.points_value().min(base.clamp_non_negative());
    let after_points = base - points;
    let balance = discounts
        .balance_value()
        .min(after_points.clamp_non_negative());
    let grand_total = (after_points - balance).clamp_non_negative();

    TotalsBreakdown {
        subtotal_ex_tax_cents: subtotal.cents(),
        tax_cents: tax.cents(),
        manual_discount_cents: manual.cents(),
        membership_discount_cents: membership.cents(),
        points_discount_cents: points.cents(),
        balance_discount_cents: balance.cents(),
        grand_total_cents: grand_total.cents(),
    }
}

impl TotalsBreakdown {
    /// Grand total as Money.
    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_cents(self.grand_total_cents)
    }

    /// Sum of all four discount amounts (for receipt display).
    pub fn total_discount_cents(&self) -> i64 {
        self.manual_discount_cents
            + self.membership_discount_cents
            + self.points_discount_cents
            + self.balance_discount_cents
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MembershipTier, ProductSnapshot};

    fn product(id: &str, price_cents: i64, tax_bps: u32, included: bool) -> ProductSnapshot {
        ProductSnapshot::new(
            id,
            format!("SKU-{}", id),
            format!("Product {}", id),
            price_cents,
            tax_bps,
            included,
            None,
        )
        .unwrap()
    }

    /// Scenario A: {rate 100.00, qty 2, 10% exclusive}
    /// → subtotal 200.00, tax 20.00, base 220.00.
    #[test]
    fn test_exclusive_tax_scenario() {
        let cart = Cart::new().add_item(&product("1", 10000, 1000, false), 2).unwrap();
        let t = compute_totals(&cart, &DiscountInputs::new());

        assert_eq!(t.subtotal_ex_tax_cents, 20000);
        assert_eq!(t.tax_cents, 2000);
        assert_eq!(t.grand_total_cents, 22000);
    }

    /// Scenario B: {rate 110.00, qty 1, 10% inclusive}
    /// → subtotal 100.00, tax 10.00, base 110.00.
    #[test]
    fn test_inclusive_tax_scenario() {
        let cart = Cart::new().add_item(&product("1", 11000, 1000, true), 1).unwrap();
        let t = compute_totals(&cart, &DiscountInputs::new());

        assert_eq!(t.subtotal_ex_tax_cents, 10000);
        assert_eq!(t.tax_cents, 1000);
        assert_eq!(t.grand_total_cents, 11000);
    }

    /// Scenario C: subtotal 200.00, manual 10%, membership 5%
    /// → manual 20.00, membership 10.00, grand = 200 + tax - 30.
    #[test]
    fn test_percentage_discounts_independent() {
        let cart = Cart::new().add_item(&product("1", 10000, 1000, false), 2).unwrap();
        let d = DiscountInputs::new()
            .with_manual_discount(1000)
            .with_tier(MembershipTier::Silver);
        let t = compute_totals(&cart, &d);

        assert_eq!(t.manual_discount_cents, 2000);
        // Membership is 5% of the subtotal, NOT 5% of the manually
        // discounted value (that would be 1800).
        assert_eq!(t.membership_discount_cents, 1000);
        assert_eq!(t.grand_total_cents, 20000 + 2000 - 3000);
    }

    /// Scenario D: base 50.00, 10000 points (worth 100.00)
    /// → points discount capped at 50.00, grand total 0.
    #[test]
    fn test_points_capped_at_remaining() {
        let cart = Cart::new().add_item(&product("1", 5000, 0, false), 1).unwrap();
        let d = DiscountInputs::new().with_points(10000);
        let t = compute_totals(&cart, &d);

        assert_eq!(t.points_discount_cents, 5000);
        assert_eq!(t.grand_total_cents, 0);
    }

    /// Scenario E: after points 20.00 remains; balance 100.00 requested
    /// → balance discount capped at 20.00, grand total 0.
    #[test]
    fn test_balance_capped_after_points() {
        let cart = Cart::new().add_item(&product("1", 5000, 0, false), 1).unwrap();
        let d = DiscountInputs::new().with_points(3000).with_balance(10000);
        let t = compute_totals(&cart, &d);

        assert_eq!(t.points_discount_cents, 3000);
        assert_eq!(t.balance_discount_cents, 2000);
        assert_eq!(t.grand_total_cents, 0);
    }

    #[test]
    fn test_grand_total_never_negative() {
        // Sweep discount combinations well past 100% of the order.
        let cart = Cart::new()
            .add_item(&product("1", 3333, 825, false), 3)
            .unwrap()
            .add_item(&product("2", 11000, 1000, true), 1)
            .unwrap();

        for manual in [0u32, 5000, 10000] {
            for tier in [MembershipTier::Normal, MembershipTier::Platinum] {
                for points in [0i64, 100, 1_000_000] {
                    for balance in [0i64, 99, 10_000_000] {
                        let d = DiscountInputs::new()
                            .with_manual_discount(manual)
                            .with_tier(tier)
                            .with_points(points)
                            .with_balance(balance);
                        let t = compute_totals(&cart, &d);
                        assert!(t.grand_total_cents >= 0, "negative total for {:?}", d);
                        assert!(t.points_discount_cents >= 0);
                        assert!(t.balance_discount_cents >= 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_aggregator_is_idempotent() {
        let cart = Cart::new().add_item(&product("1", 10099, 825, true), 4).unwrap();
        let d = DiscountInputs::new()
            .with_manual_discount(750)
            .with_tier(MembershipTier::Gold)
            .with_points(500)
            .with_balance(1200);

        let first = compute_totals(&cart, &d);
        let second = compute_totals(&cart, &d);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_cart_is_all_zeros() {
        let t = compute_totals(&Cart::new(), &DiscountInputs::new().with_points(1000));
        assert_eq!(t.subtotal_ex_tax_cents, 0);
        assert_eq!(t.tax_cents, 0);
        assert_eq!(t.points_discount_cents, 0);
        assert_eq!(t.grand_total_cents, 0);
    }

    #[test]
    fn test_redemptions_skip_an_already_free_order() {
        // 100% manual discount on a tax-free order leaves nothing payable;
        // points and balance must both cap at zero.
        let cart = Cart::new().add_item(&product("1", 5000, 0, false), 1).unwrap();
        let d = DiscountInputs::new()
            .with_manual_discount(10000)
            .with_points(1000)
            .with_balance(1000);
        let t = compute_totals(&cart, &d);

        assert_eq!(t.manual_discount_cents, 5000);
        assert_eq!(t.points_discount_cents, 0);
        assert_eq!(t.balance_discount_cents, 0);
        assert_eq!(t.grand_total_cents, 0);
    }

    #[test]
    fn test_total_discount_sum() {
        let cart = Cart::new().add_item(&product("1", 10000, 0, false), 2).unwrap();
        let d = DiscountInputs::new()
            .with_manual_discount(1000)
            .with_tier(MembershipTier::Silver)
            .with_points(100)
            .with_balance(200);
        let t = compute_totals(&cart, &d);

        assert_eq!(
            t.total_discount_cents(),
            t.manual_discount_cents
                + t.membership_discount_cents
                + t.points_discount_cents
                + t.balance_discount_cents
        );
        assert_eq!(
            t.grand_total_cents,
            t.subtotal_ex_tax_cents + t.tax_cents - t.total_discount_cents()
        );
    }
}
