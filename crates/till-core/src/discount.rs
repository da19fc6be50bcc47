//! # Discount Module
//!
//! Discount configuration for an order in progress.
//!
//! ## Four Discounts, Fixed Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Discount Precedence                                  │
//! │                                                                         │
//! │  1. Manual discount      percentage of subtotal-ex-tax                 │
//! │  2. Membership discount  percentage of subtotal-ex-tax (tier table)    │
//! │  3. Points redemption    capped by what remains payable                │
//! │  4. Balance redemption   capped by what remains after points           │
//! │                                                                         │
//! │  The two percentages are computed independently against the same       │
//! │  tax-exclusive subtotal; the two redemptions each see the running      │
//! │  remainder. The aggregator in totals.rs owns the arithmetic - this     │
//! │  module only carries the inputs.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Clamping
//! These are loose inputs arriving from the UI; they clamp into range at
//! construction (negatives to 0, percentages capped at 100%). Checking a
//! redemption against what the *customer* actually has is the session's
//! job, because only the session knows the customer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::MembershipTier;
use crate::POINT_VALUE_CENTS;

/// Discount configuration for one order.
///
/// Construct via [`DiscountInputs::new`] and the `with_*` builders so the
/// clamping rules apply; the fields stay public because this is a plain
/// data record the front end round-trips.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountInputs {
    /// Manual discount in basis points, applied to the tax-free subtotal.
    pub manual_discount_bps: u32,

    /// Membership tier; its fixed percentage applies to the tax-free
    /// subtotal, independently of the manual discount.
    pub tier: MembershipTier,

    /// Loyalty points to redeem (1 point = 0.01 currency units).
    pub points_to_redeem: i64,

    /// Stored account balance to redeem, in cents.
    pub balance_to_redeem_cents: i64,
}

impl DiscountInputs {
    /// No discounts at all: 0% manual, Normal tier, no redemptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the manual discount, capping at 100% (10000 bps).
    pub fn with_manual_discount(mut self, bps: u32) -> Self {
        self.manual_discount_bps = bps.min(10000);
        self
    }

    /// Sets the membership tier.
    pub fn with_tier(mut self, tier: MembershipTier) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the points to redeem, clamping negatives to 0.
    pub fn with_points(mut self, points: i64) -> Self {
        self.points_to_redeem = points.max(0);
        self
    }

    /// Sets the balance to redeem, clamping negatives to 0.
    pub fn with_balance(mut self, cents: i64) -> Self {
        self.balance_to_redeem_cents = cents.max(0);
        self
    }

    /// The membership discount percentage from the tier table, in bps.
    #[inline]
    pub fn membership_discount_bps(&self) -> u32 {
        self.tier.discount_bps()
    }

    /// The currency value of the requested points redemption.
    pub fn points_value(&self) -> Money {
        Money::from_cents(self.points_to_redeem.max(0) * POINT_VALUE_CENTS)
    }

    /// The currency value of the requested balance redemption.
    pub fn balance_value(&self) -> Money {
        Money::from_cents(self.balance_to_redeem_cents.max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_clamp() {
        let d = DiscountInputs::new()
            .with_manual_discount(25000)
            .with_points(-50)
            .with_balance(-100);

        assert_eq!(d.manual_discount_bps, 10000);
        assert_eq!(d.points_to_redeem, 0);
        assert_eq!(d.balance_to_redeem_cents, 0);
    }

    #[test]
    fn test_points_conversion() {
        // 10000 points = 100.00 currency units
        let d = DiscountInputs::new().with_points(10000);
        assert_eq!(d.points_value().cents(), 10000);
    }

    #[test]
    fn test_tier_lookup() {
        let d = DiscountInputs::new().with_tier(MembershipTier::Gold);
        assert_eq!(d.membership_discount_bps(), 700);
    }

    #[test]
    fn test_default_is_no_discount() {
        let d = DiscountInputs::new();
        assert_eq!(d.manual_discount_bps, 0);
        assert_eq!(d.membership_discount_bps(), 0);
        assert!(d.points_value().is_zero());
        assert!(d.balance_value().is_zero());
    }
}
