//! # Domain Types
//!
//! Core domain types used throughout Till POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ ProductSnapshot  │   │ CustomerSnapshot │   │    TaxRate       │    │
//! │  │  ──────────────  │   │  ──────────────  │   │  ──────────────  │    │
//! │  │  id, sku, name   │   │  id, name        │   │  bps (u32)       │    │
//! │  │  unit_price      │   │  tier            │   │  1000 = 10%      │    │
//! │  │  tax_rate_bps    │   │  points_balance  │   └──────────────────┘    │
//! │  │  tax_included    │   │  account_balance │   ┌──────────────────┐    │
//! │  │  available_stock │   └──────────────────┘   │  MembershipTier  │    │
//! │  └──────────────────┘   ┌──────────────────┐   │  ──────────────  │    │
//! │                         │   OrderStatus    │   │  Normal    0%    │    │
//! │                         │  ──────────────  │   │  Silver    5%    │    │
//! │                         │  Draft           │   │  Gold      7%    │    │
//! │                         │  Previewed       │   │  Platinum 10%    │    │
//! │                         │  Submitted       │   └──────────────────┘    │
//! │                         └──────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `ProductSnapshot` and `CustomerSnapshot` are frozen copies of backend
//! data at the moment they enter the session. External records arrive with
//! loose shapes; they are validated into these required-field types at the
//! boundary and never touched by I/O again.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::{validate_price_cents, validate_product_name, validate_sku};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10.00%
///
/// Rates are clamped to 0..=10000 bps (0% to 100%) at construction, so a
/// divisor of `10000 + bps` is always >= 10000 and inclusive-tax
/// extraction can never divide by anything dangerous. Negative external
/// rates clamp to zero - tax is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Maximum representable rate: 100% = 10000 bps.
    pub const MAX_BPS: u32 = 10000;

    /// Creates a tax rate from basis points, clamping to 0..=10000.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        if bps > Self::MAX_BPS {
            TaxRate(Self::MAX_BPS)
        } else {
            TaxRate(bps)
        }
    }

    /// Creates a tax rate from a percentage (for convenience).
    ///
    /// Negative and NaN inputs clamp to 0%; inputs above 100 clamp to 100%.
    pub fn from_percentage(pct: f64) -> Self {
        if !(pct > 0.0) {
            return TaxRate::zero();
        }
        TaxRate::from_bps((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Membership Tier
// =============================================================================

/// Customer membership classification driving a fixed discount percentage.
///
/// The discount table is fixed business policy, not configuration:
///
/// | Tier     | Discount |
/// |----------|----------|
/// | Normal   | 0%       |
/// | Silver   | 5%       |
/// | Gold     | 7%       |
/// | Platinum | 10%      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MembershipTier {
    Normal,
    Silver,
    Gold,
    Platinum,
}

impl MembershipTier {
    /// Returns the tier's discount in basis points.
    #[inline]
    pub const fn discount_bps(&self) -> u32 {
        match self {
            MembershipTier::Normal => 0,
            MembershipTier::Silver => 500,
            MembershipTier::Gold => 700,
            MembershipTier::Platinum => 1000,
        }
    }
}

impl Default for MembershipTier {
    fn default() -> Self {
        MembershipTier::Normal
    }
}

// =============================================================================
// Product Snapshot
// =============================================================================

/// A product record as it enters the checkout session.
///
/// ## Boundary Validation
/// The backend's product records carry optional, inconsistently-shaped
/// fields. This is the single typed record they are converted into, and
/// `ProductSnapshot::new` is where that conversion is validated:
/// - `sku` and `name` must be present and well-formed
/// - `unit_price_cents` must be non-negative
/// - the tax rate clamps into 0..=10000 bps
///
/// ## Optional Fields
/// `available_stock` is `None` for untracked products - the quantity
/// guard only applies when a ceiling is known.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    /// Backend product id.
    pub id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown to cashier and on receipt.
    pub name: String,

    /// Listed unit price in cents. If `tax_included`, this embeds tax.
    pub unit_price_cents: i64,

    /// Tax rate in basis points (1000 = 10%).
    pub tax_rate_bps: u32,

    /// Whether the listed price already embeds tax.
    pub tax_included: bool,

    /// Known stock ceiling; `None` means inventory is not tracked.
    pub available_stock: Option<i64>,
}

impl ProductSnapshot {
    /// Validates external product data into a snapshot.
    ///
    /// This is the boundary where loosely-shaped backend records become
    /// typed domain data. Negative stock ceilings clamp to zero (a
    /// product oversold elsewhere simply cannot be added here).
    pub fn new(
        id: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price_cents: i64,
        tax_rate_bps: u32,
        tax_included: bool,
        available_stock: Option<i64>,
    ) -> CoreResult<Self> {
        let sku = sku.into();
        let name = name.into();
        validate_sku(&sku)?;
        validate_product_name(&name)?;
        validate_price_cents(unit_price_cents)?;

        Ok(ProductSnapshot {
            id: id.into(),
            sku,
            name,
            unit_price_cents,
            tax_rate_bps: TaxRate::from_bps(tax_rate_bps).bps(),
            tax_included,
            available_stock: available_stock.map(|s| s.max(0)),
        })
    }

    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Checks whether `quantity` units can be sold against the known
    /// stock ceiling. Untracked products always pass.
    pub fn can_sell(&self, quantity: i64) -> bool {
        match self.available_stock {
            None => true,
            Some(stock) => quantity <= stock,
        }
    }
}

// =============================================================================
// Customer Snapshot
// =============================================================================

/// A customer record as it enters the checkout session.
///
/// Carries everything the discount engine needs: the membership tier and
/// the redemption ceilings (loyalty points, stored account balance).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSnapshot {
    /// Backend customer id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Membership tier (drives the fixed membership discount).
    pub tier: MembershipTier,

    /// Loyalty points available for redemption.
    pub points_balance: i64,

    /// Stored account balance available for redemption, in cents.
    pub account_balance_cents: i64,
}

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle state of a checkout session.
///
/// ```text
/// Draft ──preview()──► Previewed ──submit()──► Submitted
///   ▲                      │
///   └────any mutation──────┘   (implicit - totals recompute on read)
/// ```
///
/// `Draft` is the only truly mutable state. Mutating while `Previewed`
/// silently drops back to `Draft`; mutating after `Submitted` is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is being built (items, discounts still changing).
    Draft,
    /// Totals have been shown to the customer; still mutable.
    Previewed,
    /// Order was accepted by the backend; immutable.
    Submitted,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Draft
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Previewed => "previewed",
            OrderStatus::Submitted => "submitted",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_clamps() {
        assert_eq!(TaxRate::from_bps(20000).bps(), 10000);
        assert_eq!(TaxRate::from_percentage(-3.0).bps(), 0);
        assert_eq!(TaxRate::from_percentage(f64::NAN).bps(), 0);
        assert_eq!(TaxRate::from_percentage(250.0).bps(), 10000);
    }

    #[test]
    fn test_membership_discount_table() {
        assert_eq!(MembershipTier::Normal.discount_bps(), 0);
        assert_eq!(MembershipTier::Silver.discount_bps(), 500);
        assert_eq!(MembershipTier::Gold.discount_bps(), 700);
        assert_eq!(MembershipTier::Platinum.discount_bps(), 1000);
    }

    #[test]
    fn test_product_snapshot_boundary_validation() {
        let snap = ProductSnapshot::new("p1", "COKE-330", "Coca-Cola 330ml", 250, 1000, false, Some(12));
        assert!(snap.is_ok());

        // Missing sku rejected at the boundary.
        assert!(ProductSnapshot::new("p1", "", "Coke", 250, 1000, false, None).is_err());
        // Negative price rejected.
        assert!(ProductSnapshot::new("p1", "COKE", "Coke", -1, 1000, false, None).is_err());
    }

    #[test]
    fn test_product_snapshot_clamps_loose_fields() {
        let snap =
            ProductSnapshot::new("p1", "COKE", "Coke", 250, 99999, false, Some(-5)).unwrap();
        assert_eq!(snap.tax_rate_bps, 10000);
        assert_eq!(snap.available_stock, Some(0));
    }

    #[test]
    fn test_can_sell() {
        let tracked = ProductSnapshot::new("p1", "A", "A", 100, 0, false, Some(3)).unwrap();
        assert!(tracked.can_sell(3));
        assert!(!tracked.can_sell(4));

        let untracked = ProductSnapshot::new("p2", "B", "B", 100, 0, false, None).unwrap();
        assert!(untracked.can_sell(9999));
    }

    #[test]
    fn test_order_status_display() {
        assert_eq!(OrderStatus::Draft.to_string(), "draft");
        assert_eq!(OrderStatus::Submitted.to_string(), "submitted");
    }
}
