//! # till-core: Pure Business Logic for Till POS
//!
//! This crate is the **heart** of Till POS. It contains the order/cart
//! pricing computation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Till POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Web Front End (POS screen)                    │   │
//! │  │    Product search ──► Cart panel ──► Totals panel ──► Receipt   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  till-checkout (session layer)                  │   │
//! │  │    CheckoutSession, OrderBackend seam, stale-lookup guard       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ till-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  totals   │  │   │
//! │  │   │ snapshots │  │   cents   │  │ reducers  │  │ aggregator│  │   │
//! │  │   │   tiers   │  │  tax math │  │ qty guard │  │ discounts │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductSnapshot, CustomerSnapshot, TaxRate, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Line items and pure cart reducers with the quantity guard
//! - [`discount`] - Discount inputs (manual, membership, points, balance)
//! - [`totals`] - The totals aggregator
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary and business-rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input,
//!    same output. Totals are recomputed on read, never cached.
//! 2. **No I/O**: Network, file system, clocks-for-logic are FORBIDDEN here
//!    (timestamps are record metadata, never inputs to pricing).
//! 3. **Integer Money**: All monetary values are in cents (i64); rates and
//!    percentages are basis points.
//! 4. **Explicit Errors**: All errors are typed, never strings or panics.
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::cart::Cart;
//! use till_core::discount::DiscountInputs;
//! use till_core::totals::compute_totals;
//! use till_core::types::{MembershipTier, ProductSnapshot};
//!
//! let tea = ProductSnapshot::new("p1", "TEA-500", "Green Tea", 10000, 1000, false, Some(10))?;
//! let cart = Cart::new().add_item(&tea, 2)?;
//!
//! let discounts = DiscountInputs::new()
//!     .with_manual_discount(1000) // 10%
//!     .with_tier(MembershipTier::Silver);
//!
//! let totals = compute_totals(&cart, &discounts);
//! assert_eq!(totals.subtotal_ex_tax_cents, 20000);
//! assert_eq!(totals.grand_total_cents, 19000);
//! # Ok::<(), till_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Money` instead of
// `use till_core::money::Money`

pub use cart::{Cart, LineItem};
pub use discount::DiscountInputs;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use totals::{compute_totals, TotalsBreakdown};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Currency value of one loyalty point, in cents
///
/// Fixed conversion: 1 point = 0.01 currency units. Not configurable -
/// the loyalty program defines this, not the tenant.
pub const POINT_VALUE_CENTS: i64 = 1;
