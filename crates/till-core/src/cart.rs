//! # Cart Module
//!
//! Line items and the cart reducers that mutate them.
//!
//! ## Pure Reducers
//! The cart is an explicit, passed-in value. Every reducer takes `&self`
//! and returns a fresh `Cart`, so callers own their state and there is no
//! ambient singleton:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Reducer Flow                                    │
//! │                                                                         │
//! │  Frontend Action            Reducer                 Result              │
//! │  ───────────────            ───────                 ──────              │
//! │                                                                         │
//! │  Click Product ───────────► add_item() ───────────► Ok(new Cart)       │
//! │                                                                         │
//! │  Change Quantity ─────────► set_quantity() ───────► Ok(new Cart)       │
//! │                                    │                                    │
//! │                                    └── over ceiling ► Err(Insufficient  │
//! │                                                           Stock)        │
//! │  Click Remove ────────────► remove_item() ────────► Ok(new Cart)       │
//! │                                                                         │
//! │  Click Clear ─────────────► clear() ──────────────► new empty Cart     │
//! │                                                                         │
//! │  On error the original cart is untouched - rejection means no mutation │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ProductSnapshot, TaxRate};
use crate::validation::validate_quantity;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Line Item
// =============================================================================

/// One product line within an order in progress.
///
/// ## Price Freezing
/// All product data is captured at add-time. If the product changes in the
/// backend afterwards, this line keeps displaying (and pricing) what the
/// customer was shown when it was added.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product id (backend reference).
    pub product_id: String,

    /// SKU at time of adding (frozen).
    pub sku: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Listed unit price in cents at time of adding (frozen).
    /// If `tax_included`, this embeds tax.
    pub unit_price_cents: i64,

    /// Tax rate in basis points at time of adding (frozen).
    pub tax_rate_bps: u32,

    /// Whether the listed price already embeds tax.
    pub tax_included: bool,

    /// Stock ceiling known at add time; `None` means untracked.
    pub stock_ceiling: Option<i64>,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this line was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item from a validated product snapshot.
    pub fn from_product(product: &ProductSnapshot, quantity: i64) -> Self {
        LineItem {
            product_id: product.id.clone(),
            sku: product.sku.clone(),
            name: product.name.clone(),
            unit_price_cents: product.unit_price_cents,
            tax_rate_bps: product.tax_rate_bps,
            tax_included: product.tax_included,
            stock_ceiling: product.available_stock,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the tax rate for this line.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// The listed amount: unit price × quantity.
    ///
    /// For tax-included lines this embeds tax; for exclusive lines it is
    /// already the ex-tax base.
    pub fn gross(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }

    /// The tax-exclusive base amount for this line.
    ///
    /// Percentage discounts apply to this value - discounts never apply
    /// to tax.
    pub fn base(&self) -> Money {
        if self.tax_included {
            let (base, _tax) = self.gross().extract_tax(self.tax_rate());
            base
        } else {
            self.gross()
        }
    }

    /// The tax amount for this line.
    ///
    /// - tax-included: extracted from the listed amount
    /// - tax-exclusive: additive on top of the listed amount
    ///
    /// A zero rate yields zero tax in either mode.
    pub fn tax(&self) -> Money {
        if self.tax_included {
            let (_base, tax) = self.gross().extract_tax(self.tax_rate());
            tax
        } else {
            self.gross().calculate_tax(self.tax_rate())
        }
    }

    /// Checks a requested quantity against this line's stock ceiling.
    fn check_ceiling(&self, requested: i64) -> CoreResult<()> {
        if let Some(available) = self.stock_ceiling {
            if requested > available {
                return Err(CoreError::InsufficientStock {
                    sku: self.sku.clone(),
                    available,
                    requested,
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered collection of line items.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges
///   quantities)
/// - Quantity is positive on every stored line (`set_quantity(_, 0)`
///   removes the line)
/// - No line's quantity exceeds its stock ceiling
/// - Maximum distinct lines: 100; maximum quantity per line: 999
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in add order.
    pub items: Vec<LineItem>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, returning the new cart state.
    ///
    /// ## Behavior
    /// - Product already in cart: quantities merge into one line
    /// - Product not in cart: appended as a new line with frozen price
    /// - The merged quantity is checked against the stock ceiling and the
    ///   per-line maximum; on rejection the original cart is unchanged
    pub fn add_item(&self, product: &ProductSnapshot, quantity: i64) -> CoreResult<Cart> {
        validate_quantity(quantity)?;

        let mut next = self.clone();

        if let Some(line) = next.items.iter_mut().find(|i| i.product_id == product.id) {
            let merged = line.quantity + quantity;
            if merged > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.check_ceiling(merged)?;
            line.quantity = merged;
            return Ok(next);
        }

        if next.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        let line = LineItem::from_product(product, quantity);
        line.check_ceiling(quantity)?;
        next.items.push(line);
        Ok(next)
    }

    /// Sets the quantity of a line, returning the new cart state.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the line
    /// - Quantity over the stock ceiling: rejected, no mutation
    /// - Product not found: error
    pub fn set_quantity(&self, product_id: &str, quantity: i64) -> CoreResult<Cart> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }
        validate_quantity(quantity)?;

        let mut next = self.clone();
        match next.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(line) => {
                line.check_ceiling(quantity)?;
                line.quantity = quantity;
                Ok(next)
            }
            None => Err(CoreError::ItemNotInCart(product_id.to_string())),
        }
    }

    /// Removes a line from the cart by product id, returning the new
    /// cart state.
    pub fn remove_item(&self, product_id: &str) -> CoreResult<Cart> {
        let mut next = self.clone();
        let initial_len = next.items.len();
        next.items.retain(|i| i.product_id != product_id);

        if next.items.len() == initial_len {
            Err(CoreError::ItemNotInCart(product_id.to_string()))
        } else {
            Ok(next)
        }
    }

    /// Returns a fresh empty cart.
    pub fn clear(&self) -> Cart {
        Cart::new()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// The tax-exclusive subtotal: the base on which percentage
    /// discounts apply.
    pub fn subtotal_ex_tax(&self) -> Money {
        self.items.iter().map(|i| i.base()).sum()
    }

    /// The total tax across all lines.
    pub fn tax(&self) -> Money {
        self.items.iter().map(|i| i.tax()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
