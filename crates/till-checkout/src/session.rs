//! # Checkout Session
//!
//! One customer's order in progress: the cart, the discount inputs, the
//! attached customer, and where the order is in its lifecycle.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐  preview()   ┌───────────┐   submit()   ┌───────────┐    │
//! │  │  Draft   │─────────────►│ Previewed │─────────────►│ Submitted │    │
//! │  └──────────┘              └───────────┘              └───────────┘    │
//! │       ▲                         │                          │           │
//! │       └───── any mutation ──────┘                    mutations fail    │
//! │             (implicit, free:                         with OrderLocked  │
//! │              totals recompute                                          │
//! │              on read)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The session is a plain owned value - one session per browser tab, no
//! shared mutable state, no locking. Hosts that run sessions on multiple
//! tasks wrap it themselves.

use tracing::{debug, info};
use uuid::Uuid;

use till_core::totals::compute_totals;
use till_core::validation::{
    validate_balance_redemption, validate_discount_bps, validate_points_redemption,
};
use till_core::{
    Cart, CoreError, CustomerSnapshot, DiscountInputs, OrderStatus, ProductSnapshot,
    TotalsBreakdown,
};

use crate::backend::{OrderBackend, OrderReceipt, OrderSubmission};
use crate::error::CheckoutError;

/// A checkout session: cart, discounts, customer, lifecycle status.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    /// Client-side order id, generated at session start. Stable across
    /// re-submits so the backend can deduplicate.
    client_order_id: String,

    cart: Cart,
    discounts: DiscountInputs,
    customer: Option<CustomerSnapshot>,
    status: OrderStatus,
    receipt: Option<OrderReceipt>,
}

impl CheckoutSession {
    /// Starts a fresh session with an empty cart and no discounts.
    pub fn new() -> Self {
        let client_order_id = Uuid::new_v4().to_string();
        debug!(order_id = %client_order_id, "new checkout session");
        CheckoutSession {
            client_order_id,
            cart: Cart::new(),
            discounts: DiscountInputs::new(),
            customer: None,
            status: OrderStatus::Draft,
            receipt: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The client-side order id.
    pub fn client_order_id(&self) -> &str {
        &self.client_order_id
    }

    /// Current lifecycle status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// The cart as it stands.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current discount inputs.
    pub fn discounts(&self) -> &DiscountInputs {
        &self.discounts
    }

    /// The attached customer, if any.
    pub fn customer(&self) -> Option<&CustomerSnapshot> {
        self.customer.as_ref()
    }

    /// The receipt, once the order has been submitted.
    pub fn receipt(&self) -> Option<&OrderReceipt> {
        self.receipt.as_ref()
    }

    /// Computes the current totals breakdown.
    ///
    /// Recomputed on every call - there is no cached state to go stale,
    /// which is what makes the Previewed → Draft transition implicit.
    pub fn totals(&self) -> TotalsBreakdown {
        compute_totals(&self.cart, &self.discounts)
    }

    // =========================================================================
    // Cart Mutations
    // =========================================================================

    /// Adds a product to the cart.
    pub fn add_item(
        &mut self,
        product: &ProductSnapshot,
        quantity: i64,
    ) -> Result<(), CheckoutError> {
        self.ensure_mutable()?;
        debug!(sku = %product.sku, quantity, "add item");
        self.cart = self.cart.add_item(product, quantity)?;
        self.touch();
        Ok(())
    }

    /// Sets a line's quantity (0 removes the line).
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), CheckoutError> {
        self.ensure_mutable()?;
        debug!(product_id, quantity, "set quantity");
        self.cart = self.cart.set_quantity(product_id, quantity)?;
        self.touch();
        Ok(())
    }

    /// Removes a line from the cart.
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), CheckoutError> {
        self.ensure_mutable()?;
        debug!(product_id, "remove item");
        self.cart = self.cart.remove_item(product_id)?;
        self.touch();
        Ok(())
    }

    /// Clears the cart. Discounts and customer stay attached.
    pub fn clear_cart(&mut self) -> Result<(), CheckoutError> {
        self.ensure_mutable()?;
        debug!("clear cart");
        self.cart = self.cart.clear();
        self.touch();
        Ok(())
    }

    // =========================================================================
    // Customer & Discount Mutations
    // =========================================================================

    /// Attaches or detaches the customer.
    ///
    /// The membership tier follows the customer, and any pending
    /// redemptions reset to zero - they were capped against the previous
    /// customer's balances and are meaningless for the new one.
    pub fn set_customer(&mut self, customer: Option<CustomerSnapshot>) -> Result<(), CheckoutError> {
        self.ensure_mutable()?;
        let tier = customer.as_ref().map(|c| c.tier).unwrap_or_default();
        debug!(customer = ?customer.as_ref().map(|c| c.id.as_str()), ?tier, "set customer");

        self.discounts = DiscountInputs::new()
            .with_manual_discount(self.discounts.manual_discount_bps)
            .with_tier(tier);
        self.customer = customer;
        self.touch();
        Ok(())
    }

    /// Sets the manual discount percentage, in basis points.
    pub fn set_manual_discount(&mut self, bps: u32) -> Result<(), CheckoutError> {
        self.ensure_mutable()?;
        validate_discount_bps(bps)?;
        debug!(bps, "set manual discount");
        self.discounts.manual_discount_bps = bps;
        self.touch();
        Ok(())
    }

    /// Requests a loyalty points redemption.
    ///
    /// Requires an attached customer; the request must not exceed the
    /// customer's points balance. The discount engine separately caps the
    /// redeemed value at what remains payable.
    pub fn redeem_points(&mut self, points: i64) -> Result<(), CheckoutError> {
        self.ensure_mutable()?;
        let customer = self.require_customer("points")?;
        validate_points_redemption(points, customer.points_balance)?;
        debug!(points, "redeem points");
        self.discounts.points_to_redeem = points;
        self.touch();
        Ok(())
    }

    /// Requests an account balance redemption, in cents.
    pub fn redeem_balance(&mut self, cents: i64) -> Result<(), CheckoutError> {
        self.ensure_mutable()?;
        let customer = self.require_customer("balance")?;
        validate_balance_redemption(cents, customer.account_balance_cents)?;
        debug!(cents, "redeem balance");
        self.discounts.balance_to_redeem_cents = cents;
        self.touch();
        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Computes totals and marks the session as previewed.
    pub fn preview(&mut self) -> Result<TotalsBreakdown, CheckoutError> {
        self.ensure_mutable()?;
        if self.cart.is_empty() {
            return Err(CoreError::EmptyOrder.into());
        }

        let totals = self.totals();
        debug!(grand_total = totals.grand_total_cents, "preview");
        self.status = OrderStatus::Previewed;
        Ok(totals)
    }

    /// Submits the order through the backend.
    ///
    /// On success the session becomes `Submitted` and immutable; on any
    /// failure it keeps its prior state and the error is surfaced with a
    /// displayable message. No automatic retry - the user re-submits, and
    /// the stable `client_order_id` lets the backend deduplicate.
    pub async fn submit<B: OrderBackend>(
        &mut self,
        backend: &B,
    ) -> Result<OrderReceipt, CheckoutError> {
        self.ensure_mutable()?;
        if self.cart.is_empty() {
            return Err(CoreError::EmptyOrder.into());
        }
        // Redemptions without a customer cannot happen through the
        // setters; re-checked here because DiscountInputs is a plain
        // record callers could have swapped wholesale.
        if self.customer.is_none()
            && (self.discounts.points_to_redeem > 0 || self.discounts.balance_to_redeem_cents > 0)
        {
            return Err(CoreError::NoCustomer {
                what: "redemptions".to_string(),
            }
            .into());
        }

        let submission = OrderSubmission {
            client_order_id: self.client_order_id.clone(),
            customer_id: self.customer.as_ref().map(|c| c.id.clone()),
            items: self.cart.items.clone(),
            discounts: self.discounts.clone(),
            totals: self.totals(),
            submitted_at: chrono::Utc::now(),
        };

        debug!(
            order_id = %submission.client_order_id,
            items = submission.items.len(),
            grand_total = submission.totals.grand_total_cents,
            "submitting order"
        );

        let receipt = backend.submit_order(&submission).await?;

        info!(
            order_id = %receipt.order_id,
            receipt_number = %receipt.receipt_number,
            "order submitted"
        );
        self.status = OrderStatus::Submitted;
        self.receipt = Some(receipt.clone());
        Ok(receipt)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Rejects any operation once the order is submitted.
    fn ensure_mutable(&self) -> Result<(), CheckoutError> {
        if self.status == OrderStatus::Submitted {
            return Err(CoreError::OrderLocked {
                status: self.status.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// A mutation happened: a previewed session is a draft again.
    fn touch(&mut self) {
        if self.status == OrderStatus::Previewed {
            self.status = OrderStatus::Draft;
        }
    }

    fn require_customer(&self, what: &str) -> Result<&CustomerSnapshot, CheckoutError> {
        self.customer.as_ref().ok_or_else(|| {
            CheckoutError::from(CoreError::NoCustomer {
                what: what.to_string(),
            })
        })
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
