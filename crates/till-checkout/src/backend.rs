//! # Order Backend Seam
//!
//! The REST backend that persists orders is a collaborator, not part of
//! this codebase. This module defines the trait boundary the session
//! submits through, plus the payload and receipt records that cross it.
//!
//! ## Submission Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Submission                                     │
//! │                                                                         │
//! │  CheckoutSession                       REST backend (opaque)           │
//! │  ───────────────                       ──────────────────────          │
//! │                                                                         │
//! │  build OrderSubmission ───────────────► authoritative re-check:        │
//! │  (items, discounts, breakdown)           stock, prices, balances       │
//! │                                               │                         │
//! │       ┌── Ok(OrderReceipt) ◄──────────────────┤ accepted               │
//! │       │                                       │                         │
//! │       ├── Err(Rejected { message }) ◄─────────┤ validation failed      │
//! │       │                                       │                         │
//! │       └── Err(Unavailable(..)) ◄──────────────┘ network failure        │
//! │                                                                         │
//! │  No automatic retry in any failure case - the user re-submits.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use till_core::{DiscountInputs, LineItem, TotalsBreakdown};

// =============================================================================
// Submission Payload
// =============================================================================

/// The order payload handed to the backend.
///
/// Carries the full client-side computation: line items as priced in the
/// cart, the discount inputs as entered, and the totals breakdown the
/// customer saw. The backend recomputes everything authoritatively and
/// rejects on mismatch rather than silently repricing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    /// Client-generated order id (UUID v4), stable across re-submits of
    /// the same order so the backend can deduplicate.
    pub client_order_id: String,

    /// Customer id, if a customer is attached.
    pub customer_id: Option<String>,

    /// Line items exactly as priced in the cart.
    pub items: Vec<LineItem>,

    /// Discount inputs as entered at the till.
    pub discounts: DiscountInputs,

    /// The totals breakdown shown to the customer.
    pub totals: TotalsBreakdown,

    /// When the client submitted.
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
}

/// What the backend returns for an accepted order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Server-side order id.
    pub order_id: String,

    /// Human-readable receipt number for the printed receipt.
    pub receipt_number: String,
}

// =============================================================================
// Backend Error
// =============================================================================

/// Failures from the order backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend refused the order (stock changed, balance spent,
    /// price drift). The message is displayable as-is.
    #[error("order rejected: {message}")]
    Rejected { message: String },

    /// The backend could not be reached or did not answer.
    #[error("order backend unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Backend Trait
// =============================================================================

/// The order backend consumed as a black box.
///
/// Implementations wrap whatever transport the host application uses
/// (HTTP fetch in a browser, a test double in tests). The session only
/// needs `submit_order`; lookups (products, customers) stay outside this
/// trait because their responses enter the session as already-validated
/// snapshots.
#[allow(async_fn_in_trait)]
pub trait OrderBackend {
    /// Submits an order for authoritative processing.
    async fn submit_order(&self, order: &OrderSubmission) -> Result<OrderReceipt, BackendError>;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_serializes_camel_case() {
        let submission = OrderSubmission {
            client_order_id: "c1".to_string(),
            customer_id: None,
            items: Vec::new(),
            discounts: DiscountInputs::new(),
            totals: TotalsBreakdown {
                subtotal_ex_tax_cents: 0,
                tax_cents: 0,
                manual_discount_cents: 0,
                membership_discount_cents: 0,
                points_discount_cents: 0,
                balance_discount_cents: 0,
                grand_total_cents: 0,
            },
            submitted_at: Utc::now(),
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("clientOrderId").is_some());
        assert!(json.get("customerId").is_some());
        assert!(json["totals"].get("grandTotalCents").is_some());
    }

    #[test]
    fn test_backend_error_messages() {
        let err = BackendError::Rejected {
            message: "insufficient stock".to_string(),
        };
        assert_eq!(err.to_string(), "order rejected: insufficient stock");
    }
}
