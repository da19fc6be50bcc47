//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  till-checkout errors (separate crate)                                 │
//! │  ├── BackendError     - Order submission failures                      │
//! │  └── CheckoutError    - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CheckoutError → Frontend          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, quantities, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught
/// and translated to user-friendly messages at the checkout seam.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested quantity exceeds the stock ceiling known at request time.
    ///
    /// ## When This Occurs
    /// - A cart mutation asks for more units than the product snapshot says
    ///   are available
    ///
    /// This is a soft guard for fast feedback - the backend re-checks stock
    /// authoritatively when the order is submitted.
    ///
    /// ## User Workflow
    /// ```text
    /// Set quantity (qty: 5)
    ///      │
    ///      ▼
    /// Check ceiling: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { sku: "COKE", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 COKE in stock"
    /// ```
    #[error("Insufficient stock for {sku}: available {available}, requested {requested}")]
    InsufficientStock {
        sku: String,
        available: i64,
        requested: i64,
    },

    /// Product is not in the cart.
    #[error("Product not in cart: {0}")]
    ItemNotInCart(String),

    /// Cart has exceeded maximum allowed distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Order has no line items; nothing to preview or submit.
    #[error("Order has no items")]
    EmptyOrder,

    /// Order is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Mutating a cart after the order was submitted
    /// - Submitting an order twice
    #[error("Order is {status}, cannot perform operation")]
    OrderLocked { status: String },

    /// Redemption requires an attached customer.
    #[error("Cannot redeem {what} without a customer on the order")]
    NoCustomer { what: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Redemption request exceeds what the customer has available.
    ///
    /// Used for loyalty points and account balance: a request over the
    /// available amount is a caller mistake, not something to silently
    /// clamp, because the clamped value would misreport what the customer
    /// actually redeemed.
    #[error("{field} exceeds available: requested {requested}, available {available}")]
    ExceedsAvailable {
        field: String,
        requested: i64,
        available: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            sku: "COKE-330".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for COKE-330: available 3, requested 5"
        );

        let err = CoreError::OrderLocked {
            status: "submitted".to_string(),
        };
        assert_eq!(err.to_string(), "Order is submitted, cannot perform operation");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::ExceedsAvailable {
            field: "points".to_string(),
            requested: 500,
            available: 120,
        };
        assert_eq!(
            err.to_string(),
            "points exceeds available: requested 500, available 120"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "sku".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
