//! # Checkout Error Type
//!
//! Unified error type for the checkout session surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Till POS                               │
//! │                                                                         │
//! │  Frontend                     Session Layer                             │
//! │  ────────                     ─────────────                             │
//! │                                                                         │
//! │  session.set_quantity(...)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Result<T, CheckoutError>                                        │  │
//! │  │         │                                                        │  │
//! │  │  Core rule broken? ── CoreError::InsufficientStock ──┐           │  │
//! │  │         │                                            ▼           │  │
//! │  │  Backend refused? ─── BackendError::Rejected ── CheckoutError ──►│  │
//! │  │         │                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The front end receives { code, message } - a machine-readable code    │
//! │  for branching and a human-readable message for display.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use till_core::{CoreError, ValidationError};

use crate::backend::BackendError;

/// Error returned from checkout session operations.
///
/// ## Serialization
/// This is what the front end receives when an operation fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Insufficient stock for COKE-330: available 3, requested 5"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for checkout responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Requested quantity exceeds the known stock ceiling
    InsufficientStock,

    /// Cart operation failed (item missing, cart full)
    CartError,

    /// The order is past the state that allows this operation
    OrderLocked,

    /// The backend rejected the submission (authoritative validation)
    SubmissionRejected,

    /// The backend could not be reached; the user may re-submit manually
    BackendUnavailable,
}

impl CheckoutError {
    /// Creates a new checkout error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CheckoutError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CheckoutError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core business errors to checkout errors.
impl From<CoreError> for CheckoutError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::ItemNotInCart(_) | CoreError::CartTooLarge { .. } => ErrorCode::CartError,
            CoreError::QuantityTooLarge { .. } | CoreError::EmptyOrder => {
                ErrorCode::ValidationError
            }
            CoreError::OrderLocked { .. } => ErrorCode::OrderLocked,
            CoreError::NoCustomer { .. } => ErrorCode::ValidationError,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        CheckoutError::new(code, err.to_string())
    }
}

/// Converts validation errors to checkout errors.
impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        CheckoutError::validation(err.to_string())
    }
}

/// Converts backend errors to checkout errors.
///
/// Rejections carry the backend's own message through to the user; the
/// order stays un-submitted and there is no automatic retry.
impl From<BackendError> for CheckoutError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Rejected { ref message } => {
                CheckoutError::new(ErrorCode::SubmissionRejected, message.clone())
            }
            BackendError::Unavailable(ref reason) => {
                tracing::warn!(reason = %reason, "order backend unavailable");
                CheckoutError::new(
                    ErrorCode::BackendUnavailable,
                    "Order could not be submitted; please try again",
                )
            }
        }
    }
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CheckoutError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: CheckoutError = CoreError::InsufficientStock {
            sku: "COKE-330".to_string(),
            available: 3,
            requested: 5,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert!(err.message.contains("COKE-330"));
    }

    #[test]
    fn test_backend_rejection_keeps_message() {
        let err: CheckoutError = BackendError::Rejected {
            message: "stock changed since preview".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::SubmissionRejected);
        assert_eq!(err.message, "stock changed since preview");
    }

    #[test]
    fn test_unavailable_hides_transport_detail() {
        let err: CheckoutError =
            BackendError::Unavailable("connection refused (10.0.0.1:443)".to_string()).into();
        assert_eq!(err.code, ErrorCode::BackendUnavailable);
        assert!(!err.message.contains("10.0.0.1"));
    }

    #[test]
    fn test_serializes_as_code_and_message() {
        let err = CheckoutError::validation("Order has no items");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Order has no items");
    }
}
