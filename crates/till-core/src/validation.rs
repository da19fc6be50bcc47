//! # Validation Module
//!
//! Input validation utilities for Till POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web front end                                                │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Boundary validation of external records                           │
//! │  └── Business rule validation before any state change                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: REST backend (authoritative)                                 │
//! │  └── Stock, pricing and customer balances re-checked on submit         │
//! │                                                                         │
//! │  Defense in depth: the client-side checks exist for fast feedback,     │
//! │  the backend check is the correctness boundary.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Clamp vs. Reject
//! Two consistent policies, chosen by what the value means:
//! - Loose *data* (tax rates, stock ceilings, discount percentages read
//!   from elsewhere) clamps into range at the boundary.
//! - Explicit *requests* (a quantity, a redemption amount) are rejected
//!   when out of range, because silently shrinking a request would
//!   misreport what the user asked for.

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 50 characters
/// - Should contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_sku;
///
/// assert!(validate_sku("COKE-330").is_ok());
/// assert!(validate_sku("").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added to the cart.
///
/// ## Rules
/// - Must be positive (> 0); `set_quantity` treats 0 as removal before
///   this check runs
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a manual discount expressed in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

/// Validates a points redemption request against the customer's balance.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Checkout: Redeem Points                                                │
/// │                                                                         │
/// │  Customer has 120 points; cashier enters 500                           │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_points_redemption(500, 120) ← THIS FUNCTION                  │
/// │       │                                                                 │
/// │       ├── requested < 0?  → Error: "points must be positive"           │
/// │       │                                                                 │
/// │       ├── requested > 120? → Error: "points exceeds available"         │
/// │       │                                                                 │
/// │       └── OK → discount engine caps against remaining payable          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_points_redemption(requested: i64, available: i64) -> ValidationResult<()> {
    if requested < 0 {
        return Err(ValidationError::MustBePositive {
            field: "points".to_string(),
        });
    }

    if requested > available {
        return Err(ValidationError::ExceedsAvailable {
            field: "points".to_string(),
            requested,
            available,
        });
    }

    Ok(())
}

/// Validates a balance redemption request against the customer's stored
/// account balance.
pub fn validate_balance_redemption(
    requested_cents: i64,
    available_cents: i64,
) -> ValidationResult<()> {
    if requested_cents < 0 {
        return Err(ValidationError::MustBePositive {
            field: "balance".to_string(),
        });
    }

    if requested_cents > available_cents {
        return Err(ValidationError::ExceedsAvailable {
            field: "balance".to_string(),
            requested: requested_cents,
            available: available_cents,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
