//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Construction, purchase and lookup failures     │
//! │  └── ValidationError  - Field-level reason behind a CoreError          │
//! │                                                                         │
//! │  App errors (apps/storefront)                                          │
//! │  └── ApiError         - What the shell sees (serialized)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Shell                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Kinds
//! | Kind                | Variant                            | Mutates state? |
//! |---------------------|------------------------------------|----------------|
//! | InvalidConstruction | [`CoreError::InvalidConstruction`] | no object made |
//! | InvalidArgument     | [`CoreError::InvalidArgument`]     | no             |
//! | InsufficientStock   | [`CoreError::InsufficientStock`]   | no             |
//! | OrderLimitExceeded  | [`CoreError::OrderLimitExceeded`]  | no             |
//! | NotFound            | [`CoreError::ProductNotFound`]     | no             |
//! | AmountOverflow      | [`CoreError::AmountOverflow`]      | no             |

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product or promotion could not be built from the given values.
    ///
    /// ## When This Occurs
    /// - Empty product name
    /// - Negative price or quantity
    /// - Percentage outside 0-100
    /// - Non-positive per-order maximum
    #[error("Cannot create {entity}: {reason}")]
    InvalidConstruction {
        entity: &'static str,
        #[source]
        reason: ValidationError,
    },

    /// A call argument was rejected before any state changed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Requested quantity exceeds available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Order line (MacBook Air M2, qty: 11)
    ///      │
    ///      ▼
    /// Check stock: available=10
    ///      │
    ///      ▼
    /// InsufficientStock { product: "MacBook Air M2", available: 10, requested: 11 }
    ///      │
    ///      ▼
    /// Order aborts, earlier lines stay committed
    /// ```
    #[error("Not enough stock for '{product}': available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Requested quantity exceeds a limited product's per-order maximum.
    #[error("Cannot purchase more than {maximum} of '{product}' (requested {requested})")]
    OrderLimitExceeded {
        product: String,
        maximum: i64,
        requested: i64,
    },

    /// A line charge or order total does not fit in [`Money`](crate::money::Money).
    ///
    /// Typically a non-stocked product ordered in an absurd quantity.
    /// Nothing is bought for the offending line.
    #[error("Amount for {quantity} of '{product}' is too large")]
    AmountOverflow { product: String, quantity: i64 },

    /// Product is not held by the store.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A catalog entry references an undeclared promotion.
    #[error("Promotion not found: {0}")]
    PromotionNotFound(String),

    /// A catalog document could not be parsed.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl CoreError {
    /// Wraps a validation failure raised while constructing `entity`.
    pub(crate) fn construction(entity: &'static str, reason: ValidationError) -> Self {
        CoreError::InvalidConstruction { entity, reason }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::InvalidCatalog(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These describe *why* a value was rejected; the surrounding [`CoreError`]
/// says whether it happened at construction or at call time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
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
            product: "MacBook Air M2".to_string(),
            available: 10,
            requested: 11,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for 'MacBook Air M2': available 10, requested 11"
        );

        let err = CoreError::OrderLimitExceeded {
            product: "Shipping".to_string(),
            maximum: 1,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "Cannot purchase more than 1 of 'Shipping' (requested 2)"
        );
    }

    #[test]
    fn test_overflow_message() {
        let err = CoreError::AmountOverflow {
            product: "Windows License".to_string(),
            quantity: 1_000_000_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "Amount for 1000000000000000 of 'Windows License' is too large"
        );
    }

    #[test]
    fn test_construction_error_keeps_reason() {
        let err = CoreError::construction(
            "product",
            ValidationError::Required {
                field: "name".to_string(),
            },
        );
        assert_eq!(err.to_string(), "Cannot create product: name is required");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validation_converts_to_invalid_argument() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidArgument(_)));
        assert_eq!(core_err.to_string(), "Invalid argument: quantity must be positive");
    }

    #[test]
    fn test_json_error_becomes_invalid_catalog() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core_err: CoreError = parse_err.into();
        assert!(matches!(core_err, CoreError::InvalidCatalog(_)));
    }
}
