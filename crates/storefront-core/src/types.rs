//! # Domain Types
//!
//! Small value types shared by the promotion, product and store modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │   ProductId     │   │   OrderLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  exact percent  │   │  arena index    │   │  product (Id)   │       │
//! │  │  0..=100        │   │  (usize)        │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Arena Identity
//! Products live in the [`Store`](crate::store::Store) arena and are addressed
//! by [`ProductId`]. An id stays valid for the life of the store, even after
//! the product is removed from the listing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validation::{validate_percent, ValidationResult};

// =============================================================================
// Discount Rate
// =============================================================================

/// A validated discount percentage in `0..=100`, kept exactly as given.
///
/// Rounding happens once, on the discounted amount, never on the rate, so
/// `33.333%` prices differently from `33.33%`.
///
/// Serialized as the plain percent number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct DiscountRate(u64);

impl DiscountRate {
    /// Creates a discount rate from a percentage.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_percentage(30.0).unwrap().percentage(), 30.0);
    /// assert!(DiscountRate::from_percentage(100.5).is_err());
    /// ```
    pub fn from_percentage(percent: f64) -> ValidationResult<Self> {
        validate_percent(percent)?;
        // Adding +0.0 folds -0.0 into +0.0 so equal rates compare equal
        Ok(DiscountRate((percent + 0.0).to_bits()))
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from_bits(self.0)
    }

    /// The percent as the exact fraction `numerator / 2^shift`.
    ///
    /// A percent of at most 100 always yields `numerator < 2^53` and
    /// `shift >= 46`.
    pub(crate) fn as_fraction(&self) -> (u64, u32) {
        let exponent = ((self.0 >> 52) & 0x7ff) as u32;
        let fraction = self.0 & ((1u64 << 52) - 1);
        if exponent == 0 {
            // zero or subnormal
            (fraction, 1074)
        } else {
            (fraction | (1u64 << 52), 1075 - exponent)
        }
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> f64 {
        rate.percentage()
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = ValidationError;

    fn try_from(percent: f64) -> ValidationResult<Self> {
        DiscountRate::from_percentage(percent)
    }
}

// =============================================================================
// Product Identity
// =============================================================================

/// Stable handle to a product held in a store's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(usize);

impl ProductId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        ProductId(index)
    }

    /// Returns the arena index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// A single (product, requested quantity) pairing within an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: ProductId,
    pub quantity: i64,
}

impl OrderLine {
    pub const fn new(product: ProductId, quantity: i64) -> Self {
        OrderLine { product, quantity }
    }
}

impl From<(ProductId, i64)> for OrderLine {
    fn from((product, quantity): (ProductId, i64)) -> Self {
        OrderLine { product, quantity }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_percentage() {
        let rate = DiscountRate::from_percentage(30.0).unwrap();
        assert_eq!(rate.percentage(), 30.0);
        assert_eq!(DiscountRate::from_percentage(33.333).unwrap().percentage(), 33.333);
        assert_eq!(
            DiscountRate::from_percentage(-0.0).unwrap(),
            DiscountRate::from_percentage(0.0).unwrap()
        );

        assert!(DiscountRate::from_percentage(-1.0).is_err());
        assert!(DiscountRate::from_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_discount_rate_fraction_is_exact() {
        let fraction = |p: f64| DiscountRate::from_percentage(p).unwrap().as_fraction();
        assert_eq!(fraction(30.0), (30 << 48, 48));
        assert_eq!(fraction(100.0), (100 << 46, 46));
        assert_eq!(fraction(0.5), (1 << 52, 53));
        assert_eq!(DiscountRate::from_percentage(0.0).unwrap().as_fraction(), (0, 1074));
    }

    #[test]
    fn test_discount_rate_serde() {
        let rate = DiscountRate::from_percentage(12.5).unwrap();
        assert_eq!(serde_json::to_value(rate).unwrap(), serde_json::json!(12.5));

        let parsed: DiscountRate = serde_json::from_str("12.5").unwrap();
        assert_eq!(parsed, rate);
        assert!(serde_json::from_str::<DiscountRate>("150").is_err());
    }

    #[test]
    fn test_order_line_from_tuple() {
        let id = ProductId::new(2);
        let line: OrderLine = (id, 3).into();
        assert_eq!(line, OrderLine::new(id, 3));
        assert_eq!(line.product.index(), 2);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(7).to_string(), "#7");
    }
}
