//! # Promotion Module
//!
//! Stateless pricing strategies applied at purchase time.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Promotion Variants                               │
//! │                                                                         │
//! │  PercentageDiscount(p)   total = price × qty × (1 − p/100)             │
//! │                                                                         │
//! │  SecondHalfPrice         pairs = qty / 2, rest = qty % 2               │
//! │                          total = pairs × 1.5 × price + rest × price    │
//! │                                                                         │
//! │  BuyTwoGetOneFree        groups = qty / 3, rest = qty % 3              │
//! │                          total = (groups × 2 + rest) × price           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing depends only on `(unit price, quantity)`; a promotion never
//! remembers how often it was used and never touches the product.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::DiscountRate;

// =============================================================================
// Pricing Strategy
// =============================================================================

/// Computes the total charge for `quantity` units at `unit_price`.
///
/// Callers validate `quantity > 0` before invoking.
pub trait PricingStrategy {
    /// Descriptive label shown next to the product.
    fn name(&self) -> &str;

    /// Total charge for the whole line, or `None` if it does not fit in
    /// [`Money`].
    fn apply(&self, unit_price: Money, quantity: i64) -> Option<Money>;
}

// =============================================================================
// Promotion
// =============================================================================

/// Discount rule variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionKind {
    /// Flat percentage off the whole line.
    PercentageDiscount { rate: DiscountRate },
    /// Every second unit at half price.
    SecondHalfPrice,
    /// Every third unit free.
    BuyTwoGetOneFree,
}

/// A named pricing rule attached to at most one slot on each product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    name: String,
    kind: PromotionKind,
}

impl Promotion {
    /// Creates a percentage discount.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::promotion::{PricingStrategy, Promotion};
    ///
    /// let promo = Promotion::percentage_discount("30% off!", 30.0).unwrap();
    /// assert_eq!(promo.apply(Money::from_cents(25_000), 1), Some(Money::from_cents(17_500)));
    ///
    /// assert!(Promotion::percentage_discount("too much", 120.0).is_err());
    /// ```
    pub fn percentage_discount(name: impl Into<String>, percent: f64) -> CoreResult<Self> {
        let rate = DiscountRate::from_percentage(percent)
            .map_err(|e| CoreError::construction("promotion", e))?;
        Ok(Promotion {
            name: name.into(),
            kind: PromotionKind::PercentageDiscount { rate },
        })
    }

    /// Creates a "second item at half price" promotion.
    pub fn second_half_price(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            kind: PromotionKind::SecondHalfPrice,
        }
    }

    /// Creates a "buy two, get one free" promotion.
    pub fn buy_two_get_one_free(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            kind: PromotionKind::BuyTwoGetOneFree,
        }
    }

    pub fn kind(&self) -> PromotionKind {
        self.kind
    }
}

impl PricingStrategy for Promotion {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, unit_price: Money, quantity: i64) -> Option<Money> {
        match self.kind {
            PromotionKind::PercentageDiscount { rate } => Some(
                unit_price
                    .checked_mul_quantity(quantity)?
                    .apply_percentage_discount(rate),
            ),
            PromotionKind::SecondHalfPrice => {
                let (pairs, rest) = (quantity / 2, quantity % 2);
                // 1.5x is rounded once over all pairs, not per pair
                let paired = unit_price
                    .checked_mul_quantity(pairs)?
                    .checked_mul_ratio(3, 2)?;
                paired.checked_add(unit_price.checked_mul_quantity(rest)?)
            }
            PromotionKind::BuyTwoGetOneFree => {
                let (groups, rest) = (quantity / 3, quantity % 3);
                unit_price.checked_mul_quantity(groups * 2 + rest)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
