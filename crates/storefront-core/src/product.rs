//! # Product Module
//!
//! Catalog line items and their stock/activation state machine.
//!
//! ## Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Variants                                │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Standard     │   │   NonStocked    │   │     Limited     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  stock checked  │   │  never checked  │   │  stock checked  │       │
//! │  │  decremented    │   │  quantity = 0   │   │  decremented    │       │
//! │  │                 │   │  (e.g. license) │   │  max per order  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purchase Flow
//! Variants differ only in the pre-check. Everything after it (pricing,
//! stock decrement, auto-deactivation) runs in one place, so a line is either
//! fully applied or not applied at all.
//! ```text
//! buy(qty)
//!   │
//!   ▼
//! pre_check ──── Limited: qty > maximum? ──► OrderLimitExceeded
//!   │            qty <= 0?               ──► InvalidArgument
//!   │            Standard/Limited: qty > stock? ──► InsufficientStock
//!   ▼
//! price_line ─── promotion.apply(price, qty) or price × qty
//!   │            does not fit in Money? ──► AmountOverflow
//!   ▼
//! purchase_core
//!   ├── stock -= qty          (Standard/Limited)
//!   └── stock == 0 → deactivate
//! ```
//!
//! [`Product::quote`] runs the first two steps only.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::{PricingStrategy, Promotion};
use crate::validation::{
    validate_order_limit, validate_price, validate_product_name, validate_purchase_quantity,
    validate_stock_quantity,
};

// =============================================================================
// Purchasable
// =============================================================================

/// The capability the store needs from a catalog entry.
pub trait Purchasable {
    /// Current stock. Always 0 for non-stocked products.
    fn quantity(&self) -> i64;

    /// Whether the product is eligible for listing.
    fn is_active(&self) -> bool;

    /// Buys `quantity` units and returns the total charge.
    ///
    /// On error nothing about the product has changed.
    fn buy(&mut self, quantity: i64) -> CoreResult<Money>;

    /// Human-readable one-line summary.
    fn describe(&self) -> String;
}

// =============================================================================
// Product Kind
// =============================================================================

/// Which pre-check a product runs before a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    Standard,
    NonStocked,
    Limited { maximum: i64 },
}

impl ProductKind {
    /// Whether purchases draw down `quantity`.
    #[inline]
    pub const fn tracks_stock(&self) -> bool {
        !matches!(self, ProductKind::NonStocked)
    }
}

/// Outcome of a successful pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StockEffect {
    Decrement,
    Untouched,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog line item.
///
/// ## Invariants
/// - `name` is non-empty, `price` and `quantity` are never negative
/// - For stock-tracked kinds, `quantity == 0` after a purchase or restock
///   means `active == false`
/// - At most one promotion is attached
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Money,
    quantity: i64,
    active: bool,
    promotion: Option<Promotion>,
    kind: ProductKind,
}

impl Product {
    /// Creates a standard stocked product.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::product::{Product, Purchasable};
    ///
    /// let mut mac = Product::new("MacBook Air M2", Money::from_major_minor(1450, 0), 100).unwrap();
    /// assert!(mac.is_active());
    ///
    /// let charge = mac.buy(2).unwrap();
    /// assert_eq!(charge, Money::from_major_minor(2900, 0));
    /// assert_eq!(mac.quantity(), 98);
    ///
    /// assert!(Product::new("", Money::zero(), 1).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        Self::build(name.into(), price, quantity, ProductKind::Standard)
    }

    /// Creates an always-available product whose stock is never checked.
    pub fn non_stocked(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Self::build(name.into(), price, 0, ProductKind::NonStocked)
    }

    /// Creates a stocked product capped at `maximum` units per order line.
    pub fn limited(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        maximum: i64,
    ) -> CoreResult<Self> {
        validate_order_limit(maximum).map_err(|e| CoreError::construction("product", e))?;
        Self::build(name.into(), price, quantity, ProductKind::Limited { maximum })
    }

    fn build(name: String, price: Money, quantity: i64, kind: ProductKind) -> CoreResult<Self> {
        validate_product_name(&name)
            .and_then(|_| validate_price(price))
            .and_then(|_| validate_stock_quantity(quantity))
            .map_err(|e| CoreError::construction("product", e))?;

        Ok(Product {
            name,
            price,
            quantity,
            active: true,
            promotion: None,
            kind,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Display name; not unique within a store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price before any promotion.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Which purchase rules apply.
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Per-order cap, for limited products only.
    pub fn maximum(&self) -> Option<i64> {
        match self.kind {
            ProductKind::Limited { maximum } => Some(maximum),
            _ => None,
        }
    }

    /// Attached promotion, if any.
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Restocks the product.
    ///
    /// Setting a stock-tracked product to 0 deactivates it. A positive value
    /// does not reactivate; use [`Product::activate`]. Non-stocked products
    /// accept any non-negative value but keep their nominal quantity of 0.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_stock_quantity(quantity)?;

        if !self.kind.tracks_stock() {
            debug!(product = %self.name, "ignoring restock of non-stocked product");
            return Ok(());
        }

        self.quantity = quantity;
        if self.quantity == 0 {
            self.deactivate();
        }
        debug!(product = %self.name, quantity, "stock level set");
        Ok(())
    }

    pub fn activate(&mut self) {
        debug!(product = %self.name, "product activated");
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        debug!(product = %self.name, "product deactivated");
        self.active = false;
    }

    /// Attaches a promotion, replacing any existing one.
    pub fn set_promotion(&mut self, promotion: Promotion) {
        self.promotion = Some(promotion);
    }

    /// Removes the promotion; later purchases pay `price × quantity`.
    pub fn clear_promotion(&mut self) {
        self.promotion = None;
    }

    // -------------------------------------------------------------------------
    // Purchase
    // -------------------------------------------------------------------------

    /// Returns what `buy(quantity)` would charge, without buying.
    ///
    /// Fails exactly when `buy` would fail.
    pub fn quote(&self, quantity: i64) -> CoreResult<Money> {
        self.pre_check(quantity)?;
        self.price_line(quantity)
    }

    fn pre_check(&self, quantity: i64) -> CoreResult<StockEffect> {
        match self.kind {
            ProductKind::NonStocked => {
                validate_purchase_quantity(quantity)?;
                Ok(StockEffect::Untouched)
            }
            ProductKind::Standard => self.check_stock(quantity),
            ProductKind::Limited { maximum } => {
                if quantity > maximum {
                    return Err(CoreError::OrderLimitExceeded {
                        product: self.name.clone(),
                        maximum,
                        requested: quantity,
                    });
                }
                self.check_stock(quantity)
            }
        }
    }

    fn check_stock(&self, quantity: i64) -> CoreResult<StockEffect> {
        validate_purchase_quantity(quantity)?;
        if quantity > self.quantity {
            return Err(CoreError::InsufficientStock {
                product: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }
        Ok(StockEffect::Decrement)
    }

    fn price_line(&self, quantity: i64) -> CoreResult<Money> {
        let charge = match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.price.checked_mul_quantity(quantity),
        };
        charge.ok_or_else(|| CoreError::AmountOverflow {
            product: self.name.clone(),
            quantity,
        })
    }

    /// Applies the stock effect of an already priced line. Cannot fail.
    fn purchase_core(&mut self, quantity: i64, effect: StockEffect, charge: Money) -> Money {
        if effect == StockEffect::Decrement {
            self.quantity -= quantity;
            if self.quantity == 0 {
                self.deactivate();
            }
        }

        debug!(
            product = %self.name,
            quantity,
            charge = %charge,
            remaining = self.quantity,
            "purchase applied"
        );
        charge
    }
}

impl Purchasable for Product {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        let effect = self.pre_check(quantity)?;
        let charge = self.price_line(quantity)?;
        Ok(self.purchase_core(quantity, effect, charge))
    }

    fn describe(&self) -> String {
        let mut line = format!("{}, Price: {}", self.name, self.price);
        if self.kind.tracks_stock() {
            line.push_str(&format!(", Quantity: {}", self.quantity));
        }
        if let Some(promotion) = &self.promotion {
            line.push_str(&format!(", Promotion: {}", promotion.name()));
        }
        line
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
