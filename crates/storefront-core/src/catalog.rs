//! # Catalog Module
//!
//! Declarative description of a store's initial products and promotions.
//!
//! ## Catalog Document
//! ```json
//! {
//!   "promotions": [
//!     { "name": "30% off!", "rule": { "type": "percentage_discount", "percent": 30 } }
//!   ],
//!   "products": [
//!     { "name": "Windows License", "price_cents": 12500,
//!       "kind": { "type": "non_stocked" }, "promotion": "30% off!" },
//!     { "name": "Shipping", "price_cents": 1000,
//!       "kind": { "type": "limited", "quantity": 250, "maximum": 1 } }
//!   ]
//! }
//! ```
//!
//! Parsing is pure: the app reads the file, this module only sees the text.
//! Every entry goes through the regular constructors in
//! [`Catalog::into_store`], so a bad entry fails exactly like a bad direct
//! construction would.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;
use crate::promotion::Promotion;
use crate::store::Store;

// =============================================================================
// Catalog Types
// =============================================================================

/// A whole catalog document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub promotions: Vec<PromotionSpec>,
    pub products: Vec<ProductSpec>,
}

/// A named promotion that products refer to by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionSpec {
    pub name: String,
    pub rule: PromotionRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionRule {
    PercentageDiscount { percent: f64 },
    SecondHalfPrice,
    BuyTwoGetOneFree,
}

/// One product entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub price_cents: i64,
    pub kind: ProductSpecKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductSpecKind {
    Standard { quantity: i64 },
    NonStocked,
    Limited { quantity: i64, maximum: i64 },
}

// =============================================================================
// Building
// =============================================================================

impl PromotionSpec {
    fn build(&self) -> CoreResult<Promotion> {
        Ok(match self.rule {
            PromotionRule::PercentageDiscount { percent } => {
                Promotion::percentage_discount(&self.name, percent)?
            }
            PromotionRule::SecondHalfPrice => Promotion::second_half_price(&self.name),
            PromotionRule::BuyTwoGetOneFree => Promotion::buy_two_get_one_free(&self.name),
        })
    }
}

impl ProductSpec {
    fn build(&self, promotions: &HashMap<&str, Promotion>) -> CoreResult<Product> {
        let price = Money::from_cents(self.price_cents);
        let mut product = match self.kind {
            ProductSpecKind::Standard { quantity } => Product::new(&self.name, price, quantity)?,
            ProductSpecKind::NonStocked => Product::non_stocked(&self.name, price)?,
            ProductSpecKind::Limited { quantity, maximum } => {
                Product::limited(&self.name, price, quantity, maximum)?
            }
        };

        if let Some(name) = &self.promotion {
            let promotion = promotions
                .get(name.as_str())
                .ok_or_else(|| CoreError::PromotionNotFound(name.clone()))?;
            product.set_promotion(promotion.clone());
        }

        Ok(product)
    }
}

impl Catalog {
    /// Parses a JSON catalog document.
    pub fn from_json(text: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds a store, validating every promotion and product entry.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::catalog::Catalog;
    ///
    /// let store = Catalog::default_catalog().into_store().unwrap();
    /// assert_eq!(store.len(), 5);
    /// assert_eq!(store.total_quantity(), 100 + 500 + 250 + 250);
    /// ```
    pub fn into_store(self) -> CoreResult<Store> {
        let mut promotions = HashMap::new();
        for spec in &self.promotions {
            promotions.insert(spec.name.as_str(), spec.build()?);
        }

        let products = self
            .products
            .iter()
            .map(|spec| spec.build(&promotions))
            .collect::<CoreResult<Vec<_>>>()?;

        debug!(
            products = products.len(),
            promotions = promotions.len(),
            "catalog built"
        );
        Ok(Store::new(products))
    }

    /// The stock start-up inventory.
    pub fn default_catalog() -> Self {
        let promo = |name: &str, rule| PromotionSpec {
            name: name.to_string(),
            rule,
        };
        let product = |name: &str, dollars: i64, kind, promotion: Option<&str>| ProductSpec {
            name: name.to_string(),
            price_cents: dollars * 100,
            kind,
            promotion: promotion.map(str::to_string),
        };

        Catalog {
            promotions: vec![
                promo("Second Half price!", PromotionRule::SecondHalfPrice),
                promo("Buy Two Get One Free!", PromotionRule::BuyTwoGetOneFree),
                promo(
                    "30% off!",
                    PromotionRule::PercentageDiscount { percent: 30.0 },
                ),
            ],
            products: vec![
                product(
                    "MacBook Air M2",
                    1450,
                    ProductSpecKind::Standard { quantity: 100 },
                    Some("Second Half price!"),
                ),
                product(
                    "Bose QuietComfort Earbuds",
                    250,
                    ProductSpecKind::Standard { quantity: 500 },
                    Some("Buy Two Get One Free!"),
                ),
                product(
                    "Google Pixel 7",
                    500,
                    ProductSpecKind::Standard { quantity: 250 },
                    None,
                ),
                product(
                    "Windows License",
                    125,
                    ProductSpecKind::NonStocked,
                    Some("30% off!"),
                ),
                product(
                    "Shipping",
                    10,
                    ProductSpecKind::Limited {
                        quantity: 250,
                        maximum: 1,
                    },
                    None,
                ),
            ],
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
