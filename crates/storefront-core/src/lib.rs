//! # storefront-core: Pure Business Logic for Storefront
//!
//! This crate is the **heart** of Storefront. It contains the pricing engine,
//! the product stock state machine and the order-fulfillment rules, with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Shell (menu, prompts)                        │   │
//! │  │    List products ──► Total quantity ──► Make an order           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                apps/storefront (commands)                       │   │
//! │  │    list_products, total_quantity, place_order                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ promotion │  │  product  │  │   store   │  │  catalog  │  │   │
//! │  │   │  pricing  │  │   stock   │  │  orders   │  │   seed    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENVIRONMENT • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Discount rates, product handles, order lines
//! - [`promotion`] - Pricing strategies
//! - [`product`] - Standard, non-stocked and limited products
//! - [`store`] - Product arena and order processing
//! - [`catalog`] - Serde catalog documents and the default inventory
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Catalog, Money, OrderLine};
//!
//! let mut store = Catalog::default_catalog().into_store().unwrap();
//! let active = store.list_active();
//! let (mac, _) = active[0];
//! let (pixel, _) = active[2];
//!
//! // MacBook has "Second Half price!": 2 units cost 1.5 × $1450
//! let total = store
//!     .order(&[OrderLine::new(mac, 2), OrderLine::new(pixel, 1)])
//!     .unwrap();
//! assert_eq!(total, Money::from_major_minor(2175 + 500, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, ProductKind, Purchasable};
pub use promotion::{PricingStrategy, Promotion, PromotionKind};
pub use store::Store;
pub use types::*;
