//! # Product Commands
//!
//! Listing and stock-total commands.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Listing Flow                                 │
//! │                                                                         │
//! │  Shell picks "1. List all products in store"                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products(&state)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::list_active() ─── active products, insertion order             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductDto> with 1-based positions                                │
//! │                                                                         │
//! │  1. MacBook Air M2, Price: $1450.00, Quantity: 100, Promotion: ...     │
//! │  2. Bose QuietComfort Earbuds, Price: $250.00, Quantity: 500, ...      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::StoreState;
use storefront_core::{PricingStrategy, Product, ProductId, Purchasable};

/// Product DTO (Data Transfer Object) for the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// 1-based position in the active listing; what the shell asks for.
    pub position: usize,
    pub id: usize,
    pub name: String,
    pub price_cents: i64,
    /// `None` for products that do not track stock.
    pub quantity: Option<i64>,
    pub promotion: Option<String>,
    /// Single-line summary as shown in the menu.
    pub description: String,
}

impl ProductDto {
    fn from_listing(position: usize, id: ProductId, product: &Product) -> Self {
        ProductDto {
            position,
            id: id.index(),
            name: product.name().to_string(),
            price_cents: product.price().cents(),
            quantity: product.kind().tracks_stock().then(|| product.quantity()),
            promotion: product.promotion().map(|p| p.name().to_string()),
            description: product.describe(),
        }
    }
}

/// Lists the active products in listing order.
pub fn list_products(state: &StoreState) -> Vec<ProductDto> {
    let products: Vec<ProductDto> = state.with_store(|store| {
        store
            .list_active()
            .into_iter()
            .enumerate()
            .map(|(i, (id, product))| ProductDto::from_listing(i + 1, id, product))
            .collect()
    });

    debug!(count = products.len(), "Listed products");
    products
}

/// Total units in stock across all listed products, active or not.
pub fn total_quantity(state: &StoreState) -> i128 {
    state.with_store(|store| store.total_quantity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;

    fn default_state() -> StoreState {
        StoreState::from_config(&ConfigState::default()).unwrap()
    }

    #[test]
    fn test_list_products_positions_and_fields() {
        let products = list_products(&default_state());
        assert_eq!(products.len(), 5);

        let positions: Vec<usize> = products.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);

        let mac = &products[0];
        assert_eq!(mac.name, "MacBook Air M2");
        assert_eq!(mac.price_cents, 145_000);
        assert_eq!(mac.quantity, Some(100));
        assert_eq!(mac.promotion.as_deref(), Some("Second Half price!"));
        assert_eq!(
            mac.description,
            "MacBook Air M2, Price: $1450.00, Quantity: 100, Promotion: Second Half price!"
        );

        let license = &products[3];
        assert_eq!(license.name, "Windows License");
        assert_eq!(license.quantity, None);
    }

    #[test]
    fn test_inactive_products_are_not_listed() {
        let mut state = default_state();
        state.with_store_mut(|store| {
            let (pixel, _) = store.list_active()[2];
            store.product_mut(pixel).unwrap().set_quantity(0).unwrap();
        });

        let products = list_products(&state);
        assert_eq!(products.len(), 4);
        assert!(products.iter().all(|p| p.name != "Google Pixel 7"));
        assert_eq!(products[2].position, 3);
        assert_eq!(products[2].name, "Windows License");
    }

    #[test]
    fn test_total_quantity() {
        assert_eq!(total_quantity(&default_state()), 1100);
    }

    #[test]
    fn test_dto_wire_shape() {
        let products = list_products(&default_state());
        let json = serde_json::to_value(&products[4]).unwrap();

        assert_eq!(json["position"], 5);
        assert_eq!(json["name"], "Shipping");
        assert_eq!(json["priceCents"], 1000);
        assert_eq!(json["quantity"], 250);
        assert!(json["promotion"].is_null());
    }
}
