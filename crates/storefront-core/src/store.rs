//! # Store Module
//!
//! Aggregates products and executes multi-line orders against them.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Store                                      │
//! │                                                                         │
//! │  arena:   [ Product#0 | Product#1 | Product#2 | Product#3 ]            │
//! │                  ▲           ▲                       ▲                  │
//! │  listing: [ ProductId(0), ProductId(1),        ProductId(3) ]          │
//! │                                                                         │
//! │  • add_product pushes into both                                        │
//! │  • remove_product only drops the id from the listing                   │
//! │  • callers hold ProductId handles, never references                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Order Semantics (fail-fast, no rollback)
//! ```text
//! order([(A, 1), (B, 2), (C, 99)])
//!   │
//!   ├── A.buy(1)  ✓  stock of A reduced   ← stays committed
//!   ├── B.buy(2)  ✓  stock of B reduced   ← stays committed
//!   └── C.buy(99) ✗  InsufficientStock    ← returned to caller as-is
//! ```
//! Lines are processed strictly in order and never retried.

use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Product, Purchasable};
use crate::types::{OrderLine, ProductId};

/// An in-memory product catalog.
#[derive(Debug, Clone, Default)]
pub struct Store {
    arena: Vec<Product>,
    listing: Vec<ProductId>,
}

impl Store {
    /// Creates a store holding `products` in the given order.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Store::default();
        for product in products {
            store.add_product(product);
        }
        store
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// Adds a product to the end of the listing and returns its handle.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = ProductId::new(self.arena.len());
        self.arena.push(product);
        self.listing.push(id);
        id
    }

    /// Drops a product from the listing.
    ///
    /// Removing a product that is not listed is reported as
    /// [`CoreError::ProductNotFound`] and leaves the listing unchanged. The
    /// caller may treat it as a warning.
    pub fn remove_product(&mut self, id: ProductId) -> CoreResult<()> {
        match self.listing.iter().position(|listed| *listed == id) {
            Some(pos) => {
                self.listing.remove(pos);
                Ok(())
            }
            None => {
                let label = self.label(id);
                warn!(product = %label, "cannot remove product not held by store");
                Err(CoreError::ProductNotFound(label))
            }
        }
    }

    /// Whether `id` is currently listed.
    pub fn contains(&self, id: ProductId) -> bool {
        self.listing.contains(&id)
    }

    /// Looks up a listed product.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        if self.contains(id) {
            self.arena.get(id.index())
        } else {
            None
        }
    }

    /// Looks up a listed product for mutation (restock, promotions, curation).
    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        if self.contains(id) {
            self.arena.get_mut(id.index())
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// All listed products in insertion order, active or not.
    pub fn products(&self) -> impl Iterator<Item = (ProductId, &Product)> + '_ {
        self.listing.iter().map(|id| (*id, &self.arena[id.index()]))
    }

    /// Active products in insertion order.
    ///
    /// This ordering backs the shell's 1-based menu numbering.
    pub fn list_active(&self) -> Vec<(ProductId, &Product)> {
        self.products().filter(|(_, p)| p.is_active()).collect()
    }

    /// Sum of `quantity()` over every listed product.
    ///
    /// Non-stocked products contribute their nominal 0. Widened to `i128`
    /// since each stock level may itself be up to `i64::MAX`.
    pub fn total_quantity(&self) -> i128 {
        self.products().map(|(_, p)| i128::from(p.quantity())).sum()
    }

    pub fn len(&self) -> usize {
        self.listing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Buys every line in order and returns the summed charge.
    ///
    /// The first failing line aborts the order with its original error.
    /// Lines before it have already reduced stock and are not rolled back.
    /// A line whose charge would push the total past what [`Money`] holds
    /// fails with `AmountOverflow` before it is bought.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::product::{Product, Purchasable};
    /// use storefront_core::store::Store;
    ///
    /// let mut store = Store::default();
    /// let mac = store.add_product(Product::new("MacBook Air M2", Money::from_cents(145_000), 10).unwrap());
    /// let buds = store.add_product(Product::new("Bose QuietComfort Earbuds", Money::from_cents(25_000), 20).unwrap());
    ///
    /// let total = store.order(&[(mac, 1).into(), (buds, 2).into()]).unwrap();
    /// assert_eq!(total, Money::from_cents(195_000));
    /// assert_eq!(store.product(mac).unwrap().quantity(), 9);
    /// ```
    pub fn order(&mut self, lines: &[OrderLine]) -> CoreResult<Money> {
        let mut total = Money::zero();

        for (index, line) in lines.iter().enumerate() {
            match self.buy_line(line, total) {
                Ok(running) => total = running,
                Err(err) => {
                    warn!(
                        line = index + 1,
                        product = %self.label(line.product),
                        error = %err,
                        "order aborted"
                    );
                    return Err(err);
                }
            }
        }

        info!(lines = lines.len(), total = %total, "order completed");
        Ok(total)
    }

    /// Buys one line on top of `total` and returns the new running total.
    fn buy_line(&mut self, line: &OrderLine, total: Money) -> CoreResult<Money> {
        let label = self.label(line.product);
        let product = self
            .product_mut(line.product)
            .ok_or_else(|| CoreError::ProductNotFound(label.clone()))?;

        let running = total
            .checked_add(product.quote(line.quantity)?)
            .ok_or(CoreError::AmountOverflow {
                product: label,
                quantity: line.quantity,
            })?;
        product.buy(line.quantity)?;
        Ok(running)
    }

    /// Product name for logs and NotFound reports, falling back to the id.
    fn label(&self, id: ProductId) -> String {
        self.arena
            .get(id.index())
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promotion::Promotion;

    fn dollars(d: i64) -> Money {
        Money::from_major_minor(d, 0)
    }

    /// MacBook ×10, Earbuds ×20, Pixel ×15.
    fn setup_store() -> (Store, Vec<ProductId>) {
        let store = Store::new([
            Product::new("MacBook Air M2", dollars(1450), 10).unwrap(),
            Product::new("Bose QuietComfort Earbuds", dollars(250), 20).unwrap(),
            Product::new("Google Pixel 7", dollars(500), 15).unwrap(),
        ]);
        let ids = store.products().map(|(id, _)| id).collect();
        (store, ids)
    }

    #[test]
    fn test_add_product() {
        let (mut store, _) = setup_store();
        let initial = store.list_active().len();

        let id = store.add_product(Product::new("Sony WH-1000XM5", dollars(400), 30).unwrap());
        assert_eq!(store.list_active().len(), initial + 1);
        assert_eq!(store.list_active().last().map(|(i, _)| *i), Some(id));
    }

    #[test]
    fn test_remove_product() {
        let (mut store, ids) = setup_store();
        let initial = store.list_active().len();

        store.remove_product(ids[0]).unwrap();
        assert_eq!(store.list_active().len(), initial - 1);
        assert!(!store.contains(ids[0]));
        assert!(store.product(ids[0]).is_none());
    }

    #[test]
    fn test_remove_missing_product_reports_not_found() {
        let (mut store, ids) = setup_store();
        store.remove_product(ids[1]).unwrap();

        let err = store.remove_product(ids[1]).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(ref name) if name == "Bose QuietComfort Earbuds"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_names_are_distinct_entries() {
        let (mut store, _) = setup_store();
        let a = store.add_product(Product::new("Cable", dollars(5), 1).unwrap());
        let b = store.add_product(Product::new("Cable", dollars(5), 1).unwrap());

        store.remove_product(a).unwrap();
        assert!(store.contains(b));
    }

    #[test]
    fn test_get_total_quantity() {
        let (store, _) = setup_store();
        assert_eq!(store.total_quantity(), 45);
        assert_eq!(store.total_quantity(), 45);
    }

    #[test]
    fn test_total_quantity_counts_non_stocked_as_zero() {
        let (mut store, _) = setup_store();
        store.add_product(Product::non_stocked("Windows License", dollars(125)).unwrap());
        assert_eq!(store.total_quantity(), 45);
    }

    #[test]
    fn test_list_active_skips_inactive_in_insertion_order() {
        let (mut store, ids) = setup_store();
        store.product_mut(ids[1]).unwrap().deactivate();
        let license = store.add_product(Product::non_stocked("Windows License", dollars(125)).unwrap());

        let active: Vec<ProductId> = store.list_active().into_iter().map(|(id, _)| id).collect();
        assert_eq!(active, vec![ids[0], ids[2], license]);
        // Inactive products still count towards the total
        assert_eq!(store.total_quantity(), 45);
    }

    #[test]
    fn test_order_successful() {
        let (mut store, ids) = setup_store();
        let total = store
            .order(&[OrderLine::new(ids[0], 1), OrderLine::new(ids[1], 2)])
            .unwrap();

        assert_eq!(total, dollars(1950));
        assert_eq!(store.product(ids[0]).unwrap().quantity(), 9);
        assert_eq!(store.product(ids[1]).unwrap().quantity(), 18);
    }

    #[test]
    fn test_order_applies_promotions_per_line() {
        let (mut store, ids) = setup_store();
        store
            .product_mut(ids[2])
            .unwrap()
            .set_promotion(Promotion::buy_two_get_one_free("Buy Two Get One Free!"));

        let total = store
            .order(&[OrderLine::new(ids[2], 3), OrderLine::new(ids[0], 1)])
            .unwrap();
        assert_eq!(total, dollars(1000 + 1450));
    }

    #[test]
    fn test_order_insufficient_stock() {
        let (mut store, ids) = setup_store();
        let err = store.order(&[OrderLine::new(ids[0], 11)]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Not enough stock for 'MacBook Air M2': available 10, requested 11"
        );
        assert_eq!(store.product(ids[0]).unwrap().quantity(), 10);
    }

    #[test]
    fn test_failed_order_keeps_earlier_lines_committed() {
        let (mut store, ids) = setup_store();
        let err = store
            .order(&[
                OrderLine::new(ids[1], 2),
                OrderLine::new(ids[0], 11),
                OrderLine::new(ids[2], 1),
            ])
            .unwrap_err();

        assert!(matches!(err, CoreError::InsufficientStock { .. }));
        // Line 1 committed, line 2 untouched, line 3 never attempted
        assert_eq!(store.product(ids[1]).unwrap().quantity(), 18);
        assert_eq!(store.product(ids[0]).unwrap().quantity(), 10);
        assert_eq!(store.product(ids[2]).unwrap().quantity(), 15);
        assert_eq!(store.total_quantity(), 43);
    }

    #[test]
    fn test_order_same_product_twice_draws_down_sequentially() {
        let (mut store, ids) = setup_store();
        let err = store
            .order(&[OrderLine::new(ids[0], 6), OrderLine::new(ids[0], 6)])
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 4,
                requested: 6,
                ..
            }
        ));
        assert_eq!(store.product(ids[0]).unwrap().quantity(), 4);
    }

    #[test]
    fn test_order_limit_exceeded_aborts_order() {
        let (mut store, ids) = setup_store();
        let shipping = store.add_product(Product::limited("Shipping", dollars(10), 250, 1).unwrap());

        let err = store
            .order(&[OrderLine::new(ids[0], 1), OrderLine::new(shipping, 2)])
            .unwrap_err();
        assert!(matches!(err, CoreError::OrderLimitExceeded { .. }));
        assert_eq!(store.product(ids[0]).unwrap().quantity(), 9);
        assert_eq!(store.product(shipping).unwrap().quantity(), 250);
    }

    #[test]
    fn test_order_with_removed_product_is_not_found() {
        let (mut store, ids) = setup_store();
        store.remove_product(ids[2]).unwrap();

        let err = store.order(&[OrderLine::new(ids[2], 1)]).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
    }

    #[test]
    fn test_order_selling_out_deactivates_product() {
        let (mut store, ids) = setup_store();
        store.order(&[OrderLine::new(ids[0], 10)]).unwrap();

        assert!(!store.product(ids[0]).unwrap().is_active());
        assert_eq!(store.list_active().len(), 2);
    }

    #[test]
    fn test_huge_non_stocked_order_fails_without_panicking() {
        let (mut store, ids) = setup_store();
        let license = store.add_product(Product::non_stocked("Windows License", dollars(125)).unwrap());

        let err = store
            .order(&[OrderLine::new(ids[0], 1), OrderLine::new(license, 1_000_000_000_000_000)])
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::AmountOverflow { ref product, quantity: 1_000_000_000_000_000 }
                if product == "Windows License"
        ));
        assert_eq!(store.product(ids[0]).unwrap().quantity(), 9);
    }

    #[test]
    fn test_order_total_overflow_leaves_line_unbought() {
        let mut store = Store::new([
            Product::non_stocked("Gift Card", Money::from_cents(i64::MAX / 2 + 1)).unwrap(),
            Product::new("Bolt", Money::from_cents(i64::MAX / 2 + 1), 3).unwrap(),
        ]);
        let ids: Vec<ProductId> = store.products().map(|(id, _)| id).collect();

        // Each line fits on its own, the sum does not
        let err = store
            .order(&[OrderLine::new(ids[0], 1), OrderLine::new(ids[1], 1)])
            .unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { quantity: 1, .. }));
        assert_eq!(store.product(ids[1]).unwrap().quantity(), 3);
    }

    #[test]
    fn test_total_quantity_past_i64() {
        let store = Store::new([
            Product::new("Washer", Money::from_cents(1), i64::MAX).unwrap(),
            Product::new("Nut", Money::from_cents(1), i64::MAX).unwrap(),
            Product::new("Bolt", Money::from_cents(1), 1).unwrap(),
        ]);
        assert_eq!(store.total_quantity(), 2 * i128::from(i64::MAX) + 1);
    }

    #[test]
    fn test_empty_order_costs_nothing() {
        let (mut store, _) = setup_store();
        assert_eq!(store.order(&[]).unwrap(), Money::zero());
    }
}
