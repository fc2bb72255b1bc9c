//! # Commands Module
//!
//! The operations a shell can invoke against the store.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Listing and total quantity
//! └── order.rs    ◄─── Order placement and receipts
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Shell menu                                                             │
//! │  ──────────                                                             │
//! │  1. List all products in store ──► list_products(&state)                │
//! │  2. Show total amount in store ──► total_quantity(&state)               │
//! │  3. Make an order ───────────────► place_order(&mut state, selections)  │
//! │  4. Quit                                                                │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  ProductDto[] / i128 / OrderReceipt  or  ApiError                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Positions seen by the shell are 1-based indexes into the current active
//! listing; commands translate them to `ProductId`s.

pub mod order;
pub mod product;

pub use order::{place_order, OrderReceipt, OrderSelection};
pub use product::{list_products, total_quantity, ProductDto};
