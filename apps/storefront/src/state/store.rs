//! # Store State
//!
//! Owns the live [`Store`] for the session.
//!
//! ## Access Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store State Operations                               │
//! │                                                                         │
//! │  Shell Action             Command                 Store Access          │
//! │  ────────────             ───────                 ────────────          │
//! │                                                                         │
//! │  List products ─────────► list_products() ──────► with_store            │
//! │                                                                         │
//! │  Show total ────────────► total_quantity() ─────► with_store            │
//! │                                                                         │
//! │  Make an order ─────────► place_order() ────────► with_store_mut        │
//! │                                                                         │
//! │  NOTE: The session is single-threaded, so the store is owned directly  │
//! │        with no lock around it.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;

use storefront_core::{Catalog, Store};
use tracing::info;

use super::config::{ConfigError, ConfigState};
use crate::error::ApiError;

/// Session-owned store.
#[derive(Debug, Default)]
pub struct StoreState {
    store: Store,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState { store }
    }

    /// Seeds the store from the configured catalog file, or the built-in
    /// catalog when none is configured.
    pub fn from_config(config: &ConfigState) -> Result<Self, ApiError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                info!(?path, "Loading catalog file");
                let text = fs::read_to_string(path).map_err(|source| {
                    ConfigError::CatalogUnreadable {
                        path: path.clone(),
                        source,
                    }
                })?;
                Catalog::from_json(&text)?
            }
            None => {
                info!("Using built-in catalog");
                Catalog::default_catalog()
            }
        };

        Ok(StoreState::new(catalog.into_store()?))
    }

    /// Executes a function with read access to the store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        f(&self.store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        f(&mut self.store)
    }
}
